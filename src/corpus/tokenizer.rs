// Line tokenization and normalization.
//
// The rules are deliberately simple: lowercase the whole line, split on
// single ASCII spaces, then strip ASCII punctuation and tabs from each
// token. Tokens that come out empty are dropped. Hyphens count as
// punctuation, so "well-known" collapses to "wellknown".

/// Split one line of text into normalized word tokens.
///
/// Splitting is on the space character only — tabs and other whitespace
/// are not split points, but a tab found inside a token is stripped along
/// with the punctuation.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    lowered
        .split(' ')
        .map(clean_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Strip ASCII punctuation and tab characters from a raw token.
fn clean_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_ascii_punctuation() && *c != '\t')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_spaces() {
        assert_eq!(tokenize_line("The Cat SAT"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn strips_listed_punctuation() {
        assert_eq!(
            tokenize_line("one, two. three: four; \"five\""),
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn hyphenated_compound_stays_one_token() {
        assert_eq!(tokenize_line("a well-known fact"), vec!["a", "wellknown", "fact"]);
    }

    #[test]
    fn tabs_are_stripped_not_split_on() {
        // A tab is not a split point; "a\tb" is a single token minus the tab.
        assert_eq!(tokenize_line("a\tb c"), vec!["ab", "c"]);
    }

    #[test]
    fn empty_tokens_are_dropped() {
        assert_eq!(tokenize_line("  spaced   out  "), vec!["spaced", "out"]);
        assert_eq!(tokenize_line("... , ;"), Vec::<String>::new());
        assert_eq!(tokenize_line(""), Vec::<String>::new());
    }
}
