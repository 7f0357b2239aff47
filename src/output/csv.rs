// CSV serialization for per-document TF-IDF scores.
//
// The format is a fixed contract: header `Word,TF-IDF`, one row per word,
// CRLF line endings, no trailing newline at end of file. Scores use their
// natural decimal rendering.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;

/// One output row. The header is written separately so that an empty
/// score map still produces a header-only file.
#[derive(Serialize)]
struct ScoreRow<'a> {
    word: &'a str,
    tf_idf: f64,
}

/// Write a word → TF-IDF map to `path` as CSV.
///
/// Rows come out in the map's sorted key order, so the file is
/// reproducible across runs. A write failure is fatal to the run — the
/// CSVs are the deliverable.
pub fn write_scores(path: &Path, scores: &BTreeMap<String, f64>) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer
        .write_record(["Word", "TF-IDF"])
        .context("Failed to write CSV header")?;

    for (word, &score) in scores {
        writer
            .serialize(ScoreRow {
                word,
                tf_idf: score,
            })
            .with_context(|| format!("Failed to serialize row for {word:?}"))?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV buffer")?;
    let text = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;

    fs::write(path, text.trim_end())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
