// Kiln: TF-IDF keyword scoring for plain-text corpora
//
// This is the library root. Each module corresponds to a stage of the
// scoring pipeline.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod scoring;
