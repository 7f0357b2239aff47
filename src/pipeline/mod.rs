// Pipeline orchestration — the two-phase TF-IDF run.

pub mod run;
