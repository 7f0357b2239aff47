// Scoring — term frequency, inverse document frequency, and their product.

pub mod combine;
pub mod frequency;
