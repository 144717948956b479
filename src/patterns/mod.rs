mod catalog;
mod census;
mod recognizer;

pub use catalog::{Catalog, Category, LifeForm, Pattern};
pub use census::{percentage, CategoryTally, GenerationReport};
pub use recognizer::{count_occurrences, PatternRecognizer};
