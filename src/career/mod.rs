pub mod category;
pub mod config;
pub mod engine;
pub mod table;
pub mod validation;

pub use category::CareerCategory;
pub use config::ScoringConfig;
pub use engine::{score_quiz, CategoryTally, QuizOutcome};
pub use table::ScoringTable;
pub use validation::validate_scoring;
