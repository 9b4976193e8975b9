// Skill detection and scoring.
// Vocabulary is passed in explicitly; nothing here holds process-wide state.

pub mod extractor;
pub mod scoring;
pub mod tokenizer;
pub mod vocabulary;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use extractor::{extractor_for, SkillExtractor};
pub use scoring::score_match;
pub use vocabulary::SkillVocabulary;

/// Vocabulary terms detected in one document. Ordered so reports list skills stably.
pub type SkillSet = BTreeSet<String>;

/// Granularity used when matching vocabulary entries against document tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Each token is looked up on its own. Entries like "rest apis" never match.
    Token,
    /// Entries are matched as contiguous token sequences.
    Phrase,
}
