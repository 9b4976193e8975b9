use std::collections::BTreeSet;

use serde::Serialize;

/// Skill keywords recognized out of the box.
pub const DEFAULT_SKILLS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "react",
    "git",
    "responsive design",
    "sql",
    "python",
    "docker",
    "aws",
    "ci/cd",
    "node.js",
    "mongodb",
    "flask",
    "rest apis",
];

/// Immutable set of lowercase skill phrases.
///
/// Built once at startup and shared read-only through `AppState`.
/// Tests build their own instances with [`SkillVocabulary::from_terms`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary {
    terms: BTreeSet<String>,
}

impl SkillVocabulary {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_SKILLS)
    }
}
