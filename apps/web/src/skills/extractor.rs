//! Skill extraction: a pluggable, trait-based matcher that finds vocabulary terms in text.
//!
//! Default: `TokenSkillExtractor` (single-token exact matches).
//! Opt-in: `PhraseSkillExtractor` (contiguous token sequences), via `SKILL_MATCH_MODE=phrase`.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, picked at startup via config.

use std::sync::Arc;

use crate::skills::tokenizer::tokenize;
use crate::skills::{MatchMode, SkillSet, SkillVocabulary};

/// Implement this to swap matching strategies without touching the
/// orchestrator or the handlers.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, text: &str, vocabulary: &SkillVocabulary) -> SkillSet;

    fn mode(&self) -> MatchMode;
}

/// Returns the extractor for the configured granularity.
pub fn extractor_for(mode: MatchMode) -> Arc<dyn SkillExtractor> {
    match mode {
        MatchMode::Token => Arc::new(TokenSkillExtractor),
        MatchMode::Phrase => Arc::new(PhraseSkillExtractor),
    }
}

/// Lowercases `text` and returns every token that is literally a vocabulary entry.
///
/// Entries containing spaces or slashes can never equal a single token, so
/// "responsive design", "rest apis" and "ci/cd" are not found this way.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let lowered = text.to_lowercase();
    tokenize(&lowered)
        .into_iter()
        .filter(|token| vocabulary.contains(token))
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// TokenSkillExtractor (default)
// ────────────────────────────────────────────────────────────────────────────

pub struct TokenSkillExtractor;

impl SkillExtractor for TokenSkillExtractor {
    fn extract(&self, text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
        extract_skills(text, vocabulary)
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Token
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PhraseSkillExtractor (sliding token-sequence match)
// ────────────────────────────────────────────────────────────────────────────

/// Tokenizes each vocabulary entry with the same rules as the document and
/// reports the entry when that token sequence appears contiguously.
pub struct PhraseSkillExtractor;

impl SkillExtractor for PhraseSkillExtractor {
    fn extract(&self, text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);

        vocabulary
            .iter()
            .filter(|term| {
                let needle = tokenize(term);
                !needle.is_empty()
                    && tokens
                        .windows(needle.len())
                        .any(|window| window == needle.as_slice())
            })
            .map(str::to_string)
            .collect()
    }

    fn mode(&self) -> MatchMode {
        MatchMode::Phrase
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resume_sentence_finds_three_skills() {
        let vocab = SkillVocabulary::default();
        let skills = extract_skills("Experienced in Python, SQL and Git.", &vocab);
        assert_eq!(skills, set(&["git", "python", "sql"]));
    }

    #[test]
    fn test_job_sentence_finds_python_and_docker() {
        let vocab = SkillVocabulary::default();
        let skills = extract_skills("Looking for Python and Docker skills.", &vocab);
        assert_eq!(skills, set(&["docker", "python"]));
    }

    #[test]
    fn test_multi_token_entries_do_not_match_in_token_mode() {
        let vocab = SkillVocabulary::default();
        let skills = extract_skills(
            "Skills: Python, SQL, Git, REST APIs, CI/CD, responsive design",
            &vocab,
        );
        assert_eq!(skills, set(&["git", "python", "sql"]));
    }

    #[test]
    fn test_dotted_entry_matches_as_single_token() {
        let vocab = SkillVocabulary::default();
        let skills = extract_skills("Built services in Node.js.", &vocab);
        assert_eq!(skills, set(&["node.js"]));
    }

    #[test]
    fn test_result_is_subset_of_vocabulary() {
        let vocab = SkillVocabulary::default();
        let texts = [
            "",
            "HTML5 and CSS3 are not html or css",
            "aws, AWS; Aws!",
            "react-native reactive React",
            "mongodb flask docker docker docker",
        ];
        for text in texts {
            let skills = extract_skills(text, &vocab);
            assert!(
                skills.iter().all(|s| vocab.contains(s)),
                "non-vocabulary skill extracted from {text:?}: {skills:?}"
            );
        }
    }

    #[test]
    fn test_urls_and_emails_do_not_leak_skills() {
        let vocab = SkillVocabulary::default();
        let skills = extract_skills(
            "Contact python@corp.com, see https://github.com/git or www.docker.com.",
            &vocab,
        );
        assert!(skills.is_empty(), "got {skills:?}");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let vocab = SkillVocabulary::default();
        let text = "JavaScript, React and AWS; plus MongoDB.";
        assert_eq!(extract_skills(text, &vocab), extract_skills(text, &vocab));
    }

    #[test]
    fn test_substituted_vocabulary_is_respected() {
        let vocab = SkillVocabulary::from_terms(["rust", "tokio"]);
        let skills = extract_skills("Rust with Tokio, Python on the side", &vocab);
        assert_eq!(skills, set(&["rust", "tokio"]));
    }

    #[test]
    fn test_phrase_mode_matches_multi_token_entries() {
        let vocab = SkillVocabulary::default();
        let skills = PhraseSkillExtractor.extract("Comfortable with CI/CD and REST APIs.", &vocab);
        assert_eq!(skills, set(&["ci/cd", "rest apis"]));
    }

    #[test]
    fn test_phrase_mode_still_matches_single_tokens() {
        let vocab = SkillVocabulary::default();
        let skills = PhraseSkillExtractor.extract("Experienced in Python, SQL and Git.", &vocab);
        assert_eq!(skills, set(&["git", "python", "sql"]));
    }

    #[test]
    fn test_phrase_mode_requires_contiguous_tokens() {
        let vocab = SkillVocabulary::default();
        let skills = PhraseSkillExtractor.extract("responsive and modern design", &vocab);
        assert!(skills.is_empty());
    }

    #[test]
    fn test_extractor_for_reports_mode() {
        assert_eq!(extractor_for(MatchMode::Token).mode(), MatchMode::Token);
        assert_eq!(extractor_for(MatchMode::Phrase).mode(), MatchMode::Phrase);
    }
}
