use std::sync::Arc;

use crate::config::Config;
use crate::skills::{extractor_for, SkillExtractor, SkillVocabulary};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable skill matcher. Default: TokenSkillExtractor. Swap via SKILL_MATCH_MODE.
    pub extractor: Arc<dyn SkillExtractor>,
}

impl AppState {
    pub fn new(config: Config, vocabulary: SkillVocabulary) -> Self {
        let extractor = extractor_for(config.match_mode);
        AppState {
            config,
            vocabulary: Arc::new(vocabulary),
            extractor,
        }
    }
}
