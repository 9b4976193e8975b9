use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

/// Overlap between a resume's skills and a job description's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// resume ∩ job
    pub matched: SkillSet,
    /// job − resume
    pub missing: SkillSet,
    /// Percentage of job skills covered by the resume, 0.0 – 100.0, unrounded.
    pub score: f64,
}

/// Computes matched/missing sets and the coverage percentage.
/// Returns a score of 0 when the job description lists no known skills.
pub fn score_match(resume_skills: &SkillSet, job_skills: &SkillSet) -> MatchResult {
    let matched: SkillSet = resume_skills.intersection(job_skills).cloned().collect();
    let missing: SkillSet = job_skills.difference(resume_skills).cloned().collect();

    let score = if job_skills.is_empty() {
        0.0
    } else {
        (matched.len() as f64 / job_skills.len() as f64) * 100.0
    };

    MatchResult {
        matched,
        missing,
        score,
    }
}
