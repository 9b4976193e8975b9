use tracing::warn;

use crate::analysis::{AnalysisReport, SkillComparison};
use crate::render::chart::render_skill_chart;
use crate::render::escape_html;
use crate::skills::SkillSet;

pub const MATCHED_TITLE: &str = "Skills Found in Both";
pub const MISSING_TITLE: &str = "Skills Missing from Resume";
pub const NO_SKILLS: &str = "No skills found.";

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Resume Analyzer</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; max-width: 760px; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    .error { background: #fdecea; border: 1px solid #f5c2c0; color: #8a1c17; padding: 0.75rem; border-radius: 6px; margin-bottom: 0.75rem; }
    .chart svg { max-width: 100%; height: auto; }
  </style>
</head>
<body>
  <h1>Resume Analyzer</h1>
"#;

const UPLOAD_FORM: &str = r#"  <form class="card" method="post" action="/analyze" enctype="multipart/form-data">
    <label><input type="checkbox" name="use_demo" /> Use demo resume</label>
    <label for="resume">Upload Resume (.pdf or .txt)</label>
    <input id="resume" name="resume" type="file" accept=".pdf,.txt,application/pdf,text/plain" />
    <label for="job_description">Upload Job Description (.pdf or .txt)</label>
    <input id="job_description" name="job_description" type="file" accept=".pdf,.txt,application/pdf,text/plain" />
    <button type="submit">Analyze</button>
    <p><a href="/api/v1/demo-resume">Download the demo resume</a></p>
  </form>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders the full page: upload form, error banners, then the report if ready.
pub fn render_page(report: &AnalysisReport) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(UPLOAD_FORM);

    for notice in &report.notices {
        html.push_str(&error_banner(&notice.message));
    }
    if let Some(error) = &report.error {
        html.push_str(&error_banner(&error.message));
    }
    if let Some(comparison) = &report.comparison {
        html.push_str(&render_comparison(comparison));
    }

    html.push_str(PAGE_TAIL);
    html
}

fn error_banner(message: &str) -> String {
    format!("  <div class=\"error\">{}</div>\n", escape_html(message))
}

/// Score heading, then matched list, missing list and chart, in that order.
fn render_comparison(comparison: &SkillComparison) -> String {
    let mut html = String::from("  <section class=\"report\">\n");
    html.push_str(&format!(
        "    <h2>Match Score: {:.2}%</h2>\n",
        comparison.score
    ));
    html.push_str(&skills_section(MATCHED_TITLE, &comparison.matched));
    html.push_str(&skills_section(MISSING_TITLE, &comparison.missing));

    match render_skill_chart(
        comparison.resume_skills.len(),
        comparison.job_skills.len(),
        comparison.matched.len(),
    ) {
        Ok(svg) => {
            html.push_str("    <div class=\"chart\">\n");
            html.push_str(&svg);
            html.push_str("\n    </div>\n");
        }
        Err(e) => {
            warn!(error = %e, "Skill chart could not be drawn");
            html.push_str("    <p class=\"chart\">Chart unavailable.</p>\n");
        }
    }

    html.push_str("  </section>\n");
    html
}

fn skills_section(title: &str, skills: &SkillSet) -> String {
    let body = if skills.is_empty() {
        NO_SKILLS.to_string()
    } else {
        skills
            .iter()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("    <h3>{title}</h3>\n    <p>{body}</p>\n")
}
