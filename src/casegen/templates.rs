//! Report template rendering.
//!
//! The report template lives in a stand-alone file under `templates/` and
//! is compiled in as a string constant; separating it from code keeps it
//! easy to edit and diff. Templates are minijinja based and use explicit
//! whitespace control so line breaks in the output are visible in the
//! template source.
//!
//! Optional narrative sections (`customer`, `evidence`, `results`, `cta`)
//! are guarded with conditionals. The required structure — `project.title`,
//! `problem.summary`, `metrics`, `deltas` — is referenced directly, so a
//! document missing those fails the render instead of silently producing a
//! hollow report.

use crate::model::CaseDocument;
use minijinja::Environment;

pub const CASE_STUDY_TEMPLATE: &str = include_str!("templates/case_study.md.j2");

/// Renders the case-study report for a document that already carries its
/// `deltas` key.
pub fn render_case_study(doc: &CaseDocument) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("case_study", CASE_STUDY_TEMPLATE)?;
    let tmpl = env.get_template("case_study")?;
    tmpl.render(doc.data())
}
