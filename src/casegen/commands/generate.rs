use crate::commands::{CmdMessage, CmdResult};
use crate::deltas::compute_deltas;
use crate::error::{CasegenError, Result};
use crate::model::CaseDocument;
use crate::templates;
use std::fs;
use std::path::Path;

/// Generates a case-study report from `input`, writing it to
/// `<out>/case-study.md`.
///
/// Everything is computed before anything is written: a load or render
/// failure leaves no partial output behind.
pub fn run(input: &Path, out: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(input).map_err(|e| load_error(input, e))?;
    let mut doc = CaseDocument::parse(&raw).map_err(|e| load_error(input, e))?;

    let metrics = doc.metrics().map_err(|e| load_error(input, e))?;
    let deltas = compute_deltas(&metrics.baseline, &metrics.after);
    doc.attach_deltas(&deltas);

    let rendered = templates::render_case_study(&doc)?;

    fs::create_dir_all(out)?;
    let report_path = out.join("case-study.md");
    fs::write(&report_path, rendered)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Generated {}",
        report_path.display()
    )));
    Ok(result.with_written_paths(vec![report_path]))
}

fn load_error(path: &Path, cause: impl std::fmt::Display) -> CasegenError {
    CasegenError::Load(format!("{}: {}", path.display(), cause))
}
