use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Sample case file written by `init`. Compiled in, so scaffolded output
/// is byte-identical on every run.
const SAMPLE_CASE: &str = include_str!("../scaffold/case.yaml");

/// 1x1 transparent PNG written as the placeholder evidence asset.
const PLACEHOLDER_PNG: &[u8] = include_bytes!("../scaffold/placeholder.png");

/// Scaffolds a sample case file and placeholder asset under `dir`.
///
/// Creates the directory (and parents) if absent; existing files at the
/// target paths are overwritten.
pub fn run(dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(dir)?;
    let case_path = dir.join("case.yaml");
    fs::write(&case_path, SAMPLE_CASE)?;

    let assets_dir = dir.join("assets");
    fs::create_dir_all(&assets_dir)?;
    let placeholder_path = assets_dir.join("placeholder.png");
    fs::write(&placeholder_path, PLACEHOLDER_PNG)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created {}",
        case_path.display()
    )));
    result.add_message(CmdMessage::success(format!(
        "Created {}",
        placeholder_path.display()
    )));
    Ok(result.with_written_paths(vec![case_path, placeholder_path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseDocument;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_sample_and_placeholder() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cases");

        let result = run(&dir).unwrap();

        assert!(dir.join("case.yaml").exists());
        assert!(dir.join("assets").join("placeholder.png").exists());
        assert_eq!(result.written_paths.len(), 2);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn test_init_creates_nested_parents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b").join("c");

        run(&dir).unwrap();
        assert!(dir.join("case.yaml").exists());
    }

    #[test]
    fn test_init_is_idempotent_and_byte_identical() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();

        run(&dir).unwrap();
        let first_case = fs::read(dir.join("case.yaml")).unwrap();
        let first_png = fs::read(dir.join("assets/placeholder.png")).unwrap();

        run(&dir).unwrap();
        assert_eq!(fs::read(dir.join("case.yaml")).unwrap(), first_case);
        assert_eq!(fs::read(dir.join("assets/placeholder.png")).unwrap(), first_png);
    }

    #[test]
    fn test_init_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();
        fs::write(dir.join("case.yaml"), "stale contents").unwrap();

        run(&dir).unwrap();
        let written = fs::read_to_string(dir.join("case.yaml")).unwrap();
        assert_ne!(written, "stale contents");
    }

    #[test]
    fn test_sample_case_parses_with_expected_metrics() {
        let doc = CaseDocument::parse(SAMPLE_CASE).unwrap();
        let metrics = doc.metrics().unwrap();

        assert_eq!(metrics.baseline.ramp_days, 60.0);
        assert_eq!(metrics.baseline.avg_meetings_per_rep_week, 4.2);
        assert_eq!(metrics.baseline.qualified_rate_pct, 21.0);
        assert_eq!(metrics.after.ramp_days, 38.0);
        assert_eq!(metrics.after.avg_meetings_per_rep_week, 6.1);
        assert_eq!(metrics.after.qualified_rate_pct, 29.0);
    }

    #[test]
    fn test_placeholder_is_a_png() {
        assert_eq!(&PLACEHOLDER_PNG[..8], b"\x89PNG\r\n\x1a\n");
    }
}
