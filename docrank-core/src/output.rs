//! Persisting case outputs as JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::document::CaseOutput;
use crate::error::{RankError, Result};

/// File name for a case: `output_case{case_id}.json`.
pub fn case_file_name(case_id: usize) -> String {
    format!("output_case{case_id}.json")
}

/// Write `case` as pretty-printed JSON into `dir`, creating `dir` if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`RankError::Output`] if the directory cannot be created or the
/// file cannot be written.
pub fn write_case(case: &CaseOutput, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let path = dir.join(case_file_name(case.case_id));

    fs::create_dir_all(dir).map_err(|e| output_error(dir, e))?;
    let json = serde_json::to_string_pretty(case).map_err(|e| output_error(&path, e))?;
    fs::write(&path, json).map_err(|e| output_error(&path, e))?;

    info!(
        case_id = case.case_id,
        path = %path.display(),
        sections = case.top_sections.len(),
        "wrote case output"
    );
    Ok(path)
}

fn output_error(path: &Path, message: impl ToString) -> RankError {
    RankError::Output { path: path.to_path_buf(), message: message.to_string() }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    fn empty_case(case_id: usize) -> CaseOutput {
        CaseOutput {
            case_id,
            input_documents: vec!["Café guide.pdf".into()],
            persona: "Food Contractor".into(),
            job_to_be_done: "Prepare a vegetarian buffet".into(),
            timestamp: Local::now().naive_local(),
            top_sections: Vec::new(),
            sub_section_analysis: Vec::new(),
        }
    }

    #[test]
    fn names_files_by_case_id() {
        assert_eq!(case_file_name(3), "output_case3.json");
    }

    #[test]
    fn writes_pretty_json_with_utf8_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let out_dir = temp.path().join("out");

        let path = write_case(&empty_case(2), &out_dir).unwrap();
        assert_eq!(path, out_dir.join("output_case2.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"persona\": \"Food Contractor\""));
        assert!(written.contains("Café guide.pdf"));
        assert!(written.contains("\"top_sections\": []"));
        assert!(written.contains("\"sub_section_analysis\": []"));
    }
}
