use crate::error::{AnalyzerError, Result};
use crate::extractor::DocumentFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub format: DocumentFormat,
}

/// フォルダ内の履歴書（.pdf / .docx）を列挙する
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<DocumentInfo>> {
    if !folder.is_dir() {
        return Err(AnalyzerError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Ok(format) = DocumentFormat::from_path(path) else {
            continue;
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Office の一時ファイル（~$resume.docx）は除外
        if file_name.starts_with("~$") {
            continue;
        }

        documents.push(DocumentInfo {
            path: path.to_path_buf(),
            file_name,
            format,
        });
    }

    // ファイル名でソート
    documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(AnalyzerError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b_resume.docx"), b"x").unwrap();
        fs::write(dir.path().join("a_resume.PDF"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("~$b_resume.docx"), b"x").unwrap();

        let docs = scan_folder(dir.path(), false).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, ["a_resume.PDF", "b_resume.docx"]);
        assert_eq!(docs[0].format, DocumentFormat::Pdf);
        assert_eq!(docs[1].format, DocumentFormat::Docx);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2026").join("spring");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.pdf"), b"x").unwrap();
        fs::write(dir.path().join("top.pdf"), b"x").unwrap();

        assert_eq!(scan_folder(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(dir.path(), true).unwrap().len(), 2);
    }
}
