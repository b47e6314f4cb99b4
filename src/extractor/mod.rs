//! 文書テキスト抽出モジュール
//!
//! 拡張子から文書形式を判定し、PDF / DOCX からプレーンテキストを取り出す。
//! 照合エンジンはここで得たテキストだけを受け取り、バイナリ形式は扱わない。

mod docx;
mod pdf;

use crate::error::{AnalyzerError, Result};
use std::path::Path;

/// 対応する文書形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// 拡張子から形式を判定（大文字小文字は区別しない）
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(AnalyzerError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// メモリ上の文書からテキストを抽出
    pub fn extract(&self, bytes: &[u8]) -> Result<String> {
        match self {
            DocumentFormat::Pdf => pdf::extract_text(bytes),
            DocumentFormat::Docx => docx::extract_text(bytes),
        }
    }
}

/// ファイルからテキストを抽出
///
/// 形式の判定はファイルを読む前に行う。
pub fn extract_text(path: &Path) -> Result<String> {
    let format = DocumentFormat::from_path(path)?;

    if !path.exists() {
        return Err(AnalyzerError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), ?format, size = bytes.len(), "extracting text");

    format.extract(&bytes).map_err(|e| match e {
        AnalyzerError::ExtractionFailure(msg) => {
            AnalyzerError::ExtractionFailure(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
