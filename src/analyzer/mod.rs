//! 解析モジュール
//!
//! 文書抽出 → 正規化 → キーワード照合 → 改善提案 の流れをまとめる。

pub mod batch;
mod types;

pub use types::ResumeAnalysis;

use crate::error::Result;
use crate::extractor;
use resume_analyzer_common::{build_suggestions, match_keywords, normalize, AnalysisResult, KeywordCatalog};
use std::path::Path;
use tracing::debug;

/// 求人票テキストを読み込み、小文字化して返す
///
/// UTF-8として不正なバイトは置換文字で読み込む。
pub fn load_job_description(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(normalize(&String::from_utf8_lossy(&bytes)))
}

/// 抽出済みテキストを照合する
///
/// 求人票が無い場合は履歴書テキスト自体を求人票とみなす（常に高い一致率になる）。
/// 照合に使うのは固定カタログで、求人票の内容はキーワード選定に影響しない。
pub fn analyze_text(
    resume_text: &str,
    job_description: Option<&str>,
    catalog: &KeywordCatalog,
) -> AnalysisResult {
    let normalized = normalize(resume_text);

    let job_description = match job_description {
        Some(jd) => jd,
        None => {
            debug!("求人票なし: 履歴書テキストを代用");
            normalized.as_str()
        }
    };
    debug!(
        resume_chars = normalized.len(),
        job_description_chars = job_description.len(),
        "matching against catalog"
    );

    match_keywords(catalog, &normalized)
}

/// 履歴書ファイルを解析する
///
/// 対応外の拡張子は抽出前に `UnsupportedFormat` で拒否する。
pub fn analyze_resume(
    path: &Path,
    job_description: Option<&str>,
    catalog: &KeywordCatalog,
) -> Result<ResumeAnalysis> {
    let resume_text = extractor::extract_text(path)?;
    let result = analyze_text(&resume_text, job_description, catalog);
    let suggestions = build_suggestions(&result);

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ResumeAnalysis {
        file_name,
        file_path: path.display().to_string(),
        result,
        suggestions,
    })
}
