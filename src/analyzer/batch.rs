//! フォルダ一括解析
//!
//! 各履歴書の解析は独立しているので rayon で並列に実行する。
//! 共有するのは読み取り専用のカタログと求人票テキストのみ。

use super::{analyze_resume, ResumeAnalysis};
use crate::error::AnalyzerError;
use crate::scanner::DocumentInfo;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use resume_analyzer_common::KeywordCatalog;
use tracing::warn;

/// 一括解析の結果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功した解析（ファイル名順）
    pub analyses: Vec<ResumeAnalysis>,
    /// 失敗したファイル名とエラー
    pub failures: Vec<(String, AnalyzerError)>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.analyses.len() + self.failures.len()
    }
}

pub fn analyze_documents(
    documents: &[DocumentInfo],
    job_description: Option<&str>,
    catalog: &KeywordCatalog,
    show_progress: bool,
) -> BatchOutcome {
    let progress = if show_progress {
        let pb = ProgressBar::new(documents.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=> "));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, Result<ResumeAnalysis, AnalyzerError>)> = documents
        .par_iter()
        .map(|doc| {
            let result = analyze_resume(&doc.path, job_description, catalog);
            progress.set_message(doc.file_name.clone());
            progress.inc(1);
            (doc.file_name.clone(), result)
        })
        .collect();

    progress.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (file_name, result) in results {
        match result {
            Ok(analysis) => outcome.analyses.push(analysis),
            Err(e) => {
                warn!(file = %file_name, error = %e, "解析失敗");
                outcome.failures.push((file_name, e));
            }
        }
    }

    outcome
}
