pub mod csv;
pub mod pdf;

use crate::analyzer::ResumeAnalysis;
use crate::cli::ExportFormat;
use crate::error::Result;
use resume_analyzer_common::ReportMetadata;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// 出力先の親ディレクトリを作成
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, stem: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let csv_path = output.join(format!("{}.csv", stem));
        let pdf_path = output.join(format!("{}.pdf", stem));
        (csv_path, pdf_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(stem);
        let csv_path = parent.join(format!("{}.csv", stem));
        let pdf_path = parent.join(format!("{}.pdf", stem));
        (csv_path, pdf_path)
    }
}

/// 一括出力用のファイル名
///
/// フォルダからの相対パスと拡張子を含めるので、`x/cv.docx` と `y/cv.docx`、
/// `cv.pdf` と `cv.docx` は別名になる。
pub fn report_stem(folder: &Path, document: &Path) -> String {
    let relative = document.strip_prefix(folder).unwrap_or(document);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().replace('.', "_")),
            _ => None,
        })
        .collect();
    format!("{}_analysis", parts.join("_"))
}

/// 文書ごとの重複しないファイル名（衝突時は `_2`, `_3` ... を付ける）
pub fn batch_report_stems<'a>(
    folder: &Path,
    documents: impl IntoIterator<Item = &'a Path>,
) -> Vec<String> {
    let mut used = HashSet::new();
    documents
        .into_iter()
        .map(|document| {
            let base = report_stem(folder, document);
            let mut stem = base.clone();
            let mut n = 2;
            while !used.insert(stem.clone()) {
                stem = format!("{}_{}", base, n);
                n += 1;
            }
            stem
        })
        .collect()
}

/// 解析結果をCSV/PDFに出力し、生成したファイルのパスを返す
pub fn export_report(
    analysis: &ResumeAnalysis,
    format: &ExportFormat,
    output: &Path,
    stem: &str,
    metadata: &ReportMetadata,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Csv => {
            let csv_path = output_path_for_format(output, stem, "csv");
            ensure_parent(&csv_path)?;
            csv::generate_csv(&analysis.result, &csv_path)?;
            written.push(csv_path);
        }
        ExportFormat::Pdf => {
            let pdf_path = output_path_for_format(output, stem, "pdf");
            ensure_parent(&pdf_path)?;
            pdf::generate_pdf(&analysis.result, &analysis.suggestions, metadata, &pdf_path)?;
            written.push(pdf_path);
        }
        ExportFormat::Both => {
            let (csv_path, pdf_path) = output_paths_for_both(output, stem);
            ensure_parent(&csv_path)?;
            csv::generate_csv(&analysis.result, &csv_path)?;
            written.push(csv_path);
            pdf::generate_pdf(&analysis.result, &analysis.suggestions, metadata, &pdf_path)?;
            written.push(pdf_path);
        }
        ExportFormat::None => {}
    }

    for path in &written {
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(written)
}
