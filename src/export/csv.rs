//! CSV出力
//!
//! ヘッダー: Category, Match %, Matched Skills, Missing Skills

use crate::error::{AnalyzerError, Result};
use resume_analyzer_common::export::table_core::CSV_HEADER;
use resume_analyzer_common::{tabular_rows, AnalysisResult};
use std::io::Write;
use std::path::Path;

/// 任意の書き込み先へCSVを出力
pub fn write_csv<W: Write>(result: &AnalysisResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for row in tabular_rows(result) {
        csv_writer.write_record(row.to_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// CSV文字列を生成
pub fn render_csv(result: &AnalysisResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AnalyzerError::CsvGeneration(e.to_string()))
}

/// CSVファイルを生成
pub fn generate_csv(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(result, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_analyzer_common::{KeywordCatalog, KeywordCategory, match_keywords};

    #[test]
    fn test_render_csv() {
        let catalog = KeywordCatalog::new(vec![
            KeywordCategory {
                name: "technical".into(),
                keywords: vec!["python".into(), "java".into(), "sql".into()],
            },
            KeywordCategory {
                name: "soft".into(),
                keywords: vec!["teamwork".into()],
            },
        ])
        .unwrap();
        let result = match_keywords(&catalog, "i know python and sql");
        let csv = render_csv(&result).unwrap();

        assert_eq!(
            csv,
            "Category,Match %,Matched Skills,Missing Skills\n\
             technical,66.67,\"python, sql\",java\n\
             soft,0.0,,teamwork\n"
        );
    }
}
