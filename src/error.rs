use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("未対応のファイル形式です（.pdf または .docx を指定してください）: {0}")]
    UnsupportedFormat(String),

    #[error("テキスト抽出に失敗: {0}")]
    ExtractionFailure(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("履歴書ファイルが見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV生成エラー: {0}")]
    CsvGeneration(String),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error(transparent)]
    Common(#[from] resume_analyzer_common::Error),
}

impl From<csv::Error> for AnalyzerError {
    fn from(e: csv::Error) -> Self {
        AnalyzerError::CsvGeneration(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
