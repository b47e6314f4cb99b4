use resume_analyzer_common::AnalysisResult;
use serde::{Deserialize, Serialize};

/// 履歴書1件分の解析結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub file_name: String,

    /// 履歴書ファイルのパス
    #[serde(default)]
    pub file_path: String,

    pub result: AnalysisResult,

    #[serde(default)]
    pub suggestions: Vec<String>,
}
