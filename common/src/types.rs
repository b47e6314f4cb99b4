//! 照合結果の型定義
//!
//! CLIとバッチ処理で共有される型:
//! - MatchResult: カテゴリ単位の照合結果
//! - AnalysisResult: 1回の解析の全カテゴリ結果（カタログ順）

use serde::{Deserialize, Serialize};

/// 技術スキルのカテゴリ名
pub const TECHNICAL: &str = "technical";

/// ソフトスキルのカテゴリ名
pub const SOFT: &str = "soft";

/// カテゴリ単位の照合結果
///
/// `matched` と `missing` はどちらもカタログ順で、合わせるとカテゴリの
/// キーワード一覧と一致する（重複・重なりなし）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub category: String,

    #[serde(default)]
    pub matched: Vec<String>,

    #[serde(default)]
    pub missing: Vec<String>,

    /// 0.0 - 100.0（小数第2位で丸め）
    #[serde(default)]
    pub match_percent: f64,
}

impl MatchResult {
    /// カテゴリのキーワード総数
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// 解析結果（カテゴリ名 → 照合結果、カタログ順）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub categories: Vec<MatchResult>,
}

impl AnalysisResult {
    pub fn new(categories: Vec<MatchResult>) -> Self {
        Self { categories }
    }

    /// カテゴリ名で照合結果を取得
    pub fn get(&self, category: &str) -> Option<&MatchResult> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchResult> {
        self.categories.iter()
    }

    /// カテゴリの不足キーワード（カテゴリがなければ空）
    pub fn missing(&self, category: &str) -> &[String] {
        self.get(category).map(|c| c.missing.as_slice()).unwrap_or(&[])
    }

    /// カテゴリの一致率（カテゴリがなければ0）
    pub fn match_percent(&self, category: &str) -> f64 {
        self.get(category).map(|c| c.match_percent).unwrap_or(0.0)
    }
}
