//! 表形式（CSV）出力とコンソール表示の共通処理

use crate::types::{AnalysisResult, MatchResult};

/// CSVヘッダー
pub const CSV_HEADER: [&str; 4] = ["Category", "Match %", "Matched Skills", "Missing Skills"];

/// キーワード一覧の区切り
pub const LIST_DELIMITER: &str = ", ";

/// 1カテゴリ = 1行
#[derive(Debug, Clone, PartialEq)]
pub struct TabularRow {
    pub category: String,
    pub match_percent: f64,
    pub matched: String,
    pub missing: String,
}

impl TabularRow {
    pub fn from_match(result: &MatchResult) -> Self {
        Self {
            category: result.category.clone(),
            match_percent: result.match_percent,
            matched: result.matched.join(LIST_DELIMITER),
            missing: result.missing.join(LIST_DELIMITER),
        }
    }

    /// CSVレコード（ヘッダーと同じ列順）
    pub fn to_record(&self) -> [String; 4] {
        [
            self.category.clone(),
            format_percent(self.match_percent),
            self.matched.clone(),
            self.missing.clone(),
        ]
    }
}

/// 解析結果をカテゴリ順の行に変換
pub fn tabular_rows(result: &AnalysisResult) -> Vec<TabularRow> {
    result.iter().map(TabularRow::from_match).collect()
}

/// 一致率の表示: 66.67 / 0.0 / 100.0
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// カテゴリ名の先頭を大文字に: "technical" → "Technical"
pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// コンソール向けのテキスト要約
pub fn text_summary(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for category in result.iter() {
        out.push_str(&format!("🔹 {} Skills:\n", display_category(&category.category)));
        out.push_str(&format!("Match %: {}\n", format_percent(category.match_percent)));
        out.push_str(&format!("Matched: {}\n", join_or_none(&category.matched)));
        out.push_str(&format!("Missing: {}\n\n", join_or_none(&category.missing)));
    }
    out
}

fn join_or_none(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "None".to_string()
    } else {
        keywords.join(LIST_DELIMITER)
    }
}
