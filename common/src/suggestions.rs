//! 改善提案の生成
//!
//! 不足キーワードから、カタログ順で優先度付けした提案文を作る。
//! AIは使わず、同じ入力には常に同じ提案列を返す。

use crate::types::{AnalysisResult, SOFT, TECHNICAL};

/// 技術スキル一覧提案に載せる最大件数
pub const MAX_LISTED_TECHNICAL: usize = 8;
/// 技術スキル個別提案の最大件数
pub const MAX_TECHNICAL_DETAILS: usize = 5;
/// ソフトスキル一覧提案に載せる最大件数
pub const MAX_LISTED_SOFT: usize = 5;
/// ソフトスキル個別提案の最大件数
pub const MAX_SOFT_DETAILS: usize = 3;

/// 提案件数の上限
pub const MAX_SUGGESTIONS: usize = 1 + MAX_TECHNICAL_DETAILS + 1 + MAX_SOFT_DETAILS;

pub const ALL_MATCHED_MESSAGE: &str = "Your resume already contains a strong mix of technical and soft skills. \
     Consider tailoring your experience section for specific job roles.";

/// 解析結果から改善提案を生成する
///
/// 1. 技術スキル不足: 先頭8件を列挙
/// 2. 技術スキル不足の先頭5件: 個別提案
/// 3. ソフトスキル不足: 先頭5件を列挙
/// 4. ソフトスキル不足の先頭3件: 個別提案
/// 5. どちらも不足なし: 完了メッセージ1件のみ
pub fn build_suggestions(result: &AnalysisResult) -> Vec<String> {
    let technical_missing = result.missing(TECHNICAL);
    let soft_missing = result.missing(SOFT);

    if technical_missing.is_empty() && soft_missing.is_empty() {
        return vec![ALL_MATCHED_MESSAGE.to_string()];
    }

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);

    // 技術スキル
    if !technical_missing.is_empty() {
        suggestions.push(format!(
            "Consider adding or highlighting these technical skills: {}.",
            join_first(technical_missing, MAX_LISTED_TECHNICAL)
        ));
    }
    for skill in technical_missing.iter().take(MAX_TECHNICAL_DETAILS) {
        suggestions.push(format!(
            "Add a project or internship experience showing your work in {}.",
            skill
        ));
    }

    // ソフトスキル
    if !soft_missing.is_empty() {
        suggestions.push(format!(
            "Improve your resume by emphasizing soft skills such as {}.",
            join_first(soft_missing, MAX_LISTED_SOFT)
        ));
    }
    for skill in soft_missing.iter().take(MAX_SOFT_DETAILS) {
        suggestions.push(format!(
            "Include an example that demonstrates your {} skill.",
            skill
        ));
    }

    suggestions
}

fn join_first(keywords: &[String], limit: usize) -> String {
    keywords
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
