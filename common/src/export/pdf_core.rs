//! PDFレポートの共通処理
//!
//! 文書モデル（行の並び）の構築と、A4ページへの配置計算を行う。
//! 描画そのものはCLI側（printpdf）が担当する。

use super::table_core::{display_category, format_percent, LIST_DELIMITER};
use crate::types::AnalysisResult;

/// レポートのメタデータ
#[derive(Debug, Clone, Default)]
pub struct ReportMetadata {
    pub title: String,
    pub resume_name: String,
    pub job_description_name: Option<String>,
    pub generated_at: String,
}

/// 行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    /// 番号付き提案
    Item,
    Spacer,
}

/// 文書モデルの1行（折り返し前）
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub style: LineStyle,
    pub text: String,
    /// キーワード一覧行は ", " 区切りでのみ折り返す
    pub keyword_list: Option<(String, Vec<String>)>,
}

impl ReportLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            keyword_list: None,
        }
    }

    fn spacer() -> Self {
        Self::new(LineStyle::Spacer, "")
    }

    fn keywords(label: &str, keywords: &[String]) -> Self {
        let text = if keywords.is_empty() {
            format!("{}: None", label)
        } else {
            format!("{}: {}", label, keywords.join(LIST_DELIMITER))
        };
        Self {
            style: LineStyle::Body,
            text,
            keyword_list: Some((format!("{}: ", label), keywords.to_vec())),
        }
    }
}

/// 解析結果と提案から文書モデルを構築
///
/// 全キーワード・全提案が順序どおりそのまま含まれる。
pub fn document_lines(
    result: &AnalysisResult,
    suggestions: &[String],
    metadata: &ReportMetadata,
) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::new(LineStyle::Title, metadata.title.clone()),
        ReportLine::new(LineStyle::Body, format!("Resume: {}", metadata.resume_name)),
    ];
    if let Some(jd) = &metadata.job_description_name {
        lines.push(ReportLine::new(LineStyle::Body, format!("Job description: {}", jd)));
    }
    if !metadata.generated_at.is_empty() {
        lines.push(ReportLine::new(
            LineStyle::Body,
            format!("Generated: {}", metadata.generated_at),
        ));
    }

    for category in result.iter() {
        lines.push(ReportLine::spacer());
        lines.push(ReportLine::new(
            LineStyle::Heading,
            format!(
                "{} Skills - Match: {}%",
                display_category(&category.category),
                format_percent(category.match_percent)
            ),
        ));
        lines.push(ReportLine::keywords("Matched", &category.matched));
        lines.push(ReportLine::keywords("Missing", &category.missing));
    }

    lines.push(ReportLine::spacer());
    lines.push(ReportLine::new(LineStyle::Heading, "Suggestions"));
    for (i, suggestion) in suggestions.iter().enumerate() {
        lines.push(ReportLine::new(LineStyle::Item, format!("{}. {}", i + 1, suggestion)));
    }

    lines
}

/// 単語境界で折り返す。1単語が幅を超える場合はそのまま1行にする
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

/// キーワード単位で折り返す（キーワードの途中では改行しない）
pub fn wrap_keywords(prefix: &str, keywords: &[String], max_chars: usize) -> Vec<String> {
    if keywords.is_empty() {
        return vec![format!("{}None", prefix)];
    }

    let mut lines = Vec::new();
    let mut current = prefix.to_string();
    let mut has_item = false;

    for (i, keyword) in keywords.iter().enumerate() {
        let is_last = i + 1 == keywords.len();
        let piece = if is_last {
            keyword.clone()
        } else {
            format!("{},", keyword)
        };
        let needed = current.chars().count() + usize::from(has_item) + piece.chars().count();
        if needed > max_chars && has_item {
            lines.push(std::mem::take(&mut current));
            has_item = false;
        }
        if has_item {
            current.push(' ');
        }
        current.push_str(&piece);
        has_item = true;
    }
    lines.push(current);
    lines
}

/// 配置済みの1行（mm単位、原点は左下）
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: LineStyle,
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

/// A4縦のレイアウト設定
#[derive(Debug, Clone)]
pub struct PdfLayoutCore {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// 折り返し行のインデント
    pub indent_mm: f32,
}

impl Default for PdfLayoutCore {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 18.0,
            indent_mm: 5.0,
        }
    }
}

const PT_TO_MM: f32 = 0.352_778;
/// Helvetica の平均文字幅（em比）
const AVG_CHAR_WIDTH_EM: f32 = 0.5;

impl PdfLayoutCore {
    pub fn font_size_pt(&self, style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => 18.0,
            LineStyle::Heading => 13.0,
            LineStyle::Body | LineStyle::Item => 10.0,
            LineStyle::Spacer => 6.0,
        }
    }

    pub fn line_height_mm(&self, style: LineStyle) -> f32 {
        self.font_size_pt(style) * 1.45 * PT_TO_MM
    }

    /// 1行に収まるおおよその文字数
    pub fn chars_per_line(&self, style: LineStyle) -> usize {
        let usable_mm = self.page_width_mm - self.margin_mm * 2.0 - self.indent_mm;
        let char_mm = self.font_size_pt(style) * AVG_CHAR_WIDTH_EM * PT_TO_MM;
        ((usable_mm / char_mm) as usize).max(1)
    }

    fn top_y_mm(&self) -> f32 {
        self.page_height_mm - self.margin_mm
    }

    /// 文書モデルをページ単位に配置する
    pub fn layout_pages(&self, lines: &[ReportLine]) -> Vec<Vec<PlacedLine>> {
        let mut pages = vec![Vec::new()];
        let mut y = self.top_y_mm();

        for line in lines {
            let height = self.line_height_mm(line.style);
            let wrapped = match (&line.keyword_list, line.style) {
                (_, LineStyle::Spacer) => {
                    y -= height;
                    continue;
                }
                (Some((prefix, keywords)), _) => {
                    wrap_keywords(prefix, keywords, self.chars_per_line(line.style))
                }
                (None, _) => wrap_text(&line.text, self.chars_per_line(line.style)),
            };

            for (i, text) in wrapped.into_iter().enumerate() {
                if y - height < self.margin_mm {
                    pages.push(Vec::new());
                    y = self.top_y_mm();
                }
                y -= height;
                let x = if i == 0 {
                    self.margin_mm
                } else {
                    self.margin_mm + self.indent_mm
                };
                if let Some(page) = pages.last_mut() {
                    page.push(PlacedLine {
                        style: line.style,
                        text,
                        x_mm: x,
                        y_mm: y,
                    });
                }
            }
        }

        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KeywordCatalog;
    use crate::matcher::match_keywords;
    use crate::suggestions::build_suggestions;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            title: "Resume Analysis Report".into(),
            resume_name: "jane_doe.pdf".into(),
            job_description_name: Some("backend.txt".into()),
            generated_at: "2026-01-18 10:00".into(),
        }
    }

    #[test]
    fn test_document_contains_everything_in_order() {
        let catalog = KeywordCatalog::builtin();
        let result = match_keywords(&catalog, "python, docker and teamwork");
        let suggestions = build_suggestions(&result);
        let lines = document_lines(&result, &suggestions, &metadata());

        let text: String = lines.iter().map(|l| format!("{}\n", l.text)).collect();
        let mut cursor = 0;
        for category in result.iter() {
            for keyword in category.matched.iter().chain(category.missing.iter()) {
                let pos = text[cursor..].find(keyword.as_str()).expect("keyword missing");
                cursor += pos;
            }
        }
        let mut cursor = 0;
        for suggestion in &suggestions {
            let pos = text[cursor..].find(suggestion.as_str()).expect("suggestion missing");
            cursor += pos + suggestion.len();
        }
        assert_eq!(lines[0].style, LineStyle::Title);
        assert!(text.contains("Technical Skills - Match: 10.34%"));
    }

    #[test]
    fn test_document_without_jd_name() {
        let meta = ReportMetadata {
            job_description_name: None,
            ..metadata()
        };
        let lines = document_lines(&AnalysisResult::default(), &[], &meta);
        assert!(lines.iter().all(|l| !l.text.starts_with("Job description")));
        assert_eq!(lines.last().unwrap().text, "Suggestions");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, ["one two", "three", "four five"]);
        assert_eq!(wrap_text("", 10), [""]);
        assert_eq!(wrap_text("supercalifragilistic", 5), ["supercalifragilistic"]);
    }

    #[test]
    fn test_wrap_keywords_keeps_keywords_whole() {
        let keywords: Vec<String> = ["spring boot", "data structures", "computer networks"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let lines = wrap_keywords("Missing: ", &keywords, 30);
        assert_eq!(
            lines,
            ["Missing: spring boot,", "data structures,", "computer networks"]
        );
        assert_eq!(lines.join(" "), format!("Missing: {}", keywords.join(", ")));
        assert_eq!(wrap_keywords("Matched: ", &[], 30), ["Matched: None"]);
    }

    #[test]
    fn test_layout_adds_pages() {
        let layout = PdfLayoutCore::default();
        let lines: Vec<ReportLine> = (0..200)
            .map(|i| ReportLine::new(LineStyle::Body, format!("line {}", i)))
            .collect();
        let pages = layout.layout_pages(&lines);

        assert!(pages.len() > 1);
        let placed: usize = pages.iter().map(|p| p.len()).sum();
        assert_eq!(placed, 200);
        for page in &pages {
            for line in page {
                assert!(line.y_mm >= layout.margin_mm);
                assert!(line.y_mm <= layout.page_height_mm - layout.margin_mm);
            }
        }
    }

    #[test]
    fn test_layout_lines_descend() {
        let layout = PdfLayoutCore::default();
        let lines = document_lines(&AnalysisResult::default(), &["a".into(), "b".into()], &metadata());
        let pages = layout.layout_pages(&lines);
        assert_eq!(pages.len(), 1);
        let ys: Vec<f32> = pages[0].iter().map(|l| l.y_mm).collect();
        assert!(ys.windows(2).all(|w| w[0] > w[1]));
    }
}
