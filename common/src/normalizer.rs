//! テキスト正規化
//!
//! 照合は部分文字列の包含で判定するため、正規化は大文字小文字の除去のみ。
//! 空白の圧縮・記号の除去・トークン分割は行わない。

/// 抽出テキストを照合用に正規化する
pub fn normalize(raw_text: &str) -> String {
    raw_text.to_lowercase()
}
