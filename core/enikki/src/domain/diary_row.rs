//! 保存する 1 行（DiaryRow）と、読み出した行（StoredRecord）

use crate::domain::reply::ParsedReply;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub const COL_DATE: &str = "日付";
pub const COL_RAW_NOTE: &str = "元のメモ";
pub const COL_GENERATED: &str = "生成結果";
pub const COL_ANALYSIS: &str = "分析結果";
pub const COL_IMAGE_URL: &str = "画像URL";

/// 列の並び（スプレッドシートの 1 行目と一致させる）
pub const HEADERS: [&str; 5] = [COL_DATE, COL_RAW_NOTE, COL_GENERATED, COL_ANALYSIS, COL_IMAGE_URL];

/// 日付列の書式
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
/// 「今日」の判定に使う日付部分の書式
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// 1 回の投稿で追記される 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryRow {
    pub timestamp: String,
    pub raw_note: String,
    pub generated_text: String,
    pub analysis_section: String,
    pub image_url: String,
}

impl DiaryRow {
    /// 分割済みの応答・合体済みの入力・画像 URL から行を組み立てる
    pub fn assemble(
        now: NaiveDateTime,
        combined_input: &str,
        parsed: &ParsedReply,
        image_url: Option<String>,
    ) -> Self {
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            raw_note: combined_input.to_string(),
            generated_text: parsed.diary_part.clone(),
            analysis_section: parsed.analysis_section.clone(),
            image_url: image_url.unwrap_or_default(),
        }
    }

    /// HEADERS の順に並べた値
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.raw_note.clone(),
            self.generated_text.clone(),
            self.analysis_section.clone(),
            self.image_url.clone(),
        ]
    }

    /// 書き込んだ行を読み出し時の形にする（メモリ上のストア用）
    pub fn to_record(&self) -> StoredRecord {
        StoredRecord::from_pairs(HEADERS.iter().copied().zip(self.to_fields()))
    }
}

/// 読み出した 1 行（見出し → セルの値）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredRecord(BTreeMap<String, String>);

impl StoredRecord {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_assemble_fixed_column_order() {
        let parsed = ParsedReply::parse("【清書された日記】\n本文\n【分析結果】\nポジティブ度: 70/100\n【IMAGE_PROMPT】\nsun");
        let row = DiaryRow::assemble(at(8, 5, 3), "メモ", &parsed, Some("https://img/1.png".to_string()));
        assert_eq!(
            row.to_fields(),
            vec![
                "2026/03/09 08:05:03".to_string(),
                "メモ".to_string(),
                "【清書された日記】\n本文\n【分析結果】\nポジティブ度: 70/100".to_string(),
                "ポジティブ度: 70/100".to_string(),
                "https://img/1.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_assemble_without_image_is_empty_string() {
        let parsed = ParsedReply::parse("x");
        let row = DiaryRow::assemble(at(0, 0, 0), "x", &parsed, None);
        assert_eq!(row.image_url, "");
        assert_eq!(row.analysis_section, "N/A");
    }

    #[test]
    fn test_to_record_keys_by_header() {
        let parsed = ParsedReply::parse("x");
        let rec = DiaryRow::assemble(at(23, 59, 59), "memo", &parsed, None).to_record();
        assert_eq!(rec.get(COL_DATE), Some("2026/03/09 23:59:59"));
        assert_eq!(rec.get(COL_RAW_NOTE), Some("memo"));
        assert_eq!(rec.get(COL_IMAGE_URL), Some(""));
        assert_eq!(rec.get("unknown"), None);
    }
}
