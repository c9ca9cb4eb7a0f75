//! 過去の日記の再構成（読み出し側）
//!
//! 保存済みの「生成結果」を書き込み時と同じマーカーで分割し直し、表示用の項目にする。

use crate::domain::diary_row::{
    StoredRecord, COL_ANALYSIS, COL_DATE, COL_GENERATED, COL_IMAGE_URL, COL_RAW_NOTE,
};
use crate::domain::markers::{NOT_AVAILABLE, SCORE_LABEL};
use crate::domain::reply::extract_diary_body;

/// 表示用の 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 日付部分（時刻を除く）
    pub date: String,
    /// ポジティブ度（数値文字列または "N/A"）
    pub score: String,
    pub diary_body: String,
    pub raw_note: String,
    /// http で始まる場合のみ
    pub image_url: Option<String>,
}

impl HistoryEntry {
    /// 行を表示用に変換する。必須列が欠けた行は None（表示から除く）
    pub fn from_record(record: &StoredRecord) -> Option<Self> {
        let timestamp = record.get(COL_DATE)?;
        let analysis = record.get(COL_ANALYSIS)?;
        let generated = record.get(COL_GENERATED)?;
        let raw_note = record.get(COL_RAW_NOTE)?;

        let date = timestamp.split(' ').next().unwrap_or_default().to_string();
        let image_url = record
            .get(COL_IMAGE_URL)
            .filter(|url| url.starts_with("http"))
            .map(|url| url.to_string());

        Some(Self {
            date,
            score: extract_score(analysis),
            diary_body: extract_diary_body(generated),
            raw_note: raw_note.to_string(),
            image_url,
        })
    }
}

/// 分析結果から点数を取り出す（ラベルの後ろから次の `/` まで、`:` を除く）
pub fn extract_score(analysis: &str) -> String {
    match analysis.split_once(SCORE_LABEL) {
        Some((_, rest)) => {
            let value = rest.split('/').next().unwrap_or_default();
            value.replace(':', "").trim().to_string()
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// 新しい順の一覧を作る（`limit` 件まで）。変換できない行は飛ばす
pub fn build_feed(rows: &[StoredRecord], limit: Option<usize>) -> Vec<HistoryEntry> {
    rows.iter()
        .rev()
        .filter_map(HistoryEntry::from_record)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
