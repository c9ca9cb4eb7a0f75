//! 今日すでに書いたメモの取得
//!
//! 日付列が今日の `YYYY/MM/DD` で始まる行の「元のメモ」を集める。
//! 見つからない・列が無い場合は空文字（＝今日はまだ書いていない）。

use crate::domain::diary_row::{StoredRecord, COL_DATE, COL_RAW_NOTE, DATE_FORMAT};
use chrono::NaiveDate;
use serde::Deserialize;

/// 前回メモの集め方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeSource {
    /// 今日の行すべてを保存順に空行区切りで結合する
    #[default]
    Accumulate,
    /// 今日の最新の行だけを使う（各行は既にそれ以前の追記を含む）
    Latest,
}

/// 今日の行の元メモを返す
pub fn todays_previous_memo(
    rows: &[StoredRecord],
    today: NaiveDate,
    source: MergeSource,
) -> String {
    let today_str = today.format(DATE_FORMAT).to_string();
    let memos: Vec<&str> = rows
        .iter()
        .filter(|row| {
            row.get(COL_DATE)
                .map(|date| date.starts_with(&today_str))
                .unwrap_or(false)
        })
        .filter_map(|row| row.get(COL_RAW_NOTE))
        .collect();

    match source {
        MergeSource::Accumulate => memos.join("\n\n"),
        MergeSource::Latest => memos.last().map(|s| s.to_string()).unwrap_or_default(),
    }
}
