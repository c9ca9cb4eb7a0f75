use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;

use crate::adapter::MemoryRecordStore;
use crate::domain::diary_row::{COL_ANALYSIS, COL_DATE, COL_GENERATED, COL_RAW_NOTE};
use crate::domain::{DiaryRow, StoredRecord};
use crate::usecase::HistoryUseCase;

fn row(timestamp: &str, body: &str, score: &str, image_url: &str) -> StoredRecord {
    DiaryRow {
        timestamp: timestamp.to_string(),
        raw_note: format!("{}のメモ", body),
        generated_text: format!(
            "【清書された日記】\n{}\n\n【分析結果】\n📊 ポジティブ度: {}/100\n💬 コメント: よい一日",
            body, score
        ),
        analysis_section: format!("📊 ポジティブ度: {}/100\n💬 コメント: よい一日", score),
        image_url: image_url.to_string(),
    }
    .to_record()
}

fn use_case(store: MemoryRecordStore) -> HistoryUseCase {
    HistoryUseCase::new(Arc::new(store), Arc::new(NoopLog))
}

#[test]
fn test_feed_newest_first_with_reconstructed_fields() {
    let store = MemoryRecordStore::with_rows(vec![
        row("2026/10/17 20:00:00", "山に登った", "90", "https://img.example/a.png"),
        row("2026/10/18 21:00:00", "雨だった", "40", ""),
        row("2026/10/19 22:00:00", "疲れた", "30", "echo://image/12"),
    ]);
    let feed = use_case(store).feed(None).unwrap();
    assert_eq!(feed.len(), 3);

    assert_eq!(feed[0].date, "2026/10/19");
    assert_eq!(feed[0].diary_body, "疲れた");
    assert_eq!(feed[0].score, "30");
    assert_eq!(feed[0].image_url, None);

    assert_eq!(feed[1].date, "2026/10/18");
    assert_eq!(feed[1].image_url, None);

    assert_eq!(feed[2].date, "2026/10/17");
    assert_eq!(feed[2].score, "90");
    assert_eq!(feed[2].raw_note, "山に登ったのメモ");
    assert_eq!(feed[2].image_url.as_deref(), Some("https://img.example/a.png"));
}

#[test]
fn test_feed_skips_rows_missing_columns() {
    let store = MemoryRecordStore::with_rows(vec![
        row("2026/10/17 20:00:00", "一", "50", ""),
        StoredRecord::from_pairs([(COL_RAW_NOTE, "日付の無い行"), (COL_GENERATED, "x")]),
        StoredRecord::from_pairs([
            (COL_DATE, "2026/10/18 08:00:00"),
            (COL_RAW_NOTE, "分析列が無い行"),
            (COL_GENERATED, "x"),
        ]),
        row("2026/10/19 20:00:00", "二", "60", ""),
    ]);
    let feed = use_case(store).feed(None).unwrap();
    let bodies: Vec<&str> = feed.iter().map(|e| e.diary_body.as_str()).collect();
    assert_eq!(bodies, vec!["二", "一"]);
}

#[test]
fn test_feed_legacy_row_without_markers() {
    let store = MemoryRecordStore::with_rows(vec![StoredRecord::from_pairs([
        (COL_DATE, "2025/01/01 10:00:00"),
        (COL_RAW_NOTE, "初日"),
        (COL_GENERATED, "マーカーの無い古い形式の日記"),
        (COL_ANALYSIS, "N/A"),
    ])]);
    let feed = use_case(store).feed(None).unwrap();
    assert_eq!(feed[0].diary_body, "マーカーの無い古い形式の日記");
    assert_eq!(feed[0].score, "N/A");
    assert_eq!(feed[0].image_url, None);
}

#[test]
fn test_feed_limit() {
    let store = MemoryRecordStore::with_rows(
        (1..=5)
            .map(|d| row(&format!("2026/10/0{} 09:00:00", d), &d.to_string(), "50", ""))
            .collect(),
    );
    let feed = use_case(store).feed(Some(2)).unwrap();
    let dates: Vec<&str> = feed.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2026/10/05", "2026/10/04"]);
}

#[test]
fn test_feed_empty_store() {
    assert!(use_case(MemoryRecordStore::new()).feed(None).unwrap().is_empty());
}

#[test]
fn test_feed_read_failure_is_reported() {
    let err = use_case(MemoryRecordStore::disconnected()).feed(None).unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)));
}
