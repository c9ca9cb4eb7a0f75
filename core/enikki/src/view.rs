//! 端末への表示（stdout 等の Write に書く）

use std::io::{self, Write};

use common::error::Error;

use crate::domain::HistoryEntry;
use crate::usecase::WriteOutcome;

pub fn io_error(e: io::Error) -> Error {
    Error::io_msg(e.to_string())
}

/// 書き込み結果（日記・挿絵・警告・保存時刻）
pub fn render_outcome(out: &mut dyn Write, outcome: &WriteOutcome) -> io::Result<()> {
    if outcome.merged {
        writeln!(out, "🔁 今日のメモと合わせて書き直しました")?;
    }
    writeln!(out, "📖 日記")?;
    writeln!(out, "{}", outcome.diary_part)?;
    if !outcome.row.image_url.is_empty() {
        writeln!(out, "🖼️ 挿絵: {}", outcome.row.image_url)?;
    }
    if let Some(warning) = &outcome.image_warning {
        writeln!(out, "⚠️ 画像生成に失敗しました: {}", warning)?;
    }
    writeln!(out, "✅ 保存しました！ ({})", outcome.row.timestamp)
}

/// 過去の日記（新しい順に並んだもの）
pub fn render_feed(out: &mut dyn Write, entries: &[HistoryEntry]) -> io::Result<()> {
    writeln!(out, "📚 過去の日記")?;
    if entries.is_empty() {
        return writeln!(out, "（まだ日記がありません）");
    }
    for entry in entries {
        writeln!(out)?;
        writeln!(out, "🗓️ {} - 気分: {}", entry.date, entry.score)?;
        if let Some(url) = &entry.image_url {
            writeln!(out, "  🖼️ {}", url)?;
        }
        for line in entry.diary_body.lines() {
            writeln!(out, "  {}", line)?;
        }
        writeln!(out, "  元のメモ: {}", entry.raw_note)?;
    }
    Ok(())
}

/// 今日すでに書いたメモ
pub fn render_today(out: &mut dyn Write, previous_memo: &str) -> io::Result<()> {
    if previous_memo.is_empty() {
        return writeln!(out, "📝 今日はまだ日記を書いていません");
    }
    writeln!(out, "💡 今日は既に日記があります。入力すると自動で合体して書き直します。")?;
    writeln!(out)?;
    writeln!(out, "過去のメモ:")?;
    writeln!(out, "{}", previous_memo)
}

pub fn render_profiles(out: &mut dyn Write, names: &[String], default: &str) -> io::Result<()> {
    for name in names {
        if name == default {
            writeln!(out, "{} (default)", name)?;
        } else {
            writeln!(out, "{}", name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiaryRow;

    fn render<F: FnOnce(&mut dyn Write) -> io::Result<()>>(f: F) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn outcome(image_url: &str, warning: Option<&str>) -> WriteOutcome {
        WriteOutcome {
            row: DiaryRow {
                timestamp: "2026/10/19 21:00:00".to_string(),
                raw_note: "疲れた".to_string(),
                generated_text: "【清書された日記】\n本文".to_string(),
                analysis_section: "N/A".to_string(),
                image_url: image_url.to_string(),
            },
            diary_part: "【清書された日記】\n本文".to_string(),
            image_warning: warning.map(|s| s.to_string()),
            merged: false,
        }
    }

    #[test]
    fn test_render_outcome_with_image() {
        let text = render(|out| render_outcome(out, &outcome("https://img/x.png", None)));
        assert!(text.contains("📖 日記\n【清書された日記】\n本文\n"));
        assert!(text.contains("🖼️ 挿絵: https://img/x.png"));
        assert!(text.contains("2026/10/19 21:00:00"));
        assert!(!text.contains("⚠️"));
    }

    #[test]
    fn test_render_outcome_with_warning() {
        let text = render(|out| render_outcome(out, &outcome("", Some("quota exceeded"))));
        assert!(!text.contains("挿絵"));
        assert!(text.contains("⚠️ 画像生成に失敗しました: quota exceeded"));
    }

    #[test]
    fn test_render_feed() {
        let entries = vec![HistoryEntry {
            date: "2026/10/19".to_string(),
            score: "85".to_string(),
            diary_body: "一行目\n二行目".to_string(),
            raw_note: "メモ".to_string(),
            image_url: None,
        }];
        let text = render(|out| render_feed(out, &entries));
        assert!(text.contains("🗓️ 2026/10/19 - 気分: 85"));
        assert!(text.contains("  一行目\n  二行目\n"));
        assert!(text.contains("  元のメモ: メモ"));
    }

    #[test]
    fn test_render_empty_feed_and_today() {
        assert!(render(|out| render_feed(out, &[])).contains("まだ日記がありません"));
        assert!(render(|out| render_today(out, "")).contains("まだ日記を書いていません"));
        assert!(render(|out| render_today(out, "朝のメモ")).ends_with("過去のメモ:\n朝のメモ\n"));
    }

    #[test]
    fn test_render_profiles_marks_default() {
        let names = vec!["echo".to_string(), "openai".to_string()];
        let text = render(|out| render_profiles(out, &names, "openai"));
        assert_eq!(text, "echo\nopenai (default)\n");
    }
}
