//! 日記を書く（今日のメモと合体 → 清書・分析 → 挿絵 → 1 行追記）

use std::sync::Arc;

use chrono::NaiveDate;
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};

use crate::domain::{todays_previous_memo, DiaryRow, MergePlan, MergeSource, ParsedReply};
use crate::ports::outbound::{ImageGeneration, RecordStore, TextGeneration};

/// 挿絵のプロンプトに付ける画風の指定
pub const IMAGE_STYLE_SUFFIX: &str =
    ", children's drawing style, crayon art, naive art, colorful, simple, white background.";

pub struct WriteDiaryDeps {
    pub store: Arc<dyn RecordStore>,
    pub text: Arc<dyn TextGeneration>,
    /// None なら挿絵を作らない
    pub image: Option<Arc<dyn ImageGeneration>>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// 1 回の書き込みの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// 追記した行
    pub row: DiaryRow,
    /// 表示用の日記部分（画像プロンプトを除いた応答）
    pub diary_part: String,
    /// 挿絵が作れなかったときの理由
    pub image_warning: Option<String>,
    /// 今日のメモと合体したか
    pub merged: bool,
}

pub struct WriteDiaryUseCase {
    deps: WriteDiaryDeps,
    merge_source: MergeSource,
}

impl WriteDiaryUseCase {
    pub fn new(deps: WriteDiaryDeps, merge_source: MergeSource) -> Self {
        Self { deps, merge_source }
    }

    /// 今日すでに書いたメモ（無ければ空）。読み出しに失敗しても空として扱う
    pub fn previous_memo(&self) -> String {
        self.previous_memo_on(self.deps.clock.now_local().date())
    }

    fn previous_memo_on(&self, today: NaiveDate) -> String {
        match self.deps.store.read_all_rows() {
            Ok(rows) => todays_previous_memo(&rows, today, self.merge_source),
            Err(e) => {
                let _ = self.deps.log.log(
                    &LogRecord::new(LogLevel::Warn, "same-day lookup failed")
                        .layer("usecase")
                        .kind("store")
                        .field("error", e.to_string()),
                );
                String::new()
            }
        }
    }

    pub fn write(&self, note: &str) -> Result<WriteOutcome, Error> {
        if note.trim().is_empty() {
            return Err(Error::invalid_argument("No note provided. Write what happened today."));
        }
        self.deps.store.check_connection()?;

        // 合体する日と行の日付は同じ時刻から決める
        let now = self.deps.clock.now_local();
        let previous = self.previous_memo_on(now.date());
        let plan = MergePlan::new(&previous, note);
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "generating diary")
                .layer("usecase")
                .kind("generation")
                .field("variant", plan.variant.as_str())
                .field("input_chars", plan.combined_input.chars().count()),
        );

        let reply = self
            .deps
            .text
            .complete_text(&plan.system_prompt(), &plan.combined_input)?;
        let parsed = ParsedReply::parse(&reply);

        let (image_url, image_warning) = self.illustrate(&parsed.image_prompt);

        let row = DiaryRow::assemble(now, &plan.combined_input, &parsed, image_url);
        self.deps.store.append_row(&row)?;
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "diary saved")
                .layer("usecase")
                .kind("store")
                .field("timestamp", row.timestamp.clone())
                .field("merged", plan.is_merge())
                .field("image", !row.image_url.is_empty()),
        );

        Ok(WriteOutcome {
            row,
            diary_part: parsed.diary_part,
            image_warning,
            merged: plan.is_merge(),
        })
    }

    /// 画像プロンプトがあれば挿絵を作る。失敗は警告に変えて続行する
    fn illustrate(&self, image_prompt: &str) -> (Option<String>, Option<String>) {
        let Some(image) = self.deps.image.as_ref() else {
            return (None, None);
        };
        if image_prompt.is_empty() {
            return (None, None);
        }
        let prompt = format!("{}{}", image_prompt, IMAGE_STYLE_SUFFIX);
        match image.generate_image(&prompt) {
            Ok(url) => (Some(url), None),
            Err(e) => {
                let _ = self.deps.log.log(
                    &LogRecord::new(LogLevel::Warn, "image generation failed")
                        .layer("usecase")
                        .kind("generation")
                        .field("error", e.to_string()),
                );
                (None, Some(e.to_string()))
            }
        }
    }
}
