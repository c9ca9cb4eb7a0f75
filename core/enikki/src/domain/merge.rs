//! 同じ日のメモの合体と、生成AIへのシステム指示の組み立て
//!
//! I/O は持たない純粋な変換。

use crate::domain::markers::{
    ADDENDUM_MARKER, ANALYSIS_MARKER, DIARY_BODY_MARKER, IMAGE_PROMPT_MARKER,
};

/// システム指示の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionVariant {
    /// 箇条書きメモを新しく日記に清書する
    Fresh,
    /// 既存の日記に追記をまとめ、一つの日記に書き直す
    Merge,
}

impl InstructionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Merge => "merge",
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            Self::Fresh => "ユーザーの箇条書きメモを、情緒ある日記に清書してください。",
            Self::Merge => "ユーザーは今日の日記に追記をしました。過去の分と新しい分を上手にまとめて、一つの自然な日記に書き直してください。",
        }
    }
}

/// 合体済みの入力と、使うべき指示の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub combined_input: String,
    pub variant: InstructionVariant,
}

impl MergePlan {
    /// 前回メモ（空なら今日初めて）と新しい入力から合体結果を作る
    ///
    /// `new_input` が空でないことは呼び出し側で保証する。
    pub fn new(previous_memo: &str, new_input: &str) -> Self {
        if previous_memo.is_empty() {
            Self {
                combined_input: new_input.to_string(),
                variant: InstructionVariant::Fresh,
            }
        } else {
            Self {
                combined_input: format!("{}\n\n{}\n{}", previous_memo, ADDENDUM_MARKER, new_input),
                variant: InstructionVariant::Merge,
            }
        }
    }

    pub fn is_merge(&self) -> bool {
        self.variant == InstructionVariant::Merge
    }

    /// 生成AIへのシステム指示（出力形式の指定を含む）
    pub fn system_prompt(&self) -> String {
        format!(
            "あなたはプロのライター兼心理カウンセラーです。
{instruction}

以下の処理を行い、指定の形式で出力してください。
1. 【日記の清書】: 大人の情緒ある丁寧な日本語の日記にする。
2. 【感情分析】: ポジティブ度（100点満点）と一言コメント。
3. 【画像生成プロンプト】: この日記の内容を「小学生がクレヨンで描いたような絵日記」にするための、画像生成AI(DALL-E 3)への英語の指示を作成する。
   (例: A children's crayon drawing of [シーンの説明], colorful, simple style on white paper.)

出力形式は必ず以下のように厳密に従ってください：
---
{body}
(ここに清書された文章)

{analysis}
📊 ポジティブ度: (点数)/100
💬 コメント: (ここにコメント)

{image}
(ここに英語のプロンプト)
---
",
            instruction = self.variant.instruction(),
            body = DIARY_BODY_MARKER,
            analysis = ANALYSIS_MARKER,
            image = IMAGE_PROMPT_MARKER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_when_no_previous_memo() {
        let plan = MergePlan::new("", "疲れた");
        assert_eq!(plan.combined_input, "疲れた");
        assert_eq!(plan.variant, InstructionVariant::Fresh);
        assert_eq!(plan.variant.as_str(), "fresh");
        assert!(!plan.is_merge());
    }

    #[test]
    fn test_merge_appends_addendum() {
        let plan = MergePlan::new("朝は雨", "午後は晴れた");
        assert_eq!(plan.combined_input, "朝は雨\n\n【追記】\n午後は晴れた");
        assert_eq!(plan.variant, InstructionVariant::Merge);
        assert_eq!(plan.variant.as_str(), "merge");
    }

    #[test]
    fn test_merge_accumulates_over_repeated_submissions() {
        let first = MergePlan::new("", "A");
        let second = MergePlan::new(&first.combined_input, "B");
        let third = MergePlan::new(&second.combined_input, "C");
        assert_eq!(third.combined_input, "A\n\n【追記】\nB\n\n【追記】\nC");
    }

    #[test]
    fn test_system_prompt_contains_all_markers() {
        let prompt = MergePlan::new("", "x").system_prompt();
        assert!(prompt.contains(DIARY_BODY_MARKER));
        assert!(prompt.contains(ANALYSIS_MARKER));
        assert!(prompt.contains(IMAGE_PROMPT_MARKER));
        assert!(prompt.contains("情緒ある日記に清書"));
    }

    #[test]
    fn test_system_prompt_differs_by_variant() {
        let fresh = MergePlan::new("", "x").system_prompt();
        let merge = MergePlan::new("y", "x").system_prompt();
        assert_ne!(fresh, merge);
        assert!(merge.contains("追記をしました"));
    }
}
