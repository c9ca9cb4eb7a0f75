//! 生成AIの応答をマーカーで分割する
//!
//! どの分割も「最初の出現」「完全一致」で行い、前後の空白を除く。
//! マーカーが欠けていても失敗せず、既定値にフォールバックする。

use crate::domain::markers::{
    ANALYSIS_MARKER, DIARY_BODY_MARKER, IMAGE_PROMPT_MARKER, NOT_AVAILABLE,
};

/// 応答を分割した結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// 画像プロンプトより前の部分（保存する「生成結果」）
    pub diary_part: String,
    /// 分析結果（無ければ "N/A"）
    pub analysis_section: String,
    /// 画像生成プロンプト（無ければ空）
    pub image_prompt: String,
}

impl ParsedReply {
    pub fn parse(reply: &str) -> Self {
        let (diary_part, image_prompt) = split_image_prompt(reply);
        Self {
            analysis_section: extract_analysis(&diary_part),
            diary_part,
            image_prompt,
        }
    }
}

/// 応答を（画像プロンプトより前, 画像プロンプト）に分ける
pub fn split_image_prompt(reply: &str) -> (String, String) {
    match reply.split_once(IMAGE_PROMPT_MARKER) {
        Some((before, after)) => (before.trim().to_string(), after.trim().to_string()),
        None => (reply.trim().to_string(), String::new()),
    }
}

/// 本文マーカーと分析マーカーの間を取り出す
///
/// 分析マーカーが無ければ本文マーカー以降すべて。本文マーカーが無ければ全体。
pub fn extract_diary_body(text: &str) -> String {
    match text.split_once(DIARY_BODY_MARKER) {
        Some((_, rest)) => match rest.split_once(ANALYSIS_MARKER) {
            Some((body, _)) => body.trim().to_string(),
            None => rest.trim().to_string(),
        },
        None => text.trim().to_string(),
    }
}

/// 分析マーカー以降を取り出す（無ければ "N/A"）
pub fn extract_analysis(text: &str) -> String {
    match text.split_once(ANALYSIS_MARKER) {
        Some((_, rest)) => rest.trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "【清書された日記】\n今日は疲れました。\n\n【分析結果】\nポジティブ度: 40/100\nコメント: お疲れ様\n\n【IMAGE_PROMPT】\nA tired person";

    #[test]
    fn test_parse_full_reply() {
        let parsed = ParsedReply::parse(FULL);
        assert_eq!(extract_diary_body(&parsed.diary_part), "今日は疲れました。");
        assert_eq!(parsed.analysis_section, "ポジティブ度: 40/100\nコメント: お疲れ様");
        assert_eq!(parsed.image_prompt, "A tired person");
        assert_eq!(
            parsed.diary_part,
            "【清書された日記】\n今日は疲れました。\n\n【分析結果】\nポジティブ度: 40/100\nコメント: お疲れ様"
        );
    }

    #[test]
    fn test_missing_analysis_marker() {
        let parsed = ParsedReply::parse("  今日はいい日だった。\n");
        assert_eq!(parsed.analysis_section, "N/A");
        assert_eq!(extract_diary_body(&parsed.diary_part), "今日はいい日だった。");
        assert_eq!(parsed.image_prompt, "");
    }

    #[test]
    fn test_body_marker_without_analysis_takes_remainder() {
        let parsed = ParsedReply::parse("前置き\n【清書された日記】\n本文だけ\n");
        assert_eq!(extract_diary_body(&parsed.diary_part), "本文だけ");
        assert_eq!(parsed.analysis_section, "N/A");
    }

    #[test]
    fn test_missing_body_marker_uses_whole_part() {
        let parsed = ParsedReply::parse("本文\n【分析結果】\nポジティブ度: 10/100");
        assert_eq!(extract_diary_body(&parsed.diary_part), "本文\n【分析結果】\nポジティブ度: 10/100");
        assert_eq!(parsed.analysis_section, "ポジティブ度: 10/100");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let reply = "【清書された日記】\nA\n【分析結果】\nB\n【分析結果】\nC\n【IMAGE_PROMPT】\nP1\n【IMAGE_PROMPT】\nP2";
        let parsed = ParsedReply::parse(reply);
        assert_eq!(extract_diary_body(&parsed.diary_part), "A");
        assert_eq!(parsed.analysis_section, "B\n【分析結果】\nC");
        assert_eq!(parsed.image_prompt, "P1\n【IMAGE_PROMPT】\nP2");
    }

    #[test]
    fn test_markers_are_exact() {
        // 括弧違い・表記揺れはマーカーとみなさない
        let parsed = ParsedReply::parse("[清書された日記]\n本文\n【分析】\nx\n【image_prompt】\ny");
        assert_eq!(parsed.analysis_section, "N/A");
        assert_eq!(parsed.image_prompt, "");
        assert!(extract_diary_body(&parsed.diary_part).starts_with("[清書された日記]"));
    }

    #[test]
    fn test_round_trip_same_split_points() {
        let body = "雨の一日。\n傘を忘れた。";
        let analysis = "📊 ポジティブ度: 30/100\n💬 コメント: 明日は晴れます";
        let serialized = format!("{}\n{}\n\n{}\n{}", DIARY_BODY_MARKER, body, ANALYSIS_MARKER, analysis);
        let parsed = ParsedReply::parse(&serialized);
        assert_eq!(parsed.analysis_section, analysis);

        // 保存された生成結果から同じ分割で復元できる
        assert_eq!(extract_diary_body(&parsed.diary_part), body);
        assert_eq!(extract_analysis(&parsed.diary_part), analysis);
    }

    #[test]
    fn test_empty_reply_never_fails() {
        let parsed = ParsedReply::parse("");
        assert_eq!(extract_diary_body(&parsed.diary_part), "");
        assert_eq!(parsed.analysis_section, "N/A");
        assert_eq!(parsed.image_prompt, "");
    }
}
