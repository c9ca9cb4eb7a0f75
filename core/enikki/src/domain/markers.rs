//! 生成結果テキストの区切りマーカー
//!
//! 書き込み時（応答の分割）と読み出し時（履歴の再分割）で同じリテラルを使うこと。
//! 既存のスプレッドシートに保存済みの行を読めるよう、文字列は変更しない。

/// 清書された日記本文の開始
pub const DIARY_BODY_MARKER: &str = "【清書された日記】";

/// 分析結果（点数とコメント）の開始
pub const ANALYSIS_MARKER: &str = "【分析結果】";

/// 画像生成プロンプトの開始（書き込み時の応答にのみ現れ、保存はしない）
pub const IMAGE_PROMPT_MARKER: &str = "【IMAGE_PROMPT】";

/// 点数行のラベル。値は次の `/` まで
pub const SCORE_LABEL: &str = "ポジティブ度";

/// 同じ日の追記を前回メモに繋ぐときの区切り
pub const ADDENDUM_MARKER: &str = "【追記】";

/// 分析結果・点数が無いときの表示
pub const NOT_AVAILABLE: &str = "N/A";
