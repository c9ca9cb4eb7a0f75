//! 時刻 Outbound ポート
//!
//! usecase はこの trait 経由で「今日」「現在時刻」を取得する。
//! 日記の日付判定はローカル時刻で行うため、タイムゾーン無しの NaiveDateTime を返す。

use chrono::NaiveDateTime;

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在のローカル日時
    fn now_local(&self) -> NaiveDateTime;
}
