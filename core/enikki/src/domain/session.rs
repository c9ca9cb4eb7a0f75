//! ログインセッション
//!
//! パスワード認証に成功したときに作られ、ログアウトか一定時間の無操作で無効になる。

use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    LoggedOut,
}

/// 認証済みセッション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    started_at: NaiveDateTime,
    last_active_at: NaiveDateTime,
    idle_timeout: Duration,
    state: SessionState,
}

impl Session {
    /// 認証成功時に開始する
    pub fn start(now: NaiveDateTime, idle_timeout: Duration) -> Self {
        Self {
            started_at: now,
            last_active_at: now,
            idle_timeout,
            state: SessionState::Active,
        }
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// ログアウトしておらず、最後の操作から idle_timeout 以内なら有効
    pub fn is_active(&self, now: NaiveDateTime) -> bool {
        self.state == SessionState::Active && now - self.last_active_at <= self.idle_timeout
    }

    /// 操作があったことを記録する（有効なときのみ）
    pub fn touch(&mut self, now: NaiveDateTime) {
        if self.is_active(now) {
            self.last_active_at = now;
        }
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
    }
}
