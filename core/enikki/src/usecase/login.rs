//! ログイン（パスワードゲート）
//!
//! 設定された合言葉と入力が一致したら Session を返す。合言葉は環境変数からのみ読む。

use std::sync::Arc;

use chrono::Duration;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, Log, LogLevel, LogRecord};

use crate::domain::diary_row::TIMESTAMP_FORMAT;
use crate::domain::Session;
use crate::ports::outbound::PasswordPrompt;

/// 合言葉を読む環境変数
pub const PASSWORD_ENV: &str = "ENIKKI_APP_PASSWORD";

pub const PASSWORD_PROMPT: &str = "🔒 パスワード: ";

pub struct LoginUseCase {
    env: Arc<dyn EnvResolver>,
    prompt: Arc<dyn PasswordPrompt>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    idle_timeout: Duration,
}

impl LoginUseCase {
    pub fn new(
        env: Arc<dyn EnvResolver>,
        prompt: Arc<dyn PasswordPrompt>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        idle_timeout: Duration,
    ) -> Self {
        Self {
            env,
            prompt,
            clock,
            log,
            idle_timeout,
        }
    }

    /// プロンプトで入力を受けて照合する
    pub fn login(&self) -> Result<Session, Error> {
        // 合言葉が未設定なら入力を求めずに失敗させる
        self.expected_password()?;
        let input = self.prompt.read_password(PASSWORD_PROMPT)?;
        self.verify(&input)
    }

    /// 入力済みの文字列を照合する（shell での再ログイン用）
    pub fn verify(&self, input: &str) -> Result<Session, Error> {
        let expected = self.expected_password()?;
        if input != expected {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "login rejected")
                    .layer("usecase")
                    .kind("session"),
            );
            return Err(Error::unauthorized("wrong password"));
        }
        let session = Session::start(self.clock.now_local(), self.idle_timeout);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "login accepted")
                .layer("usecase")
                .kind("session")
                .field("started_at", session.started_at().format(TIMESTAMP_FORMAT).to_string())
                .field("idle_minutes", self.idle_timeout.num_minutes()),
        );
        Ok(session)
    }

    /// セッションが有効なら最終操作時刻を更新し、無効なら Unauthorized
    pub fn ensure_active(&self, session: &mut Session) -> Result<(), Error> {
        let now = self.clock.now_local();
        if !session.is_active(now) {
            return Err(Error::unauthorized("session is not active; please log in again"));
        }
        session.touch(now);
        Ok(())
    }

    pub fn logout(&self, session: &mut Session) {
        session.logout();
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "logged out")
                .layer("usecase")
                .kind("session")
                .field("started_at", session.started_at().format(TIMESTAMP_FORMAT).to_string()),
        );
    }

    fn expected_password(&self) -> Result<String, Error> {
        self.env
            .var(PASSWORD_ENV)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::env(format!("app password is not configured ({} is not set)", PASSWORD_ENV))
            })
    }
}
