//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に合わせる。

/// エラー型
///
/// 種別ごとに終了コードを持ち、`main` は `exit_code()` をそのまま返す。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正・入力不足（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// JSON の解析・生成失敗（EX_DATAERR）
    #[error("JSON error: {0}")]
    Json(String),
    /// 認証失敗（EX_NOPERM）
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 環境変数・設定の不足（EX_CONFIG）
    #[error("Configuration error: {0}")]
    Env(String),
    /// 記録先（スプレッドシート）に接続できない（EX_UNAVAILABLE）
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    /// 文章・画像生成の失敗（EX_UNAVAILABLE）
    #[error("Generation failed: {0}")]
    Generation(String),
    /// HTTP 通信エラー（EX_IOERR）
    #[error("HTTP error: {0}")]
    Http(String),
    /// ファイル I/O エラー（EX_IOERR）
    #[error("I/O error: {0}")]
    Io(String),
    /// 想定外の内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::StoreUnavailable(_) | Self::Generation(_) => 69,
            Self::System(_) => 70,
            Self::Http(_) | Self::Io(_) => 74,
            Self::Unauthorized(_) => 77,
            Self::Env(_) => 78,
        }
    }

    /// 使い方の誤りか（main で Usage を併せて表示する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
