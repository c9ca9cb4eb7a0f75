//! enikki コマンドの enum（Command Pattern）

/// 記録先の種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// Google スプレッドシート
    #[default]
    Sheets,
    /// プロセス内メモリ（試し書き・テスト用、終了時に消える）
    Memory,
}

impl StoreKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sheets" => Some(Self::Sheets),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sheets => "sheets",
            Self::Memory => "memory",
        }
    }
}

/// enikki の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnikkiCommand {
    /// ヘルプ表示
    Help,
    /// プロファイル一覧
    ListProfiles,
    /// 日記を書く（None のときは標準入力から読む）
    Write { note: Option<String> },
    /// 過去の日記を新しい順に表示
    History { limit: Option<usize> },
    /// 今日すでに書いたメモを表示
    Today,
    /// 対話モード
    Shell,
}

impl EnikkiCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListProfiles => "list-profiles",
            Self::Write { .. } => "write",
            Self::History { .. } => "history",
            Self::Today => "today",
            Self::Shell => "shell",
        }
    }

    /// ログインが必要か
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Help | Self::ListProfiles)
    }
}
