//! ファイルシステム Outbound ポート
//!
//! enikki が触るファイルは設定（config.json の読み込み）とログ（JSONL の追記）だけ。

use crate::error::Error;
use std::path::Path;

/// 実装は `common::adapter::StdFileSystem`。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（無ければ作成）。返した Writer を drop すると閉じる
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
    /// 通常ファイルとして存在するか
    fn is_file(&self, path: &Path) -> bool;
}
