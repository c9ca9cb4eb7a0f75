//! 日記の記録先（行指向の表）の Outbound ポート
//!
//! 追記と全件読み出しだけを持つ。行の削除・更新・並べ替えはしない。

use crate::domain::{DiaryRow, StoredRecord};
use common::error::Error;

pub trait RecordStore: Send + Sync {
    /// 接続できるかを確かめる。できなければ Error::StoreUnavailable
    fn check_connection(&self) -> Result<(), Error>;

    /// 1 行を末尾に追記する
    fn append_row(&self, row: &DiaryRow) -> Result<(), Error>;

    /// 見出し行を除く全行を保存順に返す（データ行が無ければ空）
    fn read_all_rows(&self) -> Result<Vec<StoredRecord>, Error>;
}
