//! プロセス内メモリに行を持つ RecordStore（--store memory・テスト用）

use std::sync::Mutex;

use crate::domain::{DiaryRow, StoredRecord};
use crate::ports::outbound::RecordStore;
use common::error::Error;

pub struct MemoryRecordStore {
    rows: Mutex<Vec<StoredRecord>>,
    connected: bool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// 既存の行を持った状態で作る
    pub fn with_rows(rows: Vec<StoredRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            connected: true,
        }
    }

    /// 接続できない記録先（エラー経路のテスト用）
    #[allow(dead_code)]
    pub fn disconnected() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            connected: false,
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    fn ensure_connected(&self) -> Result<(), Error> {
        if self.connected {
            Ok(())
        } else {
            Err(Error::store_unavailable("memory store is disconnected"))
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn check_connection(&self) -> Result<(), Error> {
        self.ensure_connected()
    }

    fn append_row(&self, row: &DiaryRow) -> Result<(), Error> {
        self.ensure_connected()?;
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| Error::system("memory store lock poisoned"))?;
        rows.push(row.to_record());
        Ok(())
    }

    fn read_all_rows(&self) -> Result<Vec<StoredRecord>, Error> {
        self.ensure_connected()?;
        let rows = self
            .rows
            .lock()
            .map_err(|_| Error::system("memory store lock poisoned"))?;
        Ok(rows.clone())
    }
}
