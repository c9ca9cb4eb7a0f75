//! 過去の日記一覧（新しい順）

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{build_feed, HistoryEntry};
use crate::ports::outbound::RecordStore;

pub struct HistoryUseCase {
    store: Arc<dyn RecordStore>,
    log: Arc<dyn Log>,
}

impl HistoryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }

    /// 全行を読み、表示できる行だけを新しい順に返す
    pub fn feed(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, Error> {
        let rows = self.store.read_all_rows()?;
        let entries = build_feed(&rows, limit);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "history loaded")
                .layer("usecase")
                .kind("store")
                .field("rows", rows.len())
                .field("shown", entries.len()),
        );
        Ok(entries)
    }
}
