//! enikki 固有のドメイン型（型と不変条件）

pub mod command;
pub mod diary_row;
pub mod history;
pub mod markers;
pub mod merge;
pub mod reply;
pub mod same_day;
pub mod session;

pub use command::{EnikkiCommand, StoreKind};
pub use diary_row::{DiaryRow, StoredRecord};
pub use history::{build_feed, HistoryEntry};
pub use merge::MergePlan;
pub use reply::ParsedReply;
pub use same_day::{todays_previous_memo, MergeSource};
pub use session::Session;
