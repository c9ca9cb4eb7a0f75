//! ユースケース（ports 経由でのみ I/O を行う）

pub mod history;
pub mod login;
pub mod write_diary;

pub use history::HistoryUseCase;
pub use login::LoginUseCase;
pub use write_diary::{WriteDiaryDeps, WriteDiaryUseCase, WriteOutcome};
