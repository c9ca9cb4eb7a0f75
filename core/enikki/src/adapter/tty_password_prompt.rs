//! 端末からパスワードを読む PasswordPrompt 実装
//!
//! 標準入力は日記の本文に空けておき、制御端末から読む。入力は画面に表示しない。

use crate::ports::outbound::PasswordPrompt;
use common::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

pub struct TtyPasswordPrompt {
    /// None なら制御端末。Some は端末の代わりに読むファイル
    device: Option<PathBuf>,
}

impl TtyPasswordPrompt {
    pub fn new() -> Self {
        Self { device: None }
    }

    #[cfg(test)]
    pub fn with_device(path: impl Into<PathBuf>) -> Self {
        Self {
            device: Some(path.into()),
        }
    }

    fn read_line(&self, prompt: &str) -> io::Result<String> {
        let Some(path) = &self.device else {
            return rpassword::prompt_password(prompt);
        };
        eprint!("{}", prompt);
        let _ = io::stderr().flush();
        let file = File::open(path)?;
        rpassword::read_password_from_bufread(&mut BufReader::new(file))
    }
}

impl Default for TtyPasswordPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPrompt for TtyPasswordPrompt {
    fn read_password(&self, prompt: &str) -> Result<String, Error> {
        self.read_line(prompt)
            .map_err(|e| Error::io_msg(format!("Failed to read password from terminal: {}", e)))
    }
}
