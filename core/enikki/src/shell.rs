//! 対話モード
//!
//! 1 行が 1 件のメモ。`:` で始まる行はコマンド。エラーはその場で表示して続ける。
//! ログアウト後・期限切れ後は次の行をパスワードとして扱う。

use std::io::{BufRead, Write};

use common::error::Error;

use crate::domain::Session;
use crate::view::{io_error, render_feed, render_outcome, render_today};
use crate::wiring::App;

const PROMPT: &str = "enikki> ";

/// 対話モードの 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Note(String),
    History(Option<usize>),
    Today,
    Logout,
    Help,
    Quit,
}

impl ShellInput {
    pub fn parse(line: &str) -> Result<Option<Self>, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Some(Self::Note(line.to_string())));
        };
        let mut words = command.split_whitespace();
        let input = match words.next().unwrap_or_default() {
            "history" | "h" => {
                let limit = match words.next() {
                    Some(n) => Some(n.parse::<usize>().map_err(|_| {
                        Error::invalid_argument(format!("invalid history limit: {}", n))
                    })?),
                    None => None,
                };
                Self::History(limit)
            }
            "today" | "t" => Self::Today,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown command :{} (try :help)",
                    other
                )))
            }
        };
        Ok(Some(input))
    }
}

fn write_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "出来事を 1 行で入力すると日記にします（今日 2 回目以降は追記として合体）")?;
    writeln!(out, "  :history [N]  過去の日記を新しい順に表示")?;
    writeln!(out, "  :today        今日すでに書いたメモを表示")?;
    writeln!(out, "  :logout       ログアウト")?;
    writeln!(out, "  :quit         終了")
}

/// 入力が尽きるか :quit で終わる。終了コードを返す
pub fn run_shell<R: BufRead, W: Write>(
    app: &App,
    mut session: Session,
    input: R,
    out: &mut W,
) -> Result<i32, Error> {
    let mut locked = false;
    writeln!(out, "🎨 AI絵日記（:help でコマンド一覧）").map_err(io_error)?;
    render_today(out, &app.write.previous_memo()).map_err(io_error)?;
    write!(out, "{}", PROMPT).map_err(io_error)?;
    out.flush().map_err(io_error)?;

    for line in input.lines() {
        let line = line.map_err(io_error)?;

        if locked {
            match app.login.verify(line.trim_end()) {
                Ok(s) => {
                    session = s;
                    locked = false;
                    writeln!(out, "🔓 ログインしました").map_err(io_error)?;
                }
                Err(e) => writeln!(out, "⚠️ {}", e).map_err(io_error)?,
            }
            write!(out, "{}", if locked { "🔒 パスワード: " } else { PROMPT }).map_err(io_error)?;
            out.flush().map_err(io_error)?;
            continue;
        }

        let parsed = ShellInput::parse(&line);
        if let Ok(Some(ShellInput::Quit)) = parsed {
            break;
        }
        let result = match parsed {
            Ok(None) => Ok(()),
            Ok(Some(ShellInput::Help)) => write_help(out).map_err(io_error),
            Ok(Some(ShellInput::Logout)) => {
                app.login.logout(&mut session);
                locked = true;
                writeln!(out, "👋 ログアウトしました").map_err(io_error)
            }
            Ok(Some(cmd)) => match app.login.ensure_active(&mut session) {
                Ok(()) => dispatch(app, cmd, out),
                Err(e) => {
                    locked = true;
                    Err(e)
                }
            },
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            writeln!(out, "⚠️ {}", e).map_err(io_error)?;
        }
        write!(out, "{}", if locked { "🔒 パスワード: " } else { PROMPT }).map_err(io_error)?;
        out.flush().map_err(io_error)?;
    }
    writeln!(out).map_err(io_error)?;
    Ok(0)
}

fn dispatch(app: &App, cmd: ShellInput, out: &mut dyn Write) -> Result<(), Error> {
    match cmd {
        ShellInput::Note(note) => {
            let outcome = app.write.write(&note)?;
            render_outcome(out, &outcome).map_err(io_error)
        }
        ShellInput::History(limit) => {
            let entries = app.history.feed(limit)?;
            render_feed(out, &entries).map_err(io_error)
        }
        ShellInput::Today => render_today(out, &app.write.previous_memo()).map_err(io_error),
        ShellInput::Help | ShellInput::Logout | ShellInput::Quit => Ok(()),
    }
}
