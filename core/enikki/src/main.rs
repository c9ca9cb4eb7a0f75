mod adapter;
mod cli;
mod domain;
mod ports;
mod shell;
mod usecase;
mod view;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, Read, Write};
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::llm::config::DEFAULT_PROFILE;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::EnikkiCommand;
use ports::inbound::UseCaseRunner;
use view::{io_error, render_feed, render_outcome, render_profiles, render_today};
use wiring::{wire_enikki, App};

/// write の本文を引数以外から読む
type NoteReader = Box<dyn Fn() -> Result<String, Error>>;

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    read_note: NoteReader,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd);

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

impl Runner {
    fn dispatch(&self, cmd: EnikkiCommand) -> Result<i32, Error> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if !cmd.requires_session() {
            return self.dispatch_without_login(cmd, &mut out);
        }
        // パスワードは端末から読むので、標準入力の本文はログイン前に読み切る
        let cmd = match cmd {
            EnikkiCommand::Write { note: None } => EnikkiCommand::Write {
                note: Some((self.read_note)()?),
            },
            other => other,
        };

        let session = self.app.login.login()?;
        match cmd {
            EnikkiCommand::Write { note } => {
                let outcome = self.app.write.write(note.as_deref().unwrap_or_default())?;
                render_outcome(&mut out, &outcome).map_err(io_error)?;
                Ok(0)
            }
            EnikkiCommand::History { limit } => {
                let entries = self.app.history.feed(limit)?;
                render_feed(&mut out, &entries).map_err(io_error)?;
                Ok(0)
            }
            EnikkiCommand::Today => {
                render_today(&mut out, &self.app.write.previous_memo()).map_err(io_error)?;
                Ok(0)
            }
            EnikkiCommand::Shell => {
                let stdin = io::stdin();
                shell::run_shell(&self.app, session, stdin.lock(), &mut out)
            }
            EnikkiCommand::Help | EnikkiCommand::ListProfiles => {
                self.dispatch_without_login(cmd, &mut out)
            }
        }
    }

    fn dispatch_without_login(
        &self,
        cmd: EnikkiCommand,
        out: &mut dyn Write,
    ) -> Result<i32, Error> {
        match cmd {
            EnikkiCommand::ListProfiles => {
                let profiles = &self.app.profiles;
                let default = profiles.default_provider.as_deref().unwrap_or(DEFAULT_PROFILE);
                render_profiles(out, &profiles.profile_names(), default).map_err(io_error)?;
            }
            _ => print_help(),
        }
        Ok(0)
    }
}

/// 本文を最後まで読み、末尾の改行を落とす
fn read_note_from(mut input: impl Read) -> Result<String, Error> {
    let mut note = String::new();
    input
        .read_to_string(&mut note)
        .map_err(|e| Error::io_msg(e.to_string()))?;
    Ok(note.trim_end().to_string())
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("enikki: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_enikki(&config)?;
    let runner = Runner {
        app,
        read_note: Box::new(|| read_note_from(io::stdin().lock())),
    };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: enikki [options] <write|history|today|shell> [args...]");
}

fn print_help() {
    println!("Usage: enikki [options] <command> [args...]");
    println!("Commands:");
    println!("  write [note...]               Write today's diary. Reads stdin when no words are given.");
    println!("                                A second note on the same day is merged into the first and rewritten.");
    println!("  history [-n, --limit <N>]     Show past diaries, newest first");
    println!("  today                         Show the notes already written today");
    println!("  shell                         Interactive mode (:history, :today, :logout, :quit)");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -L, --list-profiles           List provider profiles (from config.json + built-ins)");
    println!("  -p, --profile <profile>       Specify LLM profile (openai, openai_compat, echo, etc.)");
    println!("  -m, --model <model>           Specify text model name. Default: profile model, or gpt-4o-mini");
    println!("  --store <sheets|memory>       Where diaries are kept. Default: sheets");
    println!("  --no-image                    Do not generate an illustration");
    println!("  -v, --verbose                 Echo structured logs to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  ENIKKI_APP_PASSWORD   Password required before any diary operation");
    println!("  OPENAI_API_KEY        API key for the openai profile (text and images)");
    println!("  ENIKKI_SHEETS_TOKEN   OAuth access token for the Google Sheets API");
    println!("  ENIKKI_HOME           Home directory (config.json, state/enikki.log.jsonl).");
    println!("                        If unset, $XDG_CONFIG_HOME/enikki (e.g. ~/.config/enikki) is used.");
    println!();
    println!("Examples:");
    println!("  enikki write 今日は公園でピクニックをした");
    println!("  echo '雨で一日家にいた' | enikki write");
    println!("  enikki --store memory -p echo shell");
    println!("  enikki history --limit 5");
}
