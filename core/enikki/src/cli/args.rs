use crate::domain::{EnikkiCommand, StoreKind};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;

/// サブコマンド名
const CMD_WRITE: &str = "write";
const CMD_HISTORY: &str = "history";
const CMD_TODAY: &str = "today";
const CMD_SHELL: &str = "shell";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list-profiles: 現在有効なプロファイル一覧を表示
    pub list_profiles: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --store: 記録先（既定はスプレッドシート）
    pub store: StoreKind,
    /// --no-image: 挿絵を作らない
    pub no_image: bool,
    /// サブコマンド（未指定ならヘルプ）
    pub command: Option<EnikkiCommand>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("enikki")
        .about("Turn daily notes into an illustrated diary kept in a spreadsheet")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-profiles")
                .short('L')
                .long("list-profiles")
                .help("List currently available provider profiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo structured logs to stderr (for troubleshooting)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (openai, openai_compat, echo, etc.)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify text model name (e.g. gpt-4o-mini)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("store")
                .long("store")
                .value_name("store")
                .help("Where diaries are kept")
                .value_parser(["sheets", "memory"])
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-image")
                .long("no-image")
                .help("Do not generate an illustration")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(
            subcommand(CMD_WRITE)
                .about("Write today's diary (reads stdin when no words are given)")
                .arg(
                    clap::Arg::new("note")
                        .help("What happened today")
                        .num_args(0..)
                        .trailing_var_arg(true),
                ),
        )
        .subcommand(
            subcommand(CMD_HISTORY)
                .about("Show past diaries, newest first")
                .arg(
                    clap::Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("N")
                        .help("Show only the newest N entries")
                        .value_parser(value_parser!(usize))
                        .num_args(1),
                ),
        )
        .subcommand(subcommand(CMD_TODAY).about("Show the notes already written today"))
        .subcommand(subcommand(CMD_SHELL).about("Interactive mode"))
}

/// -h はルートの global 引数で受けるので、サブコマンド側の自動ヘルプは切る
fn subcommand(name: &'static str) -> clap::Command {
    clap::Command::new(name).disable_help_flag(true)
}

fn subcommand_to_command(matches: &clap::ArgMatches) -> Option<EnikkiCommand> {
    match matches.subcommand() {
        Some((CMD_WRITE, sub)) => {
            let words: Vec<String> = sub
                .get_many::<String>("note")
                .map(|i| i.cloned().collect())
                .unwrap_or_default();
            let note = if words.is_empty() {
                None
            } else {
                Some(words.join(" "))
            };
            Some(EnikkiCommand::Write { note })
        }
        Some((CMD_HISTORY, sub)) => Some(EnikkiCommand::History {
            limit: sub.get_one::<usize>("limit").copied(),
        }),
        Some((CMD_TODAY, _)) => Some(EnikkiCommand::Today),
        Some((CMD_SHELL, _)) => Some(EnikkiCommand::Shell),
        _ => None,
    }
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let profile = matches
        .get_one::<String>("profile")
        .map(|s| ProviderName::new(s.clone()));
    let model = matches
        .get_one::<String>("model")
        .map(|s| ModelName::new(s.clone()));
    let store = matches
        .get_one::<String>("store")
        .and_then(|s| StoreKind::from_str(s))
        .unwrap_or_default();

    Config {
        help: matches.get_flag("help"),
        list_profiles: matches.get_flag("list-profiles"),
        verbose: matches.get_flag("verbose"),
        profile,
        model,
        store,
        no_image: matches.get_flag("no-image"),
        command: subcommand_to_command(matches),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "enikki", &mut std::io::stdout());
}

/// Config を EnikkiCommand に変換する
pub fn config_to_command(config: Config) -> EnikkiCommand {
    if config.help {
        return EnikkiCommand::Help;
    }

    if config.list_profiles {
        return EnikkiCommand::ListProfiles;
    }

    config.command.unwrap_or(EnikkiCommand::Help)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        let args: Vec<String> = std::iter::once("enikki")
            .chain(args.iter().copied())
            .map(|s| s.to_string())
            .collect();
        parse_args_from(&args)
    }

    #[test]
    fn test_parse_args_no_args() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config_to_command(config), EnikkiCommand::Help);
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse(&["-h"]).unwrap().help);
        assert!(parse(&["--help"]).unwrap().help);
        // サブコマンドの後ろでも効く
        let config = parse(&["history", "-h"]).unwrap();
        assert_eq!(config_to_command(config), EnikkiCommand::Help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse(&["--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        let err = parse(&["-x"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_write_words() {
        let config = parse(&["write", "今日は", "雨だった"]).unwrap();
        assert_eq!(
            config.command,
            Some(EnikkiCommand::Write {
                note: Some("今日は 雨だった".to_string())
            })
        );
    }

    #[test]
    fn test_parse_write_without_words_reads_stdin() {
        let config = parse(&["write"]).unwrap();
        assert_eq!(config.command, Some(EnikkiCommand::Write { note: None }));
    }

    #[test]
    fn test_parse_history_limit() {
        let config = parse(&["history", "--limit", "3"]).unwrap();
        assert_eq!(config.command, Some(EnikkiCommand::History { limit: Some(3) }));
        let config = parse(&["history", "-n", "x"]);
        assert!(config.is_err());
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let config = parse(&["write", "-p", "echo", "--store", "memory", "--no-image", "-v", "メモ"]).unwrap();
        assert_eq!(config.profile.as_deref(), Some("echo"));
        assert_eq!(config.store, StoreKind::Memory);
        assert!(config.no_image);
        assert!(config.verbose);
        assert_eq!(
            config.command,
            Some(EnikkiCommand::Write {
                note: Some("メモ".to_string())
            })
        );
    }

    #[test]
    fn test_parse_model_and_store_before_subcommand() {
        let config = parse(&["-m", "gpt-4o", "--store", "sheets", "today"]).unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.store, StoreKind::Sheets);
        assert_eq!(config.command, Some(EnikkiCommand::Today));
    }

    #[test]
    fn test_parse_invalid_store() {
        assert_eq!(parse(&["--store", "csv", "today"]).unwrap_err().exit_code(), 64);
    }

    #[test]
    fn test_list_profiles_takes_precedence_over_subcommand() {
        let config = parse(&["-L", "shell"]).unwrap();
        assert_eq!(config_to_command(config), EnikkiCommand::ListProfiles);
    }
}
