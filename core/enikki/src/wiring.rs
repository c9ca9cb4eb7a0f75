//! 配線: 設定を読み、標準アダプタで UseCase を組み立てる

use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as IdleDuration;
use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StderrTeeLog};
use common::error::Error;
use common::http::HttpTransport;
use common::llm::ProfilesConfig;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, LogRecord};

use crate::adapter::{
    load_app_config, MemoryRecordStore, ProviderImageGeneration, ProviderTextGeneration,
    SheetsRecordStore, TtyPasswordPrompt,
};
use crate::cli::Config;
use crate::domain::StoreKind;
use crate::ports::outbound::{ImageGeneration, PasswordPrompt, RecordStore};
use crate::usecase::{HistoryUseCase, LoginUseCase, WriteDiaryDeps, WriteDiaryUseCase};

/// 外界との境界（テストでは差し替える）
pub struct Ports {
    pub env: Arc<dyn EnvResolver>,
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub prompt: Arc<dyn PasswordPrompt>,
}

impl Ports {
    pub fn standard() -> Self {
        Self {
            env: Arc::new(StdEnvResolver),
            fs: Arc::new(StdFileSystem),
            clock: Arc::new(StdClock),
            prompt: Arc::new(TtyPasswordPrompt::new()),
        }
    }
}

pub struct App {
    pub login: LoginUseCase,
    pub write: WriteDiaryUseCase,
    pub history: HistoryUseCase,
    pub profiles: ProfilesConfig,
    pub logger: Arc<dyn Log>,
}

/// 標準アダプタで App を組み立てる
pub fn wire_enikki(config: &Config) -> Result<App, Error> {
    wire_with(Ports::standard(), config)
}

pub fn wire_with(ports: Ports, config: &Config) -> Result<App, Error> {
    let home = ports.env.resolve_home_dir()?;
    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&ports.fs), home.log_path()));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(StderrTeeLog::new(file_log))
    } else {
        file_log
    };

    let app_config = load_app_config(ports.fs.as_ref(), &home)?;
    let timeout = Duration::from_secs(app_config.timeout_secs);

    let store: Arc<dyn RecordStore> = match config.store {
        StoreKind::Sheets => Arc::new(SheetsRecordStore::new(
            app_config.sheets.clone(),
            ports.env.var(&app_config.sheets.token_env),
            HttpTransport::new(timeout)?,
        )),
        StoreKind::Memory => Arc::new(MemoryRecordStore::new()),
    };

    let profile = config.profile.as_ref().map(|p| p.to_string());
    let text = Arc::new(ProviderTextGeneration::new(
        app_config.profiles.clone(),
        profile.clone(),
        config.model.as_ref().map(|m| m.to_string()),
        Arc::clone(&ports.env),
        timeout,
    ));
    let image: Option<Arc<dyn ImageGeneration>> = if app_config.image.enabled && !config.no_image {
        Some(Arc::new(ProviderImageGeneration::new(
            app_config.profiles.clone(),
            profile,
            app_config.image.model.clone(),
            Arc::clone(&ports.env),
            timeout,
        )))
    } else {
        None
    };

    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "app wired")
            .layer("wiring")
            .kind("lifecycle")
            .field("store", config.store.as_str())
            .field("image", image.is_some())
            .field("merge_source", format!("{:?}", app_config.merge_source).to_lowercase()),
    );

    let login = LoginUseCase::new(
        Arc::clone(&ports.env),
        ports.prompt,
        Arc::clone(&ports.clock),
        Arc::clone(&logger),
        IdleDuration::minutes(app_config.session_idle_minutes),
    );
    let write = WriteDiaryUseCase::new(
        WriteDiaryDeps {
            store: Arc::clone(&store),
            text,
            image,
            clock: ports.clock,
            log: Arc::clone(&logger),
        },
        app_config.merge_source,
    );
    let history = HistoryUseCase::new(store, Arc::clone(&logger));

    Ok(App {
        login,
        write,
        history,
        profiles: app_config.profiles,
        logger,
    })
}
