//! 문제 보고용 진단 정보 출력 유스케이스.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, Console, GatewayFactory, Terminal, TextRenderer};
use crate::application::usecases::resolve_display;
use crate::domain::options::GlobalOptions;

/// 진단 출력에 필요한 값 묶음.
#[derive(Debug, Clone)]
pub struct DiagReport {
    pub now: DateTime<Utc>,
    pub version: String,
    pub platform: String,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
    pub server_uri: Option<String>,
    pub server_version: Option<String>,
    /// `--files`일 때만 채워진다. 내용이 None이면 읽기 실패.
    pub files: Option<Vec<(PathBuf, Option<String>)>>,
}

pub struct DiagUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub terminal: &'a dyn Terminal,
    pub renderer: &'a dyn TextRenderer,
    pub console: &'a dyn Console,
}

impl<'a> DiagUseCase<'a> {
    /// 설정/서버 조회 실패는 진단 출력 자체를 막지 않도록 무시한다.
    pub async fn execute(&self, include_files: bool, options: &GlobalOptions) -> anyhow::Result<()> {
        let config = match self.config_repo.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "config could not be loaded");
                Config::default()
            }
        };
        let display = resolve_display(&config, options, self.terminal)
            .or_else(|_| resolve_display(&Config::default(), options, self.terminal))?;

        let (searched_paths, loaded_paths) = self.config_repo.config_paths()?;
        let (server_uri, server_version) = self.server_info(&config, options).await;

        let files = include_files.then(|| {
            loaded_paths
                .iter()
                .map(|path| (path.clone(), self.config_repo.redacted_contents(path).ok()))
                .collect()
        });

        let report = DiagReport {
            now: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            searched_paths,
            loaded_paths,
            server_uri,
            server_version,
            files,
        };

        for line in self.renderer.diag(&report, &display) {
            self.console.line(&line);
        }
        Ok(())
    }

    async fn server_info(
        &self,
        config: &Config,
        options: &GlobalOptions,
    ) -> (Option<String>, Option<String>) {
        if config.instance_url().is_none() {
            return (None, None);
        }

        let body = match config.session(None, options) {
            Ok(session) => match self.gateway_factory.build(&session) {
                Ok(gateway) => gateway.instance().await,
                Err(err) => Err(err),
            },
            Err(err) => Err(err),
        };

        let parsed = body.and_then(|b| serde_json::from_str::<Value>(&b).map_err(Into::into));
        let value = match parsed {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %format!("{err:#}"), "server info unavailable");
                return (None, None);
            }
        };

        let field = |key: &str| value.get(key).and_then(Value::as_str).map(ToString::to_string);
        (field("uri"), field("version"))
    }
}
