//! 유스케이스 테스트용 가짜 포트 구현.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::application::config::{AccountConfig, ApiSession, Config};
use crate::application::ports::{
    ApiGateway, ConfigRepository, Console, GatewayFactory, Terminal,
};
use crate::infrastructure::adapters::TerminalTextRenderer;
use crate::infrastructure::config::redact_secrets;

pub(crate) struct FakeConfigRepository {
    pub config: Config,
    pub raw: String,
}

impl FakeConfigRepository {
    pub fn empty() -> Self {
        Self {
            config: Config::default(),
            raw: "{}\n".to_string(),
        }
    }

    pub fn with_instance(instance: &str, token: Option<&str>) -> Self {
        let config = Config {
            account: AccountConfig {
                instance: Some(instance.to_string()),
                access_token: token.map(ToString::to_string),
                access_token_env: None,
            },
            ..Config::default()
        };
        let raw = format!(
            "{{\n  \"account\": {{\n    \"instance\": \"{instance}\",\n    \"access_token\": \"{}\"\n  }}\n}}\n",
            token.unwrap_or_default()
        );
        Self { config, raw }
    }
}

impl ConfigRepository for FakeConfigRepository {
    fn load(&self) -> Result<Config> {
        Ok(self.config.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config.defaults)?)
    }

    fn config_paths(&self) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let loaded = PathBuf::from("test/config.json");
        Ok((vec![loaded.clone()], vec![loaded]))
    }

    fn redacted_contents(&self, _path: &Path) -> Result<String> {
        Ok(redact_secrets(&self.raw))
    }
}

/// 메서드별 고정 응답을 돌려주는 게이트웨이. 응답이 없으면 404처럼 실패한다.
#[derive(Clone, Default)]
pub(crate) struct FakeGateway {
    pub credentials: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub context: Option<String>,
    pub instance: Option<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGateway {
    fn respond(&self, call: String, response: &Option<String>) -> Result<String> {
        self.calls.lock().unwrap().push(call);
        response.clone().ok_or_else(|| anyhow!("Record not found"))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiGateway for FakeGateway {
    async fn verify_credentials(&self) -> Result<String> {
        self.respond("verify_credentials".to_string(), &self.credentials)
    }

    async fn search(&self, query: &str, resolve: bool, kind: Option<&str>) -> Result<String> {
        let call = format!("search q={query} resolve={resolve} type={}", kind.unwrap_or("-"));
        self.respond(call, &self.search)
    }

    async fn fetch_status(&self, status_id: &str) -> Result<String> {
        self.respond(format!("status {status_id}"), &self.status)
    }

    async fn status_context(&self, status_id: &str) -> Result<String> {
        self.respond(format!("context {status_id}"), &self.context)
    }

    async fn instance(&self) -> Result<String> {
        self.respond("instance".to_string(), &self.instance)
    }
}

pub(crate) struct FakeGatewayFactory {
    pub gateway: FakeGateway,
    pub sessions: Mutex<Vec<ApiSession>>,
}

impl FakeGatewayFactory {
    pub fn new(gateway: FakeGateway) -> Self {
        Self {
            gateway,
            sessions: Mutex::new(Vec::new()),
        }
    }

    pub fn sessions(&self) -> Vec<ApiSession> {
        self.sessions.lock().unwrap().clone()
    }
}

impl GatewayFactory for FakeGatewayFactory {
    fn build(&self, session: &ApiSession) -> Result<Box<dyn ApiGateway>> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(Box::new(self.gateway.clone()))
    }
}

/// 80열, 색상 미지원 터미널.
pub(crate) struct FakeTerminal;

impl Terminal for FakeTerminal {
    fn columns(&self) -> Option<usize> {
        Some(80)
    }

    fn supports_color(&self) -> bool {
        false
    }
}

/// 열 수/색상 지원 여부를 지정할 수 있는 터미널.
pub(crate) struct StubTerminal {
    pub columns: Option<usize>,
    pub color: bool,
}

impl Terminal for StubTerminal {
    fn columns(&self) -> Option<usize> {
        self.columns
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}

#[derive(Default)]
pub(crate) struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        self.lines().iter().map(|l| format!("{l}\n")).collect()
    }
}

impl Console for RecordingConsole {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

pub(crate) fn renderer() -> TerminalTextRenderer {
    TerminalTextRenderer
}
