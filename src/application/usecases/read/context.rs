//! 읽기 명령 공통 실행 컨텍스트(설정/출력 형식/게이트웨이) 준비 단계.

use anyhow::{Context, Result};

use crate::application::config::{ApiSession, Config};
use crate::application::ports::ApiGateway;
use crate::application::usecases::read::ReadUseCase;
use crate::application::usecases::resolve_display;
use crate::domain::options::{DisplayOptions, GlobalOptions};

pub(super) struct ReadContext {
    pub config: Config,
    pub options: GlobalOptions,
    pub display: DisplayOptions,
}

impl ReadContext {
    /// base URL을 주지 않으면 설정된 인스턴스로 세션을 만든다.
    pub fn session(&self, base_url: Option<String>) -> Result<ApiSession> {
        self.config.session(base_url, &self.options)
    }
}

pub(super) fn load_read_context(
    use_case: &ReadUseCase<'_>,
    options: &GlobalOptions,
) -> Result<ReadContext> {
    let config = use_case
        .config_repo
        .load()
        .context("failed to load fedicli config")?;
    let display = resolve_display(&config, options, use_case.terminal)?;

    Ok(ReadContext {
        config,
        options: options.clone(),
        display,
    })
}

pub(super) fn connect(
    use_case: &ReadUseCase<'_>,
    session: &ApiSession,
) -> Result<Box<dyn ApiGateway>> {
    tracing::debug!(base_url = %session.base_url, authenticated = session.access_token.is_some(), "connecting");
    use_case.gateway_factory.build(session)
}
