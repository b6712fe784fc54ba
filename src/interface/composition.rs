//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::diag::DiagUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::read::ReadUseCase;
use crate::infrastructure::adapters::{
    CrosstermTerminal, HttpGatewayFactory, JsonConfigRepository, StdoutConsole,
    TerminalTextRenderer,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: HttpGatewayFactory,
    terminal: CrosstermTerminal,
    renderer: TerminalTextRenderer,
    console: StdoutConsole,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: HttpGatewayFactory,
            terminal: CrosstermTerminal,
            renderer: TerminalTextRenderer,
            console: StdoutConsole,
        }
    }
}

impl AppComposition {
    /// 읽기 명령 유스케이스를 생성한다.
    pub fn read_usecase(&self) -> ReadUseCase<'_> {
        ReadUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            terminal: &self.terminal,
            renderer: &self.renderer,
            console: &self.console,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
            console: &self.console,
        }
    }

    /// 진단 정보 유스케이스를 생성한다.
    pub fn diag_usecase(&self) -> DiagUseCase<'_> {
        DiagUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            terminal: &self.terminal,
            renderer: &self.renderer,
            console: &self.console,
        }
    }
}
