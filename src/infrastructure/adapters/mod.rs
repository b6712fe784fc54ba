//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod console;
mod gateway_factory;
mod terminal;
mod text_renderer;

pub use config_repository::JsonConfigRepository;
pub use console::StdoutConsole;
pub use gateway_factory::HttpGatewayFactory;
pub use terminal::CrosstermTerminal;
pub use text_renderer::TerminalTextRenderer;
