//! 읽기 전용 명령(whoami/whois/instance/search/status/thread) 유스케이스.

mod account;
mod context;
mod instance;
mod search;
mod status;

use anyhow::Result;

use crate::application::ports::{
    ConfigRepository, Console, GatewayFactory, Terminal, TextRenderer,
};
use crate::domain::options::{GlobalOptions, ReadCommand};

use context::load_read_context;

/// 인자 해석 → API 호출 → JSON 원문 또는 텍스트 출력 흐름을 조율한다.
pub struct ReadUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub terminal: &'a dyn Terminal,
    pub renderer: &'a dyn TextRenderer,
    pub console: &'a dyn Console,
}

impl<'a> ReadUseCase<'a> {
    pub async fn execute(&self, command: ReadCommand, options: &GlobalOptions) -> Result<()> {
        let ctx = load_read_context(self, options)?;

        match command {
            ReadCommand::Whoami { json } => account::whoami(self, &ctx, json).await,
            ReadCommand::Whois { account, json } => {
                account::whois(self, &ctx, &account, json).await
            }
            ReadCommand::Instance { instance_url, json } => {
                instance::instance(self, &ctx, instance_url, json).await
            }
            ReadCommand::Search {
                query,
                resolve,
                json,
            } => search::search(self, &ctx, &query, resolve, json).await,
            ReadCommand::Status { status_id, json } => {
                status::status(self, &ctx, &status_id, json).await
            }
            ReadCommand::Thread { status_id, json } => {
                status::thread(self, &ctx, &status_id, json).await
            }
        }
    }

    fn emit(&self, lines: Vec<String>) {
        for line in lines {
            self.console.line(&line);
        }
    }
}
