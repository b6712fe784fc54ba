//! API 게이트웨이 생성 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::ApiSession;
use crate::application::ports::{ApiGateway, GatewayFactory};
use crate::infrastructure::api::MastodonClient;

/// reqwest 기반 API 클라이언트를 생성하는 어댑터.
pub struct HttpGatewayFactory;

impl GatewayFactory for HttpGatewayFactory {
    fn build(&self, session: &ApiSession) -> Result<Box<dyn ApiGateway>> {
        Ok(Box::new(MastodonClient::new(session)?))
    }
}
