//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{ApiSession, Config};
use crate::application::usecases::diag::DiagReport;
use crate::domain::entities::{Account, Instance, SearchResults, Status};
use crate::domain::options::DisplayOptions;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
    /// (탐색 경로, 실제 로딩된 경로)
    fn config_paths(&self) -> Result<(Vec<PathBuf>, Vec<PathBuf>)>;
    /// 토큰/클라이언트 비밀값 줄을 가린 설정 파일 내용.
    fn redacted_contents(&self, path: &Path) -> Result<String>;
}

/// 인스턴스 REST API 호출 포트.
/// 모든 메서드는 성공 응답 본문(JSON 텍스트)을 그대로 반환한다.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn verify_credentials(&self) -> Result<String>;
    async fn search(&self, query: &str, resolve: bool, kind: Option<&str>) -> Result<String>;
    async fn fetch_status(&self, status_id: &str) -> Result<String>;
    async fn status_context(&self, status_id: &str) -> Result<String>;
    async fn instance(&self) -> Result<String>;
}

/// 세션 설정에 맞는 API 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, session: &ApiSession) -> Result<Box<dyn ApiGateway>>;
}

/// 터미널 환경 조회 포트.
pub trait Terminal: Send + Sync {
    /// 터미널 열 수(알 수 없으면 None).
    fn columns(&self) -> Option<usize>;
    /// 색상 출력 가능 여부(TTY, NO_COLOR 고려).
    fn supports_color(&self) -> bool;
}

/// 엔티티를 터미널 출력 줄로 변환하는 렌더링 포트.
pub trait TextRenderer: Send + Sync {
    fn account(&self, account: &Account, display: &DisplayOptions) -> Vec<String>;
    fn instance(&self, instance: &Instance, display: &DisplayOptions) -> Vec<String>;
    fn status(&self, status: &Status, display: &DisplayOptions) -> Vec<String>;
    fn timeline(&self, statuses: &[Status], display: &DisplayOptions) -> Vec<String>;
    fn search_results(&self, results: &SearchResults, display: &DisplayOptions) -> Vec<String>;
    fn diag(&self, report: &DiagReport, display: &DisplayOptions) -> Vec<String>;
}

/// 표준 출력 추상화 포트.
pub trait Console: Send + Sync {
    fn line(&self, text: &str);
}
