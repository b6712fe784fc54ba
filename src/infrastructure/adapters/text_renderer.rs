//! 텍스트 렌더링 포트 구현 어댑터.

use crate::application::ports::TextRenderer;
use crate::application::usecases::diag::DiagReport;
use crate::domain::entities::{Account, Instance, SearchResults, Status};
use crate::domain::options::DisplayOptions;
use crate::infrastructure::render;

/// 터미널 출력용 렌더링 어댑터.
pub struct TerminalTextRenderer;

impl TextRenderer for TerminalTextRenderer {
    fn account(&self, account: &Account, display: &DisplayOptions) -> Vec<String> {
        render::account_lines(account, display)
    }

    fn instance(&self, instance: &Instance, display: &DisplayOptions) -> Vec<String> {
        render::instance_lines(instance, display)
    }

    fn status(&self, status: &Status, display: &DisplayOptions) -> Vec<String> {
        render::status_lines(status, display)
    }

    fn timeline(&self, statuses: &[Status], display: &DisplayOptions) -> Vec<String> {
        render::timeline_lines(statuses, display)
    }

    fn search_results(&self, results: &SearchResults, display: &DisplayOptions) -> Vec<String> {
        render::search_lines(results, display)
    }

    fn diag(&self, report: &DiagReport, display: &DisplayOptions) -> Vec<String> {
        render::diag_lines(report, display)
    }
}
