//! 명령별 유스케이스 모음.

pub mod diag;
pub mod inspect_config;
pub mod read;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::Terminal;
use crate::domain::options::{DisplayOptions, GlobalOptions};

/// 설정/옵션/터미널 상태로 텍스트 출력 형식을 결정한다.
/// 너비는 터미널 열 수와 설정 최대 너비 중 작은 값이다.
pub(crate) fn resolve_display(
    config: &Config,
    options: &GlobalOptions,
    terminal: &dyn Terminal,
) -> Result<DisplayOptions> {
    let max_width = config.max_width();
    let width = terminal
        .columns()
        .filter(|cols| *cols > 0)
        .map_or(max_width, |cols| cols.min(max_width));

    let colors = config.colors(options)?;
    let color = !options.no_color && colors > 1 && terminal.supports_color();

    Ok(DisplayOptions { width, color })
}
