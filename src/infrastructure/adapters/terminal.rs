//! 터미널 환경 조회 포트 구현 어댑터.

use std::env;
use std::io::{self, IsTerminal};

use crate::application::ports::Terminal;

/// crossterm으로 터미널 크기를 조회하는 어댑터.
pub struct CrosstermTerminal;

impl Terminal for CrosstermTerminal {
    fn columns(&self) -> Option<usize> {
        crossterm::terminal::size()
            .ok()
            .map(|(cols, _rows)| usize::from(cols))
    }

    fn supports_color(&self) -> bool {
        io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
    }
}
