//! 콘솔 출력 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::ports::Console;

/// 표준 출력에 한 줄씩 쓰는 어댑터.
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        let mut out = io::stdout().lock();
        // 파이프가 닫힌 경우(`| head`) 등은 조용히 무시한다.
        let _ = writeln!(out, "{text}");
    }
}
