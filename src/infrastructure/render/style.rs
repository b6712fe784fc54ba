//! 터미널 색상 단축 함수.

use std::fmt::Display;

use crossterm::style::Stylize;

/// 색상 사용 여부에 따라 ANSI 스타일을 입히거나 원문을 그대로 돌려준다.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn green(&self, text: impl Display) -> String {
        let text = text.to_string();
        if self.enabled { text.green().to_string() } else { text }
    }

    pub fn blue(&self, text: impl Display) -> String {
        let text = text.to_string();
        if self.enabled { text.blue().to_string() } else { text }
    }

    pub fn yellow(&self, text: impl Display) -> String {
        let text = text.to_string();
        if self.enabled { text.yellow().to_string() } else { text }
    }
}
