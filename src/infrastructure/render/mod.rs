//! 터미널 텍스트 렌더링 모듈.
//! HTML 평문화, 표시 너비 기준 줄바꿈, 색상, 엔티티별 출력 블록을 제공한다.

mod blocks;
mod diag;
mod html;
mod style;
mod wrap;

pub use blocks::{
    account_lines, divider, html_lines, instance_lines, poll_lines, search_lines, status_lines,
    timeline_lines,
};
pub use diag::diag_lines;
pub use html::{get_text, html_to_paragraphs};
pub use style::Palette;
pub use wrap::wc_wrap;
