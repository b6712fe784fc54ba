//! 표시 너비(unicode-width) 기준 줄바꿈.

use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// 연속 공백을 한 칸으로 접은 뒤 단어 단위로 줄바꿈한다.
/// 너비를 넘는 단어는 문자 단위로 강제 분할한다.
pub fn wc_wrap(text: &str, width: usize) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return vec![String::new()];
    }

    let options = Options::new(width.max(1))
        .break_words(true)
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&collapsed, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
