//! 글/소개 HTML을 터미널 출력용 평문으로 변환한다.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?p[^>]*>").expect("valid paragraph regex"));
static BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br */?>").expect("valid break regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

///`<p>` 단위 문단, `<br>` 단위 줄로 나눈 평문 목록. 빈 문단은 버린다.
pub fn html_to_paragraphs(html: &str) -> Vec<Vec<String>> {
    PARAGRAPH_RE
        .split(html)
        .filter(|p| !p.is_empty())
        .map(|p| BREAK_RE.split(p).map(get_text).collect())
        .collect()
}

/// 태그를 제거하고 HTML5 엔티티를 디코딩한 뒤 NFKC로 정규화한다.
pub fn get_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    html_escape::decode_html_entities(&stripped).nfkc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_paragraphs_and_line_breaks() {
        let html = r#"<p>Hello <a href="https://x">@bob</a></p><p>line one<br>line two<br />three</p>"#;
        assert_eq!(
            html_to_paragraphs(html),
            vec![
                vec!["Hello @bob".to_string()],
                vec![
                    "line one".to_string(),
                    "line two".to_string(),
                    "three".to_string()
                ],
            ]
        );
    }

    #[test]
    fn plain_text_is_a_single_paragraph() {
        assert_eq!(html_to_paragraphs("just text"), vec![vec!["just text".to_string()]]);
        assert!(html_to_paragraphs("").is_empty());
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(get_text("a &amp; b &lt;c&gt; &quot;d&quot;"), "a & b <c> \"d\"");
        assert_eq!(get_text("it&apos;s &#39;ok&#39; &#x2713;"), "it's 'ok' ✓");
        assert_eq!(get_text("&unknown; stays"), "&unknown; stays");
    }

    #[test]
    fn decodes_named_entities_and_normalizes_compatibility_forms() {
        assert_eq!(get_text("caf&eacute; &mdash; ｆｕｌｌ"), "café — full");
        // U+2026 is folded to three full stops by NFKC
        assert_eq!(get_text("wait&hellip;"), "wait...");
        assert_eq!(get_text("a&nbsp;b"), "a b");
    }

    #[test]
    fn strips_nested_markup() {
        let html = r#"<span class="h-card"><a href="x" class="u-url mention">@<span>alice</span></a></span> hi"#;
        assert_eq!(get_text(html), "@alice hi");
    }
}
