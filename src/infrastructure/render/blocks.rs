//! 계정/인스턴스/글/투표/검색 결과의 터미널 출력 줄 생성.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

use super::html::{get_text, html_to_paragraphs};
use super::style::Palette;
use super::wrap::wc_wrap;
use crate::domain::entities::{Account, Instance, Poll, SearchResults, Status, Tag};
use crate::domain::options::DisplayOptions;

static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid newline regex"));

/// HTML 본문을 문단 사이 빈 줄을 둔 줄 목록으로 변환한다.
pub fn html_lines(html: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for (idx, paragraph) in html_to_paragraphs(html).iter().enumerate() {
        if idx > 0 {
            out.push(String::new());
        }
        for line in paragraph {
            out.extend(wc_wrap(line, width));
        }
    }
    out
}

pub fn account_lines(account: &Account, display: &DisplayOptions) -> Vec<String> {
    let p = Palette::new(display.color);
    let width = display.width;
    let mut out = Vec::new();

    out.push(format!(
        "{} {}",
        p.green(format!("@{}", account.acct)),
        account.display_name
    ));

    if !account.note.is_empty() {
        out.push(String::new());
        out.extend(html_lines(&account.note, width));
    }

    out.push(String::new());
    out.push(format!("ID: {}", p.green(&account.id)));
    out.push(format!(
        "Since: {}",
        p.green(account.created_at.format("%Y-%m-%d"))
    ));
    out.push(String::new());
    out.push(format!("Followers: {}", p.yellow(account.followers_count)));
    out.push(format!("Following: {}", p.yellow(account.following_count)));
    out.push(format!("Statuses: {}", p.yellow(account.statuses_count)));

    for field in &account.fields {
        out.push(String::new());
        out.push(format!("{}:", p.yellow(title_case(&field.name))));
        out.extend(html_lines(&field.value, width));
        if field.verified_at.is_some() {
            out.push(p.green("✓ Verified"));
        }
    }

    out.push(String::new());
    out.push(account.url.clone());
    out
}

pub fn instance_lines(instance: &Instance, display: &DisplayOptions) -> Vec<String> {
    let p = Palette::new(display.color);
    let width = display.width;
    let mut out = vec![
        p.green(&instance.title),
        p.blue(&instance.uri),
        format!("running Mastodon {}", instance.version),
        String::new(),
    ];

    let description = instance.description.trim();
    if !description.is_empty() {
        for paragraph in NEWLINES_RE.split(description) {
            out.extend(wc_wrap(&get_text(paragraph), width));
            out.push(String::new());
        }
    }

    if !instance.rules.is_empty() {
        out.push("Rules:".to_string());
        for (idx, rule) in instance.rules.iter().enumerate() {
            let ordinal = format!("{}.", idx + 1);
            let indent = " ".repeat(ordinal.len());
            let lines = wc_wrap(&rule.text, width.saturating_sub(ordinal.len()));
            for (line_idx, line) in lines.iter().enumerate() {
                let prefix = if line_idx == 0 { &ordinal } else { &indent };
                out.push(format!("{prefix} {line}"));
            }
        }
        out.push(String::new());
    }

    if let Some(contact) = &instance.contact_account {
        out.push(format!(
            "Contact: {} @{}",
            contact.display_name, contact.acct
        ));
    }

    out
}

/// 글 한 건을 헤더/본문/첨부/투표/푸터 순으로 출력한다.
/// 부스트는 원본 글의 작성자/본문을, 바깥 글의 ID/답글 대상/부스트한 계정을 보여준다.
pub fn status_lines(status: &Status, display: &DisplayOptions) -> Vec<String> {
    let p = Palette::new(display.color);
    let width = display.width;
    let reblogged_by = status.reblog.as_ref().map(|_| &status.account);
    let original = status.original();

    let time = original.created_at.format("%Y-%m-%d %H:%M UTC").to_string();
    let username = format!("@{}", original.account.acct);
    let mut spacing = width as isize - username.width() as isize - time.width() as isize - 2;

    let display_name = &original.account.display_name;
    let author = if display_name.is_empty() {
        p.blue(&username)
    } else {
        spacing -= display_name.width() as isize + 1;
        format!("{} {}", p.green(display_name), p.blue(&username))
    };

    let spaces = " ".repeat(spacing.max(0) as usize);
    let mut out = vec![
        format!("{author} {spaces} {}", p.yellow(&time)),
        String::new(),
    ];
    out.extend(html_lines(&original.content, width));

    if !original.media_attachments.is_empty() {
        out.push(String::new());
        out.push("Media:".to_string());
        for url in original
            .media_attachments
            .iter()
            .filter_map(|a| a.url.as_deref())
        {
            out.extend(wc_wrap(url, width));
        }
    }

    if let Some(poll) = &original.poll {
        out.extend(poll_lines(poll, &p));
    }

    out.push(String::new());
    let reply = status
        .in_reply_to_id
        .as_ref()
        .map(|id| format!("↲ In reply to {} ", p.yellow(id)))
        .unwrap_or_default();
    let boost = reblogged_by
        .map(|account| format!("↻ {} boosted ", p.blue(format!("@{}", account.acct))))
        .unwrap_or_default();
    let footer = format!(
        "ID {}  Visibility: {}  {reply} {boost}",
        p.yellow(&status.id),
        original.visibility
    );
    out.push(footer.trim_end().to_string());
    out
}

pub fn poll_lines(poll: &Poll, p: &Palette) -> Vec<String> {
    let mut out = Vec::new();

    for (idx, option) in poll.options.iter().enumerate() {
        let percent = match option.votes_count {
            Some(votes) if poll.votes_count > 0 => {
                (100.0 * votes as f64 / poll.votes_count as f64).round_ties_even() as u64
            }
            _ => 0,
        };

        let voted_for = poll.voted == Some(true)
            && poll
                .own_votes
                .as_ref()
                .is_some_and(|votes| votes.contains(&idx));

        if voted_for {
            out.push(format!("{} - {percent}% {}", option.title, p.yellow("✓")));
        } else {
            out.push(format!("{} - {percent}%", option.title));
        }
    }

    let mut footer = format!("Poll · {} votes", poll.votes_count);
    if poll.expired {
        footer.push_str(" · Closed");
    }
    if let Some(expires_at) = poll.expires_at {
        footer.push_str(&format!(" · Closes on {}", expires_at.format("%Y-%m-%d %H:%M")));
    }

    out.push(String::new());
    out.push(footer);
    out
}

pub fn search_lines(results: &SearchResults, display: &DisplayOptions) -> Vec<String> {
    let p = Palette::new(display.color);
    let mut out = Vec::new();

    if !results.accounts.is_empty() {
        out.push(String::new());
        out.push("Accounts:".to_string());
        for account in &results.accounts {
            let field = |key: &str| account.get(key).and_then(|v| v.as_str()).unwrap_or("");
            out.push(format!(
                "* {} {}",
                p.green(format!("@{}", field("acct"))),
                field("display_name")
            ));
        }
    }

    if !results.hashtags.is_empty() {
        out.push(String::new());
        out.push("Hashtags:".to_string());
        out.push(
            results
                .hashtags
                .iter()
                .map(|tag| format_tag_name(tag, &p))
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    if results.accounts.is_empty() && results.hashtags.is_empty() {
        out.push("Nothing found".to_string());
    }

    out
}

pub fn divider(width: usize) -> String {
    "─".repeat(width)
}

/// 각 글 앞뒤로 구분선을 둔 타임라인.
pub fn timeline_lines(statuses: &[Status], display: &DisplayOptions) -> Vec<String> {
    let mut out = vec![divider(display.width)];
    for status in statuses {
        out.extend(status_lines(status, display));
        out.push(divider(display.width));
    }
    out
}

fn format_tag_name(tag: &Tag, p: &Palette) -> String {
    p.green(format!("#{}", tag.name))
}

/// 단어 첫 글자만 대문자로(`str.title()`과 같은 규칙).
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
