//! API 응답(JSON)에서 역직렬화되는 엔티티/값 객체.
//!
//! 모든 엔티티는 명령 1회 실행 동안만 살아있으며, 알 수 없는 필드는 무시한다.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    /// HTML 본문
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub fields: Vec<AccountField>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountField {
    pub name: String,
    /// HTML 본문
    pub value: String,
    pub verified_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: Vec<InstanceRule>,
    pub contact_account: Option<Account>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstanceRule {
    #[serde(default)]
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub account: Account,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub visibility: String,
    pub in_reply_to_id: Option<String>,
    pub reblog: Option<Box<Status>>,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub media_attachments: Vec<MediaAttachment>,
    pub poll: Option<Poll>,
    pub url: Option<String>,
}

impl Status {
    /// 부스트라면 원본 글을, 아니면 자기 자신을 반환한다.
    pub fn original(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
    #[serde(default)]
    pub id: String,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub votes_count: u64,
    pub voted: Option<bool>,
    pub own_votes: Option<Vec<usize>>,
    #[serde(default)]
    pub options: Vec<PollOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollOption {
    pub title: String,
    pub votes_count: Option<u64>,
}

/// v2 검색 결과.
/// 계정은 `whois`에서 원본 JSON을 그대로 다시 출력해야 하므로 `Value`로 보관한다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub accounts: Vec<Value>,
    #[serde(default)]
    pub hashtags: Vec<Tag>,
    #[serde(default)]
    pub statuses: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// 스레드 조회 결과(조상/후손 글 목록).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusContext {
    #[serde(default)]
    pub ancestors: Vec<Status>,
    #[serde(default)]
    pub descendants: Vec<Status>,
}
