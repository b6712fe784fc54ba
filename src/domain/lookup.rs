//! 계정 이름 정규화/매칭 정책.

use serde_json::Value;

/// 검색 질의로 쓸 계정 이름을 비교용으로 정규화한다.
///
/// 로컬 인스턴스 계정의 `acct`에는 도메인이 붙지 않으므로,
/// `user@<로컬 도메인>` 형태는 `user`로 줄인다.
pub fn normalize_account_name(name: &str, local_domain: Option<&str>) -> String {
    let normalized = name.trim_start_matches('@').to_lowercase();

    if let Some((username, domain)) = normalized.split_once('@')
        && let Some(local) = local_domain
        && domain == local.to_lowercase()
    {
        return username.to_string();
    }

    normalized
}

/// 검색 결과 계정 목록에서 정규화된 이름과 `acct`가 일치하는 첫 항목을 찾는다.
pub fn find_matching_account<'a>(accounts: &'a [Value], normalized: &str) -> Option<&'a Value> {
    accounts.iter().find(|account| {
        account
            .get("acct")
            .and_then(Value::as_str)
            .is_some_and(|acct| acct.to_lowercase() == normalized)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_at_and_lowercases() {
        assert_eq!(normalize_account_name("@Alice", None), "alice");
        assert_eq!(
            normalize_account_name("@Bob@Other.Social", Some("example.social")),
            "bob@other.social"
        );
    }

    #[test]
    fn local_domain_is_dropped() {
        assert_eq!(
            normalize_account_name("alice@Example.Social", Some("example.social")),
            "alice"
        );
    }

    #[test]
    fn matches_acct_case_insensitively() {
        let accounts = vec![
            json!({"id": "1", "acct": "alicia"}),
            json!({"id": "2", "acct": "Alice"}),
            json!({"id": "3", "acct": "alice@remote.example"}),
        ];

        let found = find_matching_account(&accounts, "alice").unwrap();
        assert_eq!(found["id"], "2");

        let remote = find_matching_account(&accounts, "alice@remote.example").unwrap();
        assert_eq!(remote["id"], "3");

        assert!(find_matching_account(&accounts, "nobody").is_none());
    }

    #[test]
    fn entries_without_acct_are_skipped() {
        let accounts = vec![json!({"id": "1"}), json!({"id": "2", "acct": "x"})];
        assert_eq!(find_matching_account(&accounts, "x").unwrap()["id"], "2");
    }
}
