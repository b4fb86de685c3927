//! Domain autocompletion for partially typed addresses.

/// Default list of email domains for auto-completion, checked in order.
pub const DEFAULT_DOMAINS: [&str; 8] = [
    "aol.com",
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "live.com",
    "outlook.com",
    "icloud.com",
    "hey.com",
];

/// Complete the domain fragment typed after `@`.
///
/// Returns the remaining characters needed to finish the first domain (in
/// list order) that starts with the fragment. `None` when the value is empty,
/// contains no `@`, or no domain matches. A fragment that already spells a
/// full domain yields `Some("")`.
pub fn suggest(value: &str, domains: &[impl AsRef<str>]) -> Option<String> {
    if value.is_empty() {
        return None;
    }

    let (_, fragment) = value.split_once('@')?;

    domains
        .iter()
        .map(AsRef::as_ref)
        .find(|domain| domain.starts_with(fragment))
        .map(|domain| domain[fragment.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_has_no_suggestion() {
        assert_eq!(suggest("", &DEFAULT_DOMAINS), None);
    }

    #[test]
    fn test_value_without_at_has_no_suggestion() {
        assert_eq!(suggest("test", &DEFAULT_DOMAINS), None);
    }

    #[test]
    fn test_empty_fragment_suggests_first_domain() {
        assert_eq!(suggest("test@", &DEFAULT_DOMAINS), Some("aol.com".to_string()));
    }

    #[test]
    fn test_fragment_narrows_suggestion() {
        assert_eq!(suggest("test@a", &DEFAULT_DOMAINS), Some("ol.com".to_string()));
        assert_eq!(suggest("test@ao", &DEFAULT_DOMAINS), Some("l.com".to_string()));
        assert_eq!(suggest("test@g", &DEFAULT_DOMAINS), Some("mail.com".to_string()));
    }

    #[test]
    fn test_list_order_wins_over_later_matches() {
        // "h" matches both hotmail.com and hey.com; hotmail.com comes first.
        assert_eq!(
            suggest("test@h", &DEFAULT_DOMAINS),
            Some("otmail.com".to_string())
        );
    }

    #[test]
    fn test_complete_domain_suggests_empty_remainder() {
        assert_eq!(suggest("test@aol.com", &DEFAULT_DOMAINS), Some(String::new()));
    }

    #[test]
    fn test_unmatched_fragment_has_no_suggestion() {
        assert_eq!(suggest("test@zzz", &DEFAULT_DOMAINS), None);
    }

    #[test]
    fn test_fragment_longer_than_domain_has_no_suggestion() {
        assert_eq!(suggest("test@aol.communal", &DEFAULT_DOMAINS), None);
    }

    #[test]
    fn test_custom_domains() {
        let domains = ["example.org".to_string(), "example.com".to_string()];
        assert_eq!(suggest("me@ex", &domains), Some("ample.org".to_string()));
        assert_eq!(suggest("me@", &domains), Some("example.org".to_string()));
    }

    #[test]
    fn test_fragment_taken_after_first_at() {
        // Only one '@' can be typed, but the engine is total over any value.
        assert_eq!(suggest("a@b@", &DEFAULT_DOMAINS), None);
    }

    #[test]
    fn test_empty_domain_list() {
        let domains: [&str; 0] = [];
        assert_eq!(suggest("test@", &domains), None);
    }
}
