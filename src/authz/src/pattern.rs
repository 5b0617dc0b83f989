//! Wildcard pattern matching for API group and group/version patterns
//!
//! `*` is the only special character and there is no escaping:
//! 1. Universal wildcard: `"*"` matches anything, including `""`
//! 2. Exact match: `"apps"` matches `"apps"`
//! 3. Prefix wildcard: `"apps*"` matches `"apps/v1"`
//! 4. Suffix wildcard: `"*/v1"` matches `"apps/v1"`
//! 5. Anything else is a greedy left-to-right scan of the literal parts
//!
//! The scan never backtracks and is not anchored at either end once the
//! pattern has more than a single leading or trailing `*`, so `"a*b"` also
//! matches `"xaxbx"`. Tenant configurations rely on this behavior.

/// Checks if a value matches a wildcard pattern
///
/// # Arguments
///
/// * `pattern` - The pattern, with `*` as the only wildcard
/// * `value` - The value to match
///
/// # Returns
///
/// `true` if the value matches the pattern, `false` otherwise
///
/// # Examples
///
/// ```rust
/// use tenant_proxy_authz::match_pattern;
///
/// assert!(match_pattern("*", ""));
/// assert!(match_pattern("apps", "apps"));
/// assert!(match_pattern("apps*", "apps/v1"));
/// assert!(match_pattern("*/v1", "batch/v1"));
/// assert!(match_pattern("a*b*c", "aXXbYYc"));
/// assert!(!match_pattern("a*b*c", "a1c2b3"));
/// ```
pub fn match_pattern(pattern: &str, value: &str) -> bool {
    if pattern == "*" {
        return true;
    }

    // No wildcard: exact match
    if !pattern.contains('*') {
        return pattern == value;
    }

    // Single '*' at start or end
    if let Some((head, tail)) = pattern.split_once('*') {
        if !tail.contains('*') {
            if head.is_empty() {
                return value.ends_with(tail);
            }
            if tail.is_empty() {
                return value.starts_with(head);
            }
        }
    }

    let mut cursor = 0;

    for part in pattern.split('*') {
        if part.is_empty() {
            continue;
        }

        match value[cursor..].find(part) {
            Some(offset) => cursor += offset + part.len(),
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_wildcard() {
        assert!(match_pattern("*", ""));
        assert!(match_pattern("*", "anything"));
        assert!(match_pattern("*", "apps/v1"));
    }

    #[test]
    fn test_exact_match() {
        assert!(match_pattern("apps", "apps"));
        assert!(!match_pattern("apps", "core"));
        assert!(match_pattern("", ""));
        assert!(!match_pattern("", "x"));
    }

    #[test]
    fn test_suffix_wildcard() {
        assert!(match_pattern("*v1", "apps/v1"));
        assert!(!match_pattern("*v1", "apps/v2"));
        assert!(match_pattern("*/v1", "/v1"));
    }

    #[test]
    fn test_prefix_wildcard() {
        assert!(match_pattern("apps*", "apps/v1"));
        assert!(!match_pattern("apps*", "batch/v1"));
        assert!(!match_pattern("a*", ""));
    }

    #[test]
    fn test_middle_wildcard() {
        assert!(match_pattern("a*b", "acb"));
        assert!(match_pattern("a*b", "a---b"));
        assert!(!match_pattern("a*b", "a---c"));
        assert!(!match_pattern("a*b", "c---b"));
    }

    #[test]
    fn test_multiple_wildcards() {
        assert!(match_pattern("a*b*c", "aXXbYYc"));
        assert!(match_pattern("a**c", "abc"));
        assert!(match_pattern("**", "anything"));
        assert!(match_pattern("**suffix", "prefixsuffix"));
        assert!(match_pattern("prefix**", "prefixsuffix"));
    }

    #[test]
    fn test_part_ordering() {
        assert!(match_pattern("a*b*c", "a1b2c3"));
        assert!(!match_pattern("a*b*c", "a1c2b3"));
    }

    #[test]
    fn test_only_star_characters() {
        assert!(match_pattern("***", "x"));
        assert!(match_pattern("***", ""));
    }

    #[test]
    fn test_literal_characters() {
        // '.' and '/' carry no meaning
        assert!(match_pattern("a.b", "a.b"));
        assert!(!match_pattern("a.b", "acb"));
        assert!(match_pattern("apps/v1", "apps/v1"));
        assert!(!match_pattern("apps/v1", "apps/v2"));
    }

    #[test]
    fn test_scan_is_unanchored() {
        // Diverges from a glob matcher: leading and trailing text is ignored
        assert!(match_pattern("a*b", "xaxbx"));
        assert!(match_pattern("a*s/v1", "apps/v1beta1"));
        assert!(match_pattern("a*aa", "aaa"));
        assert!(!match_pattern("a*aa", "aa"));
    }

    #[test]
    fn test_multibyte_values() {
        assert!(match_pattern("ä*ö", "äxxö"));
        assert!(match_pattern("*ö", "groupö"));
        assert!(!match_pattern("ö*ä", "äö"));
    }

    #[test]
    fn test_determinism() {
        let cases = [
            ("apps*", "apps/v1"),
            ("*v1", "apps/v1"),
            ("a*b*c", "a--b--c"),
            ("", ""),
            ("***", "x"),
        ];

        for (pattern, value) in cases {
            assert_eq!(match_pattern(pattern, value), match_pattern(pattern, value));
        }
    }
}
