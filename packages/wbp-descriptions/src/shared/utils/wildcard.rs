//! `*` wildcard patterns used by metadata (`get*`, `setText(*)`).

use dashmap::DashMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Compiled patterns, shared by every description in the process.
    static ref COMPILED: DashMap<String, Regex> = DashMap::new();
}

/// Anchored regex for a wildcard pattern; every other character is literal.
pub fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let escaped: Vec<String> = pattern.split('*').map(regex::escape).collect();
    Regex::new(&format!("^{}$", escaped.join(".*")))
}

pub fn wildcard_matches(pattern: &str, text: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == text;
    }
    if let Some(regex) = COMPILED.get(pattern) {
        return regex.is_match(text);
    }
    match wildcard_regex(pattern) {
        Ok(regex) => {
            let matched = regex.is_match(text);
            COMPILED.insert(pattern.to_string(), regex);
            matched
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards() {
        assert!(wildcard_matches("get*", "getText"));
        assert!(wildcard_matches("*", ""));
        assert!(wildcard_matches("set*(int)", "setWidth(int)"));
        assert!(!wildcard_matches("set*(int)", "setWidth(long)"));
        assert!(wildcard_matches("a.b.C", "a.b.C"));
        assert!(!wildcard_matches("a.b.C", "aXb.C"));
        assert!(!wildcard_matches("a.*", "ab.c"));
    }

    #[test]
    fn test_patterns_compiled_once() {
        assert!(!COMPILED.contains_key("org.cache.*"));
        assert!(wildcard_matches("org.cache.*", "org.cache.widgets"));
        assert!(COMPILED.contains_key("org.cache.*"));

        let first = COMPILED.get("org.cache.*").map(|r| r.as_str().to_string());
        assert!(!wildcard_matches("org.cache.*", "com.cache.widgets"));
        assert_eq!(COMPILED.get("org.cache.*").map(|r| r.as_str().to_string()), first);

        // literal patterns never reach the regex engine
        assert!(wildcard_matches("a.b.C", "a.b.C"));
        assert!(!COMPILED.contains_key("a.b.C"));
    }
}
