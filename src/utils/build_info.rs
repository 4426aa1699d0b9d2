//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `hunter 0.1.0 (abc1234 2026-01-01)`
pub fn version_string() -> String {
    format!("hunter {} ({} {})", PKG_VERSION, BUILD_COMMIT, BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_string_mentions_version() {
        let version = version_string();
        assert!(version.starts_with("hunter "));
        assert!(version.contains(PKG_VERSION));
    }
}
