use chrono::Utc;
use std::path::PathBuf;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// RFC 3339 timestamp stamped on reports.
pub fn report_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Unique scratch directory under the system temp dir.
pub fn temp_path(label: &str) -> PathBuf {
    let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir().join(format!(
        "keyshop-tester-{label}-{}-{stamp}",
        std::process::id()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" smoke, ,repeat-add,  clear-cart ");
        assert_eq!(parts, vec!["smoke", "repeat-add", "clear-cart"]);
    }

    #[test]
    fn temp_paths_are_distinct_per_label() {
        assert_ne!(temp_path("a"), temp_path("b"));
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let ts = report_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok(), "{ts}");
    }
}
