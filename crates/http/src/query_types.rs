//! Request/query types (Deserialize)

use ai_audit_core::MAX_REPORT_LIMIT;
use serde::Deserialize;

/// `limit` is taken as raw text so a bad value never rejects the request.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

impl ReportQuery {
    /// An integer in `1..=MAX_REPORT_LIMIT`, otherwise treated as not provided.
    pub fn parsed_limit(&self) -> Option<usize> {
        parse_limit(self.limit.as_deref())
    }
}

pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok().filter(|n| (1..=MAX_REPORT_LIMIT).contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_in_range() {
        assert_eq!(parse_limit(Some("1")), Some(1));
        assert_eq!(parse_limit(Some("42")), Some(42));
        assert_eq!(parse_limit(Some(" 100 ")), Some(100));
    }

    #[test]
    fn everything_else_is_absent() {
        for raw in [None, Some(""), Some("0"), Some("101"), Some("-5"), Some("abc"), Some("2.5")] {
            assert_eq!(parse_limit(raw), None, "raw {raw:?}");
        }
    }
}
