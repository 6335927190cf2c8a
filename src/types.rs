// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of a discovered host on the TLS port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reachability {
    #[default]
    #[serde(rename = "Not tested")]
    NotTested,
    Yes,
    No,
}

impl Reachability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reachability::NotTested => "Not tested",
            Reachability::Yes => "Yes",
            Reachability::No => "No",
        }
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row recovered from the crt.sh result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainEntry {
    /// Discovered hostname (matching identity column)
    pub hostname: String,

    /// Date the certificate was logged, as shown in the table
    pub logged_at: String,

    /// Unix timestamp of `logged_at`, 0 when the date did not parse
    pub logged_at_epoch: i64,

    /// Certificate validity start, as shown in the table
    pub not_before: String,

    /// Unix timestamp of `not_before`, 0 when the date did not parse
    pub not_before_epoch: i64,

    pub active: Reachability,
}

/// All entries discovered for one queried domain, in table order
#[derive(Debug, Clone)]
pub struct DomainResults {
    pub domain: String,
    pub entries: Vec<DomainEntry>,
}

impl DomainResults {
    pub fn new(domain: String, entries: Vec<DomainEntry>) -> Self {
        Self { domain, entries }
    }
}

/// Flattened output record
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportRow {
    pub parent_url: String,
    pub url: String,
    pub active: Reachability,
    pub logged_at: String,
    pub not_before: String,
    pub logged_at_epoch: i64,
    pub not_before_epoch: i64,
}

impl ReportRow {
    /// Column names, matching the serialized field names
    pub const HEADER: [&'static str; 7] = [
        "ParentUrl",
        "Url",
        "Active",
        "LoggedAt",
        "NotBefore",
        "LoggedAtEpoch",
        "NotBeforeEpoch",
    ];

    pub fn from_entry(parent_url: &str, entry: &DomainEntry) -> Self {
        Self {
            parent_url: parent_url.to_string(),
            url: entry.hostname.clone(),
            active: entry.active,
            logged_at: entry.logged_at.clone(),
            not_before: entry.not_before.clone(),
            logged_at_epoch: entry.logged_at_epoch,
            not_before_epoch: entry.not_before_epoch,
        }
    }
}

/// Flatten per-domain results into report rows, keeping input and table order
pub fn flatten(results: &[DomainResults]) -> Vec<ReportRow> {
    results
        .iter()
        .flat_map(|r| r.entries.iter().map(|e| ReportRow::from_entry(&r.domain, e)))
        .collect()
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParentUrl: {} Subdomain: {} Active: {}",
            self.parent_url, self.url, self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hostname: &str) -> DomainEntry {
        DomainEntry {
            hostname: hostname.to_string(),
            logged_at: "2023-05-01".to_string(),
            logged_at_epoch: 1682899200,
            not_before: "2023-04-30".to_string(),
            not_before_epoch: 1682812800,
            active: Reachability::NotTested,
        }
    }

    #[test]
    fn test_reachability_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Reachability::NotTested).unwrap(), "\"Not tested\"");
        assert_eq!(serde_json::to_string(&Reachability::Yes).unwrap(), "\"Yes\"");
        assert_eq!(serde_json::to_string(&Reachability::No).unwrap(), "\"No\"");
    }

    #[test]
    fn test_report_row_json_keys() {
        let row = ReportRow::from_entry("example.com", &entry("api.example.com"));
        let value = serde_json::to_value(&row).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        for key in ReportRow::HEADER {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(obj["ParentUrl"], "example.com");
        assert_eq!(obj["Url"], "api.example.com");
        assert_eq!(obj["Active"], "Not tested");
        assert_eq!(obj["LoggedAtEpoch"], 1682899200);
    }

    #[test]
    fn test_flatten_preserves_order() {
        let results = vec![
            DomainResults::new("a.com".to_string(), vec![entry("x.a.com"), entry("y.a.com")]),
            DomainResults::new("b.com".to_string(), vec![]),
            DomainResults::new("c.com".to_string(), vec![entry("z.c.com")]),
        ];

        let rows = flatten(&results);
        let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["x.a.com", "y.a.com", "z.c.com"]);
        assert_eq!(rows[2].parent_url, "c.com");
    }

    #[test]
    fn test_summary_line() {
        let row = ReportRow::from_entry("example.com", &entry("api.example.com"));
        assert_eq!(
            row.to_string(),
            "ParentUrl: example.com Subdomain: api.example.com Active: Not tested"
        );
    }
}
