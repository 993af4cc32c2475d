//! Parsing of `git log` and `git branch` output

/// Separates fields within one commit record
pub const FIELD_SEPARATOR: char = '\u{1f}';
/// Terminates one commit record
pub const RECORD_SEPARATOR: char = '\u{1e}';

/// `--pretty` format producing records this module can parse
pub const LOG_FORMAT: &str = "--pretty=format:%h%x1f%s%x1f%an%x1f%ar%x1f%b%x1e";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub subject: String,
    pub author: String,
    pub date: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub current: bool,
}

/// Parse output produced with [`LOG_FORMAT`]. Malformed records are skipped.
pub fn parse_log(output: &str) -> Vec<Commit> {
    output
        .split(RECORD_SEPARATOR)
        .filter_map(|record| {
            let record = record.trim_start_matches(['\n', '\r']);
            if record.trim().is_empty() {
                return None;
            }
            let mut fields = record.splitn(5, FIELD_SEPARATOR);
            let hash = fields.next()?.trim().to_string();
            let subject = fields.next()?.trim().to_string();
            let author = fields.next()?.trim().to_string();
            let date = fields.next()?.trim().to_string();
            let body = fields.next().unwrap_or("").trim().to_string();
            Some(Commit {
                hash,
                subject,
                author,
                date,
                body,
            })
        })
        .collect()
}

/// Parse `git branch` output, marking the checked-out branch
pub fn parse_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.strip_prefix("* ") {
            Some(name) => Branch {
                name: name.trim().to_string(),
                current: true,
            },
            None => Branch {
                name: line.trim().to_string(),
                current: false,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_records() {
        let output = "abc1234\u{1f}Add parser\u{1f}Ada\u{1f}2 days ago\u{1f}Longer body\nsecond line\u{1e}\n\
                      def5678\u{1f}Fix | pipes\u{1f}Bob\u{1f}3 weeks ago\u{1f}\u{1e}";
        let commits = parse_log(output);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "abc1234");
        assert_eq!(commits[0].body, "Longer body\nsecond line");
        assert_eq!(commits[1].subject, "Fix | pipes");
        assert_eq!(commits[1].author, "Bob");
        assert!(commits[1].body.is_empty());
    }

    #[test]
    fn test_parse_log_skips_malformed() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("garbage without separators\u{1e}").is_empty());
    }

    #[test]
    fn test_parse_branches() {
        let branches = parse_branches("  develop\n* main\n  feature/x\n");
        assert_eq!(branches.len(), 3);
        assert_eq!(branches[1].name, "main");
        assert!(branches[1].current);
        assert!(!branches[0].current);
        assert_eq!(branches[2].name, "feature/x");
    }
}
