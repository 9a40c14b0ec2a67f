//! Review status catalog
//!
//! Maps the status codes returned by the homework API to the verdict text
//! shown to the student. The table is fixed at compile time.

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [
        ReviewStatus::Approved,
        ReviewStatus::Reviewing,
        ReviewStatus::Rejected,
    ];

    /// Status code as sent by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "approved",
            ReviewStatus::Reviewing => "reviewing",
            ReviewStatus::Rejected => "rejected",
        }
    }

    /// Look up a status code. Matching is exact: the API sends lowercase codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == code)
    }

    /// Human-readable verdict
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ReviewStatus::from_code("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::from_code("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::from_code("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(ReviewStatus::from_code("lost"), None);
        assert_eq!(ReviewStatus::from_code("APPROVED"), None);
        assert_eq!(ReviewStatus::from_code(""), None);
    }

    #[test]
    fn test_every_status_has_verdict() {
        for status in ReviewStatus::ALL {
            assert!(!status.verdict().is_empty(), "{} has no verdict", status);
        }
    }

    #[test]
    fn test_serde_uses_api_codes() {
        let json = serde_json::to_string(&ReviewStatus::Reviewing).unwrap();
        assert_eq!(json, "\"reviewing\"");
    }
}
