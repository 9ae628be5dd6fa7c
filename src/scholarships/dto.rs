use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scholarships::repo::SavedScholarship;

/// Request body for saving a scholarship bookmark.
#[derive(Debug, Deserialize)]
pub struct SaveScholarshipRequest {
    pub name: String,
    pub provider: Option<String>,
    pub deadline: Option<String>,
    pub url: String,
}

/// Scholarship shape returned by both the saved list and the suggestion
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScholarshipOut {
    pub name: String,
    pub provider: String,
    pub deadline: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub message: String,
    pub id: Uuid,
}

/// Field values ready for persistence.
#[derive(Debug)]
pub struct NormalizedScholarship {
    pub name: String,
    pub provider: String,
    pub deadline: String,
    pub url: String,
}

impl SaveScholarshipRequest {
    /// Trims every field; absent provider becomes "", absent or empty
    /// deadline becomes "unknown".
    pub fn normalized(self) -> NormalizedScholarship {
        let deadline = self
            .deadline
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        NormalizedScholarship {
            name: self.name.trim().to_string(),
            provider: self
                .provider
                .map(|p| p.trim().to_string())
                .unwrap_or_default(),
            deadline,
            url: self.url.trim().to_string(),
        }
    }
}

impl From<SavedScholarship> for ScholarshipOut {
    fn from(r: SavedScholarship) -> Self {
        Self {
            name: r.name,
            provider: r.provider,
            deadline: r.deadline,
            url: r.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(provider: Option<&str>, deadline: Option<&str>) -> SaveScholarshipRequest {
        SaveScholarshipRequest {
            name: "  Chevening  ".into(),
            provider: provider.map(String::from),
            deadline: deadline.map(String::from),
            url: " https://chevening.org ".into(),
        }
    }

    #[test]
    fn trims_all_fields() {
        let n = request(Some("  UK Gov "), Some(" 2026-11-01 ")).normalized();
        assert_eq!(n.name, "Chevening");
        assert_eq!(n.provider, "UK Gov");
        assert_eq!(n.deadline, "2026-11-01");
        assert_eq!(n.url, "https://chevening.org");
    }

    #[test]
    fn absent_provider_defaults_to_empty() {
        let n = request(None, Some("2026-11-01")).normalized();
        assert_eq!(n.provider, "");
    }

    #[test]
    fn absent_deadline_defaults_to_unknown() {
        let n = request(Some("UK Gov"), None).normalized();
        assert_eq!(n.deadline, "unknown");
    }

    #[test]
    fn empty_deadline_defaults_to_unknown() {
        let n = request(Some("UK Gov"), Some("   ")).normalized();
        assert_eq!(n.deadline, "unknown");
    }

    #[test]
    fn empty_provider_stays_empty() {
        let n = request(Some("   "), None).normalized();
        assert_eq!(n.provider, "");
    }
}
