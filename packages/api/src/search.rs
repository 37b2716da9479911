//! Client-side substring search over already-loaded lists.
//!
//! Names, emails and free text match case-insensitively; phone numbers match
//! as typed. An empty term keeps every item in its original order.

use crate::models::{Block, Helper, Helpseeker, Report, UserSummary};

/// A search box value, prepared once per keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    lower: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive containment.
    pub fn in_text(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| h.to_lowercase().contains(&self.lower))
    }

    /// Case-sensitive containment, for phone numbers and other digit strings.
    pub fn in_exact(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| h.contains(&self.raw))
    }
}

/// Something a list view can filter with a search box.
pub trait Searchable {
    fn matches(&self, term: &SearchTerm) -> bool;
}

/// Items matching `term`, cloned, in their original order.
pub fn filter<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    let term = SearchTerm::new(term);
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches(&term))
        .cloned()
        .collect()
}

impl Searchable for Helper {
    fn matches(&self, term: &SearchTerm) -> bool {
        term.in_text(self.full_name.as_deref())
            || term.in_text(self.email.as_deref())
            || term.in_exact(Some(&self.phone))
    }
}

impl Searchable for Helpseeker {
    fn matches(&self, term: &SearchTerm) -> bool {
        term.in_text(self.full_name.as_deref())
            || term.in_text(self.email.as_deref())
            || term.in_exact(Some(&self.phone))
    }
}

impl Searchable for UserSummary {
    fn matches(&self, term: &SearchTerm) -> bool {
        term.in_text(self.full_name.as_deref())
            || term.in_text(self.email.as_deref())
            || term.in_exact(self.phone.as_deref())
    }
}

impl Searchable for Block {
    fn matches(&self, term: &SearchTerm) -> bool {
        let user = self.user.as_ref();
        term.in_text(user.and_then(|u| u.full_name.as_deref()))
            || term.in_text(user.and_then(|u| u.email.as_deref()))
            || term.in_exact(user.and_then(|u| u.phone.as_deref()))
            || term.in_text(Some(&self.reason))
    }
}

impl Searchable for Report {
    fn matches(&self, term: &SearchTerm) -> bool {
        term.in_text(Some(&self.description))
            || term.in_text(Some(self.category.as_str()))
            || term.in_text(Some(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn helpers() -> Vec<Helper> {
        serde_json::from_value(json!([
            {
                "id": "1",
                "fullName": "Ravi Kumar",
                "email": "ravi@example.com",
                "phone": "9876500001",
                "createdAt": "2025-01-01T00:00:00Z"
            },
            {
                "id": "2",
                "fullName": "Meera Nair",
                "phone": "9123400002",
                "createdAt": "2025-01-02T00:00:00Z"
            },
            {
                "id": "3",
                "email": "NOBODY@EXAMPLE.COM",
                "phone": "9000000003",
                "createdAt": "2025-01-03T00:00:00Z"
            }
        ]))
        .unwrap()
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(i).to_string()).collect()
    }

    #[test]
    fn test_empty_term_keeps_everything_in_order() {
        let all = helpers();
        let found = filter(&all, "");
        assert_eq!(ids(&found, |h| &h.id), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_name_and_email_ignore_case() {
        let all = helpers();
        assert_eq!(ids(&filter(&all, "MEERA"), |h| &h.id), vec!["2"]);
        assert_eq!(ids(&filter(&all, "nobody@"), |h| &h.id), vec!["3"]);
        assert_eq!(ids(&filter(&all, "example"), |h| &h.id), vec!["1", "3"]);
    }

    #[test]
    fn test_phone_substring() {
        let all = helpers();
        assert_eq!(ids(&filter(&all, "91234"), |h| &h.id), vec!["2"]);
        assert!(filter(&all, "zzz").is_empty());
    }

    #[test]
    fn test_block_search_covers_reason() {
        let blocks: Vec<Block> = serde_json::from_value(json!([
            {
                "id": "b1", "userId": "u1", "userType": "helper",
                "blockType": "temporary", "reason": "Repeated no-shows",
                "isActive": true, "blockedAt": "2025-01-01T00:00:00Z",
                "user": { "fullName": "Ravi", "phone": "98765" }
            },
            {
                "id": "b2", "userId": "u2", "userType": "helpseeker",
                "blockType": "permanent", "reason": "Fraud",
                "isActive": true, "blockedAt": "2025-01-01T00:00:00Z"
            }
        ]))
        .unwrap();
        assert_eq!(ids(&filter(&blocks, "no-SHOWS"), |b| &b.id), vec!["b1"]);
        assert_eq!(ids(&filter(&blocks, "fraud"), |b| &b.id), vec!["b2"]);
        assert_eq!(ids(&filter(&blocks, "8765"), |b| &b.id), vec!["b1"]);
    }

    #[test]
    fn test_report_search_uses_raw_category() {
        let reports: Vec<Report> = serde_json::from_value(json!([
            {
                "id": "abc-123", "reporterType": "helper",
                "reportedUserType": "helpseeker", "category": "fake_profile",
                "status": "pending", "description": "Photo is stolen",
                "createdAt": "2025-01-01T00:00:00Z"
            }
        ]))
        .unwrap();
        assert_eq!(filter(&reports, "fake_pro").len(), 1);
        assert_eq!(filter(&reports, "ABC").len(), 1);
        assert_eq!(filter(&reports, "stolen").len(), 1);
        assert!(filter(&reports, "Fake Profile").is_empty());
    }
}
