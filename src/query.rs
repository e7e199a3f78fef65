//! Shared list-state helpers: one sort order, one filter shape, and the
//! optimistic mutations every resource screen applies after a successful
//! create/update/delete.

pub trait Keyed {
    fn id(&self) -> i64;
}

pub trait Chronological {
    /// ISO `YYYY-MM-DD` date, so lexicographic order is chronological order.
    fn date(&self) -> &str;

    /// Optional `HH:MM:SS` time on the same day.
    fn time(&self) -> Option<&str> {
        None
    }
}

pub trait Queryable: Chronological {
    fn text_fields(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn account_id(&self) -> Option<i64> {
        None
    }
}

fn sort_key<T: Chronological>(item: &T) -> (String, String) {
    (
        item.date().to_string(),
        item.time().unwrap_or("00:00:00").to_string(),
    )
}

/// Most recent first, combining date and time; records without a time sort
/// as midnight.
pub fn sort_recent_first<T: Chronological>(items: &mut [T]) {
    items.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
}

/// Replace the record with a matching id, or insert it; either way the list
/// keeps its most-recent-first order.
pub fn upsert<T: Keyed + Chronological>(items: &mut Vec<T>, record: T) {
    match items.iter_mut().find(|item| item.id() == record.id()) {
        Some(slot) => *slot = record,
        None => items.push(record),
    }
    sort_recent_first(items);
}

pub fn remove<T: Keyed>(items: &mut Vec<T>, id: i64) {
    items.retain(|item| item.id() != id);
}

/// Client-side filter applied on top of whatever the backend returned.
/// Empty fields pass everything.
#[derive(Clone, PartialEq, Default)]
pub struct ListFilter {
    pub search: String,
    pub from: String,
    pub to: String,
    pub category: String,
    pub account_id: Option<i64>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.from.is_empty()
            && self.to.is_empty()
            && self.category.is_empty()
            && self.account_id.is_none()
    }

    pub fn matches<T: Queryable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !item
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        {
            return false;
        }

        // Inclusive date range on ISO dates.
        if !self.from.is_empty() && item.date() < self.from.as_str() {
            return false;
        }
        if !self.to.is_empty() && item.date() > self.to.as_str() {
            return false;
        }

        if !self.category.is_empty() && item.category() != Some(self.category.as_str()) {
            return false;
        }

        if let Some(account_id) = self.account_id {
            if item.account_id() != Some(account_id) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Entry {
        id: i64,
        date: String,
        time: Option<String>,
        label: String,
        category: String,
        account: Option<i64>,
    }

    impl Entry {
        fn new(id: i64, date: &str) -> Self {
            Entry {
                id,
                date: date.to_string(),
                time: None,
                label: String::new(),
                category: String::new(),
                account: None,
            }
        }

        fn at(mut self, time: &str) -> Self {
            self.time = Some(time.to_string());
            self
        }

        fn labelled(mut self, label: &str) -> Self {
            self.label = label.to_string();
            self
        }
    }

    impl Keyed for Entry {
        fn id(&self) -> i64 {
            self.id
        }
    }

    impl Chronological for Entry {
        fn date(&self) -> &str {
            &self.date
        }

        fn time(&self) -> Option<&str> {
            self.time.as_deref()
        }
    }

    impl Queryable for Entry {
        fn text_fields(&self) -> Vec<&str> {
            vec![&self.label]
        }

        fn category(&self) -> Option<&str> {
            if self.category.is_empty() {
                None
            } else {
                Some(&self.category)
            }
        }

        fn account_id(&self) -> Option<i64> {
            self.account
        }
    }

    #[test]
    fn sorts_most_recent_date_first() {
        let mut items = vec![Entry::new(1, "2024-01-01"), Entry::new(2, "2024-02-01")];
        sort_recent_first(&mut items);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[1].id, 1);
    }

    #[test]
    fn time_breaks_ties_and_missing_time_is_midnight() {
        let mut items = vec![
            Entry::new(1, "2024-03-10").at("08:00:00"),
            Entry::new(2, "2024-03-10").at("17:30:00"),
            Entry::new(3, "2024-03-10"),
        ];
        sort_recent_first(&mut items);
        assert_eq!(
            items.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![2, 1, 3]
        );
    }

    #[test]
    fn upsert_inserts_new_record_in_order() {
        let mut items = vec![Entry::new(1, "2024-02-01"), Entry::new(2, "2024-01-01")];
        upsert(&mut items, Entry::new(3, "2024-03-01"));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 3);
    }

    #[test]
    fn upsert_replaces_existing_record_by_id() {
        let mut items = vec![Entry::new(1, "2024-02-01"), Entry::new(2, "2024-01-01")];
        upsert(&mut items, Entry::new(2, "2024-04-01").labelled("moved"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[0].label, "moved");
    }

    #[test]
    fn remove_drops_only_the_matching_id() {
        let mut items = vec![Entry::new(1, "2024-02-01"), Entry::new(2, "2024-01-01")];
        remove(&mut items, 1);
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|e| e.id != 1));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ListFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&Entry::new(1, "2024-01-01")));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let filter = ListFilter {
            search: "GROC".to_string(),
            ..ListFilter::default()
        };
        assert!(filter.matches(&Entry::new(1, "2024-01-01").labelled("weekly groceries")));
        assert!(!filter.matches(&Entry::new(2, "2024-01-01").labelled("rent")));
    }

    #[test]
    fn date_range_is_inclusive() {
        let filter = ListFilter {
            from: "2024-01-01".to_string(),
            to: "2024-01-31".to_string(),
            ..ListFilter::default()
        };
        assert!(filter.matches(&Entry::new(1, "2024-01-01")));
        assert!(filter.matches(&Entry::new(2, "2024-01-31")));
        assert!(!filter.matches(&Entry::new(3, "2023-12-31")));
        assert!(!filter.matches(&Entry::new(4, "2024-02-01")));
    }

    #[test]
    fn category_and_account_match_exactly() {
        let mut entry = Entry::new(1, "2024-01-01");
        entry.category = "Food".to_string();
        entry.account = Some(4);

        let by_category = ListFilter {
            category: "Food".to_string(),
            ..ListFilter::default()
        };
        assert!(by_category.matches(&entry));

        let wrong_category = ListFilter {
            category: "Travel".to_string(),
            ..ListFilter::default()
        };
        assert!(!wrong_category.matches(&entry));

        let by_account = ListFilter {
            account_id: Some(4),
            ..ListFilter::default()
        };
        assert!(by_account.matches(&entry));

        let wrong_account = ListFilter {
            account_id: Some(5),
            ..ListFilter::default()
        };
        assert!(!wrong_account.matches(&entry));
    }
}
