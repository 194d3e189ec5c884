// src/history/mod.rs
use std::collections::VecDeque;
use std::fmt;
use chrono::{DateTime, Local};
use serde::{Serialize, Deserialize};

use crate::models::GeneratedPassword;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub password: String,
    pub length: usize,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (length: {})",
            self.timestamp.format("%H:%M:%S"),
            self.password,
            self.length
        )
    }
}

/// Passwords generated during the current session, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn record(&mut self, password: &GeneratedPassword) {
        self.record_at(password, Local::now());
    }

    fn record_at(&mut self, password: &GeneratedPassword, timestamp: DateTime<Local>) {
        if self.limit == 0 {
            return;
        }

        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }

        self.entries.push_back(HistoryEntry {
            timestamp,
            password: password.as_str().to_string(),
            length: password.len(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn password(s: &str) -> GeneratedPassword {
        GeneratedPassword::from_chars(s.chars().collect())
    }

    #[test]
    fn test_entry_format() {
        let mut history = History::new(10);
        let timestamp = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        history.record_at(&password("aB3dE6gH"), timestamp);

        let line = history.entries().next().unwrap().to_string();
        assert_eq!(line, "[09:05:07] aB3dE6gH (length: 8)");
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(2);
        history.record(&password("first"));
        history.record(&password("second"));
        history.record(&password("third"));

        let kept: Vec<&str> = history.entries().map(|e| e.password.as_str()).collect();
        assert_eq!(kept, vec!["second", "third"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = History::new(0);
        history.record(&password("abcd"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new(5);
        history.record(&password("abcd"));
        history.record(&password("efgh"));
        assert_eq!(history.len(), 2);

        history.clear();
        assert!(history.is_empty());
    }
}
