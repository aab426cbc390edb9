use crate::models::QaRecord;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// Question/answer pairs of the current session, newest first.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: VecDeque<QaRecord>,
    limit: Option<usize>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Prepends a record stamped `now`, nudged forward if needed so keys stay strictly increasing.
    pub fn record(&mut self, question: String, answer: String, now: DateTime<Utc>) -> QaRecord {
        let created_at = match self.entries.front() {
            Some(newest) if now <= newest.created_at => newest.created_at + Duration::milliseconds(1),
            _ => now,
        };

        let record = QaRecord {
            question,
            answer,
            created_at,
        };
        self.entries.push_front(record.clone());

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                log::debug!("Dropping {} old history entries", self.entries.len() - limit);
                self.entries.truncate(limit);
            }
        }

        record
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&QaRecord> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QaRecord> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<QaRecord> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut log = ConversationLog::new();
        log.record("q1".into(), "a1".into(), at(1_000));
        log.record("q2".into(), "a2".into(), at(2_000));

        let questions: Vec<_> = log.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["q2", "q1"]);
        assert_eq!(log.latest().unwrap().answer, "a2");
    }

    #[test]
    fn same_instant_still_gets_unique_keys() {
        let mut log = ConversationLog::new();
        let first = log.record("q".into(), "a".into(), at(5_000));
        let second = log.record("q".into(), "a".into(), at(5_000));
        let third = log.record("q".into(), "a".into(), at(4_000));

        assert!(second.created_at > first.created_at);
        assert!(third.created_at > second.created_at);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut log = ConversationLog::new();
        log.record("q".into(), "a".into(), at(1));
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut log = ConversationLog::with_limit(Some(2));
        for i in 0..4 {
            log.record(format!("q{i}"), "a".into(), at(i * 10));
        }

        let questions: Vec<_> = log.iter().map(|r| r.question.clone()).collect();
        assert_eq!(questions, vec!["q3", "q2"]);
    }
}
