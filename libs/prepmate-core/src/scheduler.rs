//! In-memory owner of the revision catalogue.

use std::collections::HashSet;

use crate::error::{Result, SchedulerError};
use crate::schedule::{self, classify_urgency, CalendarDay, IntervalSet};
use crate::types::{RevisionEntry, RevisionStats, TopicGroup, TopicRef, Urgency};

/// Owns every generated revision entry and decides their urgency.
///
/// Entries are kept in insertion order and never removed. Their only mutable
/// field is `completed`.
#[derive(Debug, Clone, Default)]
pub struct RevisionScheduler {
    intervals: IntervalSet,
    entries: Vec<RevisionEntry>,
    completed_topics: HashSet<String>,
}

impl RevisionScheduler {
    /// Create an empty scheduler using the given interval set.
    pub fn new(intervals: IntervalSet) -> Self {
        Self {
            intervals,
            entries: Vec::new(),
            completed_topics: HashSet::new(),
        }
    }

    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// Generate entries for a topic without storing them.
    pub fn generate_schedule(
        &self,
        completion: impl CalendarDay,
        topic: &TopicRef,
    ) -> Result<Vec<RevisionEntry>> {
        schedule::generate_schedule(&self.intervals, completion, topic)
    }

    /// Record that `topic` was studied and store its revision entries.
    ///
    /// A topic can only be completed once. Nothing is stored when the
    /// schedule cannot be generated.
    pub fn record_topic_completion(
        &mut self,
        topic: &TopicRef,
        completion: impl CalendarDay,
    ) -> Result<Vec<RevisionEntry>> {
        if self.completed_topics.contains(&topic.id) {
            return Err(SchedulerError::TopicAlreadyCompleted(topic.id.clone()));
        }

        let generated = self.generate_schedule(completion, topic)?;
        self.completed_topics.insert(topic.id.clone());
        self.entries.extend(generated.iter().cloned());
        Ok(generated)
    }

    pub fn get(&self, entry_id: &str) -> Option<&RevisionEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flip the completion flag of one entry.
    pub fn toggle_completion(&mut self, entry_id: &str) -> Result<RevisionEntry> {
        let entry = self.entry_mut(entry_id)?;
        entry.completed = !entry.completed;
        Ok(entry.clone())
    }

    /// Flip the completion flag only if it still equals `expected_completed`.
    pub fn toggle_completion_if(
        &mut self,
        entry_id: &str,
        expected_completed: bool,
    ) -> Result<RevisionEntry> {
        let entry = self.entry_mut(entry_id)?;
        if entry.completed != expected_completed {
            return Err(SchedulerError::Conflict {
                id: entry_id.to_string(),
                expected: expected_completed,
            });
        }
        entry.completed = !entry.completed;
        Ok(entry.clone())
    }

    /// Entries in insertion order, optionally including completed ones.
    pub fn query_due(&self, include_completed: bool) -> Vec<RevisionEntry> {
        self.entries
            .iter()
            .filter(|e| include_completed || !e.completed)
            .cloned()
            .collect()
    }

    /// Pending entries of one urgency class.
    pub fn query_by_urgency(
        &self,
        urgency: Urgency,
        reference: impl CalendarDay,
    ) -> Vec<RevisionEntry> {
        let reference = reference.calendar_day();
        self.entries
            .iter()
            .filter(|e| !e.completed && classify_urgency(e.scheduled_date, reference) == urgency)
            .cloned()
            .collect()
    }

    /// Count entries by state against `reference`.
    pub fn compute_stats(&self, reference: impl CalendarDay) -> RevisionStats {
        let reference = reference.calendar_day();
        let mut stats = RevisionStats {
            total: self.entries.len(),
            ..Default::default()
        };

        for entry in &self.entries {
            if entry.completed {
                stats.completed += 1;
                continue;
            }
            match classify_urgency(entry.scheduled_date, reference) {
                Urgency::Overdue => stats.overdue += 1,
                Urgency::Today => stats.today += 1,
                Urgency::Upcoming => stats.upcoming += 1,
            }
        }

        stats.completion_percent = schedule::completion_percentage(&self.entries);
        stats
    }

    fn entry_mut(&mut self, entry_id: &str) -> Result<&mut RevisionEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| SchedulerError::NotFound(entry_id.to_string()))
    }
}

/// Group entries by topic, keeping first-seen topic order.
pub fn group_by_topic(entries: impl IntoIterator<Item = RevisionEntry>) -> Vec<TopicGroup> {
    let mut groups: Vec<TopicGroup> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|g| g.topic_id == entry.topic_id) {
            Some(group) => group.entries.push(entry),
            None => groups.push(TopicGroup {
                topic_id: entry.topic_id.clone(),
                topic_name: entry.topic_name.clone(),
                subject: entry.subject.clone(),
                entries: vec![entry],
            }),
        }
    }

    groups
}
