//! Spaced repetition schedule generation.
//!
//! A completed topic is re-presented for review at a fixed set of day
//! offsets past the completion date. All arithmetic happens at calendar-day
//! granularity; time of day never reaches an entry.

pub mod urgency;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SchedulerError};
use crate::types::{RevisionEntry, TopicRef};

pub use urgency::{classify_urgency, day_difference, format_relative_label, study_day, today};

/// Canonical review offsets in days.
pub const DEFAULT_INTERVALS: [u32; 4] = [1, 3, 7, 21];

/// Anything that pins down a calendar day.
///
/// Dates pass through unchanged; date-times are truncated to their date.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Validated set of review offsets, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct IntervalSet(Vec<u32>);

impl IntervalSet {
    /// Build an interval set, rejecting empty input and duplicates.
    pub fn new(days: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut days: Vec<u32> = days.into_iter().collect();
        if days.is_empty() {
            return Err(SchedulerError::InvalidIntervalConfiguration(
                "interval set is empty".to_string(),
            ));
        }

        days.sort_unstable();
        if let Some(pair) = days.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SchedulerError::InvalidIntervalConfiguration(format!(
                "duplicate interval: {}",
                pair[0]
            )));
        }

        Ok(Self(days))
    }

    /// Parse a comma-separated list such as `"1,3,7,21"`.
    pub fn parse(s: &str) -> Result<Self> {
        let days = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>().map_err(|_| {
                    SchedulerError::InvalidIntervalConfiguration(format!(
                        "not a day count: {part}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(days)
    }

    pub fn days(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IntervalSet {
    fn default() -> Self {
        Self(DEFAULT_INTERVALS.to_vec())
    }
}

impl TryFrom<Vec<u32>> for IntervalSet {
    type Error = SchedulerError;

    fn try_from(days: Vec<u32>) -> Result<Self> {
        Self::new(days)
    }
}

impl From<IntervalSet> for Vec<u32> {
    fn from(set: IntervalSet) -> Self {
        set.0
    }
}

/// Generate one pending entry per interval for a topic completed on
/// `completion`.
///
/// Entries come back in ascending interval order. The topic is not validated
/// here. Fails with `InvalidDate` when a review would fall past the last
/// representable date.
pub fn generate_schedule(
    intervals: &IntervalSet,
    completion: impl CalendarDay,
    topic: &TopicRef,
) -> Result<Vec<RevisionEntry>> {
    let completed_on = completion.calendar_day();

    intervals
        .days()
        .iter()
        .map(|&interval_day| {
            let scheduled_date = completed_on
                .checked_add_days(Days::new(u64::from(interval_day)))
                .ok_or_else(|| {
                    SchedulerError::InvalidDate(format!("{completed_on} + {interval_day} days"))
                })?;

            Ok(RevisionEntry {
                id: Uuid::new_v4().to_string(),
                topic_id: topic.id.clone(),
                topic_name: topic.name.clone(),
                subject: topic.subject.clone(),
                interval_day,
                scheduled_date,
                completed: false,
            })
        })
        .collect()
}

/// Human-readable mastery label for an interval.
pub fn interval_label(interval_day: u32) -> String {
    match interval_day {
        1 => "Day-1 (First Review)".to_string(),
        3 => "Day-3 (Early Retention)".to_string(),
        7 => "Day-7 (Weekly Check)".to_string(),
        21 => "Day-21 (Mastery)".to_string(),
        n => format!("Day-{n}"),
    }
}

/// Share of completed entries as a rounded percentage; 0 for no entries.
pub fn completion_percentage(entries: &[RevisionEntry]) -> u8 {
    if entries.is_empty() {
        return 0;
    }
    let completed = entries.iter().filter(|e| e.completed).count();
    ((completed as f64 / entries.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dynamic_programming() -> TopicRef {
        TopicRef::new("topic-1", "Dynamic Programming", "Algorithms")
    }

    #[test]
    fn canonical_schedule_for_dynamic_programming() {
        let entries = generate_schedule(
            &IntervalSet::default(),
            date(2026, 2, 10),
            &dynamic_programming(),
        )
        .unwrap();

        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.scheduled_date).collect();
        assert_eq!(
            dates,
            vec![
                date(2026, 2, 11),
                date(2026, 2, 13),
                date(2026, 2, 17),
                date(2026, 3, 3),
            ]
        );
        assert!(entries.iter().all(|e| !e.completed));
        assert!(entries.iter().all(|e| e.topic_name == "Dynamic Programming"));
        assert!(entries.iter().all(|e| e.subject == "Algorithms"));
    }

    #[test]
    fn schedule_ignores_time_of_day() {
        let topic = dynamic_programming();
        let intervals = IntervalSet::default();
        let day = date(2026, 2, 10);

        let early = day.and_time(NaiveTime::from_hms_opt(0, 1, 0).unwrap());
        let late = day.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        let zoned = Utc.from_utc_datetime(&late);

        let expected: Vec<NaiveDate> = generate_schedule(&intervals, day, &topic)
            .unwrap()
            .iter()
            .map(|e| e.scheduled_date)
            .collect();
        for entries in [
            generate_schedule(&intervals, early, &topic).unwrap(),
            generate_schedule(&intervals, late, &topic).unwrap(),
            generate_schedule(&intervals, zoned, &topic).unwrap(),
        ] {
            let dates: Vec<NaiveDate> = entries.iter().map(|e| e.scheduled_date).collect();
            assert_eq!(dates, expected);
        }
    }

    #[test]
    fn schedule_has_one_entry_per_interval_in_order() {
        let intervals = IntervalSet::new([21, 1, 7, 3]).unwrap();
        let entries =
            generate_schedule(&intervals, date(2026, 2, 10), &dynamic_programming()).unwrap();

        let days: Vec<u32> = entries.iter().map(|e| e.interval_day).collect();
        assert_eq!(days, vec![1, 3, 7, 21]);
        assert_eq!(entries.len(), intervals.len());
    }

    #[test]
    fn schedule_entries_get_distinct_ids() {
        let entries = generate_schedule(
            &IntervalSet::default(),
            date(2026, 2, 10),
            &dynamic_programming(),
        )
        .unwrap();
        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn schedule_past_last_date_is_rejected() {
        let near_end = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();
        let result = generate_schedule(&IntervalSet::default(), near_end, &dynamic_programming());
        assert!(matches!(result, Err(SchedulerError::InvalidDate(_))));

        let fits = IntervalSet::new([1, 2]).unwrap();
        let entries = generate_schedule(&fits, near_end, &dynamic_programming()).unwrap();
        assert_eq!(entries[1].scheduled_date, NaiveDate::MAX);
    }

    #[test]
    fn empty_interval_set_rejected() {
        let result = IntervalSet::new(Vec::new());
        assert!(matches!(
            result,
            Err(SchedulerError::InvalidIntervalConfiguration(_))
        ));
    }

    #[test]
    fn duplicate_interval_rejected() {
        let result = IntervalSet::new([1, 3, 3, 21]);
        assert_eq!(
            result,
            Err(SchedulerError::InvalidIntervalConfiguration(
                "duplicate interval: 3".to_string()
            ))
        );
    }

    #[test]
    fn parse_interval_list() {
        let set = IntervalSet::parse(" 7, 1 ,3,21").unwrap();
        assert_eq!(set.days(), &[1, 3, 7, 21]);
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());

        assert!(IntervalSet::parse("1,x").is_err());
        assert!(IntervalSet::parse("").is_err());
    }

    #[test]
    fn interval_set_deserialization_validates() {
        let set: IntervalSet = serde_json::from_str("[3, 1]").unwrap();
        assert_eq!(set.days(), &[1, 3]);
        assert!(serde_json::from_str::<IntervalSet>("[]").is_err());
    }

    #[test]
    fn labels_for_known_and_custom_intervals() {
        assert_eq!(interval_label(1), "Day-1 (First Review)");
        assert_eq!(interval_label(21), "Day-21 (Mastery)");
        assert_eq!(interval_label(14), "Day-14");
    }

    #[test]
    fn completion_percentage_rounds() {
        let mut entries = generate_schedule(
            &IntervalSet::new([1, 2, 3]).unwrap(),
            date(2026, 2, 10),
            &dynamic_programming(),
        )
        .unwrap();
        assert_eq!(completion_percentage(&entries), 0);
        entries[0].completed = true;
        assert_eq!(completion_percentage(&entries), 33);
        entries[1].completed = true;
        assert_eq!(completion_percentage(&entries), 67);
        assert_eq!(completion_percentage(&[]), 0);
    }
}
