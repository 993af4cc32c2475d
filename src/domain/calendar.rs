//! Calendar events keyed by day

use crate::error::{Result, ToolbeltError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub time: String,
}

impl Event {
    pub fn new(title: &str, description: &str, time: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ToolbeltError::InvalidInput(
                "event title cannot be empty".to_string(),
            ));
        }
        let time = parse_time(time)?;
        Ok(Event {
            title: title.to_string(),
            description: description.trim().to_string(),
            time: time.format(TIME_FORMAT).to_string(),
        })
    }
}

/// Events grouped by `YYYY-MM-DD` key; keys sort chronologically
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    days: BTreeMap<String, Vec<Event>>,
}

impl Calendar {
    /// Add an event, keeping the day's events ordered by time
    pub fn add(&mut self, date: NaiveDate, event: Event) {
        let day = self.days.entry(date_key(date)).or_default();
        let position = day.partition_point(|e| e.time <= event.time);
        day.insert(position, event);
    }

    pub fn events_on(&self, date: NaiveDate) -> &[Event] {
        self.days
            .get(&date_key(date))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every non-empty day with its event count, oldest first
    pub fn days(&self) -> Vec<(String, usize)> {
        self.days
            .iter()
            .filter(|(_, events)| !events.is_empty())
            .map(|(day, events)| (day.clone(), events.len()))
            .collect()
    }

    /// Remove the `number`th (1-based) event of a day. Empty days are dropped.
    pub fn remove(&mut self, date: NaiveDate, number: usize) -> Result<Event> {
        let key = date_key(date);
        let day = self
            .days
            .get_mut(&key)
            .ok_or_else(|| ToolbeltError::NotFound(format!("no events on {}", key)))?;
        let index = crate::domain::note::index_from_number(number, day.len(), "Event")?;
        let removed = day.remove(index);
        if day.is_empty() {
            self.days.remove(&key);
        }
        Ok(removed)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ToolbeltError::InvalidInput(format!("Invalid date: '{}'", input)))
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| ToolbeltError::InvalidInput(format!("Invalid time: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_event_time_normalized() {
        let event = Event::new("Standup", "", "9:05").unwrap();
        assert_eq!(event.time, "09:05");
    }

    #[test]
    fn test_invalid_time_rejected() {
        let err = Event::new("x", "", "25:00").unwrap_err();
        assert!(err.to_string().contains("Invalid time"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("17/01/2025").is_err());
    }

    #[test]
    fn test_add_keeps_time_order() {
        let mut cal = Calendar::default();
        let date = day("2025-01-17");
        cal.add(date, Event::new("Lunch", "", "12:00").unwrap());
        cal.add(date, Event::new("Standup", "", "09:30").unwrap());
        cal.add(date, Event::new("Review", "", "12:00").unwrap());
        let titles: Vec<_> = cal.events_on(date).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "Lunch", "Review"]);
    }

    #[test]
    fn test_remove_drops_empty_day() {
        let mut cal = Calendar::default();
        let date = day("2025-01-17");
        cal.add(date, Event::new("Only", "", "10:00").unwrap());
        let removed = cal.remove(date, 1).unwrap();
        assert_eq!(removed.title, "Only");
        assert!(cal.days().is_empty());
        assert!(cal.remove(date, 1).is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut cal = Calendar::default();
        cal.add(day("2025-01-17"), Event::new("A", "desc", "08:00").unwrap());
        let json = serde_json::to_value(&cal).unwrap();
        assert_eq!(json["2025-01-17"][0]["title"], "A");
        assert_eq!(json["2025-01-17"][0]["time"], "08:00");
    }
}
