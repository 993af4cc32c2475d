//! Calendar use case

use crate::domain::calendar::{Calendar, Event};
use crate::error::Result;
use crate::infrastructure::workspace::{Store, CALENDAR_FILE};
use chrono::NaiveDate;
use tracing::info;

/// Service over `calendar_events.json`
pub struct CalendarService<S: Store> {
    store: S,
}

impl<S: Store> CalendarService<S> {
    pub fn new(store: S) -> Self {
        CalendarService { store }
    }

    fn load(&self) -> Result<Calendar> {
        self.store.load_json(CALENDAR_FILE)
    }

    pub fn add(&self, date: NaiveDate, event: Event) -> Result<()> {
        let mut calendar = self.load()?;
        info!(%date, title = %event.title, time = %event.time, "event added");
        calendar.add(date, event);
        self.store.save_json(CALENDAR_FILE, &calendar)
    }

    /// Events of one day ordered by time; empty when the day has none
    pub fn view(&self, date: NaiveDate) -> Result<Vec<Event>> {
        Ok(self.load()?.events_on(date).to_vec())
    }

    /// Every day with events and how many, oldest first
    pub fn list(&self) -> Result<Vec<(String, usize)>> {
        Ok(self.load()?.days())
    }

    pub fn delete(&self, date: NaiveDate, number: usize) -> Result<Event> {
        let mut calendar = self.load()?;
        let removed = calendar.remove(date, number)?;
        self.store.save_json(CALENDAR_FILE, &calendar)?;
        info!(%date, title = %removed.title, "event deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::parse_date;
    use crate::error::ToolbeltError;
    use crate::infrastructure::Workspace;
    use tempfile::TempDir;

    #[test]
    fn test_calendar_round_trip_through_store() {
        let temp = TempDir::new().unwrap();
        let calendar = CalendarService::new(Workspace::new(temp.path().to_path_buf()));
        let jan = parse_date("2025-01-17").unwrap();
        let feb = parse_date("2025-02-01").unwrap();

        calendar.add(feb, Event::new("Dentist", "", "15:00").unwrap()).unwrap();
        calendar.add(jan, Event::new("Lunch", "Tacos", "12:00").unwrap()).unwrap();
        calendar.add(jan, Event::new("Standup", "", "09:00").unwrap()).unwrap();

        assert_eq!(
            calendar.list().unwrap(),
            vec![("2025-01-17".to_string(), 2), ("2025-02-01".to_string(), 1)]
        );
        assert_eq!(calendar.view(jan).unwrap()[0].title, "Standup");
        assert!(calendar.view(parse_date("2030-01-01").unwrap()).unwrap().is_empty());

        assert_eq!(calendar.delete(feb, 1).unwrap().title, "Dentist");
        assert_eq!(calendar.list().unwrap().len(), 1);
        assert!(matches!(
            calendar.delete(jan, 5),
            Err(ToolbeltError::NotFound(_))
        ));
    }
}
