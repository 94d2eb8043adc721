//! Session-only social calendar.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum EventType {
    Work,
    #[default]
    Casual,
    Formal,
    Date,
    Sports,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub date: DateTime<Utc>,
}

impl CalendarEvent {
    /// `None` when the title is blank.
    pub fn new(title: &str, kind: EventType, date: DateTime<Utc>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            kind,
            date,
        })
    }

    fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

/// Append-only list of events, held for the current session.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    /// Build and append an event dated now. Blank titles are ignored.
    pub fn create(&mut self, title: &str, kind: EventType) -> Option<&CalendarEvent> {
        let event = CalendarEvent::new(title, kind, Utc::now())?;
        self.events.push(event);
        self.events.last()
    }

    pub fn all(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events falling on `day` in local time, in insertion order.
    pub fn on_date(&self, day: NaiveDate) -> Vec<CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.local_date() == day)
            .cloned()
            .collect()
    }

    pub fn today(&self) -> Vec<CalendarEvent> {
        self.on_date(Local::now().date_naive())
    }
}
