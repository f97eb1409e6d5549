use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifiant fort pour Event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(String);

impl EventId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canal de livraison d'un rappel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Email,
    System,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Email => "email",
            Self::System => "system",
        })
    }
}

impl std::str::FromStr for ReminderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "email" | "mail" => Ok(Self::Email),
            "system" | "sys" => Ok(Self::System),
            other => Err(format!("unknown reminder kind: {other}")),
        }
    }
}

/// Rappel programmé pour un évènement (date et heure naïves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub at: NaiveDateTime,
    #[serde(default)]
    pub kind: ReminderKind,
}

impl Reminder {
    pub fn new(at: NaiveDateTime, kind: ReminderKind) -> Self {
        Self { at, kind }
    }
}

/// Évènement planifié sur une journée, plage `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reminders: Vec<Reminder>,
}

impl Event {
    pub fn new<T: Into<String>, D: Into<String>>(
        title: T,
        description: D,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self::with_id(EventId::random(), title, description, date, start, end)
    }

    /// Reconstruit un évènement en conservant un identifiant existant.
    pub fn with_id<T: Into<String>, D: Into<String>>(
        id: EventId,
        title: T,
        description: D,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            date,
            start,
            end,
            reminders: Vec::new(),
        }
    }

    pub fn add_reminder(&mut self, at: NaiveDateTime, kind: ReminderKind) {
        self.reminders.push(Reminder::new(at, kind));
    }

    /// Retire le rappel à l'index donné ; les index suivants glissent d'un cran.
    pub fn delete_reminder(&mut self, index: usize) -> Option<Reminder> {
        (index < self.reminders.len()).then(|| self.reminders.remove(index))
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
