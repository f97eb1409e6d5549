mod day;
mod mutate;
mod types;
mod util;

pub use day::Day;
pub use types::CalendarError;

use crate::model::{Event, EventId, Reminder, ReminderKind};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Agenda : journées à créneaux + registre des évènements.
///
/// Invariant : un id présent dans le registre occupe les créneaux d'au plus
/// une journée, celle de sa date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    days: BTreeMap<NaiveDate, Day>,
    events: HashMap<EventId, Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &BTreeMap<NaiveDate, Day> {
        &self.days
    }
    pub fn events(&self) -> &HashMap<EventId, Event> {
        &self.events
    }

    /// Planifie un évènement et rend son id.
    ///
    /// Échoue si la date est passée ou si la plage chevauche un créneau déjà
    /// occupé ; la journée est créée à la volée si besoin.
    pub fn add_event(
        &mut self,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<EventId, CalendarError> {
        if date < Local::now().date_naive() {
            return Err(CalendarError::DateLowerThanToday(date));
        }
        let event = Event::new(title, description, date, start, end);
        let day = self.days.entry(date).or_insert_with(|| Day::new(date));
        day.add_event(&event.id, start, end)?;
        let id = event.id.clone();
        self.events.insert(id.clone(), event);
        Ok(id)
    }

    pub fn update_event(
        &mut self,
        event_id: &EventId,
        title: &str,
        description: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), CalendarError> {
        mutate::update_event(self, event_id, title, description, date, start, end)
    }

    pub fn delete_event(&mut self, event_id: &EventId) -> Result<(), CalendarError> {
        mutate::delete_event(self, event_id)
    }

    /// Créneaux libres d'une date ; vide si aucune journée n'est enregistrée.
    pub fn find_available_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        self.days.get(&date).map(Day::free_slots).unwrap_or_default()
    }

    /// Évènements de `[start, end]` (bornes incluses), groupés par date.
    ///
    /// Les dates sans évènement sont absentes du résultat ; chaque groupe est
    /// trié par heure de début.
    pub fn find_events(&self, start: NaiveDate, end: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut found: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in self.events.values() {
            if start <= event.date && event.date <= end {
                found.entry(event.date).or_default().push(event.clone());
            }
        }
        for group in found.values_mut() {
            group.sort_by(|a, b| {
                a.start
                    .cmp(&b.start)
                    .then_with(|| a.id.as_str().cmp(b.id.as_str()))
            });
        }
        found
    }

    pub fn add_reminder(
        &mut self,
        event_id: &EventId,
        at: NaiveDateTime,
        kind: ReminderKind,
    ) -> Result<(), CalendarError> {
        self.event_mut(event_id)?.add_reminder(at, kind);
        Ok(())
    }

    pub fn delete_reminder(
        &mut self,
        event_id: &EventId,
        index: usize,
    ) -> Result<(), CalendarError> {
        self.event_mut(event_id)?
            .delete_reminder(index)
            .map(|_| ())
            .ok_or(CalendarError::ReminderNotFound(index))
    }

    pub fn list_reminders(&self, event_id: &EventId) -> Result<&[Reminder], CalendarError> {
        Ok(&self.event(event_id)?.reminders)
    }

    fn event(&self, event_id: &EventId) -> Result<&Event, CalendarError> {
        self.events
            .get(event_id)
            .ok_or_else(|| CalendarError::EventNotFound(event_id.as_str().to_owned()))
    }

    fn event_mut(&mut self, event_id: &EventId) -> Result<&mut Event, CalendarError> {
        self.events
            .get_mut(event_id)
            .ok_or_else(|| CalendarError::EventNotFound(event_id.as_str().to_owned()))
    }
}
