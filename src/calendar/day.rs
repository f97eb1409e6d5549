use super::types::CalendarError;
use super::util;
use crate::model::EventId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grille des créneaux d'une journée, pas de 15 minutes.
///
/// Chaque créneau est libre (`None`) ou tient exactement un id d'évènement.
/// La grille ne référence jamais l'évènement lui-même : le registre reste
/// dans [`Calendar`](super::Calendar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub slots: BTreeMap<NaiveTime, Option<EventId>>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        let slots = util::slot_starts().map(|slot| (slot, None)).collect();
        Self { date, slots }
    }

    /// Créneaux encore libres, en ordre chronologique.
    pub fn free_slots(&self) -> Vec<NaiveTime> {
        self.slots
            .iter()
            .filter(|(_, held)| held.is_none())
            .map(|(slot, _)| *slot)
            .collect()
    }

    pub fn holds(&self, event_id: &EventId) -> bool {
        self.slots.values().any(|held| held.as_ref() == Some(event_id))
    }

    /// Réserve tous les créneaux de `[start, end)` pour `event_id`.
    ///
    /// La plage entière est validée avant la première écriture : un créneau
    /// occupé fait échouer la réservation sans toucher à la grille. Une plage
    /// vide ou inversée ne couvre aucun créneau et ne réserve rien.
    pub fn add_event(
        &mut self,
        event_id: &EventId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), CalendarError> {
        if start > end {
            return Ok(());
        }
        if let Some(taken) = self.first_conflict(start, end) {
            return Err(CalendarError::SlotNotAvailable(taken));
        }
        for (_, held) in self.slots.range_mut(start..end) {
            *held = Some(event_id.clone());
        }
        Ok(())
    }

    /// Libère tous les créneaux tenus par `event_id`.
    pub fn delete_event(&mut self, event_id: &EventId) -> Result<(), CalendarError> {
        if self.clear_event(event_id).is_empty() {
            return Err(CalendarError::EventNotFound(event_id.as_str().to_owned()));
        }
        Ok(())
    }

    /// Déplace la réservation de `event_id` vers `[start, end)`.
    ///
    /// Les anciens créneaux sont d'abord libérés ; si la nouvelle plage est
    /// en conflit, ils sont restaurés et l'erreur remonte. Ne se plaint pas
    /// si l'id ne tenait aucun créneau.
    pub fn update_event(
        &mut self,
        event_id: &EventId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<(), CalendarError> {
        let previous = self.clear_event(event_id);
        if let Err(err) = self.add_event(event_id, start, end) {
            for slot in previous {
                if let Some(held) = self.slots.get_mut(&slot) {
                    *held = Some(event_id.clone());
                }
            }
            return Err(err);
        }
        Ok(())
    }

    /// Libère les créneaux de `event_id` et rend leurs clés ; silencieux si
    /// l'id ne tenait rien.
    pub(super) fn clear_event(&mut self, event_id: &EventId) -> Vec<NaiveTime> {
        let mut freed = Vec::new();
        for (slot, held) in self.slots.iter_mut() {
            if held.as_ref() == Some(event_id) {
                *held = None;
                freed.push(*slot);
            }
        }
        freed
    }

    fn first_conflict(&self, start: NaiveTime, end: NaiveTime) -> Option<NaiveTime> {
        self.slots
            .range(start..end)
            .find(|(_, held)| held.is_some())
            .map(|(slot, _)| *slot)
    }
}
