use super::day::Day;
use super::types::CalendarError;
use super::Calendar;
use crate::model::{Event, EventId};
use chrono::{NaiveDate, NaiveTime};

pub(super) fn update_event(
    calendar: &mut Calendar,
    event_id: &EventId,
    title: &str,
    description: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), CalendarError> {
    let current_date = calendar.event(event_id)?.date;
    if current_date != date {
        return move_to_date(calendar, event_id, title, description, date, start, end);
    }

    {
        let event = calendar.event_mut(event_id)?;
        event.title = title.to_owned();
        event.description = description.to_owned();
        event.start = start;
        event.end = end;
    }

    // L'id ne devrait apparaître que dans sa propre journée, mais on agit
    // partout où on le trouve.
    for day in calendar.days.values_mut() {
        if day.holds(event_id) {
            day.update_event(event_id, start, end)?;
        }
    }
    Ok(())
}

/// Changement de date : la nouvelle journée est réservée avant de défaire
/// l'ancienne, un conflit laisse donc l'agenda intact. L'évènement est
/// reconstruit sous le même id, rappels remis à zéro.
fn move_to_date(
    calendar: &mut Calendar,
    event_id: &EventId,
    title: &str,
    description: &str,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(), CalendarError> {
    let day = calendar
        .days
        .entry(date)
        .or_insert_with(|| Day::new(date));
    day.add_event(event_id, start, end)?;

    for day in calendar.days.values_mut() {
        if day.date != date && day.holds(event_id) {
            day.clear_event(event_id);
        }
    }

    let replacement = Event::with_id(event_id.clone(), title, description, date, start, end);
    calendar.events.insert(event_id.clone(), replacement);
    Ok(())
}

pub(super) fn delete_event(
    calendar: &mut Calendar,
    event_id: &EventId,
) -> Result<(), CalendarError> {
    if calendar.events.remove(event_id).is_none() {
        return Err(CalendarError::EventNotFound(event_id.as_str().to_owned()));
    }

    // Un évènement n'occupe les créneaux que d'une seule journée.
    for day in calendar.days.values_mut() {
        if day.holds(event_id) {
            day.clear_event(event_id);
            break;
        }
    }
    Ok(())
}
