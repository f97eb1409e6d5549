use crate::calendar::Calendar;
use crate::model::{Event, Reminder, ReminderKind};
use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Brouillon d'évènement lu depuis un import, pas encore planifié.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub reminders: Vec<Reminder>,
}

/// Import d'évènements depuis CSV: header `title,description,date,start,end[,reminders]`
pub fn import_events_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EventDraft>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let title = rec.get(0).context("missing title")?.trim();
        let description = rec.get(1).context("missing description")?.trim();
        let date = rec.get(2).context("missing date")?.trim();
        let start = rec.get(3).context("missing start")?.trim();
        let end = rec.get(4).context("missing end")?.trim();
        if title.is_empty() {
            bail!("invalid event row (empty title)");
        }
        let mut draft = EventDraft {
            title: title.to_owned(),
            description: description.to_owned(),
            date: parse_date(date)?,
            start: parse_slot_time(start)?,
            end: parse_slot_time(end)?,
            reminders: Vec::new(),
        };
        if let Some(raw) = rec.get(5) {
            let raw = raw.trim();
            if !raw.is_empty() {
                draft.reminders = parse_reminders(raw)
                    .with_context(|| format!("invalid reminders value for event {title}"))?;
            }
        }
        out.push(draft);
    }
    Ok(out)
}

/// Date `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Heure `HH:MM` ou `HH:MM:SS`.
pub fn parse_slot_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .with_context(|| format!("invalid time: {raw}"))
}

/// Horodatage `YYYY-MM-DDTHH:MM` (le `T` peut être une espace).
pub fn parse_date_time(raw: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .with_context(|| format!("invalid datetime: {raw}"))
}

fn parse_reminders(raw: &str) -> anyhow::Result<Vec<Reminder>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| parse_reminder_chunk(chunk.trim()))
        .collect()
}

/// `2025-10-01T09:00` ou `2025-10-01T09:00@system`.
fn parse_reminder_chunk(chunk: &str) -> anyhow::Result<Reminder> {
    if let Some((at_raw, kind_raw)) = chunk.split_once('@') {
        let at = parse_date_time(at_raw.trim())?;
        let kind: ReminderKind = kind_raw.trim().parse().map_err(anyhow::Error::msg)?;
        Ok(Reminder::new(at, kind))
    } else {
        Ok(Reminder::new(parse_date_time(chunk)?, ReminderKind::default()))
    }
}

/// Export JSON de l'agenda complet (jolie mise en forme)
pub fn export_calendar_json<P: AsRef<Path>>(path: P, calendar: &Calendar) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(calendar)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des évènements: header `id,title,description,date,start,end,reminders`
pub fn export_events_csv<P: AsRef<Path>>(path: P, calendar: &Calendar) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "title", "description", "date", "start", "end", "reminders"])?;
    let mut events: Vec<&Event> = calendar.events().values().collect();
    events.sort_by_key(|e| (e.date, e.start));
    for e in events {
        let date = e.date.to_string();
        let start = e.start.format("%H:%M").to_string();
        let end = e.end.format("%H:%M").to_string();
        let reminders = e
            .reminders
            .iter()
            .map(|r| format!("{}@{}", r.at.format("%Y-%m-%dT%H:%M"), r.kind))
            .collect::<Vec<_>>()
            .join(";");
        w.write_record([
            e.id.as_str(),
            e.title.as_str(),
            e.description.as_str(),
            date.as_str(),
            start.as_str(),
            end.as_str(),
            reminders.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
