use crate::calendar::Calendar;
use crate::model::{Event, Reminder};
use anyhow::{bail, Result};
use chrono::NaiveDateTime;

/// Notification prête à partir pour un rappel arrivé à échéance.
#[derive(Debug, Clone)]
pub struct Notification {
    pub event_id: String,
    pub event_title: String,
    pub notice_at: NaiveDateTime,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, mail, etc.).
pub trait NotificationRenderer {
    fn render(&self, event: &Event, reminder: &Reminder) -> String;
}

/// Gabarit texte simple destiné à un futur mail/notification système.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNotification;

impl NotificationRenderer for TextNotification {
    fn render(&self, event: &Event, reminder: &Reminder) -> String {
        format!(
            "Rappel ({kind}) : \"{title}\" le {date} de {start} à {end}.\n{description}\n",
            kind = reminder.kind,
            title = event.title,
            date = event.date,
            start = event.start.format("%H:%M"),
            end = event.end.format("%H:%M"),
            description = event.description,
        )
    }
}

/// Prépare les notifications des rappels échus dans `[from, until)`,
/// triées par échéance.
pub fn prepare_notifications(
    calendar: &Calendar,
    from: NaiveDateTime,
    until: NaiveDateTime,
    renderer: &dyn NotificationRenderer,
) -> Result<Vec<Notification>> {
    if until < from {
        bail!("until must not precede from");
    }

    let mut due: Vec<(&Event, &Reminder)> = calendar
        .events()
        .values()
        .flat_map(|event| event.reminders.iter().map(move |reminder| (event, reminder)))
        .filter(|(_, reminder)| from <= reminder.at && reminder.at < until)
        .collect();
    due.sort_by_key(|(_, reminder)| reminder.at);

    Ok(due
        .into_iter()
        .map(|(event, reminder)| Notification {
            event_id: event.id.as_str().to_owned(),
            event_title: event.title.clone(),
            notice_at: reminder.at,
            content: renderer.render(event, reminder),
        })
        .collect())
}
