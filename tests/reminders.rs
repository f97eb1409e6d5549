#![forbid(unsafe_code)]
use agenda::{
    prepare_notifications, Calendar, CalendarError, EventId, ReminderKind, TextNotification,
};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

fn sample_event(cal: &mut Calendar) -> EventId {
    cal.add_event("Standup", "point quotidien", today(), t(10, 0), t(10, 30))
        .unwrap()
}

#[test]
fn add_and_list_reminders() {
    let mut cal = Calendar::new();
    let id = sample_event(&mut cal);

    cal.add_reminder(&id, at(today(), 8, 0), ReminderKind::Email)
        .unwrap();
    cal.add_reminder(&id, at(today(), 9, 0), ReminderKind::System)
        .unwrap();

    let reminders = cal.list_reminders(&id).unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].kind, ReminderKind::Email);
    assert_eq!(reminders[1].kind, ReminderKind::System);
}

#[test]
fn delete_reminder_shifts_following_indices() {
    let mut cal = Calendar::new();
    let id = sample_event(&mut cal);
    for hour in [7, 8, 9] {
        cal.add_reminder(&id, at(today(), hour, 0), ReminderKind::Email)
            .unwrap();
    }

    cal.delete_reminder(&id, 1).unwrap();

    let reminders = cal.list_reminders(&id).unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0].at, at(today(), 7, 0));
    assert_eq!(reminders[1].at, at(today(), 9, 0));
}

#[test]
fn delete_reminder_out_of_range_fails() {
    let mut cal = Calendar::new();
    let id = sample_event(&mut cal);
    cal.add_reminder(&id, at(today(), 8, 0), ReminderKind::Email)
        .unwrap();

    let err = cal.delete_reminder(&id, 5).unwrap_err();
    assert!(matches!(err, CalendarError::ReminderNotFound(5)));
    assert_eq!(cal.list_reminders(&id).unwrap().len(), 1);
}

#[test]
fn reminder_ops_on_unknown_event_fail() {
    let mut cal = Calendar::new();
    let ghost = EventId::new("absent");

    let err = cal
        .add_reminder(&ghost, at(today(), 8, 0), ReminderKind::Email)
        .unwrap_err();
    assert!(matches!(err, CalendarError::EventNotFound(_)));
    assert!(matches!(
        cal.delete_reminder(&ghost, 0).unwrap_err(),
        CalendarError::EventNotFound(_)
    ));
    assert!(matches!(
        cal.list_reminders(&ghost).unwrap_err(),
        CalendarError::EventNotFound(_)
    ));
}

#[test]
fn moving_event_to_new_date_resets_reminders() {
    let mut cal = Calendar::new();
    let id = sample_event(&mut cal);
    cal.add_reminder(&id, at(today(), 8, 0), ReminderKind::Email)
        .unwrap();

    let tomorrow = today() + Duration::days(1);
    cal.update_event(&id, "Standup", "", tomorrow, t(10, 0), t(10, 30))
        .unwrap();

    // l'évènement est reconstruit sous le même id, rappels compris
    assert!(cal.list_reminders(&id).unwrap().is_empty());
}

#[test]
fn notifications_cover_the_window_sorted() {
    let mut cal = Calendar::new();
    let id = sample_event(&mut cal);
    cal.add_reminder(&id, at(today(), 9, 0), ReminderKind::System)
        .unwrap();
    cal.add_reminder(&id, at(today(), 7, 0), ReminderKind::Email)
        .unwrap();
    cal.add_reminder(&id, at(today(), 23, 0), ReminderKind::Email)
        .unwrap();

    let renderer = TextNotification;
    let notifications = prepare_notifications(
        &cal,
        at(today(), 7, 0),
        at(today(), 12, 0),
        &renderer,
    )
    .unwrap();

    // borne basse incluse, borne haute exclue, tri par échéance
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].notice_at, at(today(), 7, 0));
    assert_eq!(notifications[1].notice_at, at(today(), 9, 0));
    assert!(notifications[0].content.contains("Standup"));
}

#[test]
fn notifications_reject_inverted_window() {
    let cal = Calendar::new();
    let renderer = TextNotification;
    assert!(prepare_notifications(
        &cal,
        at(today(), 12, 0),
        at(today(), 7, 0),
        &renderer,
    )
    .is_err());
}
