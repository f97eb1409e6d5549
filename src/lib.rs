#![forbid(unsafe_code)]
//! Agenda — bibliothèque d'agenda local à créneaux fixes (sans BD).
//!
//! - Journées découpées en créneaux de 15 minutes (00:00 → 23:30).
//! - Détection de conflits à la réservation, mises à jour sûres.
//! - Rappels par évènement, rendus en notifications texte.
//! - Stockage fichiers (JSON/CSV) ; dates et heures naïves, pas de fuseau.

pub mod calendar;
pub mod io;
pub mod model;
pub mod notification;
pub mod storage;

pub use calendar::{Calendar, CalendarError, Day};
pub use model::{Event, EventId, Reminder, ReminderKind};
pub use notification::{
    prepare_notifications, Notification, NotificationRenderer, TextNotification,
};
pub use storage::{JsonStorage, Storage};
