use chrono::{Duration, NaiveTime};

pub(super) const SLOT_MINUTES: i64 = 15;

/// Première heure hors grille : la journée s'arrête avant 23h45, les
/// 15 dernières minutes n'ont pas de créneau propre.
pub(super) fn grid_end() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 45, 0).unwrap()
}

/// Débuts de créneaux d'une journée : 00:00, 00:15, …, 23:30.
pub(super) fn slot_starts() -> impl Iterator<Item = NaiveTime> {
    let step = Duration::minutes(SLOT_MINUTES);
    std::iter::successors(Some(NaiveTime::MIN), move |last| Some(*last + step))
        .take_while(|slot| *slot < grid_end())
}
