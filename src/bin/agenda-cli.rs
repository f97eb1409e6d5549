#![forbid(unsafe_code)]
use agenda::{
    io,
    model::{EventId, ReminderKind},
    notification::{prepare_notifications, TextNotification},
    storage::{JsonStorage, Storage},
    Calendar,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'agenda à créneaux (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'agenda
    #[arg(long, global = true, default_value = "agenda.json")]
    agenda: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planifier un évènement
    AddEvent {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
    },

    /// Modifier un évènement (champs et plage, date comprise)
    UpdateEvent {
        #[arg(long)]
        event_id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },

    /// Supprimer un évènement et libérer ses créneaux
    DeleteEvent {
        #[arg(long)]
        event_id: String,
    },

    /// Lister les créneaux libres d'une date
    Slots {
        #[arg(long)]
        date: String,
    },

    /// Lister les évènements d'une plage de dates, et optionnellement exporter
    List {
        /// Borne basse incluse (défaut : aujourd'hui)
        #[arg(long)]
        from: Option<String>,
        /// Borne haute incluse (défaut : from + 30 jours)
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Attacher un rappel à un évènement
    AddReminder {
        #[arg(long)]
        event_id: String,
        /// YYYY-MM-DDTHH:MM
        #[arg(long)]
        at: String,
        /// email | system
        #[arg(long, default_value = "email")]
        kind: String,
    },

    /// Retirer un rappel par index
    DeleteReminder {
        #[arg(long)]
        event_id: String,
        #[arg(long)]
        index: usize,
    },

    /// Lister les rappels d'un évènement
    Reminders {
        #[arg(long)]
        event_id: String,
    },

    /// Importer des évènements depuis un CSV
    ImportEvents {
        #[arg(long)]
        csv: String,
    },

    /// Rendre les notifications des rappels échus
    Notify {
        /// Début de fenêtre (défaut : maintenant)
        #[arg(long)]
        from: Option<String>,
        /// Fin de fenêtre exclue (défaut : from + 1 jour)
        #[arg(long)]
        until: Option<String>,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.agenda)?;
    let mut calendar = storage.load().unwrap_or_else(|_| Calendar::new());

    let code = match cli.cmd {
        Commands::AddEvent {
            title,
            description,
            date,
            start,
            end,
        } => {
            let date = io::parse_date(&date)?;
            let start = io::parse_slot_time(&start)?;
            let end = io::parse_slot_time(&end)?;
            let id = calendar.add_event(&title, &description, date, start, end)?;
            storage.save(&calendar)?;
            println!("{}", id.as_str());
            0
        }
        Commands::UpdateEvent {
            event_id,
            title,
            description,
            date,
            start,
            end,
        } => {
            let id = EventId::new(event_id);
            let date = io::parse_date(&date)?;
            let start = io::parse_slot_time(&start)?;
            let end = io::parse_slot_time(&end)?;
            calendar.update_event(&id, &title, &description, date, start, end)?;
            storage.save(&calendar)?;
            0
        }
        Commands::DeleteEvent { event_id } => {
            let id = EventId::new(event_id);
            calendar.delete_event(&id)?;
            storage.save(&calendar)?;
            0
        }
        Commands::Slots { date } => {
            let date = io::parse_date(&date)?;
            for slot in calendar.find_available_slots(date) {
                println!("{}", slot.format("%H:%M"));
            }
            0
        }
        Commands::List {
            from,
            to,
            out_json,
            out_csv,
        } => {
            let from = match from {
                Some(raw) => io::parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            let to = match to {
                Some(raw) => io::parse_date(&raw)?,
                None => from + Duration::days(30),
            };
            if let Some(path) = out_json {
                io::export_calendar_json(path, &calendar)?;
            }
            if let Some(path) = out_csv {
                io::export_events_csv(path, &calendar)?;
            }
            // impression compacte, groupée par date
            for (date, events) in calendar.find_events(from, to) {
                println!("{date}");
                for e in &events {
                    println!(
                        "  {} | {} → {} | {}",
                        e.id.as_str(),
                        e.start.format("%H:%M"),
                        e.end.format("%H:%M"),
                        e.title
                    );
                }
            }
            0
        }
        Commands::AddReminder {
            event_id,
            at,
            kind,
        } => {
            let id = EventId::new(event_id);
            let at = io::parse_date_time(&at)?;
            let kind: ReminderKind = kind.parse().map_err(anyhow::Error::msg)?;
            calendar.add_reminder(&id, at, kind)?;
            storage.save(&calendar)?;
            0
        }
        Commands::DeleteReminder { event_id, index } => {
            let id = EventId::new(event_id);
            calendar.delete_reminder(&id, index)?;
            storage.save(&calendar)?;
            0
        }
        Commands::Reminders { event_id } => {
            let id = EventId::new(event_id);
            for (index, reminder) in calendar.list_reminders(&id)?.iter().enumerate() {
                println!(
                    "{index} | {} | {}",
                    reminder.at.format("%Y-%m-%dT%H:%M"),
                    reminder.kind
                );
            }
            0
        }
        Commands::ImportEvents { csv } => {
            let drafts = io::import_events_csv(csv)?;
            let mut imported = 0usize;
            for draft in drafts {
                let id = calendar.add_event(
                    &draft.title,
                    &draft.description,
                    draft.date,
                    draft.start,
                    draft.end,
                )?;
                for reminder in draft.reminders {
                    calendar.add_reminder(&id, reminder.at, reminder.kind)?;
                }
                imported += 1;
            }
            storage.save(&calendar)?;
            println!("{imported} évènement(s) importé(s)");
            0
        }
        Commands::Notify { from, until, out } => {
            let from = match from {
                Some(raw) => io::parse_date_time(&raw)?,
                None => Local::now().naive_local(),
            };
            let until = match until {
                Some(raw) => io::parse_date_time(&raw)?,
                None => from + Duration::days(1),
            };
            let renderer = TextNotification;
            let notifications = prepare_notifications(&calendar, from, until, &renderer)?;
            if notifications.is_empty() {
                println!("Aucun rappel à échéance");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                let mut contents = String::new();
                for n in &notifications {
                    println!(
                        "{} | {} | {}",
                        n.notice_at.format("%Y-%m-%dT%H:%M"),
                        n.event_id,
                        n.event_title
                    );
                    contents.push_str(&n.content);
                }
                if let Some(path) = out {
                    std::fs::write(&path, contents)?;
                }
                0
            }
        }
    };

    std::process::exit(code);
}
