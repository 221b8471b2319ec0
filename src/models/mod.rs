//! Core value types and seed-file parsing.

pub mod agenda;
pub mod time;

pub use agenda::{demo_agenda, parse_agenda_json_file, parse_agenda_json_str, Agenda};
pub use time::{InvalidTimeFormat, TimeOfDay};
