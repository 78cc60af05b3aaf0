use crate::schedule::DayClass;
use thiserror::Error;

pub type Result<T = (), E = AgendaError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("Clinic is closed on Sundays")]
    ClosedOnSunday,

    #[error("Requested time is outside {day:?} hours ({start}-{end})")]
    OutsideHours {
        day: DayClass,
        start: String,
        end: String,
    },

    #[error("Date could not be parsed (expected YYYY-MM-DD)")]
    MalformedDate,

    #[error("Time could not be parsed (expected HH:MM)")]
    MalformedTime,

    #[error("Failed to open WhatsApp hand-off: {0}")]
    HandoffFailed(String),
}

impl AgendaError {
    /// Translate error to Portuguese for UI display
    pub fn to_portuguese(&self) -> String {
        match self {
            Self::ClosedOnSunday => "A clínica está fechada aos domingos.".to_string(),
            Self::OutsideHours { day, start, end } => match day {
                DayClass::Saturday => {
                    format!("Aos sábados, a clínica funciona das {} às {}.", start, end)
                }
                _ => format!(
                    "De segunda a sexta, a clínica funciona das {} às {}.",
                    start, end
                ),
            },
            Self::MalformedDate => "Data inválida.".to_string(),
            Self::MalformedTime => "Horário inválido.".to_string(),
            Self::HandoffFailed(e) => format!("Não foi possível abrir o WhatsApp: {}", e),
        }
    }
}
