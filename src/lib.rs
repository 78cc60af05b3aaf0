pub mod error;
pub mod form;
pub mod handoff;
pub mod schedule;
pub mod service;
pub mod utils;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::service::{check_hours, request_appointment};

pub use crate::form::{AppointmentDraft, AppointmentForm, Field};

pub use crate::handoff::{Handoff, CLINIC_WHATSAPP};

pub use crate::schedule::{validate, DayClass, Window, SATURDAY_HOURS, WEEKDAY_HOURS};

pub use crate::error::{AgendaError, Result};

pub use crate::utils::{today, today_iso};

pub mod prelude {
    pub use crate::error::{AgendaError, Result};
    pub use crate::form::{AppointmentDraft, AppointmentForm, Field};
    pub use crate::handoff::{Handoff, CLINIC_WHATSAPP};
    pub use crate::schedule::{validate, DayClass, Window, SATURDAY_HOURS, WEEKDAY_HOURS};
    pub use crate::service::{check_hours, request_appointment};
    pub use crate::utils::{today, today_iso};
}
