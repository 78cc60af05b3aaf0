use crate::handoff::Handoff;
use crate::service;
use serde::{Deserialize, Serialize};

/// Closed set of editable appointment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    PetName,
    Date,
    Time,
    Notes,
}

/// In-progress appointment request, edited one field at a time.
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`, matching what date/time
/// inputs produce; both are parsed at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub name: String,
    pub pet_name: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl AppointmentDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::PetName => self.pet_name = value,
            Field::Date => self.date = value,
            Field::Time => self.time = value,
            Field::Notes => self.notes = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::PetName => &self.pet_name,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Notes => &self.notes,
        }
    }

    /// Text sent to the clinic, field order is fixed
    #[must_use]
    pub fn whatsapp_text(&self) -> String {
        format!(
            "Olá! Gostaria de agendar uma consulta:\n\nNome: {}\nPet: {}\nData: {}\nHorário: {}\nObservações: {}",
            self.name, self.pet_name, self.date, self.time, self.notes
        )
    }
}

/// Form state: the draft plus the currently displayed validation error.
///
/// Editing any field clears the error, so a stale message never survives a
/// correction. Submitting never clears the draft.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    draft: AppointmentDraft,
    error: Option<String>,
}

impl AppointmentForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_changed(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.error = None;
    }

    /// Validate the draft against clinic hours and prepare the hand-off
    ///
    /// On failure the Portuguese message is stored for display and `None`
    /// is returned; nothing is sent onward.
    pub fn submit(&mut self) -> Option<Handoff> {
        self.error = None;

        match service::request_appointment(&self.draft) {
            Ok(handoff) => Some(handoff),
            Err(e) => {
                self.error = Some(e.to_portuguese());
                None
            }
        }
    }
}
