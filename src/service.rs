use crate::{
    error::Result,
    form::AppointmentDraft,
    handoff::{Handoff, CLINIC_WHATSAPP},
    schedule,
};

/// Check a date/time pair against clinic business hours
///
/// # Errors
///
/// Returns error if either string is malformed or the moment falls outside
/// the clinic's operating hours
pub fn check_hours(date: &str, time: &str) -> Result {
    let date = schedule::parse_date(date)?;
    let time = schedule::parse_time(time)?;
    schedule::validate(date, time)
}

/// Validate a draft and prepare the WhatsApp hand-off for it
///
/// The verdict depends only on `date` and `time`; the remaining fields just
/// flow into the message text.
///
/// # Errors
///
/// Returns error if the draft's date/time is malformed or outside business
/// hours; in that case nothing is handed off
pub fn request_appointment(draft: &AppointmentDraft) -> Result<Handoff> {
    if let Err(e) = check_hours(&draft.date, &draft.time) {
        log::warn!("appointment request rejected: {}", e);
        return Err(e);
    }

    log::info!(
        "appointment request accepted for {} at {}",
        draft.date,
        draft.time
    );
    Ok(Handoff::new(CLINIC_WHATSAPP, draft.whatsapp_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;

    #[test]
    fn test_check_hours_rejects_malformed_input() {
        assert_eq!(check_hours("tomorrow", "10:00"), Err(AgendaError::MalformedDate));
        assert_eq!(check_hours("2024-01-02", "10h"), Err(AgendaError::MalformedTime));
    }

    #[test]
    fn test_request_appointment_builds_handoff() {
        let draft = AppointmentDraft {
            name: "Ana".to_string(),
            pet_name: "Rex".to_string(),
            date: "2024-01-02".to_string(),
            time: "10:00".to_string(),
            notes: String::new(),
        };

        let handoff = request_appointment(&draft).unwrap();
        assert_eq!(handoff.destination, CLINIC_WHATSAPP);
        assert!(handoff.url().contains("wa.me/5586995607681"));
    }
}
