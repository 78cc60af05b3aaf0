use serde::{Deserialize, Serialize};

/// Clinic WhatsApp number, international format without `+` (wa.me form).
pub const CLINIC_WHATSAPP: &str = "5586995607681";

/// A prepared hand-off to the external messaging application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    pub destination: String,
    pub message: String,
}

impl Handoff {
    #[must_use]
    pub fn new(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// WhatsApp deep link with the message percent-encoded for the URI
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.destination,
            urlencoding::encode(&self.message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_targets_clinic_number() {
        let handoff = Handoff::new(CLINIC_WHATSAPP, "Olá!");
        assert!(handoff.url().starts_with("https://wa.me/5586995607681?text="));
    }

    #[test]
    fn test_url_encodes_message_text() {
        let handoff = Handoff::new(CLINIC_WHATSAPP, "Nome: Ana\nPet: Rex");
        let url = handoff.url();
        assert!(url.contains("Nome%3A%20Ana%0APet%3A%20Rex"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }
}
