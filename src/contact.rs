pub const WHATSAPP_PHONE: &str = "5355572430";
pub const WHATSAPP_GREETING: &str =
    "Hola te escribo desde su Portfolio, ¿estás disponible para un trabajo?";
pub const CONTACT_EMAIL: &str = "pushodevs@gmail.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+53 55572430";
pub const CONTACT_LOCATION: &str = "Granma, Cuba";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Outcome of the last submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Opened,
    Blocked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn compose_message(&self) -> String {
        format!(
            "Hola, mi nombre es {}.\n\nEmail: {}\n\nMensaje: {}",
            self.name, self.email, self.message
        )
    }

    pub fn whatsapp_url(&self) -> String {
        whatsapp_url(WHATSAPP_PHONE, &self.compose_message())
    }

    /// Records whether the chat actually opened. The draft is cleared only
    /// then, so a blocked window keeps what the user typed.
    pub fn settle(&mut self, opened: bool) -> SendStatus {
        if opened {
            *self = Self::default();
            SendStatus::Opened
        } else {
            SendStatus::Blocked
        }
    }
}

/// `https://wa.me/<phone>?text=<percent-encoded message>`.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{phone}?text={}",
        urlencoding::encode(message)
    )
}
