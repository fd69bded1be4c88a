use crate::domain::FieldName;

/// Language context for validation messages, email labels and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    French,
}

impl Locale {
    pub fn missing_field_message(&self, field: FieldName) -> String {
        match self {
            Locale::English => format!("Missing required field: {}.", field.as_str()),
            Locale::French => format!("Le champ {} est requis.", field.as_str()),
        }
    }

    pub fn invalid_email_message(&self) -> String {
        match self {
            Locale::English => "Invalid email format.".into(),
            Locale::French => "Format d'adresse e-mail invalide.".into(),
        }
    }

    pub fn field_label(&self, field: FieldName) -> &'static str {
        match (self, field) {
            (Locale::English, FieldName::Name) => "Name",
            (Locale::English, FieldName::Email) => "Email",
            (Locale::English, FieldName::Company) => "Company",
            (Locale::English, FieldName::Message) => "Message",
            (Locale::English, FieldName::Challenge) => "Challenge",
            (Locale::English, FieldName::CompanySize) => "Company size",
            (Locale::French, FieldName::Name) => "Nom",
            (Locale::French, FieldName::Email) => "E-mail",
            (Locale::French, FieldName::Company) => "Entreprise",
            (Locale::French, FieldName::Message) => "Message",
            (Locale::French, FieldName::Challenge) => "Défi",
            (Locale::French, FieldName::CompanySize) => "Taille de l'entreprise",
        }
    }

    pub fn submitted_at_line(&self, timestamp: &str) -> String {
        match self {
            Locale::English => format!("Submitted on {timestamp}"),
            Locale::French => format!("Envoyé le {timestamp}"),
        }
    }

    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Locale::English => chrono::Locale::en_US,
            Locale::French => chrono::Locale::fr_FR,
        }
    }
}
