use crate::domain::{Locale, SubmitterEmail};

/// The three submission forms served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Lead,
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Company,
    Message,
    Challenge,
    CompanySize,
}

impl FieldName {
    /// The JSON key the field arrives under.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Company => "company",
            FieldName::Message => "message",
            FieldName::Challenge => "challenge",
            FieldName::CompanySize => "companySize",
        }
    }
}

/// Inbound payload before validation. Every field is optional so that a
/// missing key produces a field-level message instead of a parse failure.
#[derive(serde::Deserialize, Debug, Default)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub challenge: Option<String>,
    #[serde(rename = "companySize")]
    pub company_size: Option<String>,
}

/// A validated submission. Which of the trailing fields are populated is
/// decided by `kind`: contact carries `message`, lead carries `challenge`,
/// demo carries `company` and `company_size`.
#[derive(Debug)]
pub struct Submission {
    pub kind: FormKind,
    pub name: String,
    pub email: SubmitterEmail,
    pub company: Option<String>,
    pub message: Option<String>,
    pub challenge: Option<String>,
    pub company_size: Option<String>,
}

impl Submission {
    pub fn parse(kind: FormKind, raw: RawSubmission, locale: Locale) -> Result<Self, String> {
        let name = require(raw.name, FieldName::Name, locale)?;
        let email = require(raw.email, FieldName::Email, locale)?;
        let email = SubmitterEmail::parse(email).map_err(|_| locale.invalid_email_message())?;

        let (company, message, challenge, company_size) = match kind {
            FormKind::Contact => (
                optional(raw.company),
                Some(require(raw.message, FieldName::Message, locale)?),
                None,
                None,
            ),
            FormKind::Lead => (
                optional(raw.company),
                None,
                Some(require(raw.challenge, FieldName::Challenge, locale)?),
                None,
            ),
            FormKind::Demo => (
                Some(require(raw.company, FieldName::Company, locale)?),
                None,
                None,
                Some(require(raw.company_size, FieldName::CompanySize, locale)?),
            ),
        };

        Ok(Self {
            kind,
            name,
            email,
            company,
            message,
            challenge,
            company_size,
        })
    }
}

fn require(value: Option<String>, field: FieldName, locale: Locale) -> Result<String, String> {
    match optional(value) {
        Some(v) => Ok(v),
        None => Err(locale.missing_field_message(field)),
    }
}

// Blank and whitespace-only values count as missing.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
