use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::domain::{FieldName, FormKind, Locale, Submission, SubmitterEmail};

/// Layout of the timestamp trailing every notification body. Rendered in the
/// office time zone, not the submitter's.
const TARGET_TIME_ZONE: chrono_tz::Tz = chrono_tz::Europe::Paris;

static TEMPLATES: Lazy<tera::Tera> =
    Lazy::new(|| tera::Tera::new("views/**/*").expect("Failed to initialize Tera templates"));

/// A fully rendered notification email, ready for dispatch.
pub struct NotificationMessage {
    pub subject: String,
    pub html_body: String,
    pub reply_to: SubmitterEmail,
}

/// Renders a validated submission into a notification email. Pure given the
/// instant: same submission, locale and `sent_at` yield the same message.
pub fn render_notification(
    submission: &Submission,
    locale: Locale,
    sent_at: DateTime<Utc>,
) -> Result<NotificationMessage, tera::Error> {
    let timestamp = format_timestamp(sent_at, locale);

    let mut ctx = tera::Context::new();
    ctx.insert("heading", heading(submission.kind, locale));
    ctx.insert("name_label", locale.field_label(FieldName::Name));
    ctx.insert("email_label", locale.field_label(FieldName::Email));
    ctx.insert("company_label", locale.field_label(FieldName::Company));
    ctx.insert("name", &submission.name);
    ctx.insert("email", submission.email.as_ref());
    ctx.insert("company", &submission.company);
    ctx.insert("submitted_at", &locale.submitted_at_line(&timestamp));

    let template = match submission.kind {
        FormKind::Contact => {
            ctx.insert("message_label", locale.field_label(FieldName::Message));
            let message = submission.message.as_deref().unwrap_or_default();
            ctx.insert("message", &free_text_html(message));
            "contact.html"
        }
        FormKind::Lead => {
            ctx.insert("challenge_label", locale.field_label(FieldName::Challenge));
            let challenge = submission.challenge.as_deref().unwrap_or_default();
            ctx.insert("challenge", &free_text_html(challenge));
            "lead.html"
        }
        FormKind::Demo => {
            ctx.insert(
                "company_size_label",
                locale.field_label(FieldName::CompanySize),
            );
            ctx.insert("company_size", &submission.company_size);
            "demo.html"
        }
    };

    let html_body = TEMPLATES.render(template, &ctx)?;

    Ok(NotificationMessage {
        subject: subject_line(submission, locale),
        html_body,
        reply_to: submission.email.clone(),
    })
}

fn subject_line(submission: &Submission, locale: Locale) -> String {
    let name = &submission.name;
    match (submission.kind, locale) {
        (FormKind::Contact, Locale::English) => {
            format!("New contact form submission from {name}")
        }
        (FormKind::Contact, Locale::French) => format!("Nouveau message de {name}"),
        (FormKind::Lead, Locale::English) => format!("New lead from {name}"),
        (FormKind::Lead, Locale::French) => format!("Nouveau prospect : {name}"),
        (FormKind::Demo, _) => {
            let company = submission.company.as_deref().unwrap_or_default();
            match locale {
                Locale::English => format!("Demo request from {name} at {company}"),
                Locale::French => format!("Demande de démo de {name} chez {company}"),
            }
        }
    }
}

fn heading(kind: FormKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (FormKind::Contact, Locale::English) => "New contact form submission",
        (FormKind::Contact, Locale::French) => "Nouvelle soumission du formulaire de contact",
        (FormKind::Lead, Locale::English) => "New lead submission",
        (FormKind::Lead, Locale::French) => "Nouvelle soumission de prospect",
        (FormKind::Demo, Locale::English) => "New demo request",
        (FormKind::Demo, Locale::French) => "Nouvelle demande de démo",
    }
}

// Free-text fields are pre-rendered: escaped first, then newlines become
// explicit line breaks. Templates interpolate the result with `safe`.
fn free_text_html(text: &str) -> String {
    tera::escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br/>")
}

fn format_timestamp(sent_at: DateTime<Utc>, locale: Locale) -> String {
    let local = sent_at.with_timezone(&TARGET_TIME_ZONE);
    let pattern = match locale {
        Locale::English => "%B %-d, %Y, %-I:%M %p",
        Locale::French => "%-d %B %Y, %H:%M",
    };
    local
        .format_localized(pattern, locale.chrono_locale())
        .to_string()
}
