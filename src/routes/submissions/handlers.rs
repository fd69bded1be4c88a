use actix_web::{HttpResponse, web};
use anyhow::Context;
use chrono::Utc;

use crate::{
    domain::{FormKind, Locale, RawSubmission, Submission, render_notification},
    email_client::EmailClient,
};

use super::errors::SubmitError;

pub async fn submit_contact(
    payload: web::Json<RawSubmission>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    handle_submission(FormKind::Contact, Locale::English, payload.0, email_client).await
}

pub async fn submit_contact_fr(
    payload: web::Json<RawSubmission>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    handle_submission(FormKind::Contact, Locale::French, payload.0, email_client).await
}

pub async fn submit_lead(
    payload: web::Json<RawSubmission>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    handle_submission(FormKind::Lead, Locale::English, payload.0, email_client).await
}

pub async fn submit_demo(
    payload: web::Json<RawSubmission>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    handle_submission(FormKind::Demo, Locale::English, payload.0, email_client).await
}

pub async fn submit_demo_fr(
    payload: web::Json<RawSubmission>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    handle_submission(FormKind::Demo, Locale::French, payload.0, email_client).await
}

/// The shared pipeline behind every form endpoint: validate, render,
/// dispatch once, map the outcome to a response.
#[tracing::instrument(
    name = "Handling a form submission",
    skip(raw, email_client),
    fields(kind = ?kind, locale = ?locale)
)]
async fn handle_submission(
    kind: FormKind,
    locale: Locale,
    raw: RawSubmission,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, SubmitError> {
    let submission =
        Submission::parse(kind, raw, locale).map_err(SubmitError::ValidationError)?;

    let message = render_notification(&submission, locale, Utc::now())
        .context("Failed to render the notification email.")?;

    let message_id = email_client
        .send_email(&message)
        .await
        .map_err(SubmitError::SendError)?;

    tracing::info!(%message_id, "Submission dispatched");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "messageId": message_id,
    })))
}
