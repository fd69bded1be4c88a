use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

use crate::helpers::spawn_app;

fn valid_contact() -> serde_json::Value {
    serde_json::json!({
        "name": "Ana",
        "email": "ana@x.com",
        "message": "Hi\nThere"
    })
}

fn valid_lead() -> serde_json::Value {
    serde_json::json!({
        "name": "Ana",
        "email": "ana@x.com",
        "company": "Acme",
        "challenge": "Scaling our onboarding"
    })
}

fn valid_demo() -> serde_json::Value {
    serde_json::json!({
        "name": "Bo",
        "email": "bo@x.com",
        "company": "Acme",
        "companySize": "50"
    })
}

#[tokio::test]
async fn contact_returns_200_and_a_message_id_for_valid_data() {
    let app = spawn_app().await;
    app.mock_email_success(1).await;

    let response = app.post_json("/api/contact", &valid_contact()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["messageId"], "msg-123");
}

#[tokio::test]
async fn contact_notification_carries_reply_to_subject_and_line_breaks() {
    let app = spawn_app().await;
    app.mock_email_success(1).await;

    app.post_json("/api/contact", &valid_contact()).await;

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let sent: serde_json::Value = serde_json::from_slice(&received.body).unwrap();

    assert_eq!(sent["reply_to"], "ana@x.com");
    assert!(sent["subject"].as_str().unwrap().contains("Ana"));
    assert!(sent["html"].as_str().unwrap().contains("Hi<br/>There"));
}

#[tokio::test]
async fn submissions_return_400_when_a_required_field_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        ("/api/contact", serde_json::json!({"email": "a@x.com", "message": "hi"}), "contact missing the name"),
        ("/api/contact", serde_json::json!({"name": "Ana", "message": "hi"}), "contact missing the email"),
        ("/api/contact", serde_json::json!({"name": "Ana", "email": "a@x.com"}), "contact missing the message"),
        ("/api/lead", serde_json::json!({"name": "Ana", "email": "a@x.com"}), "lead missing the challenge"),
        ("/api/demo", serde_json::json!({"name": "Bo", "email": "b@x.com", "companySize": "50"}), "demo missing the company"),
        ("/api/demo", serde_json::json!({"name": "Bo", "email": "b@x.com", "company": "Acme"}), "demo missing the company size"),
    ];

    for (endpoint, payload, description) in test_cases {
        let response = app.post_json(endpoint, &payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }

    // No dispatch happened for any rejected payload.
    assert!(app.email_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn submissions_return_400_for_a_malformed_email_before_dispatch() {
    let app = spawn_app().await;

    let mut payload = valid_demo();
    payload["email"] = serde_json::json!("bad-email");

    let response = app.post_json("/api/demo", &payload).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("email format"),
        "unexpected error body: {body}"
    );
    assert!(app.email_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn lead_submission_dispatches_a_notification() {
    let app = spawn_app().await;
    app.mock_email_success(1).await;

    let response = app.post_json("/api/lead", &valid_lead()).await;

    assert_eq!(200, response.status().as_u16());

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let sent: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert!(sent["html"].as_str().unwrap().contains("Scaling our onboarding"));
}

#[tokio::test]
async fn provider_failure_yields_a_generic_500() {
    let app = spawn_app().await;

    Mock::given(path("/v1/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_json("/api/contact", &valid_contact()).await;

    assert_eq!(500, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("Failed to send message."));
    assert!(!body.contains("upstream exploded"));
}

#[tokio::test]
async fn unparseable_body_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/api/contact", app.address))
        .header("Content-Type", "application/json")
        .body("not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    assert!(app.email_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn french_contact_rejection_is_localized() {
    let app = spawn_app().await;

    let response = app
        .post_json(
            "/api/fr/contact",
            &serde_json::json!({"email": "a@x.com", "message": "bonjour"}),
        )
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"].as_str().unwrap().contains("requis"),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn french_demo_notification_is_localized() {
    let app = spawn_app().await;
    app.mock_email_success(1).await;

    let response = app.post_json("/api/fr/demo", &valid_demo()).await;

    assert_eq!(200, response.status().as_u16());

    let received = &app.email_server.received_requests().await.unwrap()[0];
    let sent: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert!(sent["subject"].as_str().unwrap().contains("Demande de démo"));
    assert!(sent["html"].as_str().unwrap().contains("Entreprise"));
}
