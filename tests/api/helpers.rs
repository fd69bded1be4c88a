use lumora_site::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub content_server: MockServer,
    pub content_entries_path: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_json(&self, endpoint: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, endpoint))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, endpoint: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, endpoint))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Mounts a provider mock answering every send with a fixed message id.
    pub async fn mock_email_success(&self, expected_sends: u64) {
        Mock::given(path("/v1/email"))
            .and(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-123"})),
            )
            .expect(expected_sends)
            .mount(&self.email_server)
            .await;
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;
    let content_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.app.port = 0;
    config.email_client.base_url = email_server.uri();
    config.content_store.base_url = content_server.uri();

    let content_entries_path = format!(
        "/spaces/{}/environments/master/entries",
        config.content_store.space_id
    );

    let app = Application::build(config)
        .await
        .expect("Failed to build application.");
    let port = app.get_port();

    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        email_server,
        content_server,
        content_entries_path,
        api_client: reqwest::Client::new(),
    }
}
