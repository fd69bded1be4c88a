use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::content_cache::CachedContentStore;
use crate::email_client::EmailClient;
use crate::routes::{
    get_post, health_check, list_posts, submit_contact, submit_contact_fr, submit_demo,
    submit_demo_fr, submit_lead,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client();
        let content_store = config.content_store.cached_store();

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, content_store)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    content_store: CachedContentStore,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let content_store = web::Data::new(content_store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/contact", web::post().to(submit_contact))
                    .route("/lead", web::post().to(submit_lead))
                    .route("/demo", web::post().to(submit_demo))
                    .route("/fr/contact", web::post().to(submit_contact_fr))
                    .route("/fr/demo", web::post().to(submit_demo_fr))
                    .route("/posts", web::get().to(list_posts))
                    .route("/posts/{slug}", web::get().to(get_post)),
            )
            .app_data(email_client.clone())
            .app_data(content_store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
