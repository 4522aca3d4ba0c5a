use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::mail::{MailProvider, SmtpMailProvider};
use crate::repository::{InMemoryUsersRepository, UsersRepository};
use crate::routes::{create_user, health};
use crate::use_cases::CreateUserUseCase;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    // build constructs the dependency graph once, at the entry point: the
    // repository and the mail provider are created here and handed to the
    // server, never reached through global state. The smtp transport handle
    // lives as long as the application.
    pub fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let users = Arc::new(InMemoryUsersRepository::new());
        let mail = Arc::new(SmtpMailProvider::new(&config.mail));

        let address =
            format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, users, mail)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    users: Arc<dyn UsersRepository>,
    mail: Arc<dyn MailProvider>,
) -> Result<Server, std::io::Error> {
    let use_case = web::Data::new(CreateUserUseCase::new(users, mail));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health))
            .route("/users", web::post().to(create_user))
            .app_data(use_case.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
