use std::net::TcpListener;
use std::sync::Arc;

use once_cell::sync::Lazy;

use signup::mail::InMemoryMailProvider;
use signup::repository::InMemoryUsersRepository;
use signup::startup::run;
use signup::telemetry::{get_subscriber, init_subscriber};

pub struct TestApp {
    pub address: String,
    pub users: Arc<InMemoryUsersRepository>,
    pub mail: Arc<InMemoryMailProvider>,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Use of a sink allows for logs to be dumped by default when running
    // tests. If you do need them use:
    // # `TEST_LOG=1 cargo test create_user_returns_a_201 | bunyan`
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        );
        init_subscriber(subscriber);
    }
});

// spawn_app launches the application in the background with in-memory
// collaborators the tests can inspect afterwards.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_mail(InMemoryMailProvider::new()).await
}

// spawn_app_with_mail lets a test swap in a rejecting mail provider.
pub async fn spawn_app_with_mail(mail: InMemoryMailProvider) -> TestApp {
    // the first time initialise is called the code in tracing is invoked otherwise we skip.
    Lazy::force(&TRACING);

    let users = Arc::new(InMemoryUsersRepository::new());
    let mail = Arc::new(mail);

    let listener =
        TcpListener::bind("127.0.0.1:0").expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    let server = run(listener, users.clone(), mail.clone())
        .expect("failed to build the test server");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        users,
        mail,
    }
}

impl TestApp {
    pub async fn post_users(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/users", &self.address))
            .json(&body)
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn health(&self, client: reqwest::Client) -> reqwest::Response {
        client
            .get(&format!("{}/health", &self.address))
            .send()
            .await
            .expect("failed to execute request.")
    }
}
