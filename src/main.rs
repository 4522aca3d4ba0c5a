use signup::configuration::get_config;
use signup::startup::Application;
use signup::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("signup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config().expect("failed to read configuration");
    Application::build(config)?.run_until_stopped().await?;

    Ok(())
}
