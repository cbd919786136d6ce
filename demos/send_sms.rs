use std::io;

use routesms::{Credentials, RouteSmsClient, SendSms};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let username = required_env("ROUTESMS_USERNAME")?;
    let password = required_env("ROUTESMS_PASSWORD")?;
    let sender = required_env("ROUTESMS_SENDER")?;
    let recipient = required_env("ROUTESMS_RECIPIENT")?;
    let message = std::env::var("ROUTESMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the routesms demo.".to_owned());

    let client = RouteSmsClient::new(Credentials::new(username, password)?);
    let request = SendSms::new(sender, recipient, message)?;

    let results = client.send(request).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
