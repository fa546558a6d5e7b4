use std::io;
use std::time::Duration;

use globelabs::{Credentials, GlobeLabsClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,globelabs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_id = std::env::var("GLOBELABS_APP_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_APP_ID environment variable is required",
        )
    })?;
    let app_secret = std::env::var("GLOBELABS_APP_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_APP_SECRET environment variable is required",
        )
    })?;
    let code = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: exchange_token <authorization code>",
        )
    })?;

    let client = GlobeLabsClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let result = client
        .exchange_code_for_token(&Credentials::new(app_id, app_secret), &code)
        .await?;

    match (result.access_token, result.subscriber_number) {
        (Some(token), Some(number)) => println!("subscriber {number}: access_token={token}"),
        _ => println!(
            "no token: {} {}",
            result.response_code, result.response_message
        ),
    }

    Ok(())
}
