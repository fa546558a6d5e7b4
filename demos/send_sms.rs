use std::io;

use globelabs::{AccessToken, GlobeLabsClient, SendSms, ShortCode, SubscriberNumber};
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

    let access_token = std::env::var("GLOBELABS_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_ACCESS_TOKEN environment variable is required",
        )
    })?;
    let short_code = std::env::var("GLOBELABS_SHORT_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_SHORT_CODE environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("GLOBELABS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("GLOBELABS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the globelabs demo.".to_owned());

    let client = GlobeLabsClient::new();
    let request = SendSms::builder(AccessToken::new(access_token), ShortCode::new(short_code))
        .address(SubscriberNumber::parse(phone_raw)?)
        .message(message)
        .build()?;

    let result = client.send_sms(request).await?;
    println!(
        "response: {} {:?}, message_id: {:?}, status: {:?}",
        result.response_code, result.response_message, result.message_id, result.status
    );

    Ok(())
}
