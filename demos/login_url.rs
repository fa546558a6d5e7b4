use std::io;

use globelabs::GlobeLabsClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = std::env::var("GLOBELABS_APP_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GLOBELABS_APP_ID environment variable is required",
        )
    })?;
    let redirect_url = std::env::var("GLOBELABS_REDIRECT_URL")
        .unwrap_or_else(|_| "http://localhost:8080/callback".to_owned());

    let client = GlobeLabsClient::new();
    println!("{}", client.login_url(&app_id, &redirect_url)?);

    Ok(())
}
