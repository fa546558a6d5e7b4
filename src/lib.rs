//! Typed Rust client for the Globe Labs SMS and OAuth HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (form/JSON encoding, content-type dispatch, inbound
//! payload decoding), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use globelabs::{AccessToken, Credentials, GlobeLabsClient, SendSms, ShortCode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), globelabs::GlobeLabsError> {
//!     let client = GlobeLabsClient::new();
//!     let login = client.login_url("app-id", "https://example.com/callback")?;
//!     println!("visit {login}");
//!
//!     let credentials = Credentials::new("app-id", "app-secret");
//!     let token = client.exchange_code_for_token(&credentials, "code").await?;
//!
//!     if let (Some(token), Some(number)) = (token.access_token, token.subscriber_number) {
//!         let request = SendSms::builder(AccessToken::new(token), ShortCode::new("21581234"))
//!             .address(number)
//!             .message("hello")
//!             .build()?;
//!         let _result = client.send_sms(request).await?;
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, GlobeLabsClient, GlobeLabsClientBuilder, GlobeLabsError, HttpTransport,
    ReqwestTransport, TransportFailure, parse_inbound_sms,
};
pub use domain::{
    AccessToken, AccessTokenResult, Credentials, InboundField, InboundSmsRecord,
    SEND_SMS_MAX_MESSAGE_CHARS, SendSms, SendSmsBuilder, SendSmsResult, ShortCode,
    SubscriberNumber, UnknownInboundField, ValidationError,
};
pub use transport::{DecodingError, EncodingError, HttpRequest, HttpResponse, RequestBody};
