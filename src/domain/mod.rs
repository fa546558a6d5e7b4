//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SEND_SMS_MAX_MESSAGE_CHARS, SendSms, SendSmsBuilder};
pub use response::{
    AccessTokenResult, InboundField, InboundSmsRecord, SendSmsResult, UnknownInboundField,
};
pub use validation::ValidationError;
pub use value::{AccessToken, Credentials, ShortCode, SubscriberNumber};
