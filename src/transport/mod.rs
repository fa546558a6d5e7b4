//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod content_type;
mod http;
mod inbound;
mod oauth;
mod send_sms;
mod uri;
mod wire_id;

pub use http::{HttpRequest, HttpResponse, RequestBody};
pub use inbound::{DecodingError, decode_inbound_form};
pub use oauth::{decode_access_token_response, encode_access_token_form, encode_login_url};
pub use send_sms::{decode_send_sms_response, encode_send_sms_body, encode_send_sms_uri};
pub use uri::EncodingError;
