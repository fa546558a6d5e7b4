use serde::de::{DeserializeOwned, Error as DeError};

use super::http::HttpResponse;

const APPLICATION_JSON: &[u8] = b"application/json";

/// Which part of a response carries the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody<'a> {
    Json(&'a [u8]),
    /// Not JSON (HTML error page, plain text, no body): only the status line is usable.
    StatusLine,
}

/// Compares the media type before any `;` parameter with `application/json`.
///
/// Case-sensitive and otherwise lenient: the live API sends headers a stricter
/// parser would reject.
pub fn is_json_content_type(header: Option<&[u8]>) -> bool {
    header
        .and_then(|value| value.split(|byte| *byte == b';').next())
        .map(<[u8]>::trim_ascii)
        == Some(APPLICATION_JSON)
}

pub fn classify(response: &HttpResponse) -> ResponseBody<'_> {
    let content_type = response.content_type();
    let body_is_empty = response.body.iter().all(u8::is_ascii_whitespace);

    if is_json_content_type(content_type) && !body_is_empty {
        return ResponseBody::Json(&response.body);
    }

    tracing::debug!(
        status = response.status,
        content_type = %String::from_utf8_lossy(content_type.unwrap_or_default()),
        "response is not JSON; using status line only"
    );
    ResponseBody::StatusLine
}

/// Decode a body that must be a JSON object.
pub fn decode_json_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let raw: Box<serde_json::value::RawValue> = serde_json::from_slice(body)?;
    if !raw.get().starts_with('{') {
        return Err(serde_json::Error::custom("expected a JSON object"));
    }
    serde_json::from_str(raw.get())
}
