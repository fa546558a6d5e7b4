use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::domain::InboundSmsRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
    #[error("malformed percent-escape in {token:?}")]
    MalformedEscape { token: String },

    #[error("decoded bytes of {token:?} are not valid UTF-8")]
    InvalidUtf8 { token: String },
}

/// Decode an `application/x-www-form-urlencoded` notification body.
///
/// Empty segments are skipped, a segment without `=` is a key with an empty
/// value, and a repeated key keeps its last value.
pub fn decode_inbound_form(raw_body: &str) -> Result<InboundSmsRecord, DecodingError> {
    let mut fields = BTreeMap::new();
    for segment in raw_body.split('&').filter(|segment| !segment.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        fields.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(InboundSmsRecord::from_fields(fields))
}

fn decode_component(token: &str) -> Result<String, DecodingError> {
    check_escapes(token)?;
    let spaced = token.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodingError::InvalidUtf8 {
            token: token.to_owned(),
        })
}

// `percent_decode_str` passes bad escapes through verbatim, so reject them first.
fn check_escapes(token: &str) -> Result<(), DecodingError> {
    let bytes = token.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != b'%' {
            idx += 1;
            continue;
        }
        let well_formed = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodingError::MalformedEscape {
                token: token.to_owned(),
            });
        }
        idx += 3;
    }
    Ok(())
}
