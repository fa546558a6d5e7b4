use url::Url;
use url::form_urlencoded::byte_serialize;

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("endpoint {template:?} has no {{{placeholder}}} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },

    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Form-encode a single value (UTF-8; space becomes `+`).
pub fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Substitute `{name}` placeholders, then append query pairs in order.
///
/// Placeholder values and query pairs are form-encoded; the template itself is
/// taken as-is.
pub fn build_uri(
    template: &str,
    path_params: &[(&'static str, &str)],
    query: &[(&str, &str)],
) -> Result<String, EncodingError> {
    let mut base = template.to_owned();
    for (placeholder, value) in path_params {
        let token = format!("{{{placeholder}}}");
        if !base.contains(&token) {
            return Err(EncodingError::MissingPlaceholder {
                template: template.to_owned(),
                placeholder: *placeholder,
            });
        }
        base = base.replace(&token, &encode_component(value));
    }

    let mut url = Url::parse(&base).map_err(|source| EncodingError::InvalidUrl {
        url: base.clone(),
        source,
    })?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url.into())
}
