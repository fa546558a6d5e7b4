use serde::Deserialize;

use super::content_type::{ResponseBody, classify, decode_json_object};
use super::http::HttpResponse;
use super::uri::{EncodingError, build_uri};
use super::wire_id::WireId;
use crate::domain::{AccessTokenResult, Credentials};

const REDIRECT_URL_FIELD: &str = "redirect_url";
const CODE_FIELD: &str = "code";
const GRANT_TYPE_FIELD: &str = "grant_type";
const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

#[derive(Debug, Clone, Deserialize)]
struct AccessTokenJsonResponse {
    #[serde(default)]
    access_token: Option<WireId>,
    #[serde(default)]
    subscriber_number: Option<WireId>,
}

pub fn encode_login_url(
    endpoint: &str,
    app_id: &str,
    redirect_url: &str,
) -> Result<String, EncodingError> {
    build_uri(
        endpoint,
        &[],
        &[
            (REDIRECT_URL_FIELD, redirect_url),
            (Credentials::APP_ID_FIELD, app_id),
        ],
    )
}

pub fn encode_access_token_form(credentials: &Credentials, code: &str) -> Vec<(String, String)> {
    vec![
        (
            Credentials::APP_ID_FIELD.to_owned(),
            credentials.app_id().to_owned(),
        ),
        (
            Credentials::APP_SECRET_FIELD.to_owned(),
            credentials.app_secret().to_owned(),
        ),
        (CODE_FIELD.to_owned(), code.to_owned()),
        (
            GRANT_TYPE_FIELD.to_owned(),
            GRANT_TYPE_AUTHORIZATION_CODE.to_owned(),
        ),
    ]
}

pub fn decode_access_token_response(
    response: &HttpResponse,
) -> Result<AccessTokenResult, serde_json::Error> {
    let mut result = AccessTokenResult {
        response_code: response.status,
        response_message: response.reason.clone(),
        access_token: None,
        subscriber_number: None,
    };

    if let ResponseBody::Json(body) = classify(response) {
        let parsed: AccessTokenJsonResponse = decode_json_object(body)?;
        // Token fields only count on a successful exchange.
        if response.status == 200 {
            result.access_token = parsed.access_token.map(WireId::into_string);
            result.subscriber_number = parsed.subscriber_number.map(WireId::into_string);
        }
    }

    Ok(result)
}
