use serde::Deserialize;

use super::content_type::{ResponseBody, classify, decode_json_object};
use super::http::HttpResponse;
use super::uri::{EncodingError, build_uri};
use super::wire_id::WireId;
use crate::domain::{AccessToken, SendSms, SendSmsResult, ShortCode};

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default, rename = "messageId", alias = "message_id")]
    message_id: Option<WireId>,
    #[serde(default)]
    status: Option<WireId>,
}

pub fn encode_send_sms_uri(endpoint: &str, request: &SendSms) -> Result<String, EncodingError> {
    build_uri(
        endpoint,
        &[(ShortCode::PLACEHOLDER, request.short_code().path_segment())],
        &[(AccessToken::FIELD, request.access_token().as_str())],
    )
}

pub fn encode_send_sms_body(request: &SendSms) -> serde_json::Value {
    serde_json::json!({
        "address": request.address().as_str(),
        "message": request.message(),
    })
}

pub fn decode_send_sms_response(response: &HttpResponse) -> Result<SendSmsResult, serde_json::Error> {
    let mut result = SendSmsResult {
        response_code: response.status,
        response_message: Some(response.reason.clone()).filter(|reason| !reason.is_empty()),
        message_id: None,
        status: None,
    };

    if let ResponseBody::Json(body) = classify(response) {
        let parsed: SendSmsJsonResponse = decode_json_object(body)?;
        result.message_id = parsed.message_id.map(WireId::into_string);
        result.status = parsed.status.map(WireId::into_string);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;
    use serde_json::json;

    use super::*;

    fn request(short_code: &str, token: &str) -> SendSms {
        SendSms::builder(AccessToken::new(token), ShortCode::new(short_code))
            .address("9171234567")
            .message("Hello \"there\"")
            .build()
            .unwrap()
    }

    #[test]
    fn uri_uses_last_four_of_short_code_and_encodes_token() {
        let uri = encode_send_sms_uri(
            "http://devapi.globelabs.com.ph/smsmessaging/v1/outbound/{shortCode}/requests",
            &request("21581234", "a+b/c"),
        )
        .unwrap();
        assert_eq!(
            uri,
            "http://devapi.globelabs.com.ph/smsmessaging/v1/outbound/1234/requests?access_token=a%2Bb%2Fc"
        );
    }

    #[test]
    fn body_is_address_and_message_json() {
        let body = encode_send_sms_body(&request("1234", "t"));
        assert_eq!(
            body,
            json!({"address": "9171234567", "message": "Hello \"there\""})
        );
    }

    #[test]
    fn decode_json_response_fields() {
        let response = HttpResponse::new(201, "Created")
            .with_content_type(HeaderValue::from_static("application/json;charset=UTF-8"))
            .with_body(r#"{"messageId":"m-1","status":"SENT","extra":true}"#);
        let result = decode_send_sms_response(&response).unwrap();
        assert_eq!(
            result,
            SendSmsResult {
                response_code: 201,
                response_message: Some("Created".to_owned()),
                message_id: Some("m-1".to_owned()),
                status: Some("SENT".to_owned()),
            }
        );
    }

    #[test]
    fn decode_accepts_snake_case_and_numeric_id() {
        let response = HttpResponse::new(200, "OK")
            .with_content_type(HeaderValue::from_static("application/json"))
            .with_body(r#"{"message_id":12345}"#);
        let result = decode_send_sms_response(&response).unwrap();
        assert_eq!(result.message_id.as_deref(), Some("12345"));
        assert_eq!(result.status, None);
    }

    #[test]
    fn decode_html_error_page_uses_status_line() {
        let response = HttpResponse::new(400, "Bad Request")
            .with_content_type(HeaderValue::from_static("text/html"))
            .with_body("<html><body>Bad Request</body></html>");
        let result = decode_send_sms_response(&response).unwrap();
        assert_eq!(
            result,
            SendSmsResult {
                response_code: 400,
                response_message: Some("Bad Request".to_owned()),
                message_id: None,
                status: None,
            }
        );
    }

    #[test]
    fn decode_empty_reason_is_absent() {
        let response = HttpResponse::new(502, "");
        let result = decode_send_sms_response(&response).unwrap();
        assert_eq!(result.response_code, 502);
        assert_eq!(result.response_message, None);
    }

    #[test]
    fn decode_invalid_json_is_an_error() {
        let response = HttpResponse::new(200, "OK")
            .with_content_type(HeaderValue::from_static("application/json"))
            .with_body("<html>oops</html>");
        assert!(decode_send_sms_response(&response).is_err());
    }
}
