//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

use crate::domain::{
    AccessTokenResult, Credentials, InboundSmsRecord, SendSms, SendSmsResult, ValidationError,
};
use crate::transport::{DecodingError, EncodingError, HttpRequest, HttpResponse, RequestBody};

const DEFAULT_AUTH_ENDPOINT: &str = "http://developer.globelabs.com.ph/dialog/oauth";
const DEFAULT_TOKEN_ENDPOINT: &str = "http://developer.globelabs.com.ph/oauth/access_token";
const DEFAULT_SMS_ENDPOINT: &str =
    "http://devapi.globelabs.com.ph/smsmessaging/v1/outbound/{shortCode}/requests";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type reported by an [`HttpTransport`].
pub type TransportFailure = Box<dyn StdError + Send + Sync>;

/// Executes one HTTP exchange.
///
/// Each call receives its whole request by value, so one transport can serve
/// concurrent calls. Implement this to plug in another HTTP stack or a test double.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

/// Default [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let builder = self.client.request(request.method, request.url.as_str());
            let builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Form(params) => builder.form(&params),
                RequestBody::Json(value) => builder.json(&value),
            };

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
                headers,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GlobeLabsClient`].
///
/// A non-JSON or non-2xx response is not an error: it comes back as a result
/// carrying only the status line.
pub enum GlobeLabsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, cancellation, etc).
    #[error("transport error: {0}")]
    Transport(#[source] TransportFailure),

    /// The response claims `application/json` but the body is not a JSON object.
    #[error("response format error: {0}")]
    ResponseFormat(#[source] serde_json::Error),

    /// A request URL could not be built.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// An inbound payload is not valid form encoding.
    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingError),

    /// Request parameters violate a precondition.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`GlobeLabsClient`].
///
/// Use this when you need to customize endpoints, timeout, user-agent, or the transport.
pub struct GlobeLabsClientBuilder {
    auth_endpoint: String,
    token_endpoint: String,
    sms_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl Default for GlobeLabsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobeLabsClientBuilder {
    pub fn new() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            sms_endpoint: DEFAULT_SMS_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the authorization (login dialog) endpoint.
    pub fn auth_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.auth_endpoint = endpoint.into();
        self
    }

    /// Override the token exchange endpoint.
    pub fn token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    /// Override the SMS send endpoint template.
    ///
    /// The template must contain a `{shortCode}` placeholder.
    pub fn sms_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sms_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom [`HttpTransport`] instead of the `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<GlobeLabsClient, GlobeLabsError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| GlobeLabsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(GlobeLabsClient {
            auth_endpoint: self.auth_endpoint,
            token_endpoint: self.token_endpoint,
            sms_endpoint: self.sms_endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Globe Labs client.
///
/// Holds endpoint configuration and a transport only; credentials and tokens
/// are passed per call. By default it talks to:
/// - `http://developer.globelabs.com.ph/dialog/oauth` (login dialog)
/// - `http://developer.globelabs.com.ph/oauth/access_token` (token exchange)
/// - `http://devapi.globelabs.com.ph/smsmessaging/v1/outbound/{shortCode}/requests` (SMS)
pub struct GlobeLabsClient {
    auth_endpoint: String,
    token_endpoint: String,
    sms_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl Default for GlobeLabsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobeLabsClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`GlobeLabsClient::builder`].
    pub fn new() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_owned(),
            sms_endpoint: DEFAULT_SMS_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport::default()),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GlobeLabsClientBuilder {
        GlobeLabsClientBuilder::new()
    }

    /// URL of the login dialog the subscriber must visit to authorize the app.
    ///
    /// Empty values still produce a URL; only an unparsable configured endpoint
    /// fails.
    pub fn login_url(&self, app_id: &str, redirect_url: &str) -> Result<String, GlobeLabsError> {
        Ok(crate::transport::encode_login_url(
            &self.auth_endpoint,
            app_id,
            redirect_url,
        )?)
    }

    /// Exchange the authorization code from the redirect for an access token.
    ///
    /// Errors:
    /// - [`GlobeLabsError::Transport`] when the HTTP call fails,
    /// - [`GlobeLabsError::ResponseFormat`] when a JSON response is not a JSON object.
    pub async fn exchange_code_for_token(
        &self,
        credentials: &Credentials,
        code: &str,
    ) -> Result<AccessTokenResult, GlobeLabsError> {
        let request = HttpRequest {
            method: Method::POST,
            url: self.token_endpoint.clone(),
            body: RequestBody::Form(crate::transport::encode_access_token_form(
                credentials,
                code,
            )),
        };

        let response = self.execute(request).await?;
        crate::transport::decode_access_token_response(&response)
            .map_err(GlobeLabsError::ResponseFormat)
    }

    /// Send an SMS to a subscriber who has completed the authorization flow.
    ///
    /// The request is validated when built (see [`SendSms::builder`]), so no
    /// network call happens for invalid input.
    ///
    /// Errors:
    /// - [`GlobeLabsError::Encoding`] when the endpoint template is unusable,
    /// - [`GlobeLabsError::Transport`] when the HTTP call fails,
    /// - [`GlobeLabsError::ResponseFormat`] when a JSON response is not a JSON object.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResult, GlobeLabsError> {
        let url = crate::transport::encode_send_sms_uri(&self.sms_endpoint, &request)?;
        let request = HttpRequest {
            method: Method::POST,
            url,
            body: RequestBody::Json(crate::transport::encode_send_sms_body(&request)),
        };

        let response = self.execute(request).await?;
        crate::transport::decode_send_sms_response(&response)
            .map_err(GlobeLabsError::ResponseFormat)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, GlobeLabsError> {
        let method = request.method.clone();
        // The query string can carry the access token; keep it out of logs.
        let endpoint = request
            .url
            .split_once('?')
            .map_or(request.url.as_str(), |(path, _)| path)
            .to_owned();

        tracing::debug!(%method, %endpoint, "sending request");
        let response = self.http.execute(request).await.map_err(|err| {
            tracing::error!(%method, %endpoint, error = %err, "request failed");
            GlobeLabsError::Transport(err)
        })?;
        tracing::debug!(
            status = response.status,
            %endpoint,
            body_len = response.body.len(),
            "received response"
        );

        Ok(response)
    }
}

/// Decode a notification the carrier posted to the application's notify URL.
///
/// The body is `application/x-www-form-urlencoded`; unknown keys are kept and
/// missing keys are simply absent.
pub fn parse_inbound_sms(raw_body: &str) -> Result<InboundSmsRecord, DecodingError> {
    let record = crate::transport::decode_inbound_form(raw_body)?;
    tracing::debug!(fields = record.len(), "decoded inbound notification");
    Ok(record)
}
