use std::fmt;

use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Application credentials issued by the Globe Labs developer site.
///
/// Both values are opaque and passed through as-is. They are supplied per call
/// and never stored by [`crate::GlobeLabsClient`].
pub struct Credentials {
    app_id: String,
    app_secret: String,
}

impl Credentials {
    /// Form/query field name for the application id (`app_id`).
    pub const APP_ID_FIELD: &'static str = "app_id";
    /// Form field name for the application secret (`app_secret`).
    pub const APP_SECRET_FIELD: &'static str = "app_secret";

    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Per-subscriber access token obtained from the token exchange.
///
/// The token format is not checked.
pub struct AccessToken(String);

impl AccessToken {
    /// Query parameter name used by the SMS endpoint (`access_token`).
    pub const FIELD: &'static str = "access_token";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Application short code (`2158XXXX`).
///
/// The full value is kept; only its last four characters vary per application
/// and end up in the send endpoint path.
pub struct ShortCode(String);

impl ShortCode {
    /// Placeholder replaced in the send endpoint template.
    pub const PLACEHOLDER: &'static str = "shortCode";

    const SUFFIX_LEN: usize = 4;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_owned())
    }

    /// Short code as provided (after trimming).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last four characters, or the whole value when it is shorter.
    pub fn path_segment(&self) -> &str {
        let count = self.0.chars().count();
        if count <= Self::SUFFIX_LEN {
            return &self.0;
        }
        let start = self
            .0
            .char_indices()
            .nth(count - Self::SUFFIX_LEN)
            .map_or(0, |(idx, _)| idx);
        &self.0[start..]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Subscriber number in the ten digit `9xxxxxxxxx` form used by the API.
pub struct SubscriberNumber(String);

impl SubscriberNumber {
    /// JSON field name used by the SMS endpoint (`address`).
    pub const FIELD: &'static str = "address";

    const COUNTRY_CODE: u16 = 63;

    /// Wrap a raw value without any normalization.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse a Philippine mobile number in any common notation
    /// (`+63 917 123 4567`, `09171234567`, `9171234567`) into the national form.
    pub fn parse(input: impl Into<String>) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Missing { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(Some(country::Id::PH), raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;
        if parsed.code().value() != Self::COUNTRY_CODE {
            return Err(ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            });
        }

        Ok(Self(parsed.national().value().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubscriberNumber {
    fn from(value: &str) -> Self {
        SubscriberNumber::new(value)
    }
}

impl From<String> for SubscriberNumber {
    fn from(value: String) -> Self {
        SubscriberNumber::new(value)
    }
}

impl From<SubscriberNumber> for String {
    fn from(value: SubscriberNumber) -> Self {
        value.0
    }
}
