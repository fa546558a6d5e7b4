use crate::domain::validation::ValidationError;
use crate::domain::value::{AccessToken, ShortCode, SubscriberNumber};

/// Maximum message length in characters accepted by [`SendSms`].
pub const SEND_SMS_MAX_MESSAGE_CHARS: usize = 160;

/// Validated request for the outbound SMS endpoint.
///
/// Build it through [`SendSms::builder`]; the builder reports every violated
/// rule at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    address: SubscriberNumber,
    message: String,
    access_token: AccessToken,
    short_code: ShortCode,
}

impl SendSms {
    /// JSON field name for the message text (`message`).
    pub const MESSAGE_FIELD: &'static str = "message";

    pub fn builder(access_token: AccessToken, short_code: ShortCode) -> SendSmsBuilder {
        SendSmsBuilder {
            access_token,
            short_code,
            address: None,
            message: None,
        }
    }

    pub fn address(&self) -> &SubscriberNumber {
        &self.address
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn short_code(&self) -> &ShortCode {
        &self.short_code
    }
}

#[derive(Debug, Clone)]
pub struct SendSmsBuilder {
    access_token: AccessToken,
    short_code: ShortCode,
    address: Option<SubscriberNumber>,
    message: Option<String>,
}

impl SendSmsBuilder {
    /// Recipient number. Its format is not checked; see [`SubscriberNumber::parse`]
    /// for opt-in normalization.
    pub fn address(mut self, address: impl Into<SubscriberNumber>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Validate and build the request.
    ///
    /// Rules: the message is present and at most
    /// [`SEND_SMS_MAX_MESSAGE_CHARS`] characters; the address is present.
    pub fn build(self) -> Result<SendSms, ValidationError> {
        let mut violations = Vec::new();

        match self.message.as_deref() {
            None => violations.push(ValidationError::Missing {
                field: SendSms::MESSAGE_FIELD,
            }),
            Some(message) => {
                let actual = message.chars().count();
                if actual > SEND_SMS_MAX_MESSAGE_CHARS {
                    violations.push(ValidationError::TooLong {
                        field: SendSms::MESSAGE_FIELD,
                        max: SEND_SMS_MAX_MESSAGE_CHARS,
                        actual,
                    });
                }
            }
        }
        if self.address.is_none() {
            violations.push(ValidationError::Missing {
                field: SubscriberNumber::FIELD,
            });
        }

        if let Some(err) = ValidationError::from_violations(violations) {
            return Err(err);
        }

        let (Some(address), Some(message)) = (self.address, self.message) else {
            unreachable!("missing fields are reported as violations");
        };
        Ok(SendSms {
            address,
            message,
            access_token: self.access_token,
            short_code: self.short_code,
        })
    }
}
