use serde::Deserialize;

/// Message ids, tokens and subscriber numbers: quoted on some endpoints,
/// bare integers on others. Both end up as the same text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(serde_json::Number),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Reply {
        #[serde(default, rename = "messageId")]
        message_id: Option<WireId>,
    }

    fn message_id(json: &str) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_str::<Reply>(json).map(|reply| reply.message_id.map(WireId::into_string))
    }

    #[test]
    fn quoted_and_bare_ids_read_the_same() {
        let quoted = message_id(r#"{"messageId":"9173849494"}"#).unwrap();
        let bare = message_id(r#"{"messageId":9173849494}"#).unwrap();
        assert_eq!(quoted.as_deref(), Some("9173849494"));
        assert_eq!(quoted, bare);
    }

    #[test]
    fn quoted_id_keeps_leading_zero() {
        let id = message_id(r#"{"messageId":"09171234567"}"#).unwrap();
        assert_eq!(id.as_deref(), Some("09171234567"));
    }

    #[test]
    fn null_or_missing_id_is_absent() {
        assert_eq!(message_id(r#"{"messageId":null}"#).unwrap(), None);
        assert_eq!(message_id("{}").unwrap(), None);
    }

    #[test]
    fn boolean_or_object_id_is_rejected() {
        assert!(message_id(r#"{"messageId":true}"#).is_err());
        assert!(message_id(r#"{"messageId":{"id":1}}"#).is_err());
    }
}
