use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Result of exchanging an authorization code for an access token.
///
/// `access_token` and `subscriber_number` are only present for a `200` response
/// with a JSON body; otherwise only the status line is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenResult {
    pub response_code: u16,
    pub response_message: String,
    pub access_token: Option<String>,
    pub subscriber_number: Option<String>,
}

/// Result of sending an SMS.
///
/// `message_id` and `status` come from a JSON body; HTML or plain-text error
/// pages leave them absent and only carry the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResult {
    pub response_code: u16,
    pub response_message: Option<String>,
    pub message_id: Option<String>,
    pub status: Option<String>,
}

impl SendSmsResult {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.response_code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Field names the carrier sends to the notify URL.
pub enum InboundField {
    CommandLength,
    CommandId,
    CommandStatus,
    SequenceNumber,
    Command,
    ServiceType,
    SourceAddrTon,
    SourceAddrNpi,
    SourceAddr,
    DestAddrTon,
    DestAddrNpi,
    DestinationAddr,
    EsmClass,
    ProtocolId,
    PriorityFlag,
    ScheduleDeliveryTime,
    ValidityPeriod,
    RegisteredDelivery,
    ReplaceIfPresentFlag,
    DataCoding,
    SmDefaultMsgId,
    ShortMessage,
    SourceNetworkType,
    DestNetworkType,
    MessagePayload,
}

impl InboundField {
    pub const ALL: [InboundField; 25] = [
        Self::CommandLength,
        Self::CommandId,
        Self::CommandStatus,
        Self::SequenceNumber,
        Self::Command,
        Self::ServiceType,
        Self::SourceAddrTon,
        Self::SourceAddrNpi,
        Self::SourceAddr,
        Self::DestAddrTon,
        Self::DestAddrNpi,
        Self::DestinationAddr,
        Self::EsmClass,
        Self::ProtocolId,
        Self::PriorityFlag,
        Self::ScheduleDeliveryTime,
        Self::ValidityPeriod,
        Self::RegisteredDelivery,
        Self::ReplaceIfPresentFlag,
        Self::DataCoding,
        Self::SmDefaultMsgId,
        Self::ShortMessage,
        Self::SourceNetworkType,
        Self::DestNetworkType,
        Self::MessagePayload,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommandLength => "command_length",
            Self::CommandId => "command_id",
            Self::CommandStatus => "command_status",
            Self::SequenceNumber => "sequence_number",
            Self::Command => "command",
            Self::ServiceType => "service_type",
            Self::SourceAddrTon => "source_addr_ton",
            Self::SourceAddrNpi => "source_addr_npi",
            Self::SourceAddr => "source_addr",
            Self::DestAddrTon => "dest_addr_ton",
            Self::DestAddrNpi => "dest_addr_npi",
            Self::DestinationAddr => "destination_addr",
            Self::EsmClass => "esm_class",
            Self::ProtocolId => "protocol_id",
            Self::PriorityFlag => "priority_flag",
            Self::ScheduleDeliveryTime => "schedule_delivery_time",
            Self::ValidityPeriod => "validity_period",
            Self::RegisteredDelivery => "registered_delivery",
            Self::ReplaceIfPresentFlag => "replace_if_present_flag",
            Self::DataCoding => "data_coding",
            Self::SmDefaultMsgId => "sm_default_msg_id",
            Self::ShortMessage => "short_message",
            Self::SourceNetworkType => "source_network_type",
            Self::DestNetworkType => "dest_network_type",
            Self::MessagePayload => "message_payload",
        }
    }
}

impl FromStr for InboundField {
    type Err = UnknownInboundField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "command_length" => Self::CommandLength,
            "command_id" => Self::CommandId,
            "command_status" => Self::CommandStatus,
            "sequence_number" => Self::SequenceNumber,
            "command" => Self::Command,
            "service_type" => Self::ServiceType,
            "source_addr_ton" => Self::SourceAddrTon,
            "source_addr_npi" => Self::SourceAddrNpi,
            "source_addr" => Self::SourceAddr,
            "dest_addr_ton" => Self::DestAddrTon,
            "dest_addr_npi" => Self::DestAddrNpi,
            "destination_addr" => Self::DestinationAddr,
            "esm_class" => Self::EsmClass,
            "protocol_id" => Self::ProtocolId,
            "priority_flag" => Self::PriorityFlag,
            "schedule_delivery_time" => Self::ScheduleDeliveryTime,
            "validity_period" => Self::ValidityPeriod,
            "registered_delivery" => Self::RegisteredDelivery,
            "replace_if_present_flag" => Self::ReplaceIfPresentFlag,
            "data_coding" => Self::DataCoding,
            "sm_default_msg_id" => Self::SmDefaultMsgId,
            "short_message" => Self::ShortMessage,
            "source_network_type" => Self::SourceNetworkType,
            "dest_network_type" => Self::DestNetworkType,
            "message_payload" => Self::MessagePayload,
            _ => return Err(UnknownInboundField(value.to_owned())),
        })
    }
}

impl fmt::Display for InboundField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown inbound field: {0}")]
pub struct UnknownInboundField(pub String);

/// Decoded notification posted by the carrier to the application's notify URL.
///
/// Every decoded pair is kept, including keys outside [`InboundField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundSmsRecord {
    fields: BTreeMap<String, String>,
}

impl InboundSmsRecord {
    pub(crate) fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: InboundField) -> Option<&str> {
        self.get_raw(field.as_str())
    }

    /// Look up any key, recognized or not.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number the message came from (`source_addr`).
    pub fn sender(&self) -> Option<&str> {
        self.get(InboundField::SourceAddr)
    }

    /// Number the message was sent to (`destination_addr`).
    pub fn recipient(&self) -> Option<&str> {
        self.get(InboundField::DestinationAddr)
    }

    /// Message text: `short_message` when non-empty, else `message_payload`.
    pub fn message(&self) -> Option<&str> {
        match self.get(InboundField::ShortMessage) {
            Some(text) if !text.is_empty() => Some(text),
            short => self.get(InboundField::MessagePayload).or(short),
        }
    }

    pub fn command_status(&self) -> Option<&str> {
        self.get(InboundField::CommandStatus)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> InboundSmsRecord {
        InboundSmsRecord::from_fields(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn inbound_field_names_round_trip() {
        assert_eq!(InboundField::ALL.len(), 25);
        for field in InboundField::ALL {
            assert_eq!(field.as_str().parse::<InboundField>(), Ok(field));
        }
        assert_eq!(
            "nope".parse::<InboundField>(),
            Err(UnknownInboundField("nope".to_owned()))
        );
    }

    #[test]
    fn message_prefers_short_message_then_payload() {
        let both = record(&[("short_message", "short"), ("message_payload", "long")]);
        assert_eq!(both.message(), Some("short"));

        let payload_only = record(&[("message_payload", "long")]);
        assert_eq!(payload_only.message(), Some("long"));

        let empty_short = record(&[("short_message", ""), ("message_payload", "long")]);
        assert_eq!(empty_short.message(), Some("long"));

        let empty_only = record(&[("short_message", "")]);
        assert_eq!(empty_only.message(), Some(""));

        assert_eq!(record(&[]).message(), None);
    }

    #[test]
    fn missing_fields_yield_none() {
        let empty = InboundSmsRecord::default();
        assert!(empty.is_empty());
        assert_eq!(empty.sender(), None);
        assert_eq!(empty.recipient(), None);
        assert_eq!(empty.command_status(), None);
    }

    #[test]
    fn unknown_keys_are_kept() {
        let rec = record(&[("source_addr", "9171234567"), ("x_custom", "1")]);
        assert_eq!(rec.len(), 2);
        assert_eq!(rec.get_raw("x_custom"), Some("1"));
        assert_eq!(rec.sender(), Some("9171234567"));
        assert_eq!(
            rec.iter().collect::<Vec<_>>(),
            vec![("source_addr", "9171234567"), ("x_custom", "1")]
        );
    }

    #[test]
    fn send_sms_result_success_range() {
        let ok = SendSmsResult {
            response_code: 201,
            response_message: Some("Created".to_owned()),
            message_id: None,
            status: None,
        };
        assert!(ok.is_success());
        assert!(
            !SendSmsResult {
                response_code: 400,
                ..ok
            }
            .is_success()
        );
    }
}
