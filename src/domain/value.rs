use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// RouteSMS account username.
///
/// Invariant: not empty or whitespace-only. The value is sent exactly as given.
pub struct Username(String);

impl Username {
    /// Query field name used by RouteSMS (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the username as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// RouteSMS account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The
/// `Debug` representation is redacted.
pub struct Password(String);

impl Password {
    /// Query field name used by RouteSMS (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown on the handset (`source`).
///
/// Invariant: non-empty. The value is sent exactly as given; RouteSMS rejects
/// senders longer than 11 characters with status 1707.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by RouteSMS (`source`).
    pub const FIELD: &'static str = "source";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Required { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the sender id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination number as sent to RouteSMS (`destination`).
///
/// Invariant: non-empty after trimming. The gateway expects digits only; this
/// type does not normalize. Parse into [`PhoneNumber`] and convert if you need
/// normalization.
pub struct Recipient(String);

impl Recipient {
    /// Query field name used by RouteSMS (`destination`).
    pub const FIELD: &'static str = "destination";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Trimmed value as sent to RouteSMS.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    /// International digits of the E.164 form, without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164.trim_start_matches('+').to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Required {
                field: Recipient::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. Surrounding whitespace is stripped, which is
/// what the gateway receives.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by RouteSMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the trimmed message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message encoding/display type (`type`).
///
/// Any integer is accepted; the gateway answers 1704 for values it does not know.
pub struct MessageType(i32);

impl MessageType {
    /// Query field name used by RouteSMS (`type`).
    pub const FIELD: &'static str = "type";

    /// Plain text, GSM 03.38 character set.
    pub const PLAIN_TEXT: Self = Self(0);
    /// Flash message, GSM 03.38 character set.
    pub const FLASH: Self = Self(1);
    /// Unicode text.
    pub const UNICODE: Self = Self(2);
    /// Plain text, ISO-8859-1 character set.
    pub const PLAIN_TEXT_ISO_8859_1: Self = Self(5);
    /// Unicode flash message.
    pub const UNICODE_FLASH: Self = Self(6);
    /// Flash message, ISO-8859-1 character set.
    pub const FLASH_ISO_8859_1: Self = Self(7);

    /// Wrap a raw message-type code.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the underlying code.
    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery-report request flag (`dlr`).
pub enum DlrFlag {
    Disabled,
    #[default]
    Enabled,
}

impl DlrFlag {
    /// Query field name used by RouteSMS (`dlr`).
    pub const FIELD: &'static str = "dlr";

    /// Wire value: `0` or `1`.
    pub fn value(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::Enabled => 1,
        }
    }
}

impl From<bool> for DlrFlag {
    fn from(value: bool) -> Self {
        if value { Self::Enabled } else { Self::Disabled }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// RouteSMS status code.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by RouteSMS.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` for codes that carry a delivery result (1701 and 1032).
    pub fn is_success(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_success())
    }

    /// Returns `true` if this status code represents a credentials error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status codes documented by RouteSMS for `bulksms`.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Success,
    DndNumber,
    InvalidUsernamePassword,
    InvalidType,
    InvalidMessage,
    InvalidRecipient,
    InvalidSender,
    InvalidDlr,
    UserValidationError,
    InternalError,
    InsufficientCredit,
}

impl KnownStatusCode {
    /// Every known code, in gateway documentation order.
    pub const ALL: [Self; 11] = [
        Self::Success,
        Self::InvalidUsernamePassword,
        Self::InvalidType,
        Self::InvalidMessage,
        Self::InvalidRecipient,
        Self::InvalidSender,
        Self::InvalidDlr,
        Self::UserValidationError,
        Self::InternalError,
        Self::InsufficientCredit,
        Self::DndNumber,
    ];

    /// Convert a raw RouteSMS integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1701 => Self::Success,
            1703 => Self::InvalidUsernamePassword,
            1704 => Self::InvalidType,
            1705 => Self::InvalidMessage,
            1706 => Self::InvalidRecipient,
            1707 => Self::InvalidSender,
            1708 => Self::InvalidDlr,
            1709 => Self::UserValidationError,
            1710 => Self::InternalError,
            1025 => Self::InsufficientCredit,
            1032 => Self::DndNumber,
            _ => return None,
        })
    }

    /// The integer code on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 1701,
            Self::InvalidUsernamePassword => 1703,
            Self::InvalidType => 1704,
            Self::InvalidMessage => 1705,
            Self::InvalidRecipient => 1706,
            Self::InvalidSender => 1707,
            Self::InvalidDlr => 1708,
            Self::UserValidationError => 1709,
            Self::InternalError => 1710,
            Self::InsufficientCredit => 1025,
            Self::DndNumber => 1032,
        }
    }

    /// Human-readable description used for gateway errors.
    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "Message submitted successfully",
            Self::DndNumber => "Recipient is on the DND registry",
            Self::InvalidUsernamePassword => "Invalid username or password supplied",
            Self::InvalidType => "Invalid type supplied",
            Self::InvalidMessage => "Invalid message. Message contains invalid characters",
            Self::InvalidRecipient => "Invalid recipient. Recipient must be numeric",
            Self::InvalidSender => "Invalid sender. Sender must not be more than 11 characters",
            Self::InvalidDlr => "Invalid dlr supplied",
            Self::UserValidationError => "User validation error",
            Self::InternalError => "Internal error",
            Self::InsufficientCredit => "Insufficient credit",
        }
    }

    /// Whether the gateway returns a delivery record for this code.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::DndNumber)
    }

    /// Whether this status indicates invalid credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidUsernamePassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new(" user ").unwrap();
        assert_eq!(username.as_str(), " user ");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let sender = SenderId::new(" Acme ").unwrap();
        assert_eq!(sender.as_str(), " Acme ");
        assert_eq!(
            SenderId::new(""),
            Err(ValidationError::Required { field: "source" })
        );

        let recipient = Recipient::new(" 2348030000000 ").unwrap();
        assert_eq!(recipient.as_str(), "2348030000000");
        assert_eq!(
            Recipient::new("   "),
            Err(ValidationError::Required {
                field: "destination"
            })
        );

        let msg = MessageText::new("  hi there \n").unwrap();
        assert_eq!(msg.as_str(), "hi there");
        assert_eq!(
            MessageText::new(" \t "),
            Err(ValidationError::Required { field: "message" })
        );
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").unwrap();
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn phone_number_converts_to_numeric_recipient() {
        let p1 = PhoneNumber::parse(Some(country::Id::NG), "0803 123 4567").unwrap();
        let p2 = PhoneNumber::parse(None, "+2348031234567").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+2348031234567");
        assert_eq!(p1.raw(), "0803 123 4567");

        let recipient: Recipient = p1.into();
        assert_eq!(recipient.as_str(), "2348031234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn message_type_and_dlr_defaults() {
        assert_eq!(MessageType::default(), MessageType::PLAIN_TEXT);
        assert_eq!(MessageType::UNICODE.value(), 2);
        assert_eq!(MessageType::new(9).value(), 9);
        assert_eq!(MessageType::new(-1).value(), -1);
        assert_eq!(MessageType::new(300).value(), 300);

        assert_eq!(DlrFlag::default(), DlrFlag::Enabled);
        assert_eq!(DlrFlag::default().value(), 1);
        assert_eq!(DlrFlag::from(false).value(), 0);
    }

    #[test]
    fn known_status_codes_round_trip_through_integers() {
        for kind in KnownStatusCode::ALL {
            assert_eq!(KnownStatusCode::from_code(kind.code()), Some(kind));
        }
        assert_eq!(KnownStatusCode::from_code(9999), None);
    }

    #[test]
    fn status_code_classification() {
        assert!(StatusCode::new(1701).is_success());
        assert!(StatusCode::new(1032).is_success());
        assert!(!StatusCode::new(1703).is_success());
        assert!(StatusCode::new(1703).is_auth_error());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known().is_none());
        assert!(!unknown.is_success());
        assert_eq!(unknown.to_string(), "9999");
    }
}
