use crate::domain::{
    DeliveryResult, DlrFlag, MessageText, MessageType, Recipient, SendSms, SenderId, StatusCode,
};

const RECORD_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = '|';

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{message}")]
    Gateway { code: StatusCode, message: String },

    #[error("response status is not a number: {raw:?}")]
    InvalidStatus { raw: String },
}

/// Request fields of a `bulksms` GET, after the credentials.
pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    vec![
        (
            MessageType::FIELD.to_owned(),
            request.message_type().value().to_string(),
        ),
        (DlrFlag::FIELD.to_owned(), request.dlr().value().to_string()),
        (
            Recipient::FIELD.to_owned(),
            request.recipient().as_str().to_owned(),
        ),
        (
            SenderId::FIELD.to_owned(),
            request.sender().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message().as_str().to_owned(),
        ),
    ]
}

/// Decode a `bulksms` response body.
///
/// A body containing `,` is a bulk response: every record is decoded positionally
/// and no status dispatch happens. Otherwise the first `|` field selects between a
/// single result and a gateway error.
pub fn decode_send_sms_response(body: &str) -> Result<Vec<DeliveryResult>, DecodeError> {
    if body.contains(RECORD_SEPARATOR) {
        return Ok(body.split(RECORD_SEPARATOR).map(transform_response).collect());
    }

    let raw_status = body.split(FIELD_SEPARATOR).next().unwrap_or_default();
    let code = raw_status
        .trim()
        .parse::<i32>()
        .map(StatusCode::new)
        .map_err(|_| DecodeError::InvalidStatus {
            raw: raw_status.to_owned(),
        })?;

    match code.known() {
        Some(kind) if kind.is_success() => Ok(vec![transform_response(body)]),
        Some(kind) => Err(DecodeError::Gateway {
            code,
            message: kind.description().to_owned(),
        }),
        None => Err(DecodeError::Gateway {
            code,
            message: format!("An error occurred with code {code}"),
        }),
    }
}

/// Split one `status|recipient|messageId` record into a [`DeliveryResult`].
///
/// Fields past the third are dropped; missing ones become empty strings.
pub fn transform_response(record: &str) -> DeliveryResult {
    let mut fields = record.split(FIELD_SEPARATOR);
    let mut next = || fields.next().unwrap_or_default().to_owned();
    DeliveryResult {
        status: next(),
        recipient: next(),
        message_id: next(),
    }
}
