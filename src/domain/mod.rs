//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendSms;
pub use response::DeliveryResult;
pub use validation::ValidationError;
pub use value::{
    DlrFlag, KnownStatusCode, MessageText, MessageType, Password, PhoneNumber, Recipient,
    SenderId, StatusCode, Username,
};
