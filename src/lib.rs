//! Typed Rust client for the RouteSMS bulk HTTP API.
//!
//! The crate is layered like the gateway call it wraps: a domain layer of strong
//! types, a transport layer for the gateway's `|`/`,` delimited wire format, and a
//! small client layer issuing the `bulksms` GET request.
//!
//! ```rust,no_run
//! use routesms::{Credentials, MessageType, RouteSmsClient, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), routesms::RouteSmsError> {
//!     let client = RouteSmsClient::new(Credentials::new("user", "secret")?);
//!     let request = SendSms::new("Acme", "2348030000000", "hello")?
//!         .with_message_type(MessageType::UNICODE);
//!     for result in client.send(request).await? {
//!         println!("{} -> {}", result.recipient, result.message_id);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, HttpStatusError, RouteSmsClient, RouteSmsClientBuilder, RouteSmsError,
};
pub use domain::{
    DeliveryResult, DlrFlag, KnownStatusCode, MessageText, MessageType, Password, PhoneNumber,
    Recipient, SendSms, SenderId, StatusCode, Username, ValidationError,
};
pub use transport::{DecodeError, transform_response};
