//! Transport layer: query-string encoding and the gateway's delimited response grammar.

mod send_sms;

pub use send_sms::{
    DecodeError, decode_send_sms_response, encode_send_sms_query, transform_response,
};
