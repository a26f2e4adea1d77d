//! XML envelope codec.
//!
//! Both directions work for every envelope type so that stub servers can
//! parse requests and build responses with the same code the client uses.

use crate::error::{GracenoteError, Result};
use crate::types::{Identity, Queries, Responses};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Top-level document type with a fixed root element name
pub trait Envelope: DeserializeOwned {
    /// Name of the root element
    const ROOT: &'static str;
}

impl Envelope for Queries {
    const ROOT: &'static str = "QUERIES";
}

impl Envelope for Responses {
    const ROOT: &'static str = "RESPONSES";
}

impl Envelope for Identity {
    const ROOT: &'static str = "AUTH";
}

/// Serialize an envelope to its wire XML
pub fn encode<T: Serialize>(envelope: &T) -> Result<Vec<u8>> {
    quick_xml::se::to_string(envelope)
        .map(String::into_bytes)
        .map_err(|e| GracenoteError::Encode(e.to_string()))
}

/// Parse wire XML into an envelope.
///
/// The root element must carry the envelope's name. Unknown elements are
/// skipped, wherever they appear. On failure the raw bytes travel with the error.
pub fn decode<T: Envelope>(bytes: &[u8]) -> Result<T> {
    let text = std::str::from_utf8(bytes).map_err(|e| decode_error(e, bytes))?;

    match root_name(text).map_err(|e| decode_error(e, bytes))? {
        Some(name) if name == T::ROOT => {}
        Some(name) => {
            return Err(decode_error(
                format!("expected root element <{}>, found <{name}>", T::ROOT),
                bytes,
            ))
        }
        None => {
            return Err(decode_error(
                format!("expected root element <{}>, found none", T::ROOT),
                bytes,
            ))
        }
    }

    quick_xml::de::from_str(text).map_err(|e| decode_error(e, bytes))
}

/// Name of the first element in the document
fn root_name(text: &str) -> std::result::Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.name().as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn decode_error(err: impl std::fmt::Display, bytes: &[u8]) -> GracenoteError {
    GracenoteError::Decode {
        message: err.to_string(),
        body: bytes.to_vec(),
    }
}
