//! Outbound messaging links
//!
//! Links have the form `https://wa.me/{handle}?text={message}`, with the
//! message percent-encoded (spaces as `%20`, never `+`). Two presets exist:
//! a generic order message and a per-item one.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::result::Result;

/// Base of every contact link
pub const CONTACT_BASE_URL: &str = "https://wa.me/";

/// Preset for the generic "place an order" link
pub const ORDER_MESSAGE: &str = "Olá! Gostaria de fazer um pedido.";

/// Prefix for per-item order links, followed by the item name
pub const ITEM_ORDER_PREFIX: &str = "Olá! Gostaria de pedir: ";

/// Bytes escaped in the `text` value; keeps the message a single query pair
const MESSAGE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Digits-only phone number identifying the messaging contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactHandle(String);

impl ContactHandle {
    /// Strips everything but ASCII digits from a phone number.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidContactHandle` when the input has no digits.
    pub fn normalize(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(Error::invalid_contact_handle(input));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactHandle {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::normalize(&value)
    }
}

impl From<ContactHandle> for String {
    fn from(handle: ContactHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for ContactHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a contact link carrying a pre-filled message.
///
/// # Errors
///
/// Returns `Error::InvalidLink` if the URL cannot be assembled.
pub fn contact_link(handle: &ContactHandle, message: &str) -> Result<Url> {
    let mut url = Url::parse(CONTACT_BASE_URL)?.join(handle.as_str())?;
    let text = utf8_percent_encode(message, MESSAGE_ENCODE_SET);
    url.set_query(Some(&format!("text={text}")));
    Ok(url)
}

/// Link for the generic "Pedir Agora" buttons.
///
/// # Errors
///
/// Returns `Error::InvalidLink` if the URL cannot be assembled.
pub fn order_link(handle: &ContactHandle) -> Result<Url> {
    contact_link(handle, ORDER_MESSAGE)
}

/// Link for ordering one specific menu item.
///
/// # Errors
///
/// Returns `Error::InvalidLink` if the URL cannot be assembled.
pub fn item_order_link(handle: &ContactHandle, item_name: &str) -> Result<Url> {
    contact_link(handle, &format!("{ITEM_ORDER_PREFIX}{item_name}"))
}
