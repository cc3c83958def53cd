//! Rich sheet text.
//!
//! Sheet strings are stored as a sequence of payloads: literal text runs
//! interleaved with formatting macros (colour changes, soft hyphens, item
//! links, ...). Filters and display code only care about the literal text,
//! which [`SeString::extract_text`] recovers.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One chunk of a rich sheet string.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    Text(String),
    NewLine,
    /// Soft hyphen hint; renders as nothing.
    SoftHyphen,
    /// Any other macro. Carries the raw macro code and its integer params.
    Macro { code: u8, params: Vec<u32> },
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SeString {
    payloads: Vec<Payload>,
}

impl SeString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_payloads(payloads: Vec<Payload>) -> Self {
        Self { payloads }
    }

    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }

    pub fn push(&mut self, payload: Payload) {
        self.payloads.push(payload);
    }

    /// Literal text with every macro stripped.
    ///
    /// Borrows when the string is a single text run, which is the common case
    /// for names.
    pub fn text(&self) -> Cow<'_, str> {
        match self.payloads.as_slice() {
            [] => Cow::Borrowed(""),
            [Payload::Text(s)] => Cow::Borrowed(s.as_str()),
            payloads => {
                let mut out = String::new();
                for p in payloads {
                    match p {
                        Payload::Text(s) => out.push_str(s),
                        Payload::NewLine => out.push('\n'),
                        Payload::SoftHyphen | Payload::Macro { .. } => {}
                    }
                }
                Cow::Owned(out)
            }
        }
    }

    /// Owned literal text.
    pub fn extract_text(&self) -> String {
        self.text().into_owned()
    }

    /// True when the string has no literal text (macros alone do not count).
    pub fn is_empty(&self) -> bool {
        self.payloads.iter().all(|p| match p {
            Payload::Text(s) => s.is_empty(),
            Payload::NewLine => false,
            Payload::SoftHyphen | Payload::Macro { .. } => true,
        })
    }

    /// Compare literal text against `other`.
    pub fn text_eq(&self, other: &str) -> bool {
        self.text() == other
    }
}

impl From<&str> for SeString {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }
        Self {
            payloads: vec![Payload::Text(value.to_string())],
        }
    }
}

impl From<String> for SeString {
    fn from(value: String) -> Self {
        if value.is_empty() {
            return Self::default();
        }
        Self {
            payloads: vec![Payload::Text(value)],
        }
    }
}

impl fmt::Display for SeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
