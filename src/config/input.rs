//! Lenient deserialization for runner inputs.
//!
//! The environment layer guesses types: `user1,user2` arrives as a list,
//! `1234` as an integer and `true` as a boolean. Every action input is text,
//! so these shapes are folded back into the string the workflow author
//! wrote.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Text(String),
    Flag(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    List(Vec<RawInput>),
}

impl RawInput {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Flag(flag) => flag.to_string(),
            Self::Unsigned(number) => number.to_string(),
            Self::Signed(number) => number.to_string(),
            Self::Float(number) => number.to_string(),
            Self::List(items) => items
                .into_iter()
                .map(Self::into_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Deserializes an optional input as text, whatever shape the layer gave it.
pub(super) fn text_input<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawInput>::deserialize(deserializer).map(|raw| raw.map(RawInput::into_text))
}
