//! Solver input deck reader
//!
//! MOCEX input decks are one `KEY value...` card per line; `!` starts a
//! comment. The deck is read to label runs, the parsers do not depend on it.
//!
//! ```rust
//! use mocex_trace::input::{InputDeck, InputValue};
//!
//! # fn main() -> mocex_trace::Result<()> {
//! let deck = InputDeck::parse_str("SOURCE_ITERATIONS 40 ! outer limit\nGROUPS 1 2 3\n")?;
//! assert_eq!(deck.get("SOURCE_ITERATIONS"), Some(&InputValue::Single("40".to_string())));
//! assert_eq!(deck.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;
use crate::Result;

/// Value of an input card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// `KEY value`
    Single(String),
    /// `KEY value value...`
    List(Vec<String>),
}

impl InputValue {
    /// First value of the card.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::List(values) => values.first().map_or("", String::as_str),
        }
    }
}

/// Parsed input deck, keyed by card name. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDeck {
    cards: BTreeMap<String, InputValue>,
}

impl InputDeck {
    /// Parse a deck from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingInputValue`] for a key without a value,
    /// or an IO error from the reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut cards = BTreeMap::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let content = strip_comment(&line);
            let mut tokens = content.split_whitespace();
            let Some(key) = tokens.next() else {
                continue;
            };
            let mut values: Vec<String> = tokens.map(str::to_string).collect();
            let value = match values.len() {
                0 => {
                    return Err(FormatError::MissingInputValue {
                        line: index + 1,
                        key: key.to_string(),
                    }
                    .into())
                }
                1 => InputValue::Single(values.remove(0)),
                _ => InputValue::List(values),
            };
            cards.insert(key.to_string(), value);
        }

        debug!(cards = cards.len(), "parsed input deck");
        Ok(Self { cards })
    }

    /// Parse an in-memory deck.
    ///
    /// # Errors
    ///
    /// Same as [`parse_reader`](Self::parse_reader).
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::parse_reader(text.as_bytes())
    }

    /// Parse a deck file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be opened, or a format error.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Look up a card.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.cards.get(key)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.cards.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once('!').map_or(line, |(content, _)| content)
}
