//! Instrument identification.
//!
//! A `Symbol` is the opaque key every other structure is indexed by. The
//! exchange also publishes a `Listing` per symbol describing what it trades
//! and what it is denominated in.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Tradable instrument identifier (e.g. "PEARLS").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Exchange listing for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub symbol: Symbol,
    /// Underlying product traded under this symbol.
    pub product: String,
    /// Currency the symbol is quoted in (e.g. "SEASHELLS").
    pub denomination: String,
}

impl Listing {
    pub fn new(symbol: Symbol, product: impl Into<String>, denomination: impl Into<String>) -> Self {
        Self {
            symbol,
            product: product.into(),
            denomination: denomination.into(),
        }
    }
}
