//! Toy domain: people live at addresses, addresses are in countries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-style country code, e.g. `GB`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(pub String);

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Code(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: Code,
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: Code::new(code),
        }
    }
}

/// A postal address. The country may be unknown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub country: Option<Country>,
}

impl Address {
    pub fn new(street: impl Into<String>, country: Option<Country>) -> Self {
        Self {
            street: street.into(),
            country,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_displays_raw_value() {
        let code = Code::new("NL");
        assert_eq!(code.to_string(), "NL");
        assert_eq!(code.as_str(), "NL");
    }

    #[test]
    fn address_serializes_missing_country_as_null() {
        let address = Address::new("1 Nowhere Lane", None);
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, r#"{"street":"1 Nowhere Lane","country":null}"#);
    }

    #[test]
    fn address_roundtrips_through_json() {
        let address = Address::new("Damrak 1", Some(Country::new("Netherlands", "NL")));
        let json = serde_json::to_string(&address).unwrap();
        let deserialized: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(address, deserialized);
    }
}
