use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Settlement currency of an instrument, identified by its ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    GBP,
    AUD,
    EUR,
    CAD,
    CHF,
    DKK,
    HKD,
    JPY,
    NZD,
    NOK,
    SEK,
    SGD,
}

impl Currency {
    pub const ALL: [Currency; 13] = [
        Currency::USD,
        Currency::GBP,
        Currency::AUD,
        Currency::EUR,
        Currency::CAD,
        Currency::CHF,
        Currency::DKK,
        Currency::HKD,
        Currency::JPY,
        Currency::NZD,
        Currency::NOK,
        Currency::SEK,
        Currency::SGD,
    ];

    /// ISO 4217 three-letter code (e.g. "USD")
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::EUR => "EUR",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::DKK => "DKK",
            Currency::HKD => "HKD",
            Currency::JPY => "JPY",
            Currency::NZD => "NZD",
            Currency::NOK => "NOK",
            Currency::SEK => "SEK",
            Currency::SGD => "SGD",
        }
    }

    /// Full currency name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "United States Dollar",
            Currency::GBP => "British Pound Sterling",
            Currency::AUD => "Australian Dollar",
            Currency::EUR => "Euro",
            Currency::CAD => "Canadian Dollar",
            Currency::CHF => "Swiss Franc",
            Currency::DKK => "Danish Krone",
            Currency::HKD => "Hong Kong Dollar",
            Currency::JPY => "Japanese Yen",
            Currency::NZD => "New Zealand Dollar",
            Currency::NOK => "Norwegian Krone",
            Currency::SEK => "Swedish Krona",
            Currency::SGD => "Singapore Dollar",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown currency code: {0:?}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_and_display() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(format!("{}", Currency::JPY), "JPY");
        assert_eq!(format!("{:>5}", Currency::USD), "  USD");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" GBP ".parse::<Currency>(), Ok(Currency::GBP));
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in Currency::ALL.iter().enumerate() {
            for b in &Currency::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_currency_serde_uses_code() {
        let json = serde_json::to_string(&Currency::CHF).unwrap();
        assert_eq!(json, "\"CHF\"");
        let parsed: Currency = serde_json::from_str("\"NZD\"").unwrap();
        assert_eq!(parsed, Currency::NZD);
    }
}
