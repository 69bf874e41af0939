use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currencies supported by the estimator; the feed must carry all of them
/// before a snapshot is considered usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Jpy,
    Krw,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Jpy,
        Currency::Krw,
        Currency::Cny,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single quotation as published by the feed: RUB value of one lot of
/// `nominal` units, together with the previous trading day's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub value: f64,
    pub previous: f64,
    pub nominal: u32,
}

impl Quote {
    /// RUB per one unit of the currency (lot size divided out; JPY and KRW
    /// are quoted per 100 and per 1000 units respectively).
    pub fn per_unit(&self) -> f64 {
        self.value / f64::from(self.nominal)
    }
}

/// Immutable snapshot of the latest known exchange rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    quotes: HashMap<Currency, Quote>,
    /// Quotation date as published by the feed.
    pub as_of: String,
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    pub fn new(quotes: HashMap<Currency, Quote>, as_of: String) -> Self {
        Self {
            quotes,
            as_of,
            fetched_at: Utc::now(),
        }
    }

    pub fn quote(&self, currency: Currency) -> Option<&Quote> {
        self.quotes.get(&currency)
    }

    /// RUB per one unit of the currency, or `None` if the rate is absent.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.quotes.get(&currency).map(Quote::per_unit)
    }

    /// Convert an amount in the given currency to RUB.
    pub fn to_rub(&self, amount: f64, currency: Currency) -> Option<f64> {
        self.rate(currency).map(|rate| amount * rate)
    }

    /// Convert a RUB amount into the given currency.
    pub fn from_rub(&self, amount_rub: f64, currency: Currency) -> Option<f64> {
        self.rate(currency).map(|rate| amount_rub / rate)
    }
}
