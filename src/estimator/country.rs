use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::rates::table::Currency;

/// Origin country profile.
///
/// `Japan` and `JapanSanctioned` are the same physical country under two
/// tariff regimes: the sanctioned variant carries a different commission
/// and a tiered USD shipping schedule instead of a fixed JPY cost. The
/// active variant is chosen by `sanctions::reclassify` from the vehicle's
/// engine characteristics, not by a static lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Country {
    #[serde(rename = "JP")]
    Japan,
    #[serde(rename = "JP_SANCTIONED")]
    JapanSanctioned,
    #[serde(rename = "KR")]
    Korea,
    #[serde(rename = "CN")]
    China,
}

/// How shipping cost is determined for a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShippingPolicy {
    /// Flat cost in the origin currency, converted at the current rate.
    Fixed { amount: f64, currency: Currency },
    /// Price-tiered FOB + freight schedule quoted in USD
    /// (see `shipping::sanctioned_sea_freight_usd`).
    TieredUsd,
}

impl Country {
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Japan => "Japan",
            Country::JapanSanctioned => "Japan (sanctioned)",
            Country::Korea => "Korea",
            Country::China => "China",
        }
    }

    /// Currency the purchase price is quoted in.
    pub fn currency(&self) -> Currency {
        match self {
            Country::Japan | Country::JapanSanctioned => Currency::Jpy,
            Country::Korea => Currency::Krw,
            Country::China => Currency::Cny,
        }
    }

    /// Flat company commission, already in RUB.
    pub fn commission_rub(&self) -> f64 {
        match self {
            Country::Japan => 50_000.0,
            Country::JapanSanctioned => 100_000.0,
            Country::Korea => 75_000.0,
            Country::China => 75_000.0,
        }
    }

    pub fn is_sanctioned(&self) -> bool {
        matches!(self, Country::JapanSanctioned)
    }

    /// The sanctioned tariff regime of this country, if one exists.
    pub fn sanctioned_variant(&self) -> Option<Country> {
        match self {
            Country::Japan => Some(Country::JapanSanctioned),
            _ => None,
        }
    }

    /// The normal tariff regime this sanctioned profile reverts to.
    pub fn normal_variant(&self) -> Option<Country> {
        match self {
            Country::JapanSanctioned => Some(Country::Japan),
            _ => None,
        }
    }

    pub fn shipping_policy(&self) -> ShippingPolicy {
        match self {
            Country::Japan => ShippingPolicy::Fixed {
                amount: 200_000.0,
                currency: Currency::Jpy,
            },
            Country::JapanSanctioned => ShippingPolicy::TieredUsd,
            Country::Korea => ShippingPolicy::Fixed {
                amount: 2_000_000.0,
                currency: Currency::Krw,
            },
            Country::China => ShippingPolicy::Fixed {
                amount: 17_000.0,
                currency: Currency::Cny,
            },
        }
    }
}
