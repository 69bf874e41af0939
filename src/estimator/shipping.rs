use crate::estimator::country::{Country, ShippingPolicy};
use crate::estimator::EstimateError;
use crate::rates::table::{Currency, RateTable};

/// One row of the sanctioned-Japan sea freight schedule. Price bounds are
/// in JPY, inclusive on both ends; FOB and freight are quoted in USD.
struct FreightTier {
    min_price: f64,
    max_price: f64,
    fob: f64,
    freight: f64,
}

const JAPAN_SANCTIONED_FREIGHT: [FreightTier; 10] = [
    FreightTier { min_price: 0.0, max_price: 999_999.0, fob: 800.0, freight: 1_500.0 },
    FreightTier { min_price: 1_000_000.0, max_price: 1_999_999.0, fob: 900.0, freight: 1_500.0 },
    FreightTier { min_price: 2_000_000.0, max_price: 2_999_999.0, fob: 1_000.0, freight: 1_500.0 },
    FreightTier { min_price: 3_000_000.0, max_price: 3_999_999.0, fob: 1_100.0, freight: 1_500.0 },
    FreightTier { min_price: 4_000_000.0, max_price: 4_999_999.0, fob: 1_200.0, freight: 1_500.0 },
    FreightTier { min_price: 5_000_000.0, max_price: 5_999_999.0, fob: 1_300.0, freight: 1_500.0 },
    FreightTier { min_price: 6_000_000.0, max_price: 6_999_999.0, fob: 1_500.0, freight: 1_500.0 },
    FreightTier { min_price: 7_000_000.0, max_price: 7_999_999.0, fob: 1_600.0, freight: 1_500.0 },
    FreightTier { min_price: 8_000_000.0, max_price: 8_999_999.0, fob: 1_800.0, freight: 1_500.0 },
    FreightTier { min_price: 9_000_000.0, max_price: 9_999_999.0, fob: 2_000.0, freight: 1_500.0 },
];

/// Flat port handling added to the FOB component in every case.
const FOB_HANDLING_USD: f64 = 300.0;

/// Above the last tier: FOB becomes a percentage of price, freight jumps.
const FALLBACK_FOB_RATE: f64 = 0.03;
const FALLBACK_FREIGHT_USD: f64 = 2_500.0;

/// Shipping cost in RUB plus the amount it was quoted as.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingCost {
    pub rub: f64,
    pub original_amount: f64,
    pub original_currency: Currency,
}

/// Total sea freight in USD for a sanctioned-Japan purchase price in JPY.
///
/// First tier whose range contains the price wins; above all tiers the
/// fallback formula applies.
pub fn sanctioned_sea_freight_usd(price_jpy: f64) -> f64 {
    for tier in &JAPAN_SANCTIONED_FREIGHT {
        if price_jpy >= tier.min_price && price_jpy <= tier.max_price {
            return tier.fob + FOB_HANDLING_USD + tier.freight;
        }
    }

    price_jpy * FALLBACK_FOB_RATE + FOB_HANDLING_USD + FALLBACK_FREIGHT_USD
}

/// Shipping cost for a purchase, converted to RUB.
pub fn shipping_cost(
    country: Country,
    price: f64,
    rates: &RateTable,
) -> Result<ShippingCost, EstimateError> {
    match country.shipping_policy() {
        ShippingPolicy::Fixed { amount, currency } => {
            let rub = rates
                .to_rub(amount, currency)
                .ok_or(EstimateError::MissingRate(currency))?;
            Ok(ShippingCost {
                rub,
                original_amount: amount,
                original_currency: currency,
            })
        }
        ShippingPolicy::TieredUsd => {
            let usd = sanctioned_sea_freight_usd(price);
            let rub = rates
                .to_rub(usd, Currency::Usd)
                .ok_or(EstimateError::MissingRate(Currency::Usd))?;
            Ok(ShippingCost {
                rub,
                original_amount: usd,
                original_currency: Currency::Usd,
            })
        }
    }
}
