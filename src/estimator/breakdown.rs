use serde::{Deserialize, Serialize};

use crate::estimator::country::Country;
use crate::estimator::duty::customs_duty_eur;
use crate::estimator::fees::{clearance_fee_rub, recycling_fee_rub, ImportPurpose, BROKER_FEE_RUB};
use crate::estimator::shipping::shipping_cost;
use crate::estimator::vehicle::{AgeBracket, EngineType};
use crate::estimator::EstimateError;
use crate::rates::table::{Currency, RateTable};

/// Inputs to a single estimate.
///
/// The country here is the *effective* profile: callers run
/// `sanctions::reclassify` first and pass the selection it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub country: Country,
    /// Purchase price in the origin country's currency.
    pub price: f64,
    pub displacement_cc: u32,
    pub engine: EngineType,
    pub age: AgeBracket,
}

impl EstimateRequest {
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(EstimateError::InvalidPrice(self.price));
        }
        if self.displacement_cc == 0 {
            return Err(EstimateError::InvalidDisplacement);
        }
        Ok(())
    }
}

/// An amount as originally quoted, before conversion to RUB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalAmount {
    pub amount: f64,
    pub currency: Currency,
}

/// Full landed-cost decomposition. Built fresh on every estimate from the
/// current rate snapshot; all monetary fields are raw, unrounded values.
/// Rounding is presentation-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub vehicle_cost_rub: f64,
    pub vehicle_cost_original: OriginalAmount,
    pub shipping_cost_rub: f64,
    pub shipping_cost_original: OriginalAmount,
    pub customs_duty_rub: f64,
    pub clearance_fee_rub: f64,
    pub broker_fee_rub: f64,
    pub commission_rub: f64,
    pub recycling_fee_rub: f64,
    pub commercial_recycling_fee_rub: f64,
    /// Grand total assuming personal-use import.
    pub total_rub: f64,
    /// Grand total assuming commercial resale; informational.
    pub total_commercial_rub: f64,
}

/// Compute the full cost breakdown for a request against a rate snapshot.
///
/// Duty banding happens in EUR, so the vehicle value is converted RUB→EUR
/// through the same table; clearance banding uses the RUB value directly.
pub fn estimate(request: &EstimateRequest, rates: &RateTable) -> Result<CostBreakdown, EstimateError> {
    request.validate()?;

    let origin_currency = request.country.currency();
    let vehicle_cost_rub = rates
        .to_rub(request.price, origin_currency)
        .ok_or(EstimateError::MissingRate(origin_currency))?;
    let vehicle_cost_eur = rates
        .from_rub(vehicle_cost_rub, Currency::Eur)
        .ok_or(EstimateError::MissingRate(Currency::Eur))?;

    let shipping = shipping_cost(request.country, request.price, rates)?;

    let duty_eur = customs_duty_eur(vehicle_cost_eur, request.displacement_cc, request.age);
    let customs_duty_rub = rates
        .to_rub(duty_eur, Currency::Eur)
        .ok_or(EstimateError::MissingRate(Currency::Eur))?;

    let clearance = clearance_fee_rub(vehicle_cost_rub);
    let commission = request.country.commission_rub();
    let recycling = recycling_fee_rub(request.displacement_cc, request.age, ImportPurpose::Personal);
    let commercial_recycling =
        recycling_fee_rub(request.displacement_cc, request.age, ImportPurpose::Commercial);

    let base = vehicle_cost_rub
        + shipping.rub
        + customs_duty_rub
        + clearance
        + BROKER_FEE_RUB
        + commission;

    Ok(CostBreakdown {
        vehicle_cost_rub,
        vehicle_cost_original: OriginalAmount {
            amount: request.price,
            currency: origin_currency,
        },
        shipping_cost_rub: shipping.rub,
        shipping_cost_original: OriginalAmount {
            amount: shipping.original_amount,
            currency: shipping.original_currency,
        },
        customs_duty_rub,
        clearance_fee_rub: clearance,
        broker_fee_rub: BROKER_FEE_RUB,
        commission_rub: commission,
        recycling_fee_rub: recycling,
        commercial_recycling_fee_rub: commercial_recycling,
        total_rub: base + recycling,
        total_commercial_rub: base + commercial_recycling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::table::test_support::fixed_rates;

    fn japan_request() -> EstimateRequest {
        EstimateRequest {
            country: Country::Japan,
            price: 1_000_000.0,
            displacement_cc: 1_500,
            engine: EngineType::Petrol,
            age: AgeBracket::Old,
        }
    }

    #[test]
    fn test_full_breakdown_normal_japan() {
        // Rates: JPY 0.5, EUR 100, USD 90 (see fixed_rates).
        let breakdown = estimate(&japan_request(), &fixed_rates()).unwrap();

        assert_eq!(breakdown.vehicle_cost_rub, 500_000.0);
        assert_eq!(breakdown.shipping_cost_rub, 100_000.0);
        // Old, 1500 cc: 1500 * 3.2 = 4800 EUR -> 480,000 RUB.
        assert_eq!(breakdown.customs_duty_rub, 480_000.0);
        assert_eq!(breakdown.clearance_fee_rub, 3_100.0);
        assert_eq!(breakdown.broker_fee_rub, 100_000.0);
        assert_eq!(breakdown.commission_rub, 50_000.0);
        assert_eq!(breakdown.recycling_fee_rub, 5_200.0);
        assert_eq!(breakdown.commercial_recycling_fee_rub, 1_174_000.0);
        assert_eq!(breakdown.total_rub, 1_238_300.0);
        assert_eq!(breakdown.total_commercial_rub, 2_407_100.0);
    }

    #[test]
    fn test_full_breakdown_sanctioned_japan() {
        let request = EstimateRequest {
            country: Country::JapanSanctioned,
            price: 1_000_000.0,
            displacement_cc: 2_000,
            engine: EngineType::Petrol,
            age: AgeBracket::New,
        };
        let breakdown = estimate(&request, &fixed_rates()).unwrap();

        assert_eq!(breakdown.vehicle_cost_rub, 500_000.0);
        // Tiered schedule: (900 + 300 + 1500) USD * 90.
        assert_eq!(breakdown.shipping_cost_rub, 243_000.0);
        assert_eq!(breakdown.shipping_cost_original.currency, Currency::Usd);
        // 5000 EUR value, first band: max(2000 * 2.5, 5000 * 0.54) = 5000 EUR.
        assert_eq!(breakdown.customs_duty_rub, 500_000.0);
        assert_eq!(breakdown.commission_rub, 100_000.0);
        assert_eq!(breakdown.recycling_fee_rub, 3_400.0);
        assert_eq!(breakdown.commercial_recycling_fee_rub, 667_400.0);
        assert_eq!(breakdown.total_rub, 1_449_500.0);
    }

    #[test]
    fn test_totals_are_sum_of_components() {
        let breakdown = estimate(&japan_request(), &fixed_rates()).unwrap();
        let base = breakdown.vehicle_cost_rub
            + breakdown.shipping_cost_rub
            + breakdown.customs_duty_rub
            + breakdown.clearance_fee_rub
            + breakdown.broker_fee_rub
            + breakdown.commission_rub;
        assert_eq!(breakdown.total_rub, base + breakdown.recycling_fee_rub);
        assert_eq!(
            breakdown.total_commercial_rub,
            base + breakdown.commercial_recycling_fee_rub
        );
    }

    #[test]
    fn test_no_negative_components() {
        let breakdown = estimate(&japan_request(), &fixed_rates()).unwrap();
        for value in [
            breakdown.vehicle_cost_rub,
            breakdown.shipping_cost_rub,
            breakdown.customs_duty_rub,
            breakdown.clearance_fee_rub,
            breakdown.broker_fee_rub,
            breakdown.commission_rub,
            breakdown.recycling_fee_rub,
            breakdown.commercial_recycling_fee_rub,
        ] {
            assert!(value >= 0.0);
            assert!(breakdown.total_rub >= value);
        }
    }

    #[test]
    fn test_heavy_engine_totals_match_for_both_purposes() {
        // 3600 cc, new: recycling fee 2,742,000 regardless of purpose, so
        // both grand totals must coincide.
        let request = EstimateRequest {
            country: Country::Korea,
            price: 10_000_000.0,
            displacement_cc: 3_600,
            engine: EngineType::Petrol,
            age: AgeBracket::New,
        };
        let breakdown = estimate(&request, &fixed_rates()).unwrap();
        assert_eq!(breakdown.recycling_fee_rub, 2_742_000.0);
        assert_eq!(breakdown.commercial_recycling_fee_rub, 2_742_000.0);
        assert_eq!(breakdown.total_rub, breakdown.total_commercial_rub);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut request = japan_request();
        request.price = 0.0;
        assert_eq!(
            estimate(&request, &fixed_rates()),
            Err(EstimateError::InvalidPrice(0.0))
        );

        request.price = -100.0;
        assert!(matches!(
            estimate(&request, &fixed_rates()),
            Err(EstimateError::InvalidPrice(_))
        ));

        request.price = f64::NAN;
        assert!(matches!(
            estimate(&request, &fixed_rates()),
            Err(EstimateError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_rejects_zero_displacement() {
        let mut request = japan_request();
        request.displacement_cc = 0;
        assert_eq!(
            estimate(&request, &fixed_rates()),
            Err(EstimateError::InvalidDisplacement)
        );
    }

    #[test]
    fn test_missing_rate_declines() {
        let rates = crate::rates::table::test_support::rates_without(Currency::Krw);
        let request = EstimateRequest {
            country: Country::Korea,
            price: 5_000_000.0,
            displacement_cc: 2_000,
            engine: EngineType::Petrol,
            age: AgeBracket::Medium,
        };
        assert_eq!(
            estimate(&request, &rates),
            Err(EstimateError::MissingRate(Currency::Krw))
        );
    }
}
