use serde::{Deserialize, Serialize};

use crate::estimator::vehicle::AgeBracket;

/// Flat brokerage services fee, RUB.
pub const BROKER_FEE_RUB: f64 = 100_000.0;

/// Clearance fee step: flat RUB fee for customs values up to the bound
/// (inclusive). Above the last step the fee is capped.
struct ClearanceStep {
    max_value_rub: f64,
    fee_rub: f64,
}

const CLEARANCE_STEPS: [ClearanceStep; 10] = [
    ClearanceStep { max_value_rub: 200_000.0, fee_rub: 775.0 },
    ClearanceStep { max_value_rub: 450_000.0, fee_rub: 1_550.0 },
    ClearanceStep { max_value_rub: 1_200_000.0, fee_rub: 3_100.0 },
    ClearanceStep { max_value_rub: 2_700_000.0, fee_rub: 8_530.0 },
    ClearanceStep { max_value_rub: 4_200_000.0, fee_rub: 12_000.0 },
    ClearanceStep { max_value_rub: 5_500_000.0, fee_rub: 15_500.0 },
    ClearanceStep { max_value_rub: 7_000_000.0, fee_rub: 20_000.0 },
    ClearanceStep { max_value_rub: 8_000_000.0, fee_rub: 23_000.0 },
    ClearanceStep { max_value_rub: 9_000_000.0, fee_rub: 25_000.0 },
    ClearanceStep { max_value_rub: 10_000_000.0, fee_rub: 27_000.0 },
];

const CLEARANCE_FEE_CAP_RUB: f64 = 30_000.0;

/// Customs clearance fee for a vehicle customs value in RUB.
pub fn clearance_fee_rub(customs_value_rub: f64) -> f64 {
    CLEARANCE_STEPS
        .iter()
        .find(|step| customs_value_rub <= step.max_value_rub)
        .map(|step| step.fee_rub)
        .unwrap_or(CLEARANCE_FEE_CAP_RUB)
}

/// Whether the vehicle is imported for personal use or commercial resale.
/// The recycling fee differs sharply between the two for standard-size
/// engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPurpose {
    Personal,
    Commercial,
}

/// Recycling (utilization) fee in RUB.
///
/// Engines above 3000 cc pay a large flat fee that depends on age only and
/// is identical for personal and commercial import; this asymmetry is part
/// of the published tariff and is preserved as-is. The medium and old age
/// brackets share a rate throughout the table.
pub fn recycling_fee_rub(displacement_cc: u32, age: AgeBracket, purpose: ImportPurpose) -> f64 {
    if displacement_cc > 3_000 {
        return if displacement_cc <= 3_500 {
            match age {
                AgeBracket::New => 2_153_000.0,
                _ => 3_297_000.0,
            }
        } else {
            match age {
                AgeBracket::New => 2_742_000.0,
                _ => 3_605_000.0,
            }
        };
    }

    if purpose == ImportPurpose::Personal {
        return match age {
            AgeBracket::New => 3_400.0,
            _ => 5_200.0,
        };
    }

    if displacement_cc <= 1_000 {
        match age {
            AgeBracket::New => 180_200.0,
            _ => 460_000.0,
        }
    } else if displacement_cc <= 2_000 {
        match age {
            AgeBracket::New => 667_400.0,
            _ => 1_174_000.0,
        }
    } else {
        match age {
            AgeBracket::New => 1_875_000.0,
            _ => 2_839_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clearance_fee_steps() {
        assert_eq!(clearance_fee_rub(0.0), 775.0);
        assert_eq!(clearance_fee_rub(200_000.0), 775.0);
        assert_eq!(clearance_fee_rub(200_001.0), 1_550.0);
        assert_eq!(clearance_fee_rub(1_000_000.0), 3_100.0);
        assert_eq!(clearance_fee_rub(5_500_000.0), 15_500.0);
        assert_eq!(clearance_fee_rub(5_500_001.0), 20_000.0);
        assert_eq!(clearance_fee_rub(10_000_000.0), 27_000.0);
        assert_eq!(clearance_fee_rub(10_000_001.0), 30_000.0);
        assert_eq!(clearance_fee_rub(50_000_000.0), 30_000.0);
    }

    #[test]
    fn test_personal_recycling_fee_standard_engine() {
        assert_eq!(
            recycling_fee_rub(1_500, AgeBracket::New, ImportPurpose::Personal),
            3_400.0
        );
        assert_eq!(
            recycling_fee_rub(1_500, AgeBracket::Medium, ImportPurpose::Personal),
            5_200.0
        );
        assert_eq!(
            recycling_fee_rub(1_500, AgeBracket::Old, ImportPurpose::Personal),
            5_200.0
        );
    }

    #[test]
    fn test_commercial_recycling_fee_by_displacement() {
        assert_eq!(
            recycling_fee_rub(1_000, AgeBracket::New, ImportPurpose::Commercial),
            180_200.0
        );
        assert_eq!(
            recycling_fee_rub(1_001, AgeBracket::New, ImportPurpose::Commercial),
            667_400.0
        );
        assert_eq!(
            recycling_fee_rub(2_000, AgeBracket::Old, ImportPurpose::Commercial),
            1_174_000.0
        );
        assert_eq!(
            recycling_fee_rub(2_500, AgeBracket::New, ImportPurpose::Commercial),
            1_875_000.0
        );
        assert_eq!(
            recycling_fee_rub(3_000, AgeBracket::Old, ImportPurpose::Commercial),
            2_839_000.0
        );
    }

    #[test]
    fn test_heavy_bands_identical_for_both_purposes() {
        // 3001-3500 cc.
        for purpose in [ImportPurpose::Personal, ImportPurpose::Commercial] {
            assert_eq!(recycling_fee_rub(3_200, AgeBracket::New, purpose), 2_153_000.0);
            assert_eq!(recycling_fee_rub(3_500, AgeBracket::Old, purpose), 3_297_000.0);
        }
        // Above 3500 cc.
        for purpose in [ImportPurpose::Personal, ImportPurpose::Commercial] {
            assert_eq!(recycling_fee_rub(3_600, AgeBracket::New, purpose), 2_742_000.0);
            assert_eq!(recycling_fee_rub(3_600, AgeBracket::Medium, purpose), 3_605_000.0);
        }
    }

    #[test]
    fn test_heavy_band_boundary() {
        // Exactly 3000 cc is still the standard band.
        assert_eq!(
            recycling_fee_rub(3_000, AgeBracket::New, ImportPurpose::Personal),
            3_400.0
        );
        // Exactly 3500 cc belongs to the lower heavy band.
        assert_eq!(
            recycling_fee_rub(3_500, AgeBracket::New, ImportPurpose::Personal),
            2_153_000.0
        );
        assert_eq!(
            recycling_fee_rub(3_501, AgeBracket::New, ImportPurpose::Personal),
            2_742_000.0
        );
    }
}
