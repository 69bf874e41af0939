use serde::{Deserialize, Serialize};

use crate::estimator::country::Country;
use crate::estimator::vehicle::EngineType;

/// Displacement above which a vehicle falls under the sanctioned regime.
/// The boundary itself is allowed: exactly 1900 cc stays normal.
pub const SANCTION_DISPLACEMENT_CC: u32 = 1900;

/// Active country selection together with the reclassification warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub country: Country,
    pub warning: bool,
}

impl Selection {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            warning: false,
        }
    }
}

/// Whether the vehicle's characteristics require the sanctioned regime.
pub fn sanction_triggered(displacement_cc: u32, engine: EngineType) -> bool {
    displacement_cc > SANCTION_DISPLACEMENT_CC || engine.forces_sanctioned()
}

/// Re-evaluate the country selection against the vehicle's engine.
///
/// Exactly two transitions exist per underlying country: normal to
/// sanctioned (raises the warning) when the trigger holds, and sanctioned
/// back to normal (clears it) when the trigger no longer holds. Every
/// other state passes through unchanged, so the function is idempotent
/// and a directly selected sanctioned profile keeps its warning state.
pub fn reclassify(current: Selection, displacement_cc: u32, engine: EngineType) -> Selection {
    let triggered = sanction_triggered(displacement_cc, engine);

    if !current.country.is_sanctioned() {
        if triggered {
            if let Some(sanctioned) = current.country.sanctioned_variant() {
                return Selection {
                    country: sanctioned,
                    warning: true,
                };
            }
        }
    } else if !triggered {
        if let Some(normal) = current.country.normal_variant() {
            return Selection {
                country: normal,
                warning: false,
            };
        }
    }

    current
}
