//! Simulation input record, reference scenarios, and boundary validation.
//!
//! The core itself never validates: subsystems assume finite, in-range
//! values and produce whatever the formulas yield. Callers that accept
//! outside input run [`validate_input`] first and refuse to simulate when
//! it reports problems.

use serde::{Deserialize, Serialize};

/// The seven scalars that define one sol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Settlers on base.
    pub crew: u32,
    /// Solar output available this sol (kWh).
    pub solar_kwh: f64,
    /// Battery discharge allowance for the sol (kWh).
    pub battery_kwh: f64,
    /// Water reserve at sol start (L).
    pub water_reserve_l: f64,
    /// Greenhouse growing area (m^2).
    pub greenhouse_area_m2: f64,
    /// Rovers in the garage. Signed so an out-of-range value can be
    /// reported at the boundary; transport clamps it regardless.
    pub rover_count: i32,
    /// Communications uptime the sol's operations call for (hours).
    pub required_comms_uptime_h: f64,
}

/// A canned reference sol, bundled in `data/scenarios.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Short handle used for lookup by `--scenario`.
    pub name: String,
    /// One-line display label.
    pub label: String,
    pub description: String,
    pub input: SimulationInput,
}

/// A precondition the input violates. Carries the offending value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// A field is NaN or infinite; carries the field name.
    NonFinite(&'static str),
    NegativeSolar(f64),
    NegativeBattery(f64),
    NegativeWaterReserve(f64),
    NegativeGreenhouseArea(f64),
    NegativeRoverCount(i32),
    NegativeCommsUptime(f64),
}

impl InputError {
    /// Operator-facing description of the violation.
    pub fn message(&self) -> String {
        match self {
            InputError::NonFinite(field) => format!("{field} must be a finite number"),
            InputError::NegativeSolar(v) => format!("solar energy must be >= 0 kWh (got {v})"),
            InputError::NegativeBattery(v) => format!("battery energy must be >= 0 kWh (got {v})"),
            InputError::NegativeWaterReserve(v) => {
                format!("water reserve must be >= 0 L (got {v})")
            }
            InputError::NegativeGreenhouseArea(v) => {
                format!("greenhouse area must be >= 0 m^2 (got {v})")
            }
            InputError::NegativeRoverCount(v) => format!("rover count must be >= 0 (got {v})"),
            InputError::NegativeCommsUptime(v) => {
                format!("required comms uptime must be >= 0 hours (got {v})")
            }
        }
    }
}

/// Check the preconditions the core assumes, returning every violation found.
pub fn validate_input(input: &SimulationInput) -> Vec<InputError> {
    let mut errors = Vec::new();

    let finite_fields = [
        (input.solar_kwh, "solar energy"),
        (input.battery_kwh, "battery energy"),
        (input.water_reserve_l, "water reserve"),
        (input.greenhouse_area_m2, "greenhouse area"),
        (input.required_comms_uptime_h, "required comms uptime"),
    ];
    for (value, field) in finite_fields {
        if !value.is_finite() {
            errors.push(InputError::NonFinite(field));
        }
    }

    if input.solar_kwh < 0.0 {
        errors.push(InputError::NegativeSolar(input.solar_kwh));
    }
    if input.battery_kwh < 0.0 {
        errors.push(InputError::NegativeBattery(input.battery_kwh));
    }
    if input.water_reserve_l < 0.0 {
        errors.push(InputError::NegativeWaterReserve(input.water_reserve_l));
    }
    if input.greenhouse_area_m2 < 0.0 {
        errors.push(InputError::NegativeGreenhouseArea(input.greenhouse_area_m2));
    }
    if input.rover_count < 0 {
        errors.push(InputError::NegativeRoverCount(input.rover_count));
    }
    if input.required_comms_uptime_h < 0.0 {
        errors.push(InputError::NegativeCommsUptime(input.required_comms_uptime_h));
    }

    errors
}
