//! Composite liquidity score.
//!
//! Four sign indicators move a neutral baseline of 50 by fixed additive
//! contributions: the liquidity and credit impulses are worth 15 points
//! each, price momentum and impulse acceleration 10 each. The weights sum
//! to exactly 50, so the [0, 100] clamp binds only when every indicator
//! agrees on direction.

use serde::{Deserialize, Serialize};

const BASELINE: i32 = 50;
const IMPULSE_WEIGHT: i32 = 15;
const CREDIT_WEIGHT: i32 = 15;
const MOMENTUM_WEIGHT: i32 = 10;
const ACCELERATION_WEIGHT: i32 = 10;

/// Latest values of the score's sign indicators. NaN marks a missing
/// reading; missing and zero readings contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub liquidity_impulse: f64,
    pub credit_impulse: f64,
    pub price_momentum: f64,
    pub impulse_acceleration: f64,
}

/// Map the latest indicator signs to a bounded 0..=100 score.
pub fn liquidity_score(inputs: &ScoreInputs) -> u8 {
    let total = BASELINE
        + contribution(inputs.liquidity_impulse, IMPULSE_WEIGHT)
        + contribution(inputs.credit_impulse, CREDIT_WEIGHT)
        + contribution(inputs.price_momentum, MOMENTUM_WEIGHT)
        + contribution(inputs.impulse_acceleration, ACCELERATION_WEIGHT);

    total.clamp(0, 100) as u8
}

/// Strictly positive adds the weight, strictly negative subtracts it.
/// Zero and NaN fall through to 0.
fn contribution(value: f64, weight: i32) -> i32 {
    if value > 0.0 {
        weight
    } else if value < 0.0 {
        -weight
    } else {
        0
    }
}
