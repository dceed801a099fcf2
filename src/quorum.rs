//! Quorum arithmetic, kept free of storage so the rounding boundary can be
//! checked directly.

use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

use crate::{PERCENT_DENOMINATOR, QUORUM_PERCENTAGE};

/// `ceil(total_weight * QUORUM_PERCENTAGE / 100)`.
pub fn quorum_threshold<M: ManagedTypeApi>(total_weight: &BigUint<M>) -> BigUint<M> {
    let scaled = total_weight * QUORUM_PERCENTAGE;
    (scaled + BigUint::from(PERCENT_DENOMINATOR - 1)) / PERCENT_DENOMINATOR
}

/// A proposal passes when turnout reaches the threshold and yes strictly
/// outweighs no. Ties fail.
pub fn is_passed<M: ManagedTypeApi>(
    yes_weight: &BigUint<M>,
    no_weight: &BigUint<M>,
    threshold: &BigUint<M>,
) -> bool {
    let turnout = yes_weight + no_weight;
    &turnout >= threshold && yes_weight > no_weight
}
