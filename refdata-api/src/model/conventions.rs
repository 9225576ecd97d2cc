//! Market conventions referenced by the product models.

use serde::{Deserialize, Serialize};

/// Day count convention of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// 30/360
    Thirty360,
    /// Actual/360
    Act360,
}

/// Payment frequency of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Quarterly,
    SemiAnnual,
    Annual,
}

/// Reference rate of a floating leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatingIndex {
    Libor,
    Euribor,
}

/// Tenor of the floating index (e.g. 3M LIBOR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatingIndexTenor {
    Tenor1M,
    Tenor3M,
    Tenor6M,
    Tenor12M,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

/// How the start of a swap is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    Spot,
    Forward,
    /// Starts on an IMM date.
    Imm,
    /// Market agreed coupon.
    Mac,
    Basis,
}

/// Whether a swap trades alone or as a leg of a curve or butterfly package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapLegType {
    Outright,
    Curve,
    Fly,
}
