//! Decimal edge lengths
//!
//! `f64` is not `Ord`, so lengths read from files or typed by hand are kept
//! as a totally ordered, always finite float.

use crate::errors::ParseDecimalError;

use std::{fmt, ops::Add, str::FromStr};
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;


/// Finite decimal distance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(OrderedFloat<f64>);

impl Decimal {

    /// None for NaN or infinite values
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(OrderedFloat(value)))
    }

    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self(OrderedFloat(0.0))
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

// A sum past f64::MAX is None, the solver treats it as unreachable
impl CheckedAdd for Decimal {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Decimal::new(self.value() + v.value())
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Decimal::new)
            .ok_or_else(|| ParseDecimalError(s.to_string()))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}
