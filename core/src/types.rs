//! Shared primitive types used across the calculator.

/// A currency amount in US dollars. Fractional cents are kept; rounding
/// happens only at display time.
pub type Currency = f64;

/// A percentage on the 0..100 scale (5.0 means five percent).
pub type Percent = f64;

/// A fraction on the 0..1 scale.
pub type Fraction = f64;

/// Months in a billing year. All annualisation goes through this.
pub const MONTHS_PER_YEAR: f64 = 12.0;
