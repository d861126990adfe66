// SPDX-License-Identifier: MPL-2.0
//! Savings rate and the save/spend split of the monthly salary.
//!
//! The save amount is rounded half-up to whole rupees. The spend amount is
//! whatever remains of the salary, so `save + spend == salary` holds exactly
//! for every rate.

use std::fmt;

/// Monthly salary (in rupees) the prototype splits.
pub const MONTHLY_SALARY: u32 = 25_000;

/// Savings rate bounds (5% to 30%).
pub mod percent_bounds {
    /// Lowest rate the slider allows.
    pub const MIN: u8 = 5;
    /// Highest rate the slider allows.
    pub const MAX: u8 = 30;
    /// Anchored default ("AI recommends: 12%").
    pub const DEFAULT: u8 = 12;
}

use percent_bounds::{
    DEFAULT as DEFAULT_SAVINGS_PERCENT, MAX as MAX_SAVINGS_PERCENT, MIN as MIN_SAVINGS_PERCENT,
};

/// Savings rate in whole percent, always within the slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SavingsPercent(u8);

impl SavingsPercent {
    pub const MIN: Self = Self(MIN_SAVINGS_PERCENT);
    pub const MAX: Self = Self(MAX_SAVINGS_PERCENT);

    /// Creates a rate, clamping into `MIN..=MAX`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SAVINGS_PERCENT, MAX_SAVINGS_PERCENT))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for SavingsPercent {
    fn default() -> Self {
        Self(DEFAULT_SAVINGS_PERCENT)
    }
}

impl fmt::Display for SavingsPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Monthly salary divided into the automatically saved part and the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsSplit {
    pub save: u32,
    pub spend: u32,
}

impl SavingsSplit {
    /// Splits the fixed monthly salary at the given rate.
    #[must_use]
    pub fn at(percent: SavingsPercent) -> Self {
        Self::of_salary(MONTHLY_SALARY, percent)
    }

    /// Splits `salary` at the given rate.
    #[must_use]
    pub fn of_salary(salary: u32, percent: SavingsPercent) -> Self {
        let save = save_amount(salary, percent);
        Self {
            save,
            spend: salary - save,
        }
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.save + self.spend
    }

    /// Share of the salary that is saved, from 0.0 to 1.0.
    #[must_use]
    pub fn saved_fraction(self) -> f32 {
        match self.total() {
            0 => 0.0,
            total => self.save as f32 / total as f32,
        }
    }
}

/// `round(salary * percent / 100)`, ties rounded up.
fn save_amount(salary: u32, percent: SavingsPercent) -> u32 {
    let scaled = u64::from(salary) * u64::from(percent.value());
    // percent <= 100, so the result never exceeds salary
    ((scaled + 50) / 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_anchored_value() {
        assert_eq!(SavingsPercent::default().value(), 12);
    }

    #[test]
    fn default_split_matches_prototype_copy() {
        let split = SavingsSplit::at(SavingsPercent::default());
        assert_eq!(split.save, 3000);
        assert_eq!(split.spend, 22000);
    }

    #[test]
    fn boundary_rates() {
        assert_eq!(SavingsSplit::at(SavingsPercent::MIN).save, 1250);
        assert_eq!(SavingsSplit::at(SavingsPercent::MAX).save, 7500);
        assert_eq!(SavingsSplit::at(SavingsPercent::MAX).spend, 17500);
    }

    #[test]
    fn every_rate_preserves_salary_total() {
        for value in MIN_SAVINGS_PERCENT..=MAX_SAVINGS_PERCENT {
            let split = SavingsSplit::at(SavingsPercent::new(value));
            assert_eq!(split.save + split.spend, MONTHLY_SALARY, "rate {value}");
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(SavingsPercent::new(0), SavingsPercent::MIN);
        assert_eq!(SavingsPercent::new(99), SavingsPercent::MAX);
        assert_eq!(SavingsPercent::new(17).value(), 17);
    }

    #[test]
    fn half_rupee_rounds_up() {
        // 1_010 * 5% = 50.5
        let split = SavingsSplit::of_salary(1_010, SavingsPercent::new(5));
        assert_eq!(split.save, 51);
        assert_eq!(split.spend, 959);
    }

    #[test]
    fn spend_is_derived_by_subtraction() {
        // Rounding 1_010 * 95% = 959.5 independently would give 960 and break the total.
        let split = SavingsSplit::of_salary(1_010, SavingsPercent::new(5));
        assert_eq!(split.spend, 959);
        assert_eq!(split.total(), 1_010);
    }

    #[test]
    fn saved_fraction_of_default_split() {
        let split = SavingsSplit::at(SavingsPercent::default());
        assert!((split.saved_fraction() - 0.12).abs() < 1e-6);
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(SavingsPercent::new(12).to_string(), "12%");
    }
}
