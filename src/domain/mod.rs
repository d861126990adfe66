// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure value objects and the one business rule of the
//! prototype: splitting the monthly salary into a saved and a spendable part.
//!
//! # Modules
//!
//! - [`savings`]: Savings rate and split ([`SavingsPercent`](savings::SavingsPercent),
//!   [`SavingsSplit`](savings::SavingsSplit))
//! - [`money`]: Rupee formatting with Indian digit grouping

pub mod money;
pub mod savings;
