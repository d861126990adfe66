// SPDX-License-Identifier: MPL-2.0
//! `salary_guard` is a clickable prototype of an automatic salary-savings
//! feature, built with the Iced GUI framework.
//!
//! It shows five phone mock-ups side by side, lets the viewer jump between
//! them, and recomputes the save/spend split of a fixed monthly salary as the
//! savings-rate slider moves.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::config;
