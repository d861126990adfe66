// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from a `ViewContext` and reports user input as a `Message` that
//! the application turns into an `Event`.
//!
//! # Components
//!
//! - [`banner`] - Navigation buttons and the behavioral insight line
//! - [`screens`] - The five phone screens
//! - [`phone`] - Bezel, status bar, and home indicator around each screen
//! - [`footer`] - Business metrics
//!
//! # Shared Infrastructure
//!
//! - [`viewport`] - Wide/narrow layout classification
//! - [`navigator`] - Frame selection and smooth scrolling
//! - [`styles`] - Centralized styling (buttons, containers, slider)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod banner;
pub mod design_tokens;
pub mod footer;
pub mod icons;
pub mod navigator;
pub mod phone;
pub mod screens;
pub mod styles;
pub mod theming;
pub mod viewport;
