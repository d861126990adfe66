// SPDX-License-Identifier: MPL-2.0
//! On-screen copy for the application.
//!
//! Copy is stored in a Fluent bundle embedded at compile time, so wording can
//! change without touching the view code.
//!
//! # Features
//!
//! - Single embedded `en-IN` bundle
//! - Named placeables for amounts, rates and the display name
//! - Missing keys render as `MISSING: <key>` instead of failing

pub mod fluent;
