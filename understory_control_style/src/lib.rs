// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Control Style: per-interaction-state styling for controls.
//!
//! A control such as a button looks different when it is pressed, selected
//! or disabled. This crate lets you declare those looks up front and push
//! them onto the control in one batch, for whichever state it is in.
//!
//! ## Core Concepts
//!
//! - [`InteractionState`] is the state cursor. It names one
//!   [`ControlState`] or [`InteractionState::All`], which fans writes out to
//!   all four.
//! - [`PropertySlots`] holds one optional value per concrete state, and
//!   [`StagingTable`] holds one `PropertySlots` per visual property.
//! - [`StyleBuilder`] is the fluent front end. Visual properties (font,
//!   border, corner radius, shadow, insets, ...) are staged and only reach
//!   the control on [`StyleBuilder::build`] or [`StyleBuilder::apply`].
//!   Text and image properties go to the control immediately.
//! - [`StyledControl`] is what a toolkit implements to be styled.
//!   [`headless::Button`] is a plain-data implementation.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use peniko::Color;
//! use understory_control_style::headless::Button;
//! use understory_control_style::{InteractionFlags, InteractionState, StyleBuilder};
//!
//! let button = Rc::new(RefCell::new(Button::<&str, (), ()>::new()));
//!
//! let mut style = StyleBuilder::new();
//! style
//!     .set_target(&button)
//!     .set_state(InteractionState::All)
//!     .set_font("Inter 15")
//!     .set_border_width(1.0)
//!     .set_state(InteractionState::Default)
//!     .set_background_color(Color::WHITE)
//!     .set_state(InteractionState::Inactive)
//!     .set_background_color(Color::from_rgb8(200, 200, 200))
//!     .set_opacity(0.5);
//!
//! style.apply().unwrap();
//! assert_eq!(button.borrow().layer.opacity, 1.0);
//!
//! button.borrow_mut().flags = InteractionFlags::DISABLED;
//! style.apply().unwrap();
//! assert_eq!(button.borrow().layer.opacity, 0.5);
//! assert_eq!(button.borrow().font, Some("Inter 15"));
//! ```
//!
//! ## Committing under `All`
//!
//! Staged values live in concrete slots, so [`StyleBuilder::build`] with the
//! cursor at [`InteractionState::All`] commits nothing. Either move the
//! cursor first, call [`StyleBuilder::apply`], or opt into
//! [`AllStateCommit::UseDefault`].
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `kurbo`, `peniko` and `tracing`.
//! - `libm`: use `libm` for `kurbo`/`peniko` math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod control;
mod error;
pub mod headless;
pub mod image;
mod slots;
mod staging;
mod state;

pub use builder::{AllStateCommit, StyleBuilder};
pub use control::{
    ContentHorizontalAlignment, ContentVerticalAlignment, ControlAttributes, Layer, StyledControl,
};
pub use error::StyleError;
pub use slots::PropertySlots;
pub use staging::{ResolvedStyle, StagedProperty, StagingTable};
pub use state::{ControlState, InteractionFlags, InteractionState};
