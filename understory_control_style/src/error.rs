// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned when committing a style.

use core::fmt;

/// Error returned by [`StyleBuilder::build`](crate::StyleBuilder::build)
/// and [`StyleBuilder::apply`](crate::StyleBuilder::apply).
///
/// When an error is returned, nothing was written to the control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleError {
    /// No target was set, or the target control has been dropped.
    MissingTarget,
    /// The target control is already borrowed, e.g. the builder was used
    /// from inside one of the control's own callbacks.
    TargetBusy,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => f.write_str("no live target control to style"),
            Self::TargetBusy => f.write_str("target control is already borrowed"),
        }
    }
}

impl core::error::Error for StyleError {}
