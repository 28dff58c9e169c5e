// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction states.
//!
//! A control is always in exactly one [`ControlState`]. Style setters are
//! addressed with an [`InteractionState`], which adds the [`All`] meta-value
//! for writing every concrete state at once.
//!
//! [`All`]: InteractionState::All

use core::fmt;

/// One of the four concrete interaction states a control can be in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ControlState {
    /// Enabled, not pressed and not selected.
    #[default]
    Default,
    /// Being pressed (highlighted).
    Pressed,
    /// Selected.
    Selected,
    /// Disabled.
    Inactive,
}

impl ControlState {
    /// Every concrete state, in slot order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Pressed, Self::Selected, Self::Inactive];

    /// Returns the lowercase name of this state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pressed => "pressed",
            Self::Selected => "selected",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The state a style setter is addressed to.
///
/// [`InteractionState::All`] fans a write out to every [`ControlState`]. It
/// never names a storage slot, so reading under `All` yields nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Every concrete state at once.
    All,
    /// See [`ControlState::Default`].
    #[default]
    Default,
    /// See [`ControlState::Pressed`].
    Pressed,
    /// See [`ControlState::Selected`].
    Selected,
    /// See [`ControlState::Inactive`].
    Inactive,
}

impl InteractionState {
    /// Returns the concrete state, or `None` for [`InteractionState::All`].
    #[must_use]
    pub const fn concrete(self) -> Option<ControlState> {
        match self {
            Self::All => None,
            Self::Default => Some(ControlState::Default),
            Self::Pressed => Some(ControlState::Pressed),
            Self::Selected => Some(ControlState::Selected),
            Self::Inactive => Some(ControlState::Inactive),
        }
    }

    /// Returns `true` for [`InteractionState::All`].
    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<ControlState> for InteractionState {
    fn from(state: ControlState) -> Self {
        match state {
            ControlState::Default => Self::Default,
            ControlState::Pressed => Self::Pressed,
            ControlState::Selected => Self::Selected,
            ControlState::Inactive => Self::Inactive,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.concrete() {
            Some(state) => fmt::Display::fmt(&state, f),
            None => f.write_str("all"),
        }
    }
}

bitflags::bitflags! {
    /// Live interaction flags of a control.
    ///
    /// Several flags may be set at once (a selected button can be pressed
    /// again); [`InteractionFlags::state`] collapses them to the one state
    /// used for styling.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InteractionFlags: u8 {
        /// The control is being pressed.
        const PRESSED  = 0b0000_0001;
        /// The control is selected.
        const SELECTED = 0b0000_0010;
        /// The control is disabled.
        const DISABLED = 0b0000_0100;
    }
}

impl InteractionFlags {
    /// Collapses the flag set to one [`ControlState`].
    ///
    /// Precedence is disabled, then selected, then pressed. An empty set is
    /// [`ControlState::Default`].
    ///
    /// ```
    /// use understory_control_style::{ControlState, InteractionFlags};
    ///
    /// let flags = InteractionFlags::SELECTED | InteractionFlags::PRESSED;
    /// assert_eq!(flags.state(), ControlState::Selected);
    /// assert_eq!(InteractionFlags::empty().state(), ControlState::Default);
    /// ```
    #[must_use]
    pub fn state(self) -> ControlState {
        if self.contains(Self::DISABLED) {
            ControlState::Inactive
        } else if self.contains(Self::SELECTED) {
            ControlState::Selected
        } else if self.contains(Self::PRESSED) {
            ControlState::Pressed
        } else {
            ControlState::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cursor_is_default_state() {
        assert_eq!(InteractionState::default(), InteractionState::Default);
        assert_eq!(ControlState::default(), ControlState::Default);
    }

    #[test]
    fn all_has_no_concrete_state() {
        assert_eq!(InteractionState::All.concrete(), None);
        assert!(InteractionState::All.is_all());
        for state in ControlState::ALL {
            let cursor = InteractionState::from(state);
            assert!(!cursor.is_all());
            assert_eq!(cursor.concrete(), Some(state));
        }
    }

    #[test]
    fn flags_precedence() {
        use InteractionFlags as F;

        assert_eq!(F::PRESSED.state(), ControlState::Pressed);
        assert_eq!(F::SELECTED.state(), ControlState::Selected);
        assert_eq!(F::DISABLED.state(), ControlState::Inactive);
        assert_eq!((F::PRESSED | F::SELECTED).state(), ControlState::Selected);
        assert_eq!((F::PRESSED | F::DISABLED).state(), ControlState::Inactive);
        assert_eq!(F::all().state(), ControlState::Inactive);
    }

    #[test]
    fn display_names() {
        use alloc::string::ToString;

        assert_eq!(InteractionState::All.to_string(), "all");
        assert_eq!(InteractionState::Pressed.to_string(), "pressed");
        assert_eq!(ControlState::Inactive.to_string(), "inactive");
    }
}
