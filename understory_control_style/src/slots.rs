// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state value slots.

use crate::state::{ControlState, InteractionState};

/// One optional value per [`ControlState`].
///
/// An empty slot means "nothing staged": committing leaves the control's
/// current value alone.
///
/// ```
/// use understory_control_style::{ControlState, InteractionState, PropertySlots};
///
/// let mut radius = PropertySlots::new();
/// radius.set(4.0, InteractionState::All);
/// radius.set(8.0, InteractionState::Pressed);
///
/// assert_eq!(radius.get(InteractionState::Default), Some(&4.0));
/// assert_eq!(radius.get(InteractionState::Pressed), Some(&8.0));
/// assert_eq!(radius.get(InteractionState::All), None);
/// assert_eq!(radius.slot(ControlState::Inactive), Some(&4.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySlots<T> {
    /// Value for [`ControlState::Default`].
    pub default: Option<T>,
    /// Value for [`ControlState::Pressed`].
    pub pressed: Option<T>,
    /// Value for [`ControlState::Selected`].
    pub selected: Option<T>,
    /// Value for [`ControlState::Inactive`].
    pub inactive: Option<T>,
}

impl<T> Default for PropertySlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PropertySlots<T> {
    /// Creates an empty set of slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default: None,
            pressed: None,
            selected: None,
            inactive: None,
        }
    }

    /// Stages `value` for `state`.
    ///
    /// [`InteractionState::All`] writes every slot. A previous value in a
    /// written slot is replaced.
    pub fn set(&mut self, value: T, state: InteractionState)
    where
        T: Clone,
    {
        match state.concrete() {
            Some(state) => *self.slot_mut(state) = Some(value),
            None => {
                self.default = Some(value.clone());
                self.pressed = Some(value.clone());
                self.selected = Some(value.clone());
                self.inactive = Some(value);
            }
        }
    }

    /// Returns the value staged for `state`.
    ///
    /// Always `None` for [`InteractionState::All`].
    #[must_use]
    pub fn get(&self, state: InteractionState) -> Option<&T> {
        state.concrete().and_then(|state| self.slot(state))
    }

    /// Returns the value in the slot for a concrete state.
    #[must_use]
    #[inline]
    pub fn slot(&self, state: ControlState) -> Option<&T> {
        match state {
            ControlState::Default => self.default.as_ref(),
            ControlState::Pressed => self.pressed.as_ref(),
            ControlState::Selected => self.selected.as_ref(),
            ControlState::Inactive => self.inactive.as_ref(),
        }
    }

    /// Returns the slot for a concrete state.
    #[inline]
    pub fn slot_mut(&mut self, state: ControlState) -> &mut Option<T> {
        match state {
            ControlState::Default => &mut self.default,
            ControlState::Pressed => &mut self.pressed,
            ControlState::Selected => &mut self.selected,
            ControlState::Inactive => &mut self.inactive,
        }
    }

    /// Returns `true` if no slot holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ControlState::ALL
            .into_iter()
            .all(|state| self.slot(state).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slots_are_empty() {
        let slots = PropertySlots::<f64>::new();
        assert!(slots.is_empty());
        for state in ControlState::ALL {
            assert_eq!(slots.slot(state), None);
        }
    }

    #[test]
    fn set_single_state_leaves_others() {
        for target in ControlState::ALL {
            let mut slots = PropertySlots::new();
            slots.set(2.5, target.into());

            for state in ControlState::ALL {
                let expected = (state == target).then_some(&2.5);
                assert_eq!(slots.get(state.into()), expected, "{target} staged, read {state}");
            }
        }
    }

    #[test]
    fn set_all_fills_every_slot() {
        let mut slots = PropertySlots::new();
        slots.set(true, InteractionState::All);

        for state in ControlState::ALL {
            assert_eq!(slots.get(state.into()), Some(&true));
        }
        assert!(!slots.is_empty());
    }

    #[test]
    fn get_all_is_none() {
        let mut slots = PropertySlots::new();
        slots.set(1_u8, InteractionState::All);
        assert_eq!(slots.get(InteractionState::All), None);
    }

    #[test]
    fn last_write_wins() {
        let mut slots = PropertySlots::new();
        slots.set(1, InteractionState::Selected);
        slots.set(2, InteractionState::Selected);
        assert_eq!(slots.get(InteractionState::Selected), Some(&2));

        // A later `All` write overrides single-state values too.
        slots.set(3, InteractionState::All);
        assert_eq!(slots.get(InteractionState::Selected), Some(&3));

        slots.set(4, InteractionState::Pressed);
        assert_eq!(slots.get(InteractionState::Pressed), Some(&4));
        assert_eq!(slots.get(InteractionState::Default), Some(&3));
    }
}
