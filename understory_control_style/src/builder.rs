// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent style builder.
//!
//! ## Usage
//!
//! 1) Point the builder at a control with [`StyleBuilder::set_target`].
//! 2) Move the state cursor with [`StyleBuilder::set_state`] and call setters.
//!    Visual properties are staged for the cursor's state; text and image
//!    setters write to the control immediately.
//! 3) Commit the staged values for one state with [`StyleBuilder::build`], or
//!    for the control's live state with [`StyleBuilder::apply`].
//!
//! Call [`StyleBuilder::apply`] again whenever the control's state changes;
//! staged values are never consumed.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use core::fmt;

use kurbo::{BezPath, Insets, Vec2};
use peniko::Color;

use crate::control::{ContentHorizontalAlignment, ContentVerticalAlignment, StyledControl};
use crate::error::StyleError;
use crate::slots::PropertySlots;
use crate::staging::StagingTable;
use crate::state::{ControlState, InteractionState};

/// What [`StyleBuilder::build`] does when the cursor is
/// [`InteractionState::All`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AllStateCommit {
    /// Commit nothing.
    ///
    /// Staged values live in concrete slots only, so there is nothing to
    /// read under `All`. Move the cursor (or use [`StyleBuilder::apply`])
    /// before committing.
    #[default]
    Skip,
    /// Commit the values staged for [`ControlState::Default`].
    UseDefault,
}

/// Stages per-state styles for a control and commits them in one batch.
///
/// The builder holds a [`Weak`] reference to its target and never keeps the
/// control alive. Setters return `&mut Self` for chaining.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use peniko::Color;
/// use understory_control_style::headless::Button;
/// use understory_control_style::{ControlState, InteractionFlags, InteractionState, StyleBuilder};
///
/// let button = Rc::new(RefCell::new(Button::<&str, (), ()>::new()));
///
/// let mut style = StyleBuilder::new();
/// style
///     .set_target(&button)
///     .set_state(InteractionState::All)
///     .set_title("OK")
///     .set_corner_radius(6.0)
///     .set_state(InteractionState::Pressed)
///     .set_title("Pressed")
///     .set_corner_radius(10.0)
///     .set_background_color(Color::from_rgb8(0, 90, 200));
///
/// // Nothing staged has reached the button yet; titles already have.
/// assert_eq!(button.borrow().layer.corner_radius, 0.0);
/// assert_eq!(button.borrow().title_for(ControlState::Pressed), Some("Pressed"));
///
/// style.apply().unwrap();
/// assert_eq!(button.borrow().layer.corner_radius, 6.0);
///
/// button.borrow_mut().flags.insert(InteractionFlags::PRESSED);
/// style.apply().unwrap();
/// assert_eq!(button.borrow().layer.corner_radius, 10.0);
/// ```
pub struct StyleBuilder<C: StyledControl> {
    target: Option<Weak<RefCell<C>>>,
    state: InteractionState,
    staging: StagingTable<C::Font>,
    all_state_commit: AllStateCommit,
}

impl<C: StyledControl> Default for StyleBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StyledControl> fmt::Debug for StyleBuilder<C>
where
    C::Font: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleBuilder")
            .field("has_target", &self.has_target())
            .field("state", &self.state)
            .field("staging", &self.staging)
            .field("all_state_commit", &self.all_state_commit)
            .finish()
    }
}

impl<C: StyledControl> StyleBuilder<C> {
    /// Creates a builder with no target, cursor at [`InteractionState::Default`]
    /// and nothing staged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            state: InteractionState::Default,
            staging: StagingTable::new(),
            all_state_commit: AllStateCommit::Skip,
        }
    }

    /// Sets the `All`-cursor commit policy, consuming and returning the builder.
    #[must_use]
    pub fn with_all_state_commit(mut self, policy: AllStateCommit) -> Self {
        self.all_state_commit = policy;
        self
    }

    /// Sets the `All`-cursor commit policy.
    pub fn set_all_state_commit(&mut self, policy: AllStateCommit) -> &mut Self {
        self.all_state_commit = policy;
        self
    }

    /// Returns the `All`-cursor commit policy.
    #[must_use]
    pub fn all_state_commit(&self) -> AllStateCommit {
        self.all_state_commit
    }

    /// Points the builder at `control` without taking ownership of it.
    pub fn set_target(&mut self, control: &Rc<RefCell<C>>) -> &mut Self {
        self.target = Some(Rc::downgrade(control));
        self
    }

    /// Moves the state cursor.
    pub fn set_state(&mut self, state: InteractionState) -> &mut Self {
        self.state = state;
        self
    }

    /// Returns the state cursor.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns the staged values.
    #[must_use]
    pub fn staging(&self) -> &StagingTable<C::Font> {
        &self.staging
    }

    /// Returns `true` if a target was set and is still alive.
    #[must_use]
    pub fn has_target(&self) -> bool {
        self.target().is_some()
    }

    fn target(&self) -> Option<Rc<RefCell<C>>> {
        self.target.as_ref().and_then(Weak::upgrade)
    }

    fn stage<T: Clone>(
        &mut self,
        slots: impl FnOnce(&mut StagingTable<C::Font>) -> &mut PropertySlots<T>,
        value: T,
    ) -> &mut Self {
        let state = self.state;
        slots(&mut self.staging).set(value, state);
        self
    }

    /// Runs `write` on the target once per state addressed by the cursor.
    fn fan_out(
        &mut self,
        property: &'static str,
        mut write: impl FnMut(&mut C, ControlState),
    ) -> &mut Self {
        let Some(target) = self.target() else {
            tracing::warn!(property, "no live target control; setter ignored");
            return self;
        };
        let Ok(mut control) = target.try_borrow_mut() else {
            tracing::warn!(property, "target control is busy; setter ignored");
            return self;
        };
        match self.state.concrete() {
            Some(state) => write(&mut *control, state),
            None => {
                for state in ControlState::ALL {
                    write(&mut *control, state);
                }
            }
        }
        tracing::trace!(property, state = %self.state, "wrote immediate property");
        self
    }

    // Immediate properties.

    /// Sets the title on the control right away.
    ///
    /// With the cursor at [`InteractionState::All`] every state gets the
    /// same title; otherwise only the cursor's state is written.
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.fan_out("title", |control, state| control.set_title(title, state))
    }

    /// Sets the title color on the control right away.
    pub fn set_title_color(&mut self, color: Color) -> &mut Self {
        self.fan_out("title_color", |control, state| {
            control.set_title_color(color, state);
        })
    }

    /// Sets the title shadow color on the control right away.
    pub fn set_title_shadow_color(&mut self, color: Color) -> &mut Self {
        self.fan_out("title_shadow_color", |control, state| {
            control.set_title_shadow_color(color, state);
        })
    }

    /// Sets the image on the control right away.
    pub fn set_image(&mut self, image: &C::Image) -> &mut Self {
        self.fan_out("image", |control, state| control.set_image(image, state))
    }

    /// Sets the background image on the control right away.
    pub fn set_background_image(&mut self, image: &C::Image) -> &mut Self {
        self.fan_out("background_image", |control, state| {
            control.set_background_image(image, state);
        })
    }

    /// Sets the attributed title on the control right away.
    pub fn set_attributed_title(&mut self, title: &C::AttributedText) -> &mut Self {
        self.fan_out("attributed_title", |control, state| {
            control.set_attributed_title(title, state);
        })
    }

    // Staged properties.

    /// Stages the title font.
    pub fn set_font(&mut self, font: C::Font) -> &mut Self {
        self.stage(|t| &mut t.font, font)
    }

    /// Stages the border width.
    ///
    /// Values are not validated; the control decides what a negative width
    /// means.
    pub fn set_border_width(&mut self, width: f64) -> &mut Self {
        self.stage(|t| &mut t.border_width, width)
    }

    /// Stages the border color.
    pub fn set_border_color(&mut self, color: Color) -> &mut Self {
        self.stage(|t| &mut t.border_color, color)
    }

    /// Stages the corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) -> &mut Self {
        self.stage(|t| &mut t.corner_radius, radius)
    }

    /// Stages the layer opacity.
    pub fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        self.stage(|t| &mut t.opacity, opacity)
    }

    /// Stages the background color.
    pub fn set_background_color(&mut self, color: Color) -> &mut Self {
        self.stage(|t| &mut t.background_color, color)
    }

    /// Stages the tint color.
    pub fn set_tint_color(&mut self, color: Color) -> &mut Self {
        self.stage(|t| &mut t.tint_color, color)
    }

    /// Stages the shadow color.
    pub fn set_shadow_color(&mut self, color: Color) -> &mut Self {
        self.stage(|t| &mut t.shadow_color, color)
    }

    /// Stages the shadow opacity.
    pub fn set_shadow_opacity(&mut self, opacity: f32) -> &mut Self {
        self.stage(|t| &mut t.shadow_opacity, opacity)
    }

    /// Stages the shadow offset.
    pub fn set_shadow_offset(&mut self, offset: Vec2) -> &mut Self {
        self.stage(|t| &mut t.shadow_offset, offset)
    }

    /// Stages the shadow blur radius.
    pub fn set_shadow_radius(&mut self, radius: f64) -> &mut Self {
        self.stage(|t| &mut t.shadow_radius, radius)
    }

    /// Stages an explicit shadow shape.
    pub fn set_shadow_path(&mut self, path: BezPath) -> &mut Self {
        self.stage(|t| &mut t.shadow_path, path)
    }

    /// Stages layer masking.
    pub fn set_masks_to_bounds(&mut self, masks: bool) -> &mut Self {
        self.stage(|t| &mut t.masks_to_bounds, masks)
    }

    /// Stages control clipping.
    pub fn set_clips_to_bounds(&mut self, clips: bool) -> &mut Self {
        self.stage(|t| &mut t.clips_to_bounds, clips)
    }

    /// Stages exclusive touch handling.
    pub fn set_exclusive_touch(&mut self, exclusive: bool) -> &mut Self {
        self.stage(|t| &mut t.exclusive_touch, exclusive)
    }

    /// Stages the horizontal content alignment.
    pub fn set_content_horizontal_alignment(
        &mut self,
        alignment: ContentHorizontalAlignment,
    ) -> &mut Self {
        self.stage(|t| &mut t.content_horizontal_alignment, alignment)
    }

    /// Stages the vertical content alignment.
    pub fn set_content_vertical_alignment(
        &mut self,
        alignment: ContentVerticalAlignment,
    ) -> &mut Self {
        self.stage(|t| &mut t.content_vertical_alignment, alignment)
    }

    /// Stages the title edge insets.
    ///
    /// `Insets` is left/top/right/bottom (`x0`, `y0`, `x1`, `y1`).
    pub fn set_title_edge_insets(&mut self, insets: Insets) -> &mut Self {
        self.stage(|t| &mut t.title_edge_insets, insets)
    }

    /// Stages the content edge insets.
    pub fn set_content_edge_insets(&mut self, insets: Insets) -> &mut Self {
        self.stage(|t| &mut t.content_edge_insets, insets)
    }

    /// Stages the image edge insets.
    pub fn set_image_edge_insets(&mut self, insets: Insets) -> &mut Self {
        self.stage(|t| &mut t.image_edge_insets, insets)
    }

    /// Stages whether the title shadow flips while pressed.
    pub fn set_reverses_title_shadow_when_highlighted(&mut self, reverses: bool) -> &mut Self {
        self.stage(|t| &mut t.reverses_title_shadow_when_highlighted, reverses)
    }

    /// Stages whether the image darkens while pressed.
    pub fn set_adjusts_image_when_highlighted(&mut self, adjusts: bool) -> &mut Self {
        self.stage(|t| &mut t.adjusts_image_when_highlighted, adjusts)
    }

    /// Stages whether the image dims while disabled.
    pub fn set_adjusts_image_when_disabled(&mut self, adjusts: bool) -> &mut Self {
        self.stage(|t| &mut t.adjusts_image_when_disabled, adjusts)
    }

    /// Stages whether a touch glow is drawn while pressed.
    pub fn set_shows_touch_when_highlighted(&mut self, shows: bool) -> &mut Self {
        self.stage(|t| &mut t.shows_touch_when_highlighted, shows)
    }

    // Commit.

    /// Commits the values staged for the cursor's state.
    ///
    /// Only present values are written; everything else on the control is
    /// left as it is. Staged values are kept, so building again with the
    /// same cursor writes the same values.
    ///
    /// With the cursor at [`InteractionState::All`] nothing is committed
    /// unless the policy is [`AllStateCommit::UseDefault`].
    ///
    /// # Errors
    ///
    /// [`StyleError::MissingTarget`] if no target was set or it has been
    /// dropped, [`StyleError::TargetBusy`] if it is currently borrowed. In
    /// both cases the control is not touched.
    pub fn build(&self) -> Result<(), StyleError> {
        let Some(target) = self.target() else {
            tracing::warn!(state = %self.state, "build without a live target control");
            return Err(StyleError::MissingTarget);
        };
        let Ok(mut control) = target.try_borrow_mut() else {
            tracing::warn!(state = %self.state, "build while the target control is busy");
            return Err(StyleError::TargetBusy);
        };

        let state = match (self.state, self.all_state_commit) {
            (InteractionState::All, AllStateCommit::Skip) => {
                tracing::debug!("cursor is `All`; no staged property is committed");
                return Ok(());
            }
            (InteractionState::All, AllStateCommit::UseDefault) => InteractionState::Default,
            (state, _) => state,
        };

        let resolved = self.staging.resolve(state);
        let applied = resolved.len();
        resolved.apply_to(&mut *control);
        tracing::debug!(%state, applied, "committed staged style");
        Ok(())
    }

    /// Moves the cursor to the control's live state and commits.
    ///
    /// Does nothing if there is no live target.
    ///
    /// # Errors
    ///
    /// [`StyleError::TargetBusy`] if the control is currently borrowed.
    pub fn apply(&mut self) -> Result<(), StyleError> {
        let Some(target) = self.target() else {
            tracing::debug!("apply without a live target control; nothing to do");
            return Ok(());
        };
        let live = target
            .try_borrow()
            .map_err(|_| StyleError::TargetBusy)?
            .interaction_state();
        self.state = live.into();
        self.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::Button;

    type TestButton = Button<&'static str, u32, ()>;

    fn target() -> (Rc<RefCell<TestButton>>, StyleBuilder<TestButton>) {
        let button = Rc::new(RefCell::new(TestButton::new()));
        let mut builder = StyleBuilder::new();
        builder.set_target(&button);
        (button, builder)
    }

    #[test]
    fn new_builder_defaults() {
        let builder = StyleBuilder::<TestButton>::new();
        assert_eq!(builder.state(), InteractionState::Default);
        assert_eq!(builder.all_state_commit(), AllStateCommit::Skip);
        assert!(!builder.has_target());
    }

    #[test]
    fn staged_setters_write_cursor_state() {
        let (_button, mut builder) = target();
        builder
            .set_state(InteractionState::Selected)
            .set_corner_radius(3.0)
            .set_font("Bold");

        let staging = builder.staging();
        assert_eq!(staging.corner_radius.selected, Some(3.0));
        assert_eq!(staging.corner_radius.default, None);
        assert_eq!(staging.font.get(InteractionState::Selected), Some(&"Bold"));
    }

    #[test]
    fn staged_setters_work_without_target() {
        let mut builder = StyleBuilder::<TestButton>::new();
        builder.set_state(InteractionState::All).set_opacity(0.5);
        for state in ControlState::ALL {
            assert_eq!(builder.staging().opacity.slot(state), Some(&0.5));
        }
    }

    #[test]
    fn immediate_setter_without_target_is_ignored() {
        let mut builder = StyleBuilder::<TestButton>::new();
        builder.set_title("nobody home").set_image(&7);
        assert!(!builder.has_target());
    }

    #[test]
    fn build_without_target_is_an_error() {
        let builder = StyleBuilder::<TestButton>::new();
        assert_eq!(builder.build(), Err(StyleError::MissingTarget));
    }

    #[test]
    fn build_while_borrowed_is_busy() {
        let (button, mut builder) = target();
        builder.set_corner_radius(5.0);

        let guard = button.borrow();
        assert_eq!(builder.build(), Err(StyleError::TargetBusy));
        drop(guard);

        assert_eq!(builder.build(), Ok(()));
        assert_eq!(button.borrow().layer.corner_radius, 5.0);
    }

    #[test]
    fn apply_while_mutably_borrowed_is_busy() {
        let (button, mut builder) = target();
        let guard = button.borrow_mut();
        assert_eq!(builder.apply(), Err(StyleError::TargetBusy));
        drop(guard);
        assert_eq!(builder.apply(), Ok(()));
    }

    #[test]
    fn all_state_commit_use_default() {
        let (button, builder) = target();
        let mut builder = builder.with_all_state_commit(AllStateCommit::UseDefault);
        builder
            .set_state(InteractionState::Default)
            .set_border_width(2.0)
            .set_state(InteractionState::Pressed)
            .set_border_width(4.0)
            .set_state(InteractionState::All);

        builder.build().unwrap();
        assert_eq!(button.borrow().layer.border_width, 2.0);

        builder.set_all_state_commit(AllStateCommit::Skip);
        builder.set_state(InteractionState::Pressed).build().unwrap();
        builder.set_state(InteractionState::All).build().unwrap();
        assert_eq!(button.borrow().layer.border_width, 4.0);
    }
}
