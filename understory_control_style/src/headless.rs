// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain-data button.
//!
//! [`Button`] implements [`StyledControl`] by storing everything it is told.
//! It is useful for tests, for snapshotting a style before handing it to a
//! renderer, and as a reference for toolkit adapters.

use alloc::string::{String, ToString};

use peniko::Color;

use crate::control::{ControlAttributes, Layer, StyledControl};
use crate::slots::PropertySlots;
use crate::state::{ControlState, InteractionFlags};

/// A button whose whole styled state is public data.
///
/// `F`, `I` and `A` are the font, image and attributed text types.
#[derive(Clone, Debug)]
pub struct Button<F, I, A> {
    /// Titles per state.
    pub titles: PropertySlots<String>,
    /// Title colors per state.
    pub title_colors: PropertySlots<Color>,
    /// Title shadow colors per state.
    pub title_shadow_colors: PropertySlots<Color>,
    /// Foreground images per state.
    pub images: PropertySlots<I>,
    /// Background images per state.
    pub background_images: PropertySlots<I>,
    /// Attributed titles per state.
    pub attributed_titles: PropertySlots<A>,
    /// Title font, `None` until one is committed.
    pub font: Option<F>,
    /// Tint color, `None` to inherit.
    pub tint_color: Option<Color>,
    /// Rendering layer.
    pub layer: Layer,
    /// Control-level attributes.
    pub attributes: ControlAttributes,
    /// Live interaction flags.
    pub flags: InteractionFlags,
}

impl<F, I, A> Default for Button<F, I, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, I, A> Button<F, I, A> {
    /// Creates an enabled, unselected button with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            titles: PropertySlots::new(),
            title_colors: PropertySlots::new(),
            title_shadow_colors: PropertySlots::new(),
            images: PropertySlots::new(),
            background_images: PropertySlots::new(),
            attributed_titles: PropertySlots::new(),
            font: None,
            tint_color: None,
            layer: Layer::default(),
            attributes: ControlAttributes::default(),
            flags: InteractionFlags::empty(),
        }
    }

    /// Returns the title displayed in `state`.
    ///
    /// A state without its own title shows the default-state title.
    #[must_use]
    pub fn title_for(&self, state: ControlState) -> Option<&str> {
        fallback(&self.titles, state).map(String::as_str)
    }

    /// Returns the title color used in `state`, falling back to the
    /// default-state color.
    #[must_use]
    pub fn title_color_for(&self, state: ControlState) -> Option<Color> {
        fallback(&self.title_colors, state).copied()
    }

    /// Returns the image displayed in `state`, falling back to the
    /// default-state image.
    #[must_use]
    pub fn image_for(&self, state: ControlState) -> Option<&I> {
        fallback(&self.images, state)
    }

    /// Returns the title displayed right now.
    #[must_use]
    pub fn current_title(&self) -> Option<&str> {
        self.title_for(self.flags.state())
    }
}

fn fallback<T>(slots: &PropertySlots<T>, state: ControlState) -> Option<&T> {
    slots
        .slot(state)
        .or_else(|| slots.slot(ControlState::Default))
}

impl<F: Clone, I: Clone, A: Clone> StyledControl for Button<F, I, A> {
    type Font = F;
    type Image = I;
    type AttributedText = A;

    fn set_title(&mut self, title: &str, state: ControlState) {
        *self.titles.slot_mut(state) = Some(title.to_string());
    }

    fn set_title_color(&mut self, color: Color, state: ControlState) {
        *self.title_colors.slot_mut(state) = Some(color);
    }

    fn set_title_shadow_color(&mut self, color: Color, state: ControlState) {
        *self.title_shadow_colors.slot_mut(state) = Some(color);
    }

    fn set_image(&mut self, image: &I, state: ControlState) {
        *self.images.slot_mut(state) = Some(image.clone());
    }

    fn set_background_image(&mut self, image: &I, state: ControlState) {
        *self.background_images.slot_mut(state) = Some(image.clone());
    }

    fn set_attributed_title(&mut self, title: &A, state: ControlState) {
        *self.attributed_titles.slot_mut(state) = Some(title.clone());
    }

    fn set_font(&mut self, font: F) {
        self.font = Some(font);
    }

    fn set_tint_color(&mut self, color: Color) {
        self.tint_color = Some(color);
    }

    fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    fn attributes_mut(&mut self) -> &mut ControlAttributes {
        &mut self.attributes
    }

    fn interaction_state(&self) -> ControlState {
        self.flags.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestButton = Button<(), &'static str, ()>;

    #[test]
    fn title_falls_back_to_default_state() {
        let mut button = TestButton::new();
        assert_eq!(button.title_for(ControlState::Pressed), None);

        button.set_title("Play", ControlState::Default);
        button.set_title("Pause", ControlState::Selected);

        assert_eq!(button.title_for(ControlState::Default), Some("Play"));
        assert_eq!(button.title_for(ControlState::Pressed), Some("Play"));
        assert_eq!(button.title_for(ControlState::Selected), Some("Pause"));
    }

    #[test]
    fn current_title_follows_flags() {
        let mut button = TestButton::new();
        button.set_title("Play", ControlState::Default);
        button.set_title("Pause", ControlState::Selected);
        button.set_title("Off", ControlState::Inactive);

        assert_eq!(button.current_title(), Some("Play"));
        button.flags = InteractionFlags::SELECTED;
        assert_eq!(button.current_title(), Some("Pause"));
        button.flags |= InteractionFlags::DISABLED;
        assert_eq!(button.current_title(), Some("Off"));
        assert_eq!(button.interaction_state(), ControlState::Inactive);
    }

    #[test]
    fn images_and_colors_fall_back() {
        let mut button = TestButton::new();
        let red = Color::from_rgb8(255, 0, 0);
        button.set_image(&"icon", ControlState::Default);
        button.set_title_color(red, ControlState::Default);

        assert_eq!(button.image_for(ControlState::Inactive), Some(&"icon"));
        assert_eq!(
            button
                .title_color_for(ControlState::Pressed)
                .map(Color::to_rgba8),
            Some(red.to_rgba8())
        );
    }

    #[test]
    fn defaults_match_platform_button() {
        let button = TestButton::new();
        assert_eq!(button.layer.opacity, 1.0);
        assert_eq!(button.layer.shadow_radius, 3.0);
        assert!(button.attributes.adjusts_image_when_highlighted);
        assert!(button.attributes.adjusts_image_when_disabled);
        assert!(!button.attributes.shows_touch_when_highlighted);
        assert_eq!(button.interaction_state(), ControlState::Default);
    }
}
