// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract a styled control implements.
//!
//! The builder never renders anything itself. It drives a control through
//! [`StyledControl`]: per-state mutators for text and images, plain data
//! ([`Layer`], [`ControlAttributes`]) for everything it commits in batch, and
//! a query for the live [`ControlState`].

use kurbo::{BezPath, Insets, Vec2};
use peniko::Color;
use peniko::color::Rgba8;

use crate::state::ControlState;

/// Horizontal placement of a control's content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContentHorizontalAlignment {
    /// Centered.
    #[default]
    Center,
    /// Aligned to the left edge.
    Left,
    /// Aligned to the right edge.
    Right,
    /// Stretched to the full width.
    Fill,
    /// Aligned to the leading edge for the current layout direction.
    Leading,
    /// Aligned to the trailing edge for the current layout direction.
    Trailing,
}

/// Vertical placement of a control's content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ContentVerticalAlignment {
    /// Centered.
    #[default]
    Center,
    /// Aligned to the top edge.
    Top,
    /// Aligned to the bottom edge.
    Bottom,
    /// Stretched to the full height.
    Fill,
}

/// Rendering-layer properties of a control.
///
/// Colors are stored as 8-bit sRGB, the representation the layer hands to
/// its renderer; [`crate::StyleBuilder::build`] converts staged [`Color`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Width of the border stroke.
    pub border_width: f64,
    /// Border stroke color, `None` for no border color.
    pub border_color: Option<Rgba8>,
    /// Corner radius of the background and border.
    pub corner_radius: f64,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f32,
    /// Background fill, `None` for transparent.
    pub background_color: Option<Rgba8>,
    /// Shadow color.
    pub shadow_color: Option<Rgba8>,
    /// Shadow opacity in `[0, 1]`.
    pub shadow_opacity: f32,
    /// Shadow offset.
    pub shadow_offset: Vec2,
    /// Shadow blur radius.
    pub shadow_radius: f64,
    /// Explicit shadow shape, `None` to derive it from the layer contents.
    pub shadow_path: Option<BezPath>,
    /// Whether sublayers are clipped to the layer bounds.
    pub masks_to_bounds: bool,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: None,
            corner_radius: 0.0,
            opacity: 1.0,
            background_color: None,
            shadow_color: Some(Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 255,
            }),
            shadow_opacity: 0.0,
            shadow_offset: Vec2::new(0.0, -3.0),
            shadow_radius: 3.0,
            shadow_path: None,
            masks_to_bounds: false,
        }
    }
}

/// Control-level properties that are not part of the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlAttributes {
    /// Whether subviews are clipped to the control bounds.
    pub clips_to_bounds: bool,
    /// Whether the control claims touches exclusively.
    pub exclusive_touch: bool,
    /// Horizontal content placement.
    pub content_horizontal_alignment: ContentHorizontalAlignment,
    /// Vertical content placement.
    pub content_vertical_alignment: ContentVerticalAlignment,
    /// Insets around the title.
    pub title_edge_insets: Insets,
    /// Insets around the whole content.
    pub content_edge_insets: Insets,
    /// Insets around the image.
    pub image_edge_insets: Insets,
    /// Whether the title shadow flips while pressed.
    pub reverses_title_shadow_when_highlighted: bool,
    /// Whether the image darkens while pressed.
    pub adjusts_image_when_highlighted: bool,
    /// Whether the image dims while disabled.
    pub adjusts_image_when_disabled: bool,
    /// Whether a glow is drawn under the touch point while pressed.
    pub shows_touch_when_highlighted: bool,
}

impl Default for ControlAttributes {
    fn default() -> Self {
        Self {
            clips_to_bounds: false,
            exclusive_touch: false,
            content_horizontal_alignment: ContentHorizontalAlignment::Center,
            content_vertical_alignment: ContentVerticalAlignment::Center,
            title_edge_insets: Insets::ZERO,
            content_edge_insets: Insets::ZERO,
            image_edge_insets: Insets::ZERO,
            reverses_title_shadow_when_highlighted: false,
            adjusts_image_when_highlighted: true,
            adjusts_image_when_disabled: true,
            shows_touch_when_highlighted: false,
        }
    }
}

/// A control the style builder can drive.
///
/// Implemented by toolkit adapters. [`crate::headless::Button`] is a
/// plain-data implementation.
pub trait StyledControl {
    /// Font handle used for the title.
    type Font: Clone;
    /// Image handle.
    type Image;
    /// Rich text used for attributed titles.
    type AttributedText;

    /// Sets the title shown in `state`.
    fn set_title(&mut self, title: &str, state: ControlState);

    /// Sets the title color used in `state`.
    fn set_title_color(&mut self, color: Color, state: ControlState);

    /// Sets the title shadow color used in `state`.
    fn set_title_shadow_color(&mut self, color: Color, state: ControlState);

    /// Sets the foreground image shown in `state`.
    fn set_image(&mut self, image: &Self::Image, state: ControlState);

    /// Sets the background image shown in `state`.
    fn set_background_image(&mut self, image: &Self::Image, state: ControlState);

    /// Sets the attributed title shown in `state`.
    fn set_attributed_title(&mut self, title: &Self::AttributedText, state: ControlState);

    /// Sets the title font.
    fn set_font(&mut self, font: Self::Font);

    /// Sets the tint color.
    ///
    /// The tint is typically propagated to subviews, so it is a method
    /// rather than a plain field.
    fn set_tint_color(&mut self, color: Color);

    /// Returns the rendering layer.
    fn layer_mut(&mut self) -> &mut Layer;

    /// Returns the control-level attributes.
    fn attributes_mut(&mut self) -> &mut ControlAttributes;

    /// Returns the state the control is in right now.
    fn interaction_state(&self) -> ControlState;
}
