// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The staging table and its per-state resolution.
//!
//! [`StagingTable`] holds one [`PropertySlots`] per staged visual property.
//! [`StagingTable::resolve`] reads back a single state into a
//! [`ResolvedStyle`], which [`ResolvedStyle::apply_to`] writes onto a
//! [`StyledControl`].

use kurbo::{BezPath, Insets, Vec2};
use peniko::Color;

use crate::control::{ContentHorizontalAlignment, ContentVerticalAlignment, StyledControl};
use crate::slots::PropertySlots;
use crate::state::InteractionState;

macro_rules! staged_properties {
    ($($(#[$meta:meta])* $field:ident: $ty:ty => $variant:ident,)*) => {
        /// Per-state values for every staged visual property.
        ///
        /// `F` is the control's font type. Fields are public: staging a value
        /// is `table.corner_radius.set(4.0, state)`.
        #[derive(Clone, Debug)]
        pub struct StagingTable<F> {
            $($(#[$meta])* pub $field: PropertySlots<$ty>,)*
        }

        impl<F> Default for StagingTable<F> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<F> StagingTable<F> {
            /// Creates a table with nothing staged.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    $($field: PropertySlots::new(),)*
                }
            }

            /// Returns `true` if `property` has a value for `state`.
            #[must_use]
            pub fn is_staged(&self, property: StagedProperty, state: InteractionState) -> bool {
                match property {
                    $(StagedProperty::$variant => self.$field.get(state).is_some(),)*
                }
            }
        }

        impl<F: Clone> StagingTable<F> {
            /// Reads back every property for `state`.
            ///
            /// Resolution only looks at concrete slots, so resolving
            /// [`InteractionState::All`] yields an empty style.
            #[must_use]
            pub fn resolve(&self, state: InteractionState) -> ResolvedStyle<F> {
                ResolvedStyle {
                    $($field: self.$field.get(state).cloned(),)*
                }
            }
        }

        /// Names a staged visual property.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum StagedProperty {
            $($(#[$meta])* $variant,)*
        }

        impl StagedProperty {
            /// Every staged property, in commit order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the snake case name of the property.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($field),)*
                }
            }
        }

        /// Staged values for one state, ready to be committed.
        ///
        /// `None` leaves the control's current value untouched.
        #[derive(Clone, Debug)]
        pub struct ResolvedStyle<F> {
            $($(#[$meta])* pub $field: Option<$ty>,)*
        }

        impl<F> ResolvedStyle<F> {
            /// Returns the number of properties with a value.
            #[must_use]
            pub fn len(&self) -> usize {
                0 $(+ usize::from(self.$field.is_some()))*
            }

            /// Returns `true` if no property has a value.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

staged_properties! {
    /// Title font.
    font: F => Font,
    /// Layer border width.
    border_width: f64 => BorderWidth,
    /// Layer border color.
    border_color: Color => BorderColor,
    /// Layer corner radius.
    corner_radius: f64 => CornerRadius,
    /// Layer opacity.
    opacity: f32 => Opacity,
    /// Layer background color.
    background_color: Color => BackgroundColor,
    /// Control tint color.
    tint_color: Color => TintColor,
    /// Layer shadow color.
    shadow_color: Color => ShadowColor,
    /// Layer shadow opacity.
    shadow_opacity: f32 => ShadowOpacity,
    /// Layer shadow offset.
    shadow_offset: Vec2 => ShadowOffset,
    /// Layer shadow blur radius.
    shadow_radius: f64 => ShadowRadius,
    /// Layer shadow shape.
    shadow_path: BezPath => ShadowPath,
    /// Control clipping.
    clips_to_bounds: bool => ClipsToBounds,
    /// Layer masking.
    masks_to_bounds: bool => MasksToBounds,
    /// Exclusive touch handling.
    exclusive_touch: bool => ExclusiveTouch,
    /// Horizontal content alignment.
    content_horizontal_alignment: ContentHorizontalAlignment => ContentHorizontalAlignment,
    /// Vertical content alignment.
    content_vertical_alignment: ContentVerticalAlignment => ContentVerticalAlignment,
    /// Title edge insets.
    title_edge_insets: Insets => TitleEdgeInsets,
    /// Content edge insets.
    content_edge_insets: Insets => ContentEdgeInsets,
    /// Image edge insets.
    image_edge_insets: Insets => ImageEdgeInsets,
    /// Title shadow reversal while pressed.
    reverses_title_shadow_when_highlighted: bool => ReversesTitleShadowWhenHighlighted,
    /// Image adjustment while pressed.
    adjusts_image_when_highlighted: bool => AdjustsImageWhenHighlighted,
    /// Image adjustment while disabled.
    adjusts_image_when_disabled: bool => AdjustsImageWhenDisabled,
    /// Touch glow while pressed.
    shows_touch_when_highlighted: bool => ShowsTouchWhenHighlighted,
}

impl<F> StagingTable<F> {
    /// Returns the properties staged for `state`, in commit order.
    pub fn staged(&self, state: InteractionState) -> impl Iterator<Item = StagedProperty> + '_ {
        StagedProperty::ALL
            .iter()
            .copied()
            .filter(move |property| self.is_staged(*property, state))
    }
}

impl<F> ResolvedStyle<F> {
    /// Writes every present value onto `control`.
    pub fn apply_to<C>(self, control: &mut C)
    where
        C: StyledControl<Font = F> + ?Sized,
    {
        if let Some(font) = self.font {
            control.set_font(font);
        }
        if let Some(tint_color) = self.tint_color {
            control.set_tint_color(tint_color);
        }

        let layer = control.layer_mut();
        if let Some(border_width) = self.border_width {
            layer.border_width = border_width;
        }
        if let Some(border_color) = self.border_color {
            layer.border_color = Some(border_color.to_rgba8());
        }
        if let Some(corner_radius) = self.corner_radius {
            layer.corner_radius = corner_radius;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(background_color) = self.background_color {
            layer.background_color = Some(background_color.to_rgba8());
        }
        if let Some(shadow_color) = self.shadow_color {
            layer.shadow_color = Some(shadow_color.to_rgba8());
        }
        if let Some(shadow_opacity) = self.shadow_opacity {
            layer.shadow_opacity = shadow_opacity;
        }
        if let Some(shadow_offset) = self.shadow_offset {
            layer.shadow_offset = shadow_offset;
        }
        if let Some(shadow_radius) = self.shadow_radius {
            layer.shadow_radius = shadow_radius;
        }
        if let Some(shadow_path) = self.shadow_path {
            layer.shadow_path = Some(shadow_path);
        }
        if let Some(masks_to_bounds) = self.masks_to_bounds {
            layer.masks_to_bounds = masks_to_bounds;
        }

        let attributes = control.attributes_mut();
        if let Some(clips_to_bounds) = self.clips_to_bounds {
            attributes.clips_to_bounds = clips_to_bounds;
        }
        if let Some(exclusive_touch) = self.exclusive_touch {
            attributes.exclusive_touch = exclusive_touch;
        }
        if let Some(alignment) = self.content_horizontal_alignment {
            attributes.content_horizontal_alignment = alignment;
        }
        if let Some(alignment) = self.content_vertical_alignment {
            attributes.content_vertical_alignment = alignment;
        }
        if let Some(insets) = self.title_edge_insets {
            attributes.title_edge_insets = insets;
        }
        if let Some(insets) = self.content_edge_insets {
            attributes.content_edge_insets = insets;
        }
        if let Some(insets) = self.image_edge_insets {
            attributes.image_edge_insets = insets;
        }
        if let Some(reverses) = self.reverses_title_shadow_when_highlighted {
            attributes.reverses_title_shadow_when_highlighted = reverses;
        }
        if let Some(adjusts) = self.adjusts_image_when_highlighted {
            attributes.adjusts_image_when_highlighted = adjusts;
        }
        if let Some(adjusts) = self.adjusts_image_when_disabled {
            attributes.adjusts_image_when_disabled = adjusts;
        }
        if let Some(shows) = self.shows_touch_when_highlighted {
            attributes.shows_touch_when_highlighted = shows;
        }
    }
}
