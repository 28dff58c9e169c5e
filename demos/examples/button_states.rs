// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state button styling.
//!
//! Stage a look for each interaction state of a headless button, then flip
//! the button through its states and re-apply.
//!
//! Run:
//! - `cargo run -p understory_demos --example button_states`
//! - `RUST_LOG=understory_control_style=trace cargo run -p understory_demos --example button_states`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Insets, Size, Vec2};
use peniko::{Color, ImageData};
use understory_control_style::headless::Button;
use understory_control_style::image::solid_color_image;
use understory_control_style::{
    ContentHorizontalAlignment, ControlState, InteractionFlags, InteractionState, StyleBuilder,
    StyledControl,
};

fn main() {
    understory_demos::init_tracing();

    let button = Rc::new(RefCell::new(Button::<&str, ImageData, ()>::new()));
    let background =
        |r, g, b| solid_color_image(Color::from_rgb8(r, g, b), Some(Size::new(1.0, 1.0)), 2.0);

    let mut style = StyleBuilder::new();
    style
        .set_target(&button)
        .set_state(InteractionState::All)
        .set_title("Continue")
        .set_font("Inter 15")
        .set_corner_radius(8.0)
        .set_border_width(1.0)
        .set_content_edge_insets(Insets::uniform_xy(16.0, 8.0))
        .set_content_horizontal_alignment(ContentHorizontalAlignment::Center)
        .set_shadow_offset(Vec2::new(0.0, 2.0))
        .set_shadow_radius(4.0);

    style
        .set_state(InteractionState::Default)
        .set_border_color(Color::from_rgb8(0, 90, 200))
        .set_shadow_opacity(0.3)
        .set_state(InteractionState::Pressed)
        .set_title("Continuing...")
        .set_border_color(Color::from_rgb8(0, 60, 140))
        .set_shadow_opacity(0.1)
        .set_state(InteractionState::Inactive)
        .set_title_color(Color::from_rgb8(150, 150, 150))
        .set_opacity(0.5);

    let backgrounds = [
        (ControlState::Default, (230, 240, 255)),
        (ControlState::Pressed, (200, 220, 255)),
        (ControlState::Inactive, (240, 240, 240)),
    ];
    for (state, (r, g, b)) in backgrounds {
        if let Some(image) = background(r, g, b) {
            style.set_state(state.into()).set_background_image(&image);
        }
    }

    let flag_sequence = [
        InteractionFlags::empty(),
        InteractionFlags::PRESSED,
        InteractionFlags::DISABLED,
    ];
    for flags in flag_sequence {
        button.borrow_mut().flags = flags;
        if let Err(err) = style.apply() {
            eprintln!("apply failed: {err}");
            continue;
        }
        let b = button.borrow();
        println!(
            "{:<9} title={:?} radius={} opacity={} border={:?} background={}",
            b.interaction_state().name(),
            b.current_title(),
            b.layer.corner_radius,
            b.layer.opacity,
            b.layer.border_color,
            b.background_images.slot(b.interaction_state()).map_or_else(
                || "none".to_string(),
                |i| format!("{}x{}", i.width, i.height)
            ),
        );
    }

    // Opacity was staged only for the inactive state, so it sticks once
    // committed; re-enabling the button does not restore it.
    button.borrow_mut().flags = InteractionFlags::empty();
    if style.apply().is_ok() {
        tracing::info!(opacity = button.borrow().layer.opacity, "re-enabled");
    }

    // The builder never owns the button.
    drop(button);
    match style.build() {
        Ok(()) => println!("build after drop: ok"),
        Err(err) => println!("build after drop: {err}"),
    }
}
