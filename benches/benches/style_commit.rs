// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_control_style`: staging, resolution and commit.

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Vec2};
use peniko::Color;
use understory_control_style::headless::Button;
use understory_control_style::{InteractionFlags, InteractionState, StagingTable, StyleBuilder};

type BenchButton = Button<&'static str, u32, ()>;

fn staged_builder(button: &Rc<RefCell<BenchButton>>) -> StyleBuilder<BenchButton> {
    let mut builder = StyleBuilder::new();
    builder
        .set_target(button)
        .set_state(InteractionState::All)
        .set_font("Body")
        .set_border_width(1.0)
        .set_corner_radius(6.0)
        .set_shadow_offset(Vec2::new(0.0, 2.0))
        .set_content_edge_insets(Insets::uniform(8.0))
        .set_state(InteractionState::Pressed)
        .set_background_color(Color::from_rgb8(0, 90, 200))
        .set_opacity(0.9)
        .set_state(InteractionState::Inactive)
        .set_opacity(0.4);
    builder
}

fn bench_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("control_style");

    group.bench_function("stage/all_states", |b| {
        b.iter_batched(
            StagingTable::<&'static str>::new,
            |mut table| {
                table.corner_radius.set(4.0, InteractionState::All);
                table.background_color.set(Color::WHITE, InteractionState::All);
                table.font.set("Body", InteractionState::All);
                black_box(table);
            },
            BatchSize::SmallInput,
        )
    });

    let button = Rc::new(RefCell::new(BenchButton::new()));
    let builder = staged_builder(&button);

    group.bench_function("resolve/pressed", |b| {
        b.iter(|| black_box(builder.staging().resolve(InteractionState::Pressed)))
    });

    group.bench_function("build/pressed", |b| {
        let mut builder = staged_builder(&button);
        builder.set_state(InteractionState::Pressed);
        b.iter(|| black_box(builder.build()))
    });

    group.bench_function("apply/toggle_disabled", |b| {
        let mut builder = staged_builder(&button);
        let mut disabled = false;
        b.iter(|| {
            disabled = !disabled;
            button
                .borrow_mut()
                .flags
                .set(InteractionFlags::DISABLED, disabled);
            black_box(builder.apply())
        })
    });

    group.bench_function("fan_out/title", |b| {
        let mut builder = staged_builder(&button);
        builder.set_state(InteractionState::All);
        b.iter(|| {
            builder.set_title(black_box("Continue"));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_style);
criterion_main!(benches);
