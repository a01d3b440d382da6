// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

//! Three groups of linked controls: a vertical slider, a horizontal slider and a dial each.
//!
//! Moving any control of a group moves the other two. There is no window here: the example
//! drives a few gestures through the root and logs what happens.
//! Run with `RUST_LOG=debug` to follow the tracking state machine.

use knurl::app::{Action, ControlRoot, try_init_tracing};
use knurl::controls::{Dial, Slider};
use knurl::core::{Config, ControlId, PointerEvent, RefreshQueue};
use knurl::elements::{Knob, Pointer, RadialMarks, SliderMarks, Thumb, Track};
use knurl::kurbo::{Point, Rect};
use knurl::theme::{KNOB_SIZE, THUMB_SIZE, TRACK_THICKNESS};
use tracing::info;

const MARKS_SIZE: f64 = 35.;
const RADIAL_MARKS_SIZE: f64 = 20.;
const DIVISIONS: u32 = 10;

/// The controls of one linked group.
#[derive(Debug, Clone, Copy)]
struct Group {
    vertical: ControlId,
    horizontal: ControlId,
    dial: ControlId,
}

fn make_vslider(value: f64) -> Slider<Thumb, SliderMarks<Track>> {
    Slider::new(
        Thumb::new(THUMB_SIZE),
        SliderMarks::new(Track::vertical(TRACK_THICKNESS), MARKS_SIZE, DIVISIONS)
            .with_inset(THUMB_SIZE / 2.),
        value,
    )
}

fn make_hslider(value: f64) -> Slider<Thumb, SliderMarks<Track>> {
    Slider::new(
        Thumb::new(THUMB_SIZE),
        SliderMarks::new(Track::horizontal(TRACK_THICKNESS), MARKS_SIZE, DIVISIONS)
            .with_inset(THUMB_SIZE / 2.),
        value,
    )
}

fn make_dial(value: f64) -> Dial<Pointer, RadialMarks<Knob>> {
    Dial::new(
        Pointer::new(KNOB_SIZE),
        RadialMarks::new(Knob::new(KNOB_SIZE), RADIAL_MARKS_SIZE, DIVISIONS),
        value,
    )
}

/// Lay out three panes side by side: vertical sliders, horizontal sliders, then knobs.
fn make_controls(root: &mut ControlRoot) -> [Group; 3] {
    let vertical_pane = Rect::new(40., 40., 340., 360.);
    let horizontal_pane = Rect::new(380., 40., 680., 360.);
    let knobs_pane = Rect::new(720., 40., 860., 360.);

    std::array::from_fn(|index| {
        let value = (index + 1) as f64 * 0.25;
        let column = vertical_pane.width() / 3.;
        let row = horizontal_pane.height() / 3.;
        let knob_row = knobs_pane.height() / 3.;
        let i = index as f64;

        let vertical = root.add(
            make_vslider(value),
            Rect::new(
                vertical_pane.x0 + column * i,
                vertical_pane.y0 + 20.,
                vertical_pane.x0 + column * (i + 1.),
                vertical_pane.y1 - 20.,
            ),
        );
        let horizontal = root.add(
            make_hslider(value),
            Rect::new(
                horizontal_pane.x0 + 20.,
                horizontal_pane.y0 + row * i,
                horizontal_pane.x1 - 20.,
                horizontal_pane.y0 + row * (i + 1.),
            ),
        );
        let dial = root.add(
            make_dial(value),
            Rect::new(
                knobs_pane.x0,
                knobs_pane.y0 + knob_row * i,
                knobs_pane.x1,
                knobs_pane.y0 + knob_row * (i + 1.),
            ),
        );
        root.link([vertical, horizontal, dial]);
        Group {
            vertical,
            horizontal,
            dial,
        }
    })
}

fn send(root: &mut ControlRoot, view: &mut RefreshQueue, events: &[PointerEvent]) {
    for event in events {
        root.on_pointer_event(event, view);
    }
    while let Some((action, id)) = root.pop_action() {
        if let Action::ValueChanged(value) = action {
            info!("{id} changed to {value:.3}");
        }
    }
    let refreshed = view.take();
    if !refreshed.is_empty() {
        info!("refresh requested for {refreshed:?}");
    }
}

/// Drag the first vertical slider to the top, click the second dial straight up, and
/// start dragging the third horizontal slider before losing focus.
fn run_script(root: &mut ControlRoot, groups: &[Group; 3]) {
    let mut view = RefreshQueue::default();

    if let Some(bounds) = root.bounds(groups[0].vertical) {
        // The indicator's center, at 0.25.
        let travel = bounds.height() - THUMB_SIZE;
        let start = Point::new(
            bounds.center().x,
            bounds.y1 - THUMB_SIZE / 2. - 0.25 * travel,
        );
        send(
            root,
            &mut view,
            &[
                PointerEvent::Down(start),
                PointerEvent::Move(start - (0., 100.)),
                PointerEvent::Move(Point::new(start.x, bounds.y0 - 50.)),
                PointerEvent::Up(Point::new(start.x, bounds.y0 - 50.)),
            ],
        );
    }

    if let Some(bounds) = root.bounds(groups[1].dial) {
        let top = Point::new(bounds.center().x, bounds.center().y - KNOB_SIZE / 4.);
        send(
            root,
            &mut view,
            &[PointerEvent::Down(top), PointerEvent::Up(top)],
        );
    }

    if let Some(bounds) = root.bounds(groups[2].horizontal) {
        let left = Point::new(bounds.x0 + 5., bounds.center().y);
        send(
            root,
            &mut view,
            &[PointerEvent::Down(left), PointerEvent::Move(left + (50., 0.))],
        );
        root.focus_lost(&mut view);
        send(root, &mut view, &[]);
    }

    for (index, group) in groups.iter().enumerate() {
        let values = [group.vertical, group.horizontal, group.dial].map(|id| root.value(id));
        info!("group {index}: {values:?}");
    }
}

fn main() {
    let _ = try_init_tracing();
    let config = Config::from_env();
    info!(mark_thickness = config.mark_thickness, "configuration loaded");
    let mut root = ControlRoot::with_config(config);
    let groups = make_controls(&mut root);
    run_script(&mut root, &groups);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_keeps_groups_in_sync() {
        let mut root = ControlRoot::new();
        let groups = make_controls(&mut root);
        run_script(&mut root, &groups);

        let expected = [1., 0.5, 0.75];
        for (group, expected) in groups.iter().zip(expected) {
            for id in [group.vertical, group.horizontal, group.dial] {
                let value = root.value(id).unwrap();
                assert!((value - expected).abs() < 1e-9, "{id}: {value} != {expected}");
            }
        }
        assert_eq!(root.pointer_capture_target(), None);
    }
}
