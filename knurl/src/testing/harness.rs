// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::debug;
use vello::Scene;
use vello::kurbo::{Point, Rect};

use crate::app::{Action, ControlRoot, try_init_test_tracing};
use crate::controls::Control;
use crate::core::{Config, ControlId, CursorIcon, Handled, PointerEvent, RefreshQueue};

/// A headless host for controls, to write integration tests with.
///
/// The harness owns a [`ControlRoot`] and records the refresh requests it makes.
/// It keeps track of a simulated mouse position, so that gestures can be written the way
/// a user performs them: move, press, move, release.
///
/// ```
/// use knurl::app::Action;
/// use knurl::controls::Slider;
/// use knurl::elements::{Thumb, Track};
/// use knurl::kurbo::Rect;
/// use knurl::testing::TestHarness;
///
/// let mut harness = TestHarness::create();
/// let id = harness.add(
///     Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.),
///     Rect::new(0., 0., 320., 40.),
/// );
///
/// harness.mouse_click_at((310., 20.));
/// assert_eq!(harness.value(id), 1.);
/// assert_eq!(harness.pop_action(), Some((Action::TrackingStarted, id)));
/// assert_eq!(harness.pop_action(), Some((Action::ValueChanged(1.), id)));
/// assert_eq!(harness.pop_action(), Some((Action::TrackingEnded, id)));
/// assert_eq!(harness.take_refreshes(), vec![id]);
/// ```
#[derive(Debug)]
pub struct TestHarness {
    root: ControlRoot,
    view: RefreshQueue,
    mouse_pos: Point,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::create()
    }
}

impl TestHarness {
    /// Create a harness with an empty root and the default [`Config`].
    pub fn create() -> Self {
        Self::create_with_config(Config::default())
    }

    /// Create a harness with an empty root and the given configuration.
    pub fn create_with_config(config: Config) -> Self {
        // Swallow the error: another test, or the user, may have set a subscriber already.
        let _ = try_init_test_tracing();
        Self {
            root: ControlRoot::with_config(config),
            view: RefreshQueue::default(),
            mouse_pos: Point::ZERO,
        }
    }

    // --- MARK: SETUP

    /// Add a control to the root, placed within `offered`.
    pub fn add(&mut self, control: impl Control, offered: Rect) -> ControlId {
        self.root.add(control, offered)
    }

    /// Link controls so that they keep the same value.
    pub fn link(&mut self, members: impl IntoIterator<Item = ControlId>) {
        self.root.link(members);
    }

    /// Assign a value directly, as a host would.
    #[track_caller]
    pub fn set_value(&mut self, id: ControlId, value: f64) -> bool {
        match self.root.set_value(id, value, &mut self.view) {
            Some(changed) => changed,
            None => panic!("Control {id} not found"),
        }
    }

    // --- MARK: EVENT HELPERS

    /// Send a [`PointerEvent`] to the root.
    pub fn process_pointer_event(&mut self, event: PointerEvent) -> Handled {
        self.root.on_pointer_event(&event, &mut self.view)
    }

    /// Move the simulated mouse, and send a [`Move`](PointerEvent::Move) event.
    pub fn mouse_move(&mut self, pos: impl Into<Point>) -> Handled {
        let pos = pos.into();
        self.mouse_pos = pos;
        debug!("Harness mouse moved to {}, {}", pos.x, pos.y);
        self.process_pointer_event(PointerEvent::Move(pos))
    }

    /// Send a [`Down`](PointerEvent::Down) event at the simulated mouse position.
    pub fn mouse_button_press(&mut self) -> Handled {
        self.process_pointer_event(PointerEvent::Down(self.mouse_pos))
    }

    /// Move the simulated mouse to `pos`, then press there.
    pub fn mouse_button_press_at(&mut self, pos: impl Into<Point>) -> Handled {
        self.mouse_move(pos);
        self.mouse_button_press()
    }

    /// Send an [`Up`](PointerEvent::Up) event at the simulated mouse position.
    pub fn mouse_button_release(&mut self) -> Handled {
        self.process_pointer_event(PointerEvent::Up(self.mouse_pos))
    }

    /// Press and release at `pos`.
    pub fn mouse_click_at(&mut self, pos: impl Into<Point>) {
        self.mouse_button_press_at(pos);
        self.mouse_button_release();
    }

    /// Press at `from`, drag to `to` in `steps` moves, and release.
    pub fn mouse_drag(&mut self, from: impl Into<Point>, to: impl Into<Point>, steps: u32) {
        let (from, to) = (from.into(), to.into());
        self.mouse_button_press_at(from);
        let steps = steps.max(1);
        for i in 1..=steps {
            self.mouse_move(from.lerp(to, f64::from(i) / f64::from(steps)));
        }
        self.mouse_button_release();
    }

    /// Simulate the window losing focus.
    pub fn focus_lost(&mut self) -> Handled {
        self.root.focus_lost(&mut self.view)
    }

    // --- MARK: GETTERS

    /// The root the controls live in.
    pub fn root(&self) -> &ControlRoot {
        &self.root
    }

    /// The root the controls live in, mutably.
    pub fn root_mut(&mut self) -> &mut ControlRoot {
        &mut self.root
    }

    /// The control `id`, downcast to its concrete type.
    ///
    /// ## Panics
    ///
    /// If the control is not found, or isn't a `T`.
    #[track_caller]
    pub fn get<T: Control>(&self, id: ControlId) -> &T {
        match self.root.get::<T>(id) {
            Some(control) => control,
            None => panic!("Control {id} not found, or not a {}", std::any::type_name::<T>()),
        }
    }

    /// The value of control `id`.
    ///
    /// ## Panics
    ///
    /// If the control is not found.
    #[track_caller]
    pub fn value(&self, id: ControlId) -> f64 {
        match self.root.value(id) {
            Some(value) => value,
            None => panic!("Control {id} not found"),
        }
    }

    /// The bounds control `id` was placed at.
    ///
    /// ## Panics
    ///
    /// If the control is not found.
    #[track_caller]
    pub fn bounds(&self, id: ControlId) -> Rect {
        match self.root.bounds(id) {
            Some(bounds) => bounds,
            None => panic!("Control {id} not found"),
        }
    }

    /// The simulated mouse position.
    pub fn mouse_pos(&self) -> Point {
        self.mouse_pos
    }

    /// Pop the oldest [`Action`] emitted by the controls.
    pub fn pop_action(&mut self) -> Option<(Action, ControlId)> {
        self.root.pop_action()
    }

    /// Every refresh requested since the last call, oldest first.
    pub fn take_refreshes(&mut self) -> Vec<ControlId> {
        self.view.take()
    }

    /// The current cursor icon.
    pub fn cursor_icon(&self) -> CursorIcon {
        self.root.cursor_icon()
    }

    /// The control which has pointer capture, if any.
    pub fn pointer_capture_target_id(&self) -> Option<ControlId> {
        self.root.pointer_capture_target()
    }

    /// Paint every control into a fresh scene.
    pub fn render(&self) -> Scene {
        let mut scene = Scene::new();
        self.root.paint(&mut scene);
        scene
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::controls::{Dial, Slider};
    use crate::elements::{Knob, Pointer, RadialMarks, SliderMarks, Thumb, Track};
    use crate::testing::ChangeRecording;

    #[test]
    fn vertical_slider_drag() {
        let mut harness = TestHarness::create();
        let recording = ChangeRecording::default();
        let slider = Slider::new(Thumb::new(20.), Track::vertical(5.), 0.)
            .with_on_change(recording.callback());
        let id = harness.add(slider, Rect::new(0., 0., 40., 220.));
        assert_eq!(harness.bounds(id), Rect::new(10., 0., 30., 220.));

        // Grab the indicator at the bottom, and drag it up to the middle.
        harness.mouse_drag((20., 210.), (20., 110.), 4);
        assert_approx_eq!(f64, harness.value(id), 0.5, epsilon = 1e-9);
        assert_eq!(recording.len(), 4);
        assert_eq!(harness.take_refreshes(), vec![id; 4]);
        assert_eq!(harness.pointer_capture_target_id(), None);
    }

    #[test]
    fn click_on_track_jumps() {
        let mut harness = TestHarness::create();
        let id = harness.add(
            Slider::new(
                Thumb::new(20.),
                SliderMarks::new(Track::horizontal(5.), 20., 10).with_inset(10.),
                0.,
            ),
            Rect::new(0., 0., 320., 40.),
        );

        harness.mouse_button_press_at((85., 20.));
        assert_approx_eq!(f64, harness.value(id), 0.25, epsilon = 1e-9);
        assert_eq!(harness.cursor_icon(), CursorIcon::Grabbing);

        // Release where we pressed: no further change.
        harness.mouse_button_release();
        assert_eq!(harness.take_refreshes(), vec![id]);
        assert_eq!(harness.cursor_icon(), CursorIcon::Grab);
    }

    #[test]
    fn linked_triple() {
        let mut harness = TestHarness::create();
        let vertical = harness.add(
            Slider::new(Thumb::new(20.), Track::vertical(5.), 0.25),
            Rect::new(0., 0., 40., 220.),
        );
        let horizontal = harness.add(
            Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.25),
            Rect::new(50., 0., 370., 40.),
        );
        let dial = harness.add(
            Dial::new(
                Pointer::new(50.),
                RadialMarks::new(Knob::new(50.), 10., 10),
                0.25,
            ),
            Rect::new(50., 60., 120., 130.),
        );
        harness.link([vertical, horizontal, dial]);

        // Drag the horizontal slider's indicator from 0.25 to 0.75.
        harness.mouse_drag((135., 20.), (285., 20.), 3);
        for id in [vertical, horizontal, dial] {
            assert_approx_eq!(f64, harness.value(id), 0.75, epsilon = 1e-9);
        }

        // The dial's pointer now sits at 255°, 75° clockwise past straight up.
        assert_approx_eq!(
            f64,
            harness.get::<Dial<Pointer, RadialMarks<Knob>>>(dial).degrees(),
            255.,
            epsilon = 1e-9
        );

        let refreshes = harness.take_refreshes();
        assert_eq!(refreshes.len(), 9);
        assert_eq!(&refreshes[..3], &[horizontal, vertical, dial]);
    }

    #[test]
    fn focus_loss_reverts() {
        let mut harness = TestHarness::create();
        let recording = ChangeRecording::default();
        let id = harness.add(
            Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.5)
                .with_on_change(recording.callback()),
            Rect::new(0., 0., 320., 40.),
        );

        harness.mouse_button_press_at((160., 20.));
        harness.mouse_move((250., 20.));
        assert_eq!(recording.len(), 1);

        assert!(harness.focus_lost().is_handled());
        assert_eq!(harness.value(id), 0.5);
        assert_eq!(recording.drain().last(), Some(&0.5));

        // The release that follows is stray, and ignored.
        assert_eq!(harness.mouse_button_release(), Handled::No);
        assert!(recording.is_empty());

        assert_eq!(harness.pop_action(), Some((Action::TrackingStarted, id)));
        assert_matches!(harness.pop_action(), Some((Action::ValueChanged(_), _)));
        assert_eq!(harness.pop_action(), Some((Action::TrackingCancelled, id)));
        assert_eq!(harness.pop_action(), Some((Action::ValueChanged(0.5), id)));
        assert_eq!(harness.pop_action(), None);
    }

    #[test]
    fn direct_assignment_does_not_notify() {
        let mut harness = TestHarness::create();
        let recording = ChangeRecording::default();
        let id = harness.add(
            Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.5)
                .with_on_change(recording.callback()),
            Rect::new(0., 0., 320., 40.),
        );

        assert!(harness.set_value(id, 7.));
        assert_eq!(harness.value(id), 1.);
        assert!(!harness.set_value(id, f64::NAN));
        assert_eq!(harness.value(id), 1.);
        assert!(recording.is_empty());
        assert_eq!(harness.pop_action(), None);
        assert_eq!(harness.take_refreshes(), vec![id]);
    }

    #[test]
    fn render_paints_something() {
        let mut harness = TestHarness::create();
        harness.add(
            Slider::new(Thumb::new(20.), Track::horizontal(5.), 0.5),
            Rect::new(0., 0., 320., 40.),
        );
        assert!(!harness.render().encoding().is_empty());
    }
}
