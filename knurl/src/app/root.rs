// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::{debug, info_span, trace, trace_span};
use vello::Scene;
use vello::kurbo::{Point, Rect};

use crate::app::{Action, LinkGroup};
use crate::controls::{Control, TrackingOutcome};
use crate::core::{Config, Context, ControlId, CursorIcon, Handled, PointerEvent, RectExt, View};

// --- MARK: STRUCTS

/// A control owned by the root, with the rectangle it was placed at.
struct ControlEntry {
    control: Box<dyn Control>,
    bounds: Rect,
}

/// The composition root of a set of controls.
///
/// This is the entry point for pointer events, and the owner of every control and
/// [`LinkGroup`]. Controls are painted in insertion order, so later controls are on top
/// and are hit-tested first.
///
/// Methods taking a [`ControlId`] return `None` for ids the root doesn't know, after
/// reporting them with [`debug_panic!`].
pub struct ControlRoot {
    config: Config,
    controls: Vec<ControlEntry>,
    links: Vec<LinkGroup>,

    /// Control that currently has pointer capture.
    pointer_capture_target: Option<ControlId>,
    /// Control under the pointer, when nothing is captured.
    hovered: Option<ControlId>,
    /// Last pointer position, updated on every event which carries one.
    last_pointer_pos: Option<Point>,
    /// Current cursor icon.
    cursor_icon: CursorIcon,

    actions: VecDeque<(Action, ControlId)>,
}

impl std::fmt::Debug for ControlRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let controls: Vec<_> = self
            .controls
            .iter()
            .map(|entry| (entry.control.id(), entry.control.short_type_name(), entry.bounds))
            .collect();
        f.debug_struct("ControlRoot")
            .field("controls", &controls)
            .field("links", &self.links)
            .field("pointer_capture_target", &self.pointer_capture_target)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl Default for ControlRoot {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: CONSTRUCTION
impl ControlRoot {
    /// Create an empty root with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty root with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            controls: Vec::new(),
            links: Vec::new(),
            pointer_capture_target: None,
            hovered: None,
            last_pointer_pos: None,
            cursor_icon: CursorIcon::Default,
            actions: VecDeque::new(),
        }
    }

    /// The configuration shared by every control.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a control, placed within `offered` (see [`place`](Self::place)).
    ///
    /// The control is drawn above every control added before it.
    pub fn add(&mut self, control: impl Control, offered: Rect) -> ControlId {
        self.add_boxed(Box::new(control), offered)
    }

    /// Add a boxed control, placed within `offered` (see [`place`](Self::place)).
    pub fn add_boxed(&mut self, control: Box<dyn Control>, offered: Rect) -> ControlId {
        let id = control.id();
        if self.index_of(id).is_some() {
            debug_panic!("Control {id} was added to the root twice");
            return id;
        }
        let bounds = placement(&*control, &self.config, offered);
        debug!(
            id = id.trace(),
            name = control.short_type_name(),
            ?bounds,
            "control added"
        );
        self.controls.push(ControlEntry { control, bounds });
        id
    }

    /// Remove a control, and drop it from every link group.
    ///
    /// Removing the control which has pointer capture ends its drag without notifying.
    pub fn remove(&mut self, id: ControlId) -> Option<Box<dyn Control>> {
        let Some(index) = self.index_of(id) else {
            debug_panic!("Tried to remove unknown control {id}");
            return None;
        };
        for group in &mut self.links {
            group.remove(id);
        }
        self.links.retain(|group| !group.is_empty());
        if self.pointer_capture_target == Some(id) {
            self.pointer_capture_target = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        let mut entry = self.controls.remove(index);
        entry.control.end_tracking();
        debug!(id = id.trace(), "control removed");
        Some(entry.control)
    }

    /// Place a control within `offered`.
    ///
    /// The control's limits constrain the size of `offered`, and the result is centered
    /// in `offered`. Returns the control's new bounds.
    pub fn place(&mut self, id: ControlId, offered: Rect) -> Option<Rect> {
        let Some(index) = self.index_of(id) else {
            debug_panic!("Tried to place unknown control {id}");
            return None;
        };
        let entry = &mut self.controls[index];
        entry.bounds = placement(&*entry.control, &self.config, offered);
        trace!(id = id.trace(), bounds = ?entry.bounds, "control placed");
        Some(entry.bounds)
    }
}

/// The bounds a control takes when offered `offered`.
fn placement(control: &dyn Control, config: &Config, offered: Rect) -> Rect {
    let ctx = Context::new(config, offered);
    let size = control.limits(&ctx).constrain(offered.size());
    Rect::from_origin_size(offered.origin(), size).center_in(offered)
}

// --- MARK: ACCESSORS
impl ControlRoot {
    fn index_of(&self, id: ControlId) -> Option<usize> {
        self.controls
            .iter()
            .position(|entry| entry.control.id() == id)
    }

    fn entry(&self, id: ControlId) -> Option<&ControlEntry> {
        let entry = self.controls.iter().find(|entry| entry.control.id() == id);
        if entry.is_none() {
            debug_panic!("Unknown control {id}");
        }
        entry
    }

    /// Ids of every control, in paint order.
    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.controls.iter().map(|entry| entry.control.id())
    }

    /// Whether the root owns the control `id`.
    pub fn contains(&self, id: ControlId) -> bool {
        self.index_of(id).is_some()
    }

    /// The control `id`, as a trait object.
    pub fn control(&self, id: ControlId) -> Option<&dyn Control> {
        self.entry(id).map(|entry| &*entry.control)
    }

    /// The control `id`, downcast to its concrete type.
    ///
    /// Returns `None` if `id` is unknown or isn't a `T`.
    pub fn get<T: Control>(&self, id: ControlId) -> Option<&T> {
        let control: &dyn Any = &*self.entry(id)?.control;
        control.downcast_ref()
    }

    /// The control `id`, downcast to its concrete type, mutably.
    ///
    /// Value changes made through this reference bypass link groups and refresh requests.
    pub fn get_mut<T: Control>(&mut self, id: ControlId) -> Option<&mut T> {
        let Some(index) = self.index_of(id) else {
            debug_panic!("Unknown control {id}");
            return None;
        };
        let control: &mut dyn Any = &mut *self.controls[index].control;
        control.downcast_mut()
    }

    /// The current value of control `id`.
    pub fn value(&self, id: ControlId) -> Option<f64> {
        self.entry(id).map(|entry| entry.control.value())
    }

    /// The bounds control `id` was placed at.
    pub fn bounds(&self, id: ControlId) -> Option<Rect> {
        self.entry(id).map(|entry| entry.bounds)
    }

    /// The control which has pointer capture, if a drag is in progress.
    pub fn pointer_capture_target(&self) -> Option<ControlId> {
        self.pointer_capture_target
    }

    /// The control under the pointer, if no drag is in progress.
    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    /// The cursor the host should show.
    pub fn cursor_icon(&self) -> CursorIcon {
        self.cursor_icon
    }

    /// Every link group, in creation order.
    pub fn links(&self) -> &[LinkGroup] {
        &self.links
    }

    /// Pop the oldest queued action.
    pub fn pop_action(&mut self) -> Option<(Action, ControlId)> {
        self.actions.pop_front()
    }

    /// Whether actions are waiting to be popped.
    pub fn has_pending_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}

// --- MARK: VALUES
impl ControlRoot {
    /// Link `members` so that they keep the same value. Returns the group's index
    /// in [`links`](Self::links).
    ///
    /// Peers take the first member's value right away, without notifying. That includes
    /// members of other groups which share a control with this one.
    /// Unknown ids are dropped from the group.
    pub fn link(&mut self, members: impl IntoIterator<Item = ControlId>) -> usize {
        let mut group = LinkGroup::new(members);
        for id in group.members().to_vec() {
            if !self.contains(id) {
                debug_panic!("Tried to link unknown control {id}");
                group.remove(id);
            }
        }
        let first = group.members().first().copied();
        debug!(members = ?group.members(), "controls linked");
        self.links.push(group);
        if let Some(first) = first {
            let value = self.value(first).unwrap_or_default();
            for peer in self.linked_with(first) {
                if let Some(index) = self.index_of(peer) {
                    self.controls[index].control.set_value(value);
                }
            }
        }
        self.links.len() - 1
    }

    /// Assign the value of control `id` directly, then bring its link groups along.
    ///
    /// Never fires `on_change` and never queues actions. Refreshes every control whose
    /// value changed. Returns whether the value of `id` changed.
    pub fn set_value(&mut self, id: ControlId, value: f64, view: &mut impl View) -> Option<bool> {
        let Some(index) = self.index_of(id) else {
            debug_panic!("Tried to set the value of unknown control {id}");
            return None;
        };
        let control = &mut self.controls[index].control;
        let changed = control.set_value(value);
        let value = control.value();
        if changed {
            view.refresh(id);
        }
        self.sync_peers(id, value, view);
        Some(changed)
    }

    /// Every control reachable from `source` through link groups, `source` excluded.
    ///
    /// Groups which share a member are followed transitively.
    fn linked_with(&self, source: ControlId) -> SmallVec<[ControlId; 8]> {
        let mut reached: SmallVec<[ControlId; 8]> = SmallVec::new();
        reached.push(source);
        let mut next = 0;
        while let Some(&id) = reached.get(next) {
            next += 1;
            for group in self.links.iter().filter(|group| group.contains(id)) {
                for &member in group.members() {
                    if !reached.contains(&member) {
                        reached.push(member);
                    }
                }
            }
        }
        reached.remove(0);
        reached
    }

    /// Assign `value` to every control linked with `source`, refreshing those which changed.
    fn sync_peers(&mut self, source: ControlId, value: f64, view: &mut impl View) {
        for peer in self.linked_with(source) {
            let Some(index) = self.index_of(peer) else {
                continue;
            };
            if self.controls[index].control.set_value(value) {
                trace!(source = source.trace(), peer = peer.trace(), value, "peer synced");
                view.refresh(peer);
            }
        }
    }

    /// Record the result of a tracking transition on `id`.
    fn handle_outcome(&mut self, id: ControlId, outcome: TrackingOutcome, view: &mut impl View) {
        match outcome {
            TrackingOutcome::Ignored | TrackingOutcome::Unchanged | TrackingOutcome::Changed(_) => {}
            TrackingOutcome::Started { .. } => {
                self.actions.push_back((Action::TrackingStarted, id));
            }
            TrackingOutcome::Ended => {
                self.actions.push_back((Action::TrackingEnded, id));
            }
            TrackingOutcome::Cancelled { .. } => {
                self.actions.push_back((Action::TrackingCancelled, id));
            }
        }
        if let Some(value) = outcome.changed_value() {
            self.actions.push_back((Action::ValueChanged(value), id));
            view.refresh(id);
            self.sync_peers(id, value, view);
        }
    }
}

// --- MARK: POINTER EVENTS
impl ControlRoot {
    /// Handle a pointer event, in the root's coordinates.
    ///
    /// Presses are hit-tested against controls from the topmost down, and the first control
    /// to start tracking captures the pointer until release or cancellation.
    pub fn on_pointer_event(&mut self, event: &PointerEvent, view: &mut impl View) -> Handled {
        let _span = info_span!("pointer_event", kind = event.short_name()).entered();
        if let Some(pos) = event.position() {
            self.last_pointer_pos = Some(pos);
        }
        let handled = match *event {
            PointerEvent::Down(pos) => self.on_pointer_down(pos, view),
            PointerEvent::Move(pos) => self.on_pointer_move(pos, view),
            PointerEvent::Up(_) => self.on_pointer_up(view),
            PointerEvent::Cancel => self.cancel_capture(view),
        };
        self.update_cursor();
        handled
    }

    /// Cancel any drag in progress, restoring the value it started from.
    ///
    /// Hosts call this when the window loses focus.
    pub fn focus_lost(&mut self, view: &mut impl View) -> Handled {
        let _span = info_span!("focus_lost").entered();
        let handled = self.cancel_capture(view);
        self.update_cursor();
        handled
    }

    fn on_pointer_down(&mut self, pos: Point, view: &mut impl View) -> Handled {
        if let Some(target) = self.pointer_capture_target {
            debug!(target = target.trace(), "press while the pointer is captured, ignored");
            return Handled::No;
        }
        let config = &self.config;
        let started = self.controls.iter_mut().rev().find_map(|entry| {
            let ctx = Context::new(config, entry.bounds);
            match entry.control.begin_tracking(&ctx, pos) {
                TrackingOutcome::Ignored => None,
                outcome => Some((entry.control.id(), outcome)),
            }
        });
        let Some((id, outcome)) = started else {
            trace!(?pos, "press hit no control");
            return Handled::No;
        };
        debug!(id = id.trace(), "pointer captured");
        self.pointer_capture_target = Some(id);
        self.hovered = None;
        self.handle_outcome(id, outcome, view);
        Handled::Yes
    }

    fn on_pointer_move(&mut self, pos: Point, view: &mut impl View) -> Handled {
        let Some(target) = self.pointer_capture_target else {
            self.hovered = self
                .controls
                .iter()
                .rev()
                .find(|entry| entry.bounds.includes(pos))
                .map(|entry| entry.control.id());
            return Handled::No;
        };
        let Some(index) = self.index_of(target) else {
            self.pointer_capture_target = None;
            return Handled::No;
        };
        let entry = &mut self.controls[index];
        let ctx = Context::new(&self.config, entry.bounds);
        let outcome = entry.control.keep_tracking(&ctx, pos);
        self.handle_outcome(target, outcome, view);
        Handled::Yes
    }

    fn on_pointer_up(&mut self, view: &mut impl View) -> Handled {
        let Some(target) = self.pointer_capture_target.take() else {
            return Handled::No;
        };
        debug!(target = target.trace(), "pointer released");
        let Some(index) = self.index_of(target) else {
            return Handled::No;
        };
        let outcome = self.controls[index].control.end_tracking();
        self.handle_outcome(target, outcome, view);
        if let Some(pos) = self.last_pointer_pos {
            self.on_pointer_move(pos, view);
        }
        Handled::Yes
    }

    fn cancel_capture(&mut self, view: &mut impl View) -> Handled {
        let Some(target) = self.pointer_capture_target.take() else {
            return Handled::No;
        };
        debug!(target = target.trace(), "pointer capture cancelled");
        let Some(index) = self.index_of(target) else {
            return Handled::No;
        };
        let outcome = self.controls[index].control.cancel_tracking();
        self.handle_outcome(target, outcome, view);
        Handled::Yes
    }

    fn update_cursor(&mut self) {
        let target = self.pointer_capture_target.or(self.hovered);
        let cursor = match (target, self.last_pointer_pos) {
            (Some(id), Some(pos)) => self
                .controls
                .iter()
                .find(|entry| entry.control.id() == id)
                .map(|entry| {
                    let ctx = Context::new(&self.config, entry.bounds);
                    entry.control.cursor(&ctx, pos)
                })
                .unwrap_or_default(),
            _ => CursorIcon::Default,
        };
        if cursor != self.cursor_icon {
            trace!(?cursor, "cursor changed");
            self.cursor_icon = cursor;
        }
    }
}

// --- MARK: PAINT
impl ControlRoot {
    /// Draw every control into `scene`, in insertion order.
    pub fn paint(&self, scene: &mut Scene) {
        let _span = trace_span!("paint").entered();
        for entry in &self.controls {
            let ctx = Context::new(&self.config, entry.bounds);
            entry.control.draw(&ctx, scene);
        }
    }
}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use float_cmp::assert_approx_eq;
    use vello::kurbo::Size;

    use super::*;
    use crate::controls::{Dial, Slider};
    use crate::core::RefreshQueue;
    use crate::elements::{Knob, Pointer, Thumb, Track};

    fn slider(value: f64) -> Slider<Thumb, Track> {
        Slider::new(Thumb::new(20.), Track::horizontal(5.), value)
    }

    fn drain_actions(root: &mut ControlRoot) -> Vec<(Action, ControlId)> {
        std::iter::from_fn(|| root.pop_action()).collect()
    }

    #[test]
    fn placement_constrains_and_centers() {
        let mut root = ControlRoot::new();
        let id = root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        assert_eq!(root.bounds(id), Some(Rect::new(0., 10., 320., 30.)));

        // Too small: the minimum wins, centered on the offer.
        let bounds = root.place(id, Rect::new(0., 0., 20., 20.)).unwrap();
        assert_eq!(bounds.size(), Size::new(40., 20.));
        assert_eq!(bounds.center(), Point::new(10., 10.));
    }

    #[test]
    fn lookups() {
        let mut root = ControlRoot::new();
        let id = root.add(slider(0.25), Rect::new(0., 0., 320., 40.));
        assert!(root.contains(id));
        assert_eq!(root.ids().collect::<Vec<_>>(), vec![id]);
        assert_eq!(root.value(id), Some(0.25));
        assert!(root.get::<Slider<Thumb, Track>>(id).is_some());
        assert!(root.get::<Dial<Pointer, Knob>>(id).is_none());
        assert_eq!(root.control(id).unwrap().short_type_name(), "Slider");

        root.get_mut::<Slider<Thumb, Track>>(id)
            .unwrap()
            .set_value(0.75);
        assert_eq!(root.value(id), Some(0.75));
    }

    #[test]
    fn drag_queues_actions() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let id = root.add(slider(0.5), Rect::new(0., 0., 320., 40.));

        // The indicator spans 150..170.
        assert!(
            root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view)
                .is_handled()
        );
        assert_eq!(root.pointer_capture_target(), Some(id));
        assert_eq!(root.cursor_icon(), CursorIcon::Grabbing);
        assert!(view.is_empty());

        root.on_pointer_event(&PointerEvent::Move(Point::new(235., 20.)), &mut view);
        // Moves stay with the captured control, even outside its bounds.
        root.on_pointer_event(&PointerEvent::Move(Point::new(600., 90.)), &mut view);
        root.on_pointer_event(&PointerEvent::Up(Point::new(600., 90.)), &mut view);

        assert_eq!(root.value(id), Some(1.));
        assert_eq!(view.take(), vec![id, id]);
        assert_eq!(root.pointer_capture_target(), None);
        assert_eq!(root.cursor_icon(), CursorIcon::Default);

        let actions = drain_actions(&mut root);
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0], (Action::TrackingStarted, id));
        assert_matches!(actions[1], (Action::ValueChanged(value), _) if (value - 0.75).abs() < 1e-9);
        assert_eq!(actions[2], (Action::ValueChanged(1.), id));
        assert_eq!(actions[3], (Action::TrackingEnded, id));
    }

    #[test]
    fn press_goes_to_topmost_control() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let below = root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        let above = root.add(slider(0.), Rect::new(0., 0., 320., 40.));

        root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view);
        assert_eq!(root.pointer_capture_target(), Some(above));
        assert_eq!(root.value(below), Some(0.));
        assert_eq!(root.value(above), Some(0.5));
    }

    #[test]
    fn press_outside_is_not_handled() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        let handled =
            root.on_pointer_event(&PointerEvent::Down(Point::new(160., 200.)), &mut view);
        assert_eq!(handled, Handled::No);
        assert_eq!(root.pointer_capture_target(), None);
        assert!(!root.has_pending_actions());
    }

    #[test]
    fn hover_updates_cursor() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let id = root.add(slider(0.), Rect::new(0., 0., 320., 40.));

        root.on_pointer_event(&PointerEvent::Move(Point::new(20., 20.)), &mut view);
        assert_eq!(root.hovered(), Some(id));
        assert_eq!(root.cursor_icon(), CursorIcon::Grab);

        root.on_pointer_event(&PointerEvent::Move(Point::new(200., 20.)), &mut view);
        assert_eq!(root.hovered(), Some(id));
        assert_eq!(root.cursor_icon(), CursorIcon::Default);

        root.on_pointer_event(&PointerEvent::Move(Point::new(200., 200.)), &mut view);
        assert_eq!(root.hovered(), None);
    }

    #[test]
    fn linked_controls_follow_without_renotifying() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let a = root.add(slider(0.25), Rect::new(0., 0., 320., 40.));
        let b = root.add(slider(0.75), Rect::new(0., 50., 320., 90.));
        let c = root.add(
            Dial::new(Pointer::new(60.), Knob::new(60.), 0.),
            Rect::new(0., 100., 60., 160.),
        );
        root.link([a, b, c]);
        // Peers take the first member's value.
        assert_eq!(root.value(b), Some(0.25));
        assert_eq!(root.value(c), Some(0.25));

        // Press straight above the dial's center: 0.5.
        root.on_pointer_event(&PointerEvent::Down(Point::new(30., 110.)), &mut view);
        root.on_pointer_event(&PointerEvent::Up(Point::new(30., 110.)), &mut view);
        for id in [a, b, c] {
            assert_approx_eq!(f64, root.value(id).unwrap(), 0.5, epsilon = 1e-9);
        }
        assert_eq!(view.take(), vec![c, a, b]);

        // Only the source queues a value change.
        let changes: Vec<_> = drain_actions(&mut root)
            .into_iter()
            .filter(|(action, _)| matches!(action, Action::ValueChanged(_)))
            .collect();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].1, c);
    }

    #[test]
    fn overlapping_groups_stay_consistent() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let a = root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        let b = root.add(slider(0.), Rect::new(0., 50., 320., 90.));
        let c = root.add(slider(0.9), Rect::new(0., 100., 320., 140.));
        let d = root.add(slider(0.3), Rect::new(0., 150., 320., 190.));
        root.link([a, b]);
        root.link([c, d]);
        assert_eq!(root.value(d), Some(0.9));

        // Bridging the groups spreads b's value through both.
        assert_eq!(root.link([b, c]), 2);
        for id in [a, b, c, d] {
            assert_eq!(root.value(id), Some(0.));
        }

        // A press on a reaches d through b and c.
        root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view);
        root.on_pointer_event(&PointerEvent::Up(Point::new(160., 20.)), &mut view);
        for id in [a, b, c, d] {
            assert_eq!(root.value(id), Some(0.5));
        }
        assert_eq!(view.take(), vec![a, b, c, d]);

        let changes = drain_actions(&mut root)
            .into_iter()
            .filter(|(action, _)| matches!(action, Action::ValueChanged(_)))
            .count();
        assert_eq!(changes, 1);
    }

    #[test]
    fn peers_already_in_sync_are_not_refreshed() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let a = root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        let b = root.add(slider(0.), Rect::new(0., 50., 320., 90.));
        root.link([a, b]);

        assert_eq!(root.set_value(b, 0.4, &mut view), Some(true));
        assert_eq!(view.take(), vec![b, a]);
        assert_eq!(root.set_value(a, 0.4, &mut view), Some(false));
        assert!(view.is_empty());
        assert!(!root.has_pending_actions());
    }

    #[test]
    fn cancel_reverts_group() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let a = root.add(slider(0.5), Rect::new(0., 0., 320., 40.));
        let b = root.add(slider(0.5), Rect::new(0., 50., 320., 90.));
        root.link([a, b]);

        root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view);
        root.on_pointer_event(&PointerEvent::Move(Point::new(320., 20.)), &mut view);
        assert_eq!(root.value(b), Some(1.));
        view.take();

        assert_eq!(root.focus_lost(&mut view), Handled::Yes);
        assert_eq!(root.value(a), Some(0.5));
        assert_eq!(root.value(b), Some(0.5));
        assert_eq!(view.take(), vec![a, b]);
        assert_eq!(root.pointer_capture_target(), None);

        let actions = drain_actions(&mut root);
        assert_eq!(
            &actions[actions.len() - 2..],
            &[
                (Action::TrackingCancelled, a),
                (Action::ValueChanged(0.5), a)
            ]
        );

        // Nothing left to cancel.
        assert_eq!(
            root.on_pointer_event(&PointerEvent::Cancel, &mut view),
            Handled::No
        );
    }

    #[test]
    fn remove_unlinks() {
        let mut root = ControlRoot::new();
        let mut view = RefreshQueue::default();
        let a = root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        let b = root.add(slider(0.), Rect::new(0., 50., 320., 90.));
        root.link([a, b]);

        root.on_pointer_event(&PointerEvent::Down(Point::new(160., 20.)), &mut view);
        let removed = root.remove(a).unwrap();
        assert!(!removed.is_tracking());
        assert_eq!(root.pointer_capture_target(), None);
        assert!(root.links().is_empty() || root.links()[0].members() == [b]);

        view.take();
        root.set_value(b, 0.9, &mut view);
        assert_eq!(view.take(), vec![b]);
    }

    #[test]
    fn paint_draws_every_control() {
        let mut root = ControlRoot::new();
        root.add(slider(0.), Rect::new(0., 0., 320., 40.));
        root.add(
            Dial::new(Pointer::new(60.), Knob::new(60.), 0.),
            Rect::new(0., 100., 60., 160.),
        );
        let mut scene = Scene::new();
        root.paint(&mut scene);
        assert!(!scene.encoding().is_empty());
    }
}
