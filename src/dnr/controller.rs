use super::clamp;
use super::element::Element;
use super::gesture::{GestureState, Mode};
use super::listener::{DnrListener, DragData, ResizeData, ResizeEdge};
use crate::data::{Constraints, Coordinates, Delta, Point, Size};
use crate::event::{DocumentListeners, ListenerKind, PointerButton, PointerEvent};
use crate::transform::Translation;

/// Moves and resizes one element from pointer input.
///
/// The controller keeps the element's [`Coordinates`] itself and treats the [`Element`]
/// as a visual layer it writes to after every computed update. Handlers called while
/// the element is not mounted do nothing.
pub struct DragResizeController<E, L, D = ()>
where
    E: Element,
    L: DnrListener,
    D: DocumentListeners,
{
    element: E,
    listener: L,
    document: D,
    constraints: Constraints,
    coords: Coordinates,
    gesture: GestureState,
}

impl<E: Element, L: DnrListener> DragResizeController<E, L> {
    pub fn new(element: E, listener: L) -> Self {
        Self::with_document(element, listener, ())
    }
}

impl<E, L, D> DragResizeController<E, L, D>
where
    E: Element,
    L: DnrListener,
    D: DocumentListeners,
{
    pub fn with_document(element: E, listener: L, document: D) -> Self {
        let mut res = Self {
            element,
            listener,
            document,
            constraints: Constraints::default(),
            coords: Coordinates::default(),
            gesture: GestureState::default(),
        };
        if let Some(size) = res.element.box_size() {
            res.coords = Coordinates::from_origin_size(res.live_origin(), size);
        }
        res
    }
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }
    /// Constraints are fixed while a gesture runs; returns `false` if they were not applied.
    pub fn set_constraints(&mut self, constraints: Constraints) -> bool {
        if self.is_active() {
            log::debug!("constraints changed during a gesture, ignored");
            return false;
        }
        self.constraints = constraints;
        true
    }
    pub fn coords(&self) -> Coordinates {
        self.coords
    }
    /// Places the element from the host side, e.g. after undo. Ignored during a gesture.
    pub fn set_coords(&mut self, coords: Coordinates) {
        if self.is_active() {
            return;
        }
        self.coords = coords;
        self.element.set_transform(coords.origin().into());
        self.element.set_size(coords.size());
    }
    pub fn mode(&self) -> Mode {
        self.gesture.mode
    }
    pub fn is_active(&self) -> bool {
        self.gesture.is_active()
    }
    pub fn element(&self) -> &E {
        &self.element
    }
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
    pub fn listener(&self) -> &L {
        &self.listener
    }
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
    pub fn document(&self) -> &D {
        &self.document
    }

    fn live_origin(&self) -> Point {
        Translation::parse_or_zero(self.element.transform().as_deref()).into()
    }
    fn scale(&self) -> f32 {
        if self.constraints.scale > 0.0 {
            self.constraints.scale
        } else {
            1.0
        }
    }
    fn drag_data(&self) -> DragData {
        DragData {
            coords: self.coords,
            size: self.coords.size(),
            delta: self.gesture.last_delta,
        }
    }
    fn resize_data(&self, edge: ResizeEdge) -> ResizeData {
        ResizeData {
            coords: self.coords,
            size: self.coords.size(),
            delta: self.gesture.last_delta,
            edge,
        }
    }

    /// Starts a gesture. `resize_handle` tells which handle the press landed on, if any.
    /// Returns whether a gesture started.
    pub fn pointer_down(&mut self, event: &PointerEvent, resize_handle: Option<ResizeEdge>) -> bool {
        if self.is_active() {
            return false;
        }
        if event.button != PointerButton::Primary && !self.constraints.any_button {
            log::trace!("ignored press with {:?}", event.button);
            return false;
        }
        let Some(size) = self.element.box_size() else {
            log::trace!("press on an element that is not mounted");
            return false;
        };
        let mode = match resize_handle {
            Some(edge) if self.constraints.can_resize => Mode::Resizing(edge),
            _ if self.constraints.can_drag => Mode::Dragging,
            _ => return false,
        };
        self.coords = Coordinates::from_origin_size(self.live_origin(), size);
        self.gesture = GestureState::begin(mode, event.pos, size);
        self.document.listen(ListenerKind::PointerMove);
        self.document.listen(ListenerKind::PointerUp);
        log::debug!("{:?} started at {:?}", mode, self.coords);
        match mode {
            Mode::Dragging => {
                let data = self.drag_data();
                self.listener.on_drag_start(&data);
            }
            Mode::Resizing(edge) => {
                let data = self.resize_data(edge);
                self.listener.on_resize_start(&data);
            }
            Mode::Idle => {}
        }
        true
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        if !self.is_active() {
            return;
        }
        let Some(size) = self.element.box_size() else {
            log::trace!("element went away during a gesture");
            return;
        };
        let current = self.live_origin();
        let raw = self.gesture.advance(event.pos).scaled(self.scale());
        match self.gesture.mode {
            Mode::Idle => {}
            Mode::Dragging => {
                let d = self.constraints.drag_axis.filter(raw);
                let applied = clamp::clamp_translation(d, current, size, &self.constraints.bounds);
                let origin = current + applied;
                self.element.set_transform(origin.into());
                self.coords = Coordinates::from_origin_size(origin, size);
                self.gesture.last_delta = applied;
                let data = self.drag_data();
                self.listener.on_drag(&data);
            }
            Mode::Resizing(edge) => {
                let d = self.constraints.resize_axis.filter(raw);
                let (new_size, shift) = clamp::resize_from_edge(size, d, edge, &self.constraints.size);
                let origin = current + shift;
                if !shift.is_zero() {
                    self.element.set_transform(origin.into());
                }
                self.element.set_size(new_size);
                self.coords = Coordinates::from_origin_size(origin, new_size);
                self.gesture.last_delta = size_change(size, new_size);
                let data = self.resize_data(edge);
                self.listener.on_resize(&data);
            }
        }
    }

    pub fn pointer_up(&mut self, _event: &PointerEvent) {
        self.finish();
    }

    /// Ends the gesture as if the pointer was released, e.g. when the window loses focus.
    pub fn cancel(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        let mode = self.gesture.mode;
        match mode {
            Mode::Idle => {}
            Mode::Dragging => {
                let data = self.drag_data();
                self.listener.on_drag_stop(&data);
            }
            Mode::Resizing(edge) => {
                log::debug!("resized from {:?} to {:?}", self.gesture.origin_size, self.coords.size());
                let data = self.resize_data(edge);
                self.listener.on_resize_stop(&data);
            }
        }
        if mode != Mode::Idle {
            log::debug!("{:?} finished at {:?}", mode, self.coords);
        }
        self.detach();
    }

    /// Drops any gesture without notifying and detaches the document listeners.
    /// Safe to call any number of times.
    pub fn unmount(&mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        self.gesture = GestureState::default();
        self.document.unlisten(ListenerKind::PointerMove);
        self.document.unlisten(ListenerKind::PointerUp);
    }
}

fn size_change(old: Size, new: Size) -> Delta {
    Delta::new(new.width - old.width, new.height - old.height)
}

impl<E, L, D> Drop for DragResizeController<E, L, D>
where
    E: Element,
    L: DnrListener,
    D: DocumentListeners,
{
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod test {
    use super::super::element::StyledElement;
    use super::super::listener::DnrEvent;
    use super::*;
    use crate::data::{Axis, Bounds, SizeLimits};
    use crate::event::ListenerSet;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn element(x: f32, y: f32, w: f32, h: f32) -> StyledElement {
        StyledElement::mounted(Translation::new(x, y), Size::new(w, h))
    }
    fn controller(c: Constraints) -> DragResizeController<StyledElement, Vec<DnrEvent>> {
        DragResizeController::new(element(0.0, 0.0, 100.0, 100.0), Vec::new()).with_constraints(c)
    }
    fn drags(events: &[DnrEvent]) -> Vec<DragData> {
        events
            .iter()
            .filter_map(|e| match e {
                DnrEvent::Drag(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
    fn resizes(events: &[DnrEvent]) -> Vec<ResizeData> {
        events
            .iter()
            .filter_map(|e| match e {
                DnrEvent::Resize(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn basic_drag() {
        let mut c = controller(Constraints::default());
        assert!(c.pointer_down(&PointerEvent::primary(10.0, 10.0), None));
        assert_eq!(c.mode(), Mode::Dragging);
        c.pointer_move(&PointerEvent::primary(60.0, 10.0));
        assert_eq!(c.element().style().unwrap().transform, "translate(50px, 0px)");
        let d = drags(c.listener());
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].delta, Delta::new(50.0, 0.0));
        assert_eq!(d[0].coords, Coordinates::new(50.0, 0.0, 150.0, 100.0));
        match c.listener()[0] {
            DnrEvent::DragStart(s) => {
                assert_eq!(s.delta, Delta::ZERO);
                assert_eq!(s.coords, Coordinates::new(0.0, 0.0, 100.0, 100.0));
            }
            e => panic!("unexpected first event {e:?}"),
        }
    }

    #[test]
    fn bounded_drag_cannot_move_right() {
        let mut c = controller(Constraints {
            bounds: Bounds {
                left: Some(0.0),
                right: Some(80.0),
                ..Default::default()
            },
            ..Default::default()
        });
        c.pointer_down(&PointerEvent::primary(10.0, 10.0), None);
        c.pointer_move(&PointerEvent::primary(110.0, 10.0));
        let d = drags(c.listener());
        assert_eq!(d.len(), 1);
        assert!(d[0].delta.x <= 0.0);
        assert_eq!(c.coords().start_x, 0.0);
    }

    #[test]
    fn bounds_hold_for_any_sequence() {
        let bounds = Bounds {
            left: Some(0.0),
            top: Some(-20.0),
            right: Some(500.0),
            bottom: Some(300.0),
        };
        let mut c = DragResizeController::new(element(10.0, 10.0, 50.0, 40.0), Vec::new())
            .with_constraints(Constraints {
                bounds,
                ..Default::default()
            });
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        // deterministic pseudo random walk
        let mut seed: u32 = 12345;
        let mut pos = Point::ZERO;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let dx = ((seed >> 16) % 201) as f32 - 100.0;
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let dy = ((seed >> 16) % 201) as f32 - 100.0;
            pos = pos + Delta::new(dx, dy);
            c.pointer_move(&PointerEvent::new(pos, PointerButton::Primary));
            let r = c.coords();
            assert!(r.start_x >= 0.0 && r.end_x <= 500.0, "{r:?}");
            assert!(r.start_y >= -20.0 && r.end_y <= 300.0, "{r:?}");
        }
    }

    #[test]
    fn deltas_accumulate_per_tick() {
        let mut c = controller(Constraints::default());
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        for x in [10.0, 20.0, 35.0] {
            c.pointer_move(&PointerEvent::primary(x, 0.0));
        }
        let d = drags(c.listener());
        let xs: Vec<f32> = d.iter().map(|d| d.delta.x).collect();
        assert_eq!(xs, vec![10.0, 10.0, 15.0]);
        assert_eq!(c.coords().start_x, 35.0);
    }

    #[test]
    fn drag_axis_and_scale() {
        let mut c = controller(Constraints {
            drag_axis: Axis::Y,
            scale: 2.0,
            ..Default::default()
        });
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        c.pointer_move(&PointerEvent::primary(40.0, 50.0));
        assert_eq!(c.coords().origin(), Point::new(0.0, 25.0));
    }

    #[test]
    fn size_clamp() {
        let mut c = DragResizeController::new(element(0.0, 0.0, 150.0, 50.0), Vec::new()).with_constraints(
            Constraints {
                size: SizeLimits {
                    min_width: Some(100.0),
                    max_width: Some(300.0),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert!(c.pointer_down(&PointerEvent::primary(150.0, 50.0), Some(ResizeEdge::BOTTOM_RIGHT)));
        for i in 1..=5 {
            c.pointer_move(&PointerEvent::primary(150.0 + 100.0 * i as f32, 50.0));
        }
        let r = resizes(c.listener());
        assert_eq!(r.len(), 5);
        assert!(r.iter().all(|r| r.size.width <= 300.0 && r.size.width >= 100.0));
        assert!(r.iter().all(|r| r.edge == ResizeEdge::BOTTOM_RIGHT));
        assert_eq!(c.element().style().unwrap().width, 300.0);
        c.pointer_up(&PointerEvent::primary(650.0, 50.0));
        match c.listener().last() {
            Some(DnrEvent::ResizeStop(stop)) => assert_eq!(stop.size.width, 300.0),
            e => panic!("unexpected last event {e:?}"),
        }
        // shrink far below the minimum
        c.pointer_down(&PointerEvent::primary(300.0, 50.0), Some(ResizeEdge::BOTTOM_RIGHT));
        c.pointer_move(&PointerEvent::primary(-1000.0, 50.0));
        assert_eq!(c.coords().width(), 100.0);
    }

    #[test]
    fn resize_from_top_left_moves_origin() {
        let mut c = DragResizeController::new(element(100.0, 100.0, 100.0, 100.0), Vec::new());
        c.pointer_down(&PointerEvent::primary(100.0, 100.0), Some(ResizeEdge::TOP_LEFT));
        c.pointer_move(&PointerEvent::primary(80.0, 90.0));
        assert_eq!(c.coords(), Coordinates::new(80.0, 90.0, 200.0, 200.0));
        assert_eq!(c.element().style().unwrap().transform, "translate(80px, 90px)");
        let r = resizes(c.listener());
        assert_eq!(r[0].delta, Delta::new(20.0, 10.0));
    }

    #[test]
    fn resize_axis_locks_height() {
        let mut c = controller(Constraints {
            resize_axis: Axis::X,
            ..Default::default()
        });
        c.pointer_down(&PointerEvent::primary(100.0, 100.0), Some(ResizeEdge::BOTTOM_RIGHT));
        c.pointer_move(&PointerEvent::primary(120.0, 150.0));
        assert_eq!(c.coords().size(), Size::new(120.0, 100.0));
    }

    #[test]
    fn handle_press_drags_when_resizing_disabled() {
        let mut c = controller(Constraints {
            can_resize: false,
            ..Default::default()
        });
        assert!(c.pointer_down(&PointerEvent::primary(0.0, 0.0), Some(ResizeEdge::BOTTOM_RIGHT)));
        assert_eq!(c.mode(), Mode::Dragging);
        c.unmount();
        let mut c = controller(Constraints {
            can_resize: false,
            can_drag: false,
            ..Default::default()
        });
        assert!(!c.pointer_down(&PointerEvent::primary(0.0, 0.0), None));
        assert!(c.listener().is_empty());
    }

    #[test]
    fn secondary_button_needs_permission() {
        let press = PointerEvent::new(Point::ZERO, PointerButton::Secondary);
        let mut c = controller(Constraints::default());
        assert!(!c.pointer_down(&press, None));
        let mut c = controller(Constraints {
            any_button: true,
            ..Default::default()
        });
        assert!(c.pointer_down(&press, None));
    }

    #[test]
    fn unmounted_element_is_ignored() {
        let mut c = DragResizeController::new(StyledElement::default(), Vec::new());
        assert!(!c.pointer_down(&PointerEvent::primary(0.0, 0.0), None));
        let mut c = controller(Constraints::default());
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        c.element_mut().unmount();
        c.pointer_move(&PointerEvent::primary(30.0, 0.0));
        assert_eq!(drags(c.listener()).len(), 0);
    }

    #[test]
    fn reads_live_transform_each_gesture() {
        let mut c = controller(Constraints::default());
        c.element_mut().set_transform_text("matrix(1, 0, 0, 1, 30, 40)");
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        c.pointer_move(&PointerEvent::primary(5.0, 5.0));
        assert_eq!(c.coords().origin(), Point::new(35.0, 45.0));
        c.pointer_up(&PointerEvent::primary(5.0, 5.0));

        c.element_mut().set_transform_text("rotate(10deg)");
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        c.pointer_move(&PointerEvent::primary(5.0, 0.0));
        assert_eq!(c.coords().origin(), Point::new(5.0, 0.0));
    }

    #[test]
    fn teardown_is_idempotent() {
        let doc = Rc::new(RefCell::new(ListenerSet::new()));
        let mut c = DragResizeController::with_document(
            element(0.0, 0.0, 10.0, 10.0),
            Vec::new(),
            Rc::clone(&doc),
        );
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        assert!(doc.borrow().contains(ListenerKind::PointerMove));
        assert!(doc.borrow().contains(ListenerKind::PointerUp));
        c.unmount();
        c.unmount();
        assert!(doc.borrow().is_empty());
        c.pointer_move(&PointerEvent::primary(50.0, 0.0));
        c.pointer_up(&PointerEvent::primary(50.0, 0.0));
        assert_eq!(c.listener().len(), 1);
        assert!(!c.is_active());
    }

    #[test]
    fn drop_detaches_listeners() {
        let doc = Rc::new(RefCell::new(ListenerSet::new()));
        {
            let mut c = DragResizeController::with_document(
                element(0.0, 0.0, 10.0, 10.0),
                (),
                Rc::clone(&doc),
            );
            c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
            assert_eq!(doc.borrow().len(), 2);
        }
        assert!(doc.borrow().is_empty());
    }

    #[test]
    fn cancel_reports_stop() {
        let mut c = controller(Constraints::default());
        c.pointer_down(&PointerEvent::primary(0.0, 0.0), None);
        c.pointer_move(&PointerEvent::primary(20.0, 0.0));
        c.cancel();
        c.cancel();
        let stops: Vec<_> = c.listener().iter().filter(|e| e.is_stop()).collect();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].coords().start_x, 20.0);
        assert_eq!(c.mode(), Mode::Idle);
    }

    #[test]
    fn set_coords_writes_visual_layer() {
        let mut c = controller(Constraints::default());
        c.set_coords(Coordinates::new(5.0, 6.0, 55.0, 16.0));
        let style = c.element().style().unwrap();
        assert_eq!(style.transform, "translate(5px, 6px)");
        assert_eq!((style.width, style.height), (50.0, 10.0));
    }
}
