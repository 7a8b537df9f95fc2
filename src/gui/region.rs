use crate::data::{self, Constraints};
use crate::dnr::{DnrEvent, DragResizeController, ResizeEdge, StyledElement};
use crate::event::{PointerButton, PointerEvent};
use crate::gui;
use crate::transform::Translation;

const GRIP_SIZE: f32 = 12.0;

pub type RegionController = DragResizeController<StyledElement, Vec<DnrEvent>>;

pub struct State {
    pub label: String,
    controller: RegionController,
    /// canvas-relative pointer last fed to the controller
    last_pointer: Option<data::Point>,
}

impl State {
    pub fn new(params: &data::RegionLayout, constraints: Constraints) -> Self {
        let c = params.coordinates;
        let element = StyledElement::mounted(c.origin().into(), c.size());
        Self {
            label: params.label.clone(),
            controller: DragResizeController::new(element, Vec::new())
                .with_constraints(constraints),
            last_pointer: None,
        }
    }
    /// Re-applies coordinates from the layout, e.g. after undo.
    pub fn sync(&mut self, params: &data::RegionLayout) {
        self.controller.set_coords(params.coordinates);
    }
    pub fn coords(&self) -> data::Coordinates {
        self.controller.coords()
    }
    pub fn is_active(&self) -> bool {
        self.controller.is_active()
    }
    pub fn cancel(&mut self) {
        self.controller.cancel();
        self.last_pointer = None;
    }
    pub fn press(&mut self, event: &PointerEvent, handle: Option<ResizeEdge>) -> bool {
        let started = self.controller.pointer_down(event, handle);
        if started {
            self.last_pointer = Some(event.pos);
        }
        started
    }
    /// Feeds a canvas-relative pointer position. Positions seen on the previous call are skipped.
    pub fn follow(&mut self, pos: data::Point) {
        if !self.is_active() || self.last_pointer == Some(pos) {
            return;
        }
        self.last_pointer = Some(pos);
        self.controller.pointer_move(&PointerEvent::new(pos, PointerButton::Primary));
    }
    pub fn release(&mut self, pos: data::Point) {
        self.controller.pointer_up(&PointerEvent::new(pos, PointerButton::Primary));
        self.last_pointer = None;
    }
    pub fn take_events(&mut self) -> Vec<DnrEvent> {
        std::mem::take(self.controller.listener_mut())
    }
}

fn pressed_button(response: &egui::Response) -> PointerButton {
    if response.drag_started_by(egui::PointerButton::Primary) {
        PointerButton::Primary
    } else if response.drag_started_by(egui::PointerButton::Secondary) {
        PointerButton::Secondary
    } else if response.drag_started_by(egui::PointerButton::Middle) {
        PointerButton::Middle
    } else {
        PointerButton::Other(0)
    }
}

/// One region drawn on the timeline canvas whose top-left corner is at `origin`.
pub struct Model<'a> {
    state: &'a mut State,
    origin: egui::Pos2,
}

impl<'a> Model<'a> {
    pub fn new(state: &'a mut State, origin: egui::Pos2) -> Self {
        Self { state, origin }
    }

    fn react(&mut self, ui: &egui::Ui, body: &egui::Response, grip: &egui::Response) {
        let origin = self.origin;
        let to_canvas = |p: egui::Pos2| gui::to_point(egui::pos2(p.x - origin.x, p.y - origin.y));
        let (current, pressed_at) =
            ui.input(|i| (i.pointer.interact_pos(), i.pointer.press_origin()));
        let state = &mut *self.state;

        // at most one of them starts a drag in a frame
        for (response, handle) in [(grip, Some(ResizeEdge::BOTTOM_RIGHT)), (body, None)] {
            if !state.is_active() && response.drag_started() {
                if let Some(p) = pressed_at.or(current) {
                    state.press(&PointerEvent::new(to_canvas(p), pressed_button(response)), handle);
                }
            }
        }
        if !state.is_active() {
            return;
        }
        // the content moves under a still pointer while auto-scrolling,
        // so the canvas-relative position changes with the scroll offset
        if let Some(p) = current {
            state.follow(to_canvas(p));
        }
        if body.drag_released() || grip.drag_released() {
            state.release(current.map_or(data::Point::ZERO, to_canvas));
        }
    }

    fn screen_rect(&self) -> Option<egui::Rect> {
        let style = self.state.controller.element().style()?;
        let t = Translation::parse_or_zero(Some(style.transform.as_str()));
        Some(egui::Rect::from_min_size(
            self.origin + egui::vec2(t.x, t.y),
            egui::vec2(style.width, style.height),
        ))
    }
}

impl<'a> egui::Widget for Model<'a> {
    fn ui(mut self, ui: &mut egui::Ui) -> egui::Response {
        let Some(rect) = self.screen_rect() else {
            return ui.allocate_response(egui::Vec2::ZERO, egui::Sense::hover());
        };
        let id = ui.id().with(&self.state.label);
        let grip_rect =
            egui::Rect::from_min_max(rect.right_bottom() - egui::vec2(GRIP_SIZE, GRIP_SIZE), rect.right_bottom());
        // egui routes overlapping input to the widget added last, so the grip goes after the body
        let body = ui
            .interact(rect, id.with("body"), egui::Sense::click_and_drag())
            .on_hover_cursor(egui::CursorIcon::Grab);
        let grip = ui
            .interact(grip_rect, id.with("grip"), egui::Sense::click_and_drag())
            .on_hover_cursor(egui::CursorIcon::ResizeSouthEast);

        self.react(ui, &body, &grip);

        // paint where the element ended up after this frame's input
        let rect = self.screen_rect().unwrap_or(rect);
        let visuals = ui.style().visuals.clone();
        let painter = ui.painter();
        let fill = if self.state.is_active() {
            visuals.selection.bg_fill
        } else {
            visuals.faint_bg_color
        };
        painter.rect_filled(rect, 4.0, fill);
        painter.rect_stroke(rect, 4.0, visuals.widgets.noninteractive.fg_stroke);
        let corner = rect.right_bottom();
        for step in [4.0, 8.0] {
            painter.line_segment(
                [corner - egui::vec2(step, 2.0), corner - egui::vec2(2.0, step)],
                visuals.widgets.inactive.fg_stroke,
            );
        }
        let c = self.state.coords();
        let text = format!(
            "{}  {:.2}s - {:.2}s",
            self.state.label,
            gui::pix_to_sec(c.start_x),
            gui::pix_to_sec(c.end_x)
        );
        painter.text(
            rect.left_top() + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::proportional(12.0),
            visuals.text_color(),
        );
        if self.state.is_active() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }
        body.union(grip)
    }
}
