use std::time::Instant;

use crate::action::{self, SetCoordinates};
use crate::autoscroll::EdgeAutoScroller;
use crate::config;
use crate::data::Layout;
use crate::gui::{self, region, scroll::ScrollAreaHost};
use crate::utils::logger::Logger;

extern crate eframe;
extern crate serde_json;

pub struct Model {
    layout: Layout,
    regions: Vec<region::State>,
    history: action::History,
    scroller: EdgeAutoScroller<ScrollAreaHost>,
    logger: &'static Logger,
    load_err: Option<config::Error>,
    focused: bool,
    log_open: bool,
}

fn new_scroller(layout: &Layout) -> EdgeAutoScroller<ScrollAreaHost> {
    EdgeAutoScroller::new(ScrollAreaHost::default(), layout.auto_scroll).on_scroll(|applied, vertical| {
        log::trace!("auto scroll {} by {applied}", if vertical { "y" } else { "x" });
    })
}

fn new_regions(layout: &Layout) -> Vec<region::State> {
    layout
        .regions
        .iter()
        .map(|r| region::State::new(r, layout.constraints))
        .collect()
}

impl Model {
    pub fn new(_cc: &eframe::CreationContext<'_>, layout: Layout, logger: &'static Logger) -> Self {
        Self {
            regions: new_regions(&layout),
            history: action::History::new(),
            scroller: new_scroller(&layout),
            layout,
            logger,
            load_err: None,
            focused: true,
            log_open: false,
        }
    }

    fn replace_layout(&mut self, layout: Layout) {
        self.regions = new_regions(&layout);
        self.scroller = new_scroller(&layout);
        self.history = action::History::new();
        self.layout = layout;
    }

    fn open_layout(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("layout", &["json"]).pick_file() else {
            return;
        };
        match config::load_layout(&path) {
            Ok(layout) => {
                self.replace_layout(layout);
                self.load_err = None;
            }
            Err(e) => {
                log::error!("{e}");
                self.load_err = Some(e);
            }
        }
    }

    fn save_layout(&self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("layout", &["json"])
            .set_file_name("layout.json")
            .save_file()
        else {
            return;
        };
        let res = serde_json::to_string_pretty(&self.layout)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        match res {
            Ok(()) => log::info!("saved layout to {}", path.display()),
            Err(e) => log::error!("failed to save {}: {e}", path.display()),
        }
    }

    fn sync_regions(&mut self) {
        for (state, params) in self.regions.iter_mut().zip(self.layout.regions.iter()) {
            state.sync(params);
        }
    }
    pub fn undo(&mut self) {
        match self.history.undo(&mut self.layout) {
            Some(Err(e)) => log::error!("{e}"),
            Some(Ok(())) => self.sync_regions(),
            None => {}
        }
    }
    pub fn redo(&mut self) {
        match self.history.redo(&mut self.layout) {
            Some(Err(e)) => log::error!("{e}"),
            Some(Ok(())) => self.sync_regions(),
            None => {}
        }
    }

    /// Turns finished gestures into history entries.
    fn commit_gestures(&mut self) {
        for (index, state) in self.regions.iter_mut().enumerate() {
            for event in state.take_events() {
                let Some(action) = SetCoordinates::from_stop(&self.layout, index, &event) else {
                    continue;
                };
                log::info!("{action}");
                if let Err(e) = self.history.apply(&mut self.layout, action) {
                    log::error!("{e}");
                }
            }
        }
    }

    fn cancel_gestures(&mut self) {
        for state in self.regions.iter_mut() {
            state.cancel();
        }
        self.scroller.blur();
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo = ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND.plus(egui::Modifiers::SHIFT),
                egui::Key::Z,
            ))
        });
        if redo {
            self.redo();
        }
        let undo = ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z))
        });
        if undo {
            self.undo();
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::panel::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("timeline_dnr");
                if ui.button("Open layout…").clicked() {
                    self.open_layout();
                }
                if ui.button("Save layout…").clicked() {
                    self.save_layout();
                }
                if ui.add_enabled(self.history.can_undo(), egui::Button::new("Undo")).clicked() {
                    self.undo();
                }
                if ui.add_enabled(self.history.can_redo(), egui::Button::new("Redo")).clicked() {
                    self.redo();
                }
                ui.toggle_value(&mut self.log_open, "Log");
                if let Some(err) = &self.load_err {
                    ui.colored_label(egui::Color32::RED, err.to_string());
                }
            });
        });
    }

    fn show_log(&mut self, ctx: &egui::Context) {
        let logger = self.logger;
        egui::panel::SidePanel::right("log")
            .default_width(400.)
            .resizable(true)
            .show_animated(ctx, self.log_open, |ui| {
                egui::ScrollArea::vertical().id_source("log_scroll").show(ui, |ui| {
                    for (line, level) in logger.lines() {
                        ui.colored_label(Logger::get_color(level), line);
                    }
                });
            });
    }

    fn show_timeline(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = self.layout.canvas;
            let regions = &mut self.regions;
            let output = self.scroller.host_mut().scroll_area("timeline").show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(canvas.width, canvas.height),
                    egui::Sense::hover(),
                );
                draw_grid(ui, rect);
                for state in regions.iter_mut() {
                    ui.add(region::Model::new(state, rect.min));
                }
            });
            self.scroller.host_mut().update(&output);
        });
    }
}

fn draw_grid(ui: &egui::Ui, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    let stroke = ui.style().visuals.widgets.noninteractive.bg_stroke;
    let mut y = rect.top() + gui::TRACK_HEIGHT;
    while y < rect.bottom() {
        painter.hline(rect.x_range(), y, stroke);
        y += gui::TRACK_HEIGHT;
    }
    let mut sec = 0;
    loop {
        let x = rect.left() + sec as f32 * gui::PIXELS_PER_SEC_DEFAULT;
        if x > rect.right() {
            break;
        }
        painter.vline(x, rect.y_range(), stroke);
        painter.text(
            egui::pos2(x + 2.0, rect.top()),
            egui::Align2::LEFT_TOP,
            format!("{sec}s"),
            egui::FontId::monospace(10.0),
            ui.style().visuals.weak_text_color(),
        );
        sec += 1;
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let focused = ctx.input(|i| i.focused);
        if self.focused && !focused {
            log::debug!("window lost focus, cancelling gestures");
            self.cancel_gestures();
        }
        self.focused = focused;
        self.handle_shortcuts(ctx);

        self.show_header(ctx);
        self.show_log(ctx);
        self.show_timeline(ctx);

        self.commit_gestures();

        let active = self.regions.iter().any(region::State::is_active);
        self.scroller.set_active(active);
        if active {
            let now = Instant::now();
            // egui has one pointer stream; it feeds whichever event kind the layout asks for
            if let Some(p) = ctx.input(|i| i.pointer.hover_pos()) {
                self.scroller
                    .pointer(gui::to_point(p), self.layout.auto_scroll.event_type, now);
            }
            self.scroller.advance(now);
        }
        if active || self.scroller.host().has_pending() {
            ctx.request_repaint();
        }
    }
}
