//! Drag, resize and edge auto-scroll gestures for timeline-based editors.
//!
//! [`dnr::DragResizeController`] turns pointer input into clamped moves and resizes of an element,
//! [`autoscroll::EdgeAutoScroller`] scrolls the surrounding containers while the pointer rests near
//! their edges. Both are host agnostic; [`gui`] and [`app`] wire them into an egui timeline.

extern crate eframe;
extern crate egui;
extern crate serde_json;

pub mod action;
pub mod app;
pub mod autoscroll;
pub mod cli;
pub mod config;
pub mod data;
pub mod dnr;
pub mod event;
pub mod gui;
pub mod transform;
pub mod utils;
