use super::container::{ScrollAxis, ScrollHost};
use super::speed::edge_velocity;
use super::timer::Interval;
use crate::data::{AutoScrollSetting, Delta, Point, ScrollEventType};
use crate::event::{DocumentListeners, ListenerKind};
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
struct AxisTimer {
    interval: Interval,
    step: f32,
}

fn axis_index(axis: ScrollAxis) -> usize {
    match axis {
        ScrollAxis::Horizontal => 0,
        ScrollAxis::Vertical => 1,
    }
}

const AXES: [ScrollAxis; 2] = [ScrollAxis::Horizontal, ScrollAxis::Vertical];

pub type ScrollCallback = Box<dyn FnMut(f32, bool)>;

/// Scrolls the containers around an anchor while a drag runs near their edges.
///
/// Time is driven by the host: call [`EdgeAutoScroller::advance`] with the current instant
/// (e.g. once per frame) and every elapsed interval applies one scroll step.
pub struct EdgeAutoScroller<H, D = ()>
where
    H: ScrollHost,
    D: DocumentListeners,
{
    host: H,
    document: D,
    setting: AutoScrollSetting,
    on_scroll: Option<ScrollCallback>,
    active: bool,
    /// resolved scroll targets, horizontal then vertical
    targets: Option<[H::Id; 2]>,
    timers: [Option<AxisTimer>; 2],
    last_pointer: Option<Point>,
}

impl<H: ScrollHost> EdgeAutoScroller<H> {
    pub fn new(host: H, setting: AutoScrollSetting) -> Self {
        Self::with_document(host, setting, ())
    }
}

impl<H, D> EdgeAutoScroller<H, D>
where
    H: ScrollHost,
    D: DocumentListeners,
{
    pub fn with_document(host: H, setting: AutoScrollSetting, document: D) -> Self {
        Self {
            host,
            document,
            setting,
            on_scroll: None,
            active: false,
            targets: None,
            timers: [None, None],
            last_pointer: None,
        }
    }
    /// `f(applied_pixels, is_vertical)` runs after every scroll step.
    pub fn on_scroll(mut self, f: impl FnMut(f32, bool) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
    pub fn setting(&self) -> &AutoScrollSetting {
        &self.setting
    }
    pub fn set_setting(&mut self, setting: AutoScrollSetting) {
        let was_active = self.active;
        if was_active {
            self.teardown();
        }
        self.setting = setting;
        if was_active {
            self.activate();
        }
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    /// Whether a timer is running on `axis`.
    pub fn is_scrolling(&self, axis: ScrollAxis) -> bool {
        self.timers[axis_index(axis)].is_some()
    }
    pub fn target(&self, axis: ScrollAxis) -> Option<H::Id> {
        self.targets.map(|t| t[axis_index(axis)])
    }

    fn listener_kind(&self) -> ListenerKind {
        match self.setting.event_type {
            ScrollEventType::Drag => ListenerKind::DragOver,
            ScrollEventType::Mouse => ListenerKind::MouseMove,
        }
    }

    /// Follows the host's `active` flag. Calling it repeatedly with the same value does nothing.
    pub fn set_active(&mut self, active: bool) {
        match (self.active, active) {
            (false, true) => self.activate(),
            (true, false) => self.teardown(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        let root = self.host.root();
        let resolve = |axis| self.host.nearest_scrollable(axis).unwrap_or(root);
        let targets = [resolve(ScrollAxis::Horizontal), resolve(ScrollAxis::Vertical)];
        log::debug!("auto scroll active on {:?}", targets);
        self.targets = Some(targets);
        self.active = true;
        self.last_pointer = None;
        let kind = self.listener_kind();
        self.document.listen(kind);
    }

    /// Stops both timers and detaches the listener. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.active {
            log::debug!("auto scroll stopped");
        }
        self.active = false;
        self.timers = [None, None];
        self.targets = None;
        self.last_pointer = None;
        self.document.unlisten(ListenerKind::DragOver);
        self.document.unlisten(ListenerKind::MouseMove);
    }

    /// The window lost focus.
    pub fn blur(&mut self) {
        self.teardown();
    }

    /// Feeds a document event. Events of the other kind, repeated coordinates and
    /// events while inactive are ignored.
    pub fn pointer(&mut self, pos: Point, kind: ScrollEventType, now: Instant) {
        if !self.active || kind != self.setting.event_type || self.last_pointer == Some(pos) {
            return;
        }
        self.last_pointer = Some(pos);
        let Some(targets) = self.targets else {
            return;
        };
        for axis in AXES {
            let i = axis_index(axis);
            let step = self.host.metrics(targets[i]).and_then(|m| {
                edge_velocity(
                    pos,
                    &m.rect,
                    axis,
                    &self.setting.thresholds,
                    self.setting.within_bounds,
                )
            });
            self.timers[i] = step.map(|step| AxisTimer {
                interval: Interval::start(now, self.setting.interval),
                step,
            });
        }
    }

    /// Runs every scroll step that became due up to `now` and returns the total applied.
    pub fn advance(&mut self, now: Instant) -> Delta {
        let mut total = Delta::ZERO;
        let Some(targets) = self.targets else {
            return total;
        };
        for axis in AXES {
            let i = axis_index(axis);
            let Some(timer) = self.timers[i].as_mut() else {
                continue;
            };
            let step = timer.step;
            for _ in 0..timer.interval.due(now) {
                let applied = self.host.metrics(targets[i]).map_or(0.0, |m| m.clamp_delta(axis, step));
                if applied == 0.0 {
                    // reached the end of the scroll range
                    self.timers[i] = None;
                    break;
                }
                if let Some(m) = self.host.metrics(targets[i]) {
                    self.host.set_scroll_offset(targets[i], axis, m.offset(axis) + applied);
                }
                match axis {
                    ScrollAxis::Horizontal => total.x += applied,
                    ScrollAxis::Vertical => total.y += applied,
                }
                if let Some(f) = self.on_scroll.as_mut() {
                    f(applied, axis.is_vertical());
                }
            }
        }
        total
    }
}

impl<H, D> Drop for EdgeAutoScroller<H, D>
where
    H: ScrollHost,
    D: DocumentListeners,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
