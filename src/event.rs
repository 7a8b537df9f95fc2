//! Input events fed by hosts, and the document-level listener registry
//! the gesture components attach to while they are active.

use crate::data::Point;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pos: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(pos: Point, button: PointerButton) -> Self {
        Self { pos, button }
    }
    pub fn primary(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
    DragOver,
    MouseMove,
}

/// Where document-level listeners get attached. Detaching something that is not
/// attached must be harmless, since every teardown path detaches unconditionally.
pub trait DocumentListeners {
    fn listen(&mut self, kind: ListenerKind);
    fn unlisten(&mut self, kind: ListenerKind);
}

/// For hosts that route events by asking the components whether they are active.
impl DocumentListeners for () {
    fn listen(&mut self, _kind: ListenerKind) {}
    fn unlisten(&mut self, _kind: ListenerKind) {}
}

/// Keeps track of the attached listeners.
#[derive(Debug, Default)]
pub struct ListenerSet {
    attached: BTreeSet<ListenerKind>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
    pub fn len(&self) -> usize {
        self.attached.len()
    }
}

impl DocumentListeners for ListenerSet {
    fn listen(&mut self, kind: ListenerKind) {
        self.attached.insert(kind);
    }
    fn unlisten(&mut self, kind: ListenerKind) {
        self.attached.remove(&kind);
    }
}

/// A registry shared by several components of the same document.
impl<T: DocumentListeners> DocumentListeners for Rc<RefCell<T>> {
    fn listen(&mut self, kind: ListenerKind) {
        self.borrow_mut().listen(kind)
    }
    fn unlisten(&mut self, kind: ListenerKind) {
        self.borrow_mut().unlisten(kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn unlisten_is_idempotent() {
        let mut set = ListenerSet::new();
        set.listen(ListenerKind::PointerMove);
        set.listen(ListenerKind::PointerMove);
        assert_eq!(set.len(), 1);
        set.unlisten(ListenerKind::PointerMove);
        set.unlisten(ListenerKind::PointerMove);
        set.unlisten(ListenerKind::DragOver);
        assert!(set.is_empty());
    }
    #[test]
    fn shared_registry() {
        let shared = Rc::new(RefCell::new(ListenerSet::new()));
        let mut a = Rc::clone(&shared);
        a.listen(ListenerKind::MouseMove);
        assert!(shared.borrow().contains(ListenerKind::MouseMove));
    }
}
