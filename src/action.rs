//! The definitions of un/redo-able gesture commits.
//! Gestures only touch the layout when they stop; each stop becomes one action.

use crate::data::{Coordinates, Layout};
use crate::dnr::DnrEvent;

#[derive(Debug)]
pub enum Error {
    /// (length of the container, actual index)
    InvalidIndex(usize, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(len, index) => write!(
                f,
                "Invalid Index to the Container,length was {} but the index was {}",
                len, index
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize,
}

#[derive(Clone, Debug)]
pub struct SetCoordinates {
    index: usize,
    label: String,
    kind: GestureKind,
    from: Coordinates,
    to: Coordinates,
}

impl SetCoordinates {
    pub fn new(index: usize, label: impl Into<String>, kind: GestureKind, from: Coordinates, to: Coordinates) -> Self {
        Self {
            index,
            label: label.into(),
            kind,
            from,
            to,
        }
    }
    /// Builds the commit for a stop event of the region at `index`.
    /// Other events and gestures that changed nothing give `None`.
    pub fn from_stop(layout: &Layout, index: usize, event: &DnrEvent) -> Option<Self> {
        let kind = match event {
            DnrEvent::DragStop(_) => GestureKind::Move,
            DnrEvent::ResizeStop(_) => GestureKind::Resize,
            _ => return None,
        };
        let region = layout.regions.get(index)?;
        let to = event.coords();
        (region.coordinates != to).then(|| Self::new(index, region.label.clone(), kind, region.coordinates, to))
    }

    fn set(&self, target: &mut Layout, coords: Coordinates) -> Result<(), Error> {
        let len = target.regions.len();
        let region = target
            .regions
            .get_mut(self.index)
            .ok_or(Error::InvalidIndex(len, self.index))?;
        region.coordinates = coords;
        Ok(())
    }
}

impl std::fmt::Display for SetCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.kind {
            GestureKind::Move => "Move",
            GestureKind::Resize => "Resize",
        };
        write!(f, "{} region {}", verb, self.label)
    }
}

impl undo::Action for SetCoordinates {
    type Target = Layout;
    type Output = ();
    type Error = Error;
    fn apply(&mut self, target: &mut Layout) -> undo::Result<Self> {
        self.set(target, self.to)
    }
    fn undo(&mut self, target: &mut Layout) -> undo::Result<Self> {
        self.set(target, self.from)
    }
}

pub type History = undo::History<SetCoordinates>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{Delta, Size};
    use crate::dnr::{DragData, ResizeData, ResizeEdge};

    fn stop(coords: Coordinates) -> DnrEvent {
        DnrEvent::DragStop(DragData {
            coords,
            size: coords.size(),
            delta: Delta::ZERO,
        })
    }

    #[test]
    fn undo_redo_move() {
        let mut layout = Layout::default();
        let before = layout.regions[0].coordinates;
        let after = before.translate(Delta::new(40.0, 0.0));
        let action = SetCoordinates::from_stop(&layout, 0, &stop(after)).unwrap();
        assert_eq!(action.to_string(), "Move region region1");
        let mut history = History::new();
        history.apply(&mut layout, action).unwrap();
        assert_eq!(layout.regions[0].coordinates, after);
        assert!(history.can_undo());
        history.undo(&mut layout).unwrap().unwrap();
        assert_eq!(layout.regions[0].coordinates, before);
        history.redo(&mut layout).unwrap().unwrap();
        assert_eq!(layout.regions[0].coordinates, after);
    }

    #[test]
    fn unchanged_gesture_is_not_recorded() {
        let layout = Layout::default();
        let same = layout.regions[1].coordinates;
        assert!(SetCoordinates::from_stop(&layout, 1, &stop(same)).is_none());
        let drag = DnrEvent::Drag(DragData {
            coords: same.translate(Delta::new(1.0, 0.0)),
            size: same.size(),
            delta: Delta::new(1.0, 0.0),
        });
        assert!(SetCoordinates::from_stop(&layout, 1, &drag).is_none());
    }

    #[test]
    fn resize_label_and_bad_index() {
        let mut layout = Layout::default();
        let c = layout.regions[2].coordinates;
        let resized = Coordinates::from_origin_size(c.origin(), Size::new(10.0, 10.0));
        let event = DnrEvent::ResizeStop(ResizeData {
            coords: resized,
            size: resized.size(),
            delta: Delta::ZERO,
            edge: ResizeEdge::BOTTOM_RIGHT,
        });
        let action = SetCoordinates::from_stop(&layout, 2, &event).unwrap();
        assert_eq!(action.to_string(), "Resize region region3");

        let mut history = History::new();
        let bad = SetCoordinates::new(9, "ghost", GestureKind::Move, c, resized);
        assert!(matches!(history.apply(&mut layout, bad), Err(Error::InvalidIndex(3, 9))));
    }
}
