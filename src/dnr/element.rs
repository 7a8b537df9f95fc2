use crate::data::Size;
use crate::transform::Translation;

/// The visual layer of a draggable element.
/// `box_size` returns `None` while nothing is mounted; the controller then ignores input.
pub trait Element {
    fn box_size(&self) -> Option<Size>;
    /// Transform text currently applied, if any.
    fn transform(&self) -> Option<String>;
    fn set_transform(&mut self, t: Translation);
    fn set_size(&mut self, size: Size);
}

/// Inline style of a mounted [`StyledElement`].
#[derive(Clone, Debug, PartialEq)]
pub struct InlineStyle {
    pub transform: String,
    pub width: f32,
    pub height: f32,
}

/// In-memory element that stores what a renderer would put into an inline style.
#[derive(Clone, Debug, Default)]
pub struct StyledElement {
    style: Option<InlineStyle>,
}

impl StyledElement {
    pub fn mounted(origin: Translation, size: Size) -> Self {
        let mut e = Self::default();
        e.mount(origin, size);
        e
    }
    pub fn mount(&mut self, origin: Translation, size: Size) {
        self.style = Some(InlineStyle {
            transform: origin.to_string(),
            width: size.width,
            height: size.height,
        });
    }
    pub fn unmount(&mut self) {
        self.style = None;
    }
    pub fn style(&self) -> Option<&InlineStyle> {
        self.style.as_ref()
    }
    /// Overwrites the transform text as it is, like an external style change would.
    pub fn set_transform_text(&mut self, text: impl Into<String>) {
        if let Some(s) = self.style.as_mut() {
            s.transform = text.into();
        }
    }
}

impl Element for StyledElement {
    fn box_size(&self) -> Option<Size> {
        self.style.as_ref().map(|s| Size::new(s.width, s.height))
    }
    fn transform(&self) -> Option<String> {
        self.style.as_ref().map(|s| s.transform.clone())
    }
    fn set_transform(&mut self, t: Translation) {
        if let Some(s) = self.style.as_mut() {
            s.transform = t.to_string();
        }
    }
    fn set_size(&mut self, size: Size) {
        if let Some(s) = self.style.as_mut() {
            s.width = size.width;
            s.height = size.height;
        }
    }
}
