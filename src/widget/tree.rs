// src/widget/tree.rs
//
// Platform-neutral visual tree. `widget::build` produces it; `gui::paint` and
// `widget::text` consume it.

use crate::config::options::WidgetSize;

/// Named colours. Presenters decide the actual RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    Blue,
    Black,
    Gray,
    Green,
    Yellow,
    Red,
    Brown,
}

impl Palette {
    pub const HEADING: Palette = Palette::Blue;
    pub const TEXT: Palette = Palette::Black;
    pub const MUTED: Palette = Palette::Gray;

    /// sRGB as used by the preview.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Palette::Blue => [0x00, 0x7a, 0xff],
            Palette::Black => [0x00, 0x00, 0x00],
            Palette::Gray => [0x8e, 0x8e, 0x93],
            Palette::Green => [0x34, 0xc7, 0x59],
            Palette::Yellow => [0xff, 0xcc, 0x00],
            Palette::Red => [0xff, 0x3b, 0x30],
            Palette::Brown => [0xa2, 0x84, 0x5e],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Semibold,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f32,
    pub weight: Weight,
    pub rounded: bool,
}

impl Font {
    pub const fn system(size: f32, weight: Weight) -> Self {
        Self { size, weight, rounded: false }
    }

    pub const fn rounded(size: f32, weight: Weight) -> Self {
        Self { size, weight, rounded: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub content: String,
    pub font: Font,
    pub color: Palette,
    /// How far the text may shrink to fit, 1.0 = never.
    pub min_scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    /// Symbol name in the host's icon set (`beach.umbrella`).
    pub symbol: &'static str,
    pub font: Font,
    pub tint: Palette,
    pub resizable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacer {
    Fixed(f32),
    /// Takes whatever room is left along the stack's axis.
    Flexible,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stack {
    pub axis: Axis,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Stack(Stack),
    Text(Text),
    Image(Image),
    Spacer(Spacer),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub size: WidgetSize,
    pub root: Stack,
}

/* ---------- small builder so `build.rs` reads top-down ---------- */

impl Text {
    pub fn new(content: impl Into<String>, font: Font, color: Palette) -> Self {
        Self { content: content.into(), font, color, min_scale: 1.0 }
    }

    pub fn shrink_to(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }
}

impl Stack {
    pub fn new(axis: Axis) -> Self {
        Self { axis, children: Vec::new() }
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn text(&mut self, text: Text) {
        self.children.push(Node::Text(text));
    }

    pub fn image(&mut self, image: Image) {
        self.children.push(Node::Image(image));
    }

    pub fn spacer(&mut self, len: f32) {
        self.children.push(Node::Spacer(Spacer::Fixed(len)));
    }

    pub fn flexible(&mut self) {
        self.children.push(Node::Spacer(Spacer::Flexible));
    }

    pub fn stack(&mut self, stack: Stack) {
        self.children.push(Node::Stack(stack));
    }

    /// Every text node in document order, depth first.
    pub fn texts(&self) -> Vec<&Text> {
        let mut out = Vec::new();
        collect_texts(self, &mut out);
        out
    }
}

fn collect_texts<'a>(stack: &'a Stack, out: &mut Vec<&'a Text>) {
    for child in &stack.children {
        match child {
            Node::Text(t) => out.push(t),
            Node::Stack(s) => collect_texts(s, out),
            Node::Image(_) | Node::Spacer(_) => {}
        }
    }
}
