#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    /// Activation without a pointer, e.g. Space/Enter on a focused control.
    Keyboard,
}

/// Activation of a toggler. Delivered unchanged to every `on_click` handler.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl ClickEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn keyboard() -> Self {
        Self {
            kind: PointerKind::Keyboard,
            ..Default::default()
        }
    }
}
