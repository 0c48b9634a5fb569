/// Whether a drag gesture is currently feeding points into the drawing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging => "Dragging",
        }
    }
}
