/// Window state handed to `Content` when it is mounted or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentContext {
    focused: bool,
}

impl ContentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    /// Whether the hosting window currently receives input.
    pub const fn focused(&self) -> bool {
        self.focused
    }
}
