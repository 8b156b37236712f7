/// Window-system-independent input events.
///
/// Window adapters translate their native events into `InputEvent`s and feed
/// them to `Viewer::tick`. Only the inputs the viewer reacts to are modeled.

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move forward
    W,
    /// Strafe left
    A,
    /// Move backward
    S,
    /// Strafe right
    D,
    /// Quit
    Q,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key went down
    KeyPressed(Key),
    /// Mouse button went down at `(x, y)`; `over_ui` when the cursor is over
    /// a GUI panel
    MouseButtonPressed { button: MouseButton, x: i32, y: i32, over_ui: bool },
    MouseButtonReleased { button: MouseButton },
    /// Cursor moved to `(x, y)`
    MouseMoved { x: i32, y: i32 },
    /// Window close request
    Quit,
}

/// What the caller should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}
