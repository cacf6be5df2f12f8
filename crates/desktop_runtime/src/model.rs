use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::chrome::ShellChromeState;
pub use crate::window_manager::WindowManager;

pub const DEFAULT_WINDOW_WIDTH: i32 = 420;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

/// Stable logical window identifier (`"about"`, `"projects"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opaque key for a registered window surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceHandle(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Moves the origin to `(x, y)`, clamping both coordinates to the desktop's top-left corner.
    pub fn moved_to_clamped(self, x: i32, y: i32) -> Self {
        Self {
            x: x.max(0),
            y: y.max(0),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 48,
            y: 48,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Pointer coordinates relative to the desktop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    /// Pointer position relative to the window origin when the drag began.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

/// Region of a window surface that received a pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRegion {
    /// The title bar area marked as a drag handle.
    DragHandle,
    /// A button embedded in the window (title bar controls included).
    Control,
    /// Anything else inside the window.
    Body,
}

/// Title bar button actions, keyed by the `data-action` tag on the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlebarAction {
    Close,
    Minimize,
    Maximize,
}

impl TitlebarAction {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "close" => Some(Self::Close),
            "minimize" => Some(Self::Minimize),
            "maximize" => Some(Self::Maximize),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

/// What a document-level click landed on, as far as shell chrome cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A desktop icon pointing at the given window.
    DesktopIcon(WindowId),
    /// The start button (normally swallowed before reaching the document handler).
    StartButton,
    /// Anywhere inside the open start menu.
    StartMenu,
    /// Anything else.
    Elsewhere,
}

/// The whole desktop shell state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub manager: WindowManager,
    pub chrome: ShellChromeState,
}

impl DesktopState {
    pub fn new(manager: WindowManager) -> Self {
        Self {
            manager,
            chrome: ShellChromeState::default(),
        }
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.manager.active_window()
    }
}
