//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use thiserror::Error;

use crate::{
    model::{
        ClickTarget, DesktopState, DragSession, InteractionState, PointerPosition, TitlebarAction,
        WindowId, WindowRegion,
    },
    chrome::ShellChromeState,
    taskbar::{taskbar_activation, TaskbarActivation},
};

/// Key that opens the selected desktop icon.
pub const OPEN_SELECTED_ICON_KEY: &str = "Enter";

/// Whether `key` opens the currently selected desktop icon.
///
/// The view claims such a key press (prevents its default) so a focused icon button does not
/// also receive the synthesized click that would select it again.
pub fn key_opens_selected_icon(chrome: &ShellChromeState, key: &str) -> bool {
    key == OPEN_SELECTED_ICON_KEY && chrome.selected_icon.is_some()
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or reopen) a window by id.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a restored window, or restore a maximized one.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Pointer pressed somewhere on a window surface.
    WindowPointerDown {
        /// Window that received the pointer-down.
        window_id: WindowId,
        /// Part of the window that was hit.
        region: WindowRegion,
        /// Pointer position relative to the desktop.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// A title bar control button was clicked.
    TitlebarButton {
        /// Window owning the title bar.
        window_id: WindowId,
        /// Control that was clicked.
        action: TitlebarAction,
    },
    /// A taskbar button was clicked.
    ActivateTaskbarButton {
        /// Window associated with the button.
        window_id: WindowId,
    },
    /// Any click that bubbled up to the document.
    DocumentClick {
        /// What the click landed on.
        target: ClickTarget,
    },
    /// A desktop icon was double-clicked.
    DesktopIconDoubleClick {
        /// Window the icon opens.
        window_id: WindowId,
    },
    /// A key was pressed anywhere on the page.
    KeyDown {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// A start menu entry was clicked.
    StartMenuItem {
        /// Window the entry opens.
        window_id: WindowId,
    },
    /// The start menu's shutdown entry was clicked.
    Shutdown,
    /// The shutdown overlay was clicked.
    DismissShutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Report a virtual page view to the analytics collaborator.
    RecordPageView {
        /// Virtual page path (`/about`, or `/` for the empty desktop).
        path: String,
        /// Page title reported alongside the path.
        title: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing an unregistered window).
pub enum ReducerError {
    /// The target window id has no registered surface.
    #[error("window `{0}` not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// registered. State is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            require_window(state, &window_id)?;
            effects.extend(state.manager.open(&window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            require_window(state, &window_id)?;
            end_drag_for(interaction, &window_id);
            effects.extend(state.manager.close(&window_id));
        }
        DesktopAction::MinimizeWindow { window_id } => {
            require_window(state, &window_id)?;
            end_drag_for(interaction, &window_id);
            state.manager.minimize(&window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            require_window(state, &window_id)?;
            end_drag_for(interaction, &window_id);
            state.manager.toggle_maximize(&window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            require_window(state, &window_id)?;
            state.manager.focus(&window_id);
        }
        DesktopAction::WindowPointerDown {
            window_id,
            region,
            pointer,
        } => {
            require_window(state, &window_id)?;
            if region == WindowRegion::DragHandle {
                begin_drag(state, interaction, &window_id, pointer);
            }
            state.manager.focus(&window_id);
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                state.manager.move_window(
                    &session.window_id,
                    pointer.x - session.grab_offset.x,
                    pointer.y - session.grab_offset.y,
                );
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::TitlebarButton { window_id, action } => {
            let action = match action {
                TitlebarAction::Close => DesktopAction::CloseWindow { window_id },
                TitlebarAction::Minimize => DesktopAction::MinimizeWindow { window_id },
                TitlebarAction::Maximize => DesktopAction::ToggleMaximize { window_id },
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
        DesktopAction::ActivateTaskbarButton { window_id } => {
            require_window(state, &window_id)?;
            match taskbar_activation(&state.manager, &window_id) {
                Some(TaskbarActivation::Restore) => {
                    effects.extend(state.manager.open(&window_id));
                }
                Some(TaskbarActivation::Minimize) => {
                    end_drag_for(interaction, &window_id);
                    state.manager.minimize(&window_id);
                }
                Some(TaskbarActivation::Focus) => {
                    state.manager.focus(&window_id);
                }
                None => {}
            }
        }
        DesktopAction::DocumentClick { target } => match target {
            ClickTarget::DesktopIcon(window_id) => {
                state.chrome.select_icon(window_id);
                state.chrome.close_start_menu();
            }
            ClickTarget::StartButton => {}
            ClickTarget::StartMenu => {
                state.chrome.clear_selection();
            }
            ClickTarget::Elsewhere => {
                state.chrome.clear_selection();
                state.chrome.close_start_menu();
            }
        },
        DesktopAction::DesktopIconDoubleClick { window_id } => {
            require_window(state, &window_id)?;
            state.chrome.clear_selection();
            effects.extend(state.manager.open(&window_id));
        }
        DesktopAction::KeyDown { key } => {
            if key_opens_selected_icon(&state.chrome, &key) {
                if let Some(window_id) = state.chrome.selected_icon.clone() {
                    require_window(state, &window_id)?;
                    state.chrome.clear_selection();
                    effects.extend(state.manager.open(&window_id));
                }
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.chrome.toggle_start_menu();
        }
        DesktopAction::CloseStartMenu => {
            state.chrome.close_start_menu();
        }
        DesktopAction::StartMenuItem { window_id } => {
            require_window(state, &window_id)?;
            state.chrome.close_start_menu();
            effects.extend(state.manager.open(&window_id));
        }
        DesktopAction::Shutdown => {
            state.chrome.show_shutdown();
        }
        DesktopAction::DismissShutdown => {
            state.chrome.dismiss_shutdown();
        }
    }

    Ok(effects)
}

fn require_window(state: &DesktopState, window_id: &WindowId) -> Result<(), ReducerError> {
    if state.manager.contains(window_id) {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id.clone()))
    }
}

fn begin_drag(
    state: &DesktopState,
    interaction: &mut InteractionState,
    window_id: &WindowId,
    pointer: PointerPosition,
) {
    let Some(record) = state.manager.record(window_id) else {
        return;
    };
    if !record.open || record.maximized {
        return;
    }
    let Some(rect) = state.manager.rect(window_id) else {
        return;
    };

    interaction.dragging = Some(DragSession {
        window_id: window_id.clone(),
        grab_offset: PointerPosition {
            x: pointer.x - rect.x,
            y: pointer.y - rect.y,
        },
    });
}

fn end_drag_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == *window_id)
    {
        interaction.dragging = None;
    }
}
