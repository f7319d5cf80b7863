//! Application-wide actions: terminal input, the view stack and the clock

use std::time::Duration;

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Untranslated key press, consumed by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Pointer position in terminal cells, used for strip hover
    MouseMoved { column: u16, row: u16 },
    /// New terminal size in cells
    Resize { width: u16, height: u16 },
    /// Pop the top view; closing the last one quits
    Close,
    /// Stop the worker and leave the terminal
    Quit,
    /// Open a view on top; opening the view already on top closes it
    PushView(Box<dyn View>),
    /// Drop every view and show this one
    ReplaceView(Box<dyn View>),
    /// Time since the previous tick; advances every animation controller
    Tick(Duration),
}
