//! Input Module - UI events consumed by the page
//!
//! [`UiEvent`] is the complete set of discrete inputs a [`Page`](crate::engine::Page)
//! reacts to. [`TerminalInput`] bridges crossterm's event system to it so a
//! carousel can run inside a terminal.
//!
//! # API
//!
//! - `UiEvent` - pointer, hover, click, transition-end and resize events
//! - `TerminalInput::translate` - convert one crossterm event (with a hit test)

use crossterm::event::{
    Event as CrosstermEvent, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};

use crate::types::{ElementId, PointerSource};

/// Discrete input delivered to a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Mouse down / touch start on `target`. `x` is the page coordinate.
    PointerDown {
        target: ElementId,
        source: PointerSource,
        x: f64,
    },
    /// Document-level pointer movement.
    PointerMove { source: PointerSource, x: f64 },
    /// Document-level mouse up / touch end.
    PointerUp { source: PointerSource },
    /// Gesture aborted by the platform (touch cancel, lost capture).
    PointerCancel { source: PointerSource },
    /// Pointer now rests over `target` (`None`: outside the document).
    PointerOver { target: Option<ElementId> },
    Click { target: ElementId },
    /// A transform transition finished on `target`.
    TransitionEnd { target: ElementId },
    /// Viewport width changed.
    Resize { width: u32 },
}

// =============================================================================
// CROSSTERM BRIDGE
// =============================================================================

/// Stateful crossterm-to-[`UiEvent`] translator.
///
/// Terminal cells are mapped to pixels with a fixed cell width. Only the
/// left button drives gestures; a click is emitted on release over the
/// element that was pressed.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    cell_width: f64,
    hovered: Option<ElementId>,
    pressed: Option<ElementId>,
}

impl TerminalInput {
    pub fn new(cell_width: f64) -> Self {
        Self {
            cell_width,
            hovered: None,
            pressed: None,
        }
    }

    /// Pixel x of terminal column `column`.
    pub fn column_to_px(&self, column: u16) -> f64 {
        column as f64 * self.cell_width
    }

    /// Viewport width in pixels for a terminal `columns` wide.
    pub fn viewport_px(&self, columns: u16) -> u32 {
        (columns as f64 * self.cell_width).round() as u32
    }

    /// Translate one crossterm event. `hit_test` maps a cell to the deepest
    /// element drawn there.
    pub fn translate<F>(&mut self, event: &CrosstermEvent, hit_test: F) -> Vec<UiEvent>
    where
        F: Fn(u16, u16) -> Option<ElementId>,
    {
        match event {
            CrosstermEvent::Mouse(mouse) => self.translate_mouse(mouse, hit_test),
            CrosstermEvent::Resize(columns, _) => vec![UiEvent::Resize {
                width: self.viewport_px(*columns),
            }],
            _ => Vec::new(),
        }
    }

    fn translate_mouse<F>(&mut self, event: &CrosstermMouseEvent, hit_test: F) -> Vec<UiEvent>
    where
        F: Fn(u16, u16) -> Option<ElementId>,
    {
        let x = self.column_to_px(event.column);
        let hit = hit_test(event.column, event.row);
        let mut out = Vec::new();

        match event.kind {
            MouseEventKind::Down(CrosstermMouseButton::Left) => {
                self.pressed = hit;
                if let Some(target) = hit {
                    out.push(UiEvent::PointerDown {
                        target,
                        source: PointerSource::Mouse,
                        x,
                    });
                }
            }
            MouseEventKind::Drag(CrosstermMouseButton::Left) => {
                out.push(UiEvent::PointerMove {
                    source: PointerSource::Mouse,
                    x,
                });
            }
            MouseEventKind::Up(CrosstermMouseButton::Left) => {
                out.push(UiEvent::PointerUp {
                    source: PointerSource::Mouse,
                });
                if let (Some(pressed), Some(released)) = (self.pressed.take(), hit) {
                    if pressed == released {
                        out.push(UiEvent::Click { target: released });
                    }
                }
            }
            MouseEventKind::Moved => {
                if hit != self.hovered {
                    self.hovered = hit;
                    out.push(UiEvent::PointerOver { target: hit });
                }
            }
            _ => {}
        }
        out
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(8.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
