//! Event handling for the tree select widget.

use log::trace;

use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::input::TextEditResult;
use crate::selection::{Selection, SelectionMode};
use crate::summary::Summary;

use super::hit::HitTarget;
use super::state::TreeSelect;

/// Rows moved by PageUp/PageDown when the viewport has no height yet.
const PAGE_FALLBACK: usize = 10;

/// Whether an event was used by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    #[default]
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub result: EventResult,
    /// The new selection, when the event changed it.
    pub value: Option<Selection>,
    /// The new overlay state, when the event opened or closed it.
    pub open_changed: Option<bool>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed() -> Self {
        Self {
            result: EventResult::Consumed,
            ..Default::default()
        }
    }

    fn with_value(mut self, value: Option<Selection>) -> Self {
        self.value = value;
        self
    }
}

impl TreeSelect {
    /// Apply one input event against the caller's current selection.
    ///
    /// A disabled control ignores everything. Selection changes are also
    /// delivered to the value-change callback.
    pub fn handle_event(&mut self, event: &Event, current: &Selection) -> Response {
        if self.config.disabled {
            return Response::ignored();
        }

        let was_open = self.open;
        let mut response = match *event {
            Event::Key { key, modifiers } => {
                trace!("tree select key: {:?} {:?}", key, modifiers);
                if self.open {
                    self.on_key_open(key, modifiers, current)
                } else {
                    self.on_key_closed(key, modifiers, current)
                }
            }
            Event::Click { x, y, button } => self.on_click(x, y, button, current),
            Event::Scroll { x, y, delta } => self.on_scroll(x, y, delta),
        };

        if self.open != was_open {
            response.open_changed = Some(self.open);
        }
        response
    }

    fn on_key_closed(&mut self, key: Key, modifiers: Modifiers, current: &Selection) -> Response {
        if !modifiers.none() && !modifiers.shift {
            return Response::ignored();
        }
        match key {
            Key::Enter | Key::Char(' ') | Key::Down => {
                self.open_at_selection(current);
                Response::consumed()
            }
            Key::Delete => Response::consumed().with_value(self.clear(current)),
            Key::Backspace if self.mode() == SelectionMode::Multiple => {
                // Removes the last chip shown, in document order.
                let last = match self.summary(current) {
                    Summary::Chips { chips, .. } => chips.last().map(|c| c.value.clone()),
                    _ => None,
                };
                match last {
                    Some(value) => Response::consumed().with_value(self.remove_item(&value, current)),
                    None => Response::consumed(),
                }
            }
            _ => Response::ignored(),
        }
    }

    fn on_key_open(&mut self, key: Key, modifiers: Modifiers, current: &Selection) -> Response {
        let page = match self.viewport.height() {
            0 => PAGE_FALLBACK,
            h => h,
        } as isize;

        if !modifiers.ctrl && !modifiers.alt {
            match key {
                Key::Escape => {
                    self.close();
                    return Response::consumed();
                }
                Key::Up => return self.navigate(|w| w.move_cursor(-1)),
                Key::Down => return self.navigate(|w| w.move_cursor(1)),
                Key::PageUp => return self.navigate(|w| w.move_cursor(-page)),
                Key::PageDown => return self.navigate(|w| w.move_cursor(page)),
                Key::Home => return self.navigate(|w| {
                    w.set_cursor(0);
                }),
                Key::End => return self.navigate(|w| {
                    w.set_cursor(usize::MAX);
                }),
                Key::Right => return self.expand_or_descend(),
                Key::Left => return self.collapse_or_ascend(),
                Key::Enter => return self.activate_cursor(current),
                Key::Char(' ') if !self.config.searchable => return self.activate_cursor(current),
                _ => {}
            }
        }

        if !self.config.searchable {
            return Response::ignored();
        }
        match self.search.handle_key(key, modifiers) {
            TextEditResult::Changed => {
                self.search_changed();
                Response::consumed()
            }
            TextEditResult::Handled => Response::consumed(),
            TextEditResult::Ignored => Response::ignored(),
        }
    }

    fn navigate(&mut self, f: impl FnOnce(&mut Self)) -> Response {
        f(self);
        Response::consumed()
    }

    fn expand_or_descend(&mut self) -> Response {
        let Some(row) = self.cursor_row().cloned() else {
            return Response::ignored();
        };
        if row.has_children && !row.is_expanded {
            self.expand(&row.id);
        } else if row.is_expanded {
            self.cursor_to_first_child();
        }
        Response::consumed()
    }

    fn collapse_or_ascend(&mut self) -> Response {
        let Some(row) = self.cursor_row().cloned() else {
            return Response::ignored();
        };
        if row.is_expanded {
            self.collapse(&row.id);
        } else {
            self.cursor_to_parent();
        }
        Response::consumed()
    }

    fn activate_cursor(&mut self, current: &Selection) -> Response {
        match self.cursor {
            Some(index) => Response::consumed().with_value(self.select_row(index, current)),
            None => Response::consumed(),
        }
    }

    fn on_click(&mut self, x: u16, y: u16, button: MouseButton, current: &Selection) -> Response {
        if button != MouseButton::Left {
            return Response::ignored();
        }
        let Some(target) = self.hits.hit_test(x, y).cloned() else {
            // Click outside: the overlay closes like a popover would.
            if self.close() {
                return Response::consumed();
            }
            return Response::ignored();
        };
        trace!("tree select click: {:?}", target);

        match target {
            HitTarget::Trigger => {
                if self.open {
                    self.close();
                } else {
                    self.open_at_selection(current);
                }
                Response::consumed()
            }
            HitTarget::Clear => Response::consumed().with_value(self.clear(current)),
            HitTarget::RemoveChip(value) => {
                Response::consumed().with_value(self.remove_item(&value, current))
            }
            HitTarget::Chevron(id) => {
                self.toggle_expand(&id);
                Response::consumed()
            }
            HitTarget::Row(id) => {
                let Some(index) = self.rows.iter().position(|r| r.id == id) else {
                    // The row went away since the last render.
                    return Response::consumed();
                };
                self.set_cursor(index);
                Response::consumed().with_value(self.select_row(index, current))
            }
            HitTarget::Search | HitTarget::List => Response::consumed(),
        }
    }

    fn on_scroll(&mut self, x: u16, y: u16, delta: i16) -> Response {
        if !self.open {
            return Response::ignored();
        }
        match self.hits.hit_test(x, y) {
            Some(HitTarget::Row(_)) | Some(HitTarget::Chevron(_)) | Some(HitTarget::List) => {
                self.viewport.scroll_by(isize::from(delta), self.rows.len());
                Response::consumed()
            }
            _ => Response::ignored(),
        }
    }
}
