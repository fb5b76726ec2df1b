//! Demo state: two tree selects sharing one data set.

use std::io;

use crossterm::style::Color;
use log::{debug, info};
use treeselect::{
    Event, Key, MatchMode, Rect, Selection, TreeNode, TreeSelect, TreeSelectConfig,
};

use crate::terminal::Terminal;

const FIELD_WIDTH: u16 = 38;
const FIELD_TOP: u16 = 4;

/// One labelled control with the value it reports to.
struct Field {
    title: &'static str,
    widget: TreeSelect,
    value: Selection,
    /// Area covered by the last rendered view.
    drawn: Rect,
}

impl Field {
    fn new(title: &'static str, config: TreeSelectConfig, data: Vec<TreeNode>) -> Self {
        let value = Selection::empty(config.selection_mode());
        let widget = TreeSelect::with_data(config, data).on_value_change(move |value| {
            info!("{} changed: {:?}", title, value.values());
        });
        Self {
            title,
            widget,
            value,
            drawn: Rect::default(),
        }
    }

    fn dispatch(&mut self, event: &Event) -> bool {
        let response = self.widget.handle_event(event, &self.value);
        if let Some(value) = response.value {
            self.value = value;
        }
        if let Some(open) = response.open_changed {
            debug!("{} {}", self.title, if open { "opened" } else { "closed" });
        }
        response.result.is_handled()
    }

    fn status(&self) -> String {
        let labels = self.widget.selected_labels(&self.value);
        if labels.is_empty() {
            format!("{}: (none)", self.title)
        } else {
            format!("{}: {}", self.title, labels.join(", "))
        }
    }
}

pub struct App {
    fields: Vec<Field>,
    focus: usize,
    quit: bool,
}

impl App {
    pub fn new(data: Vec<TreeNode>, match_mode: MatchMode) -> Self {
        let single = TreeSelectConfig::new()
            .placeholder("Pick a technology")
            .match_mode(match_mode);
        let multiple = TreeSelectConfig::new()
            .placeholder("Pick a stack")
            .multiple()
            .match_mode(match_mode)
            .max_height(8);

        Self {
            fields: vec![
                Field::new("Single", single, data.clone()),
                Field::new("Multiple", multiple, data),
            ],
            focus: 0,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, event: &Event) {
        match *event {
            Event::Key { key, modifiers } => {
                let field = &mut self.fields[self.focus];
                if modifiers.ctrl && matches!(key, Key::Char('c') | Key::Char('q')) {
                    self.quit = true;
                } else if key == Key::Tab || key == Key::BackTab {
                    field.widget.close();
                    self.focus = (self.focus + 1) % self.fields.len();
                } else if !field.dispatch(event) && key == Key::Char('q') && !field.widget.is_open()
                {
                    self.quit = true;
                }
            }
            Event::Click { x, y, .. } => {
                // Every field sees the click so the others close their overlays.
                for (index, field) in self.fields.iter_mut().enumerate() {
                    let inside = field.drawn.contains(x, y);
                    field.dispatch(event);
                    if inside {
                        self.focus = index;
                    }
                }
            }
            Event::Scroll { .. } => {
                self.fields[self.focus].dispatch(event);
            }
        }
    }

    pub fn draw(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let (width, height) = terminal.size()?;
        terminal.clear()?;
        terminal.text(2, 1, "Tree select demo", Color::Blue, true)?;
        terminal.text(
            2,
            2,
            "Tab: switch  Enter: open/select  Esc: close  q: quit",
            Color::Grey,
            false,
        )?;

        let list_height = height.saturating_sub(FIELD_TOP + 4);
        let mut views = Vec::with_capacity(self.fields.len());
        for (index, field) in self.fields.iter_mut().enumerate() {
            let x = 2 + index as u16 * (FIELD_WIDTH + 4);
            let width = FIELD_WIDTH.min(width.saturating_sub(x));
            let area = Rect::new(x, FIELD_TOP + 1, width, list_height);
            let view = field.widget.render(area, &field.value);
            field.drawn = Rect::new(area.x, area.y, area.width, view.height());
            views.push((index, view));
        }

        for (index, field) in self.fields.iter().enumerate() {
            let x = 2 + index as u16 * (FIELD_WIDTH + 4);
            let color = if index == self.focus {
                Color::Cyan
            } else {
                Color::Grey
            };
            terminal.text(x, FIELD_TOP, field.title, color, index == self.focus)?;
            let status_y = height.saturating_sub(2) + index as u16;
            terminal.text(2, status_y, &field.status(), Color::White, false)?;
        }

        // The focused overlay goes last so it draws on top.
        views.sort_by_key(|(index, _)| *index == self.focus);
        for (index, view) in &views {
            terminal.view(view, *index == self.focus)?;
        }
        terminal.flush()
    }
}
