//! Tree select rendering.
//!
//! Rendering produces a plain [`View`]: one [`Line`] per terminal row, each
//! a list of styled spans, plus the hit regions used to resolve clicks on
//! the next event. Drawing the view is up to the host.

use crate::selection::{Selection, SelectionMode};
use crate::summary::Summary;
use crate::text::{display_width, pad_to_width, truncate_to_width};

use super::hit::{HitTarget, Rect};
use super::state::{TreeSelect, VisibleRow};

const CHEVRON_EXPANDED: &str = "▾ ";
const CHEVRON_COLLAPSED: &str = "▸ ";
const CHEVRON_NONE: &str = "  ";
const INDENT: &str = "  ";
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";
const CHECK_MARK: &str = "✓";
const CLEAR: &str = "×";
const DROPDOWN: &str = "▾";
const SCROLL_THUMB: &str = "█";
const SCROLL_TRACK: &str = "│";
/// Longest chip label before truncation, in cells.
const CHIP_MAX_WIDTH: usize = 16;

/// Semantic color of a span; the host maps roles to its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Text,
    Muted,
    Primary,
    Accent,
    Match,
    Disabled,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Role,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One rendered terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    /// The cursor is on this row.
    pub highlighted: bool,
    /// The row's value is selected.
    pub selected: bool,
}

impl Line {
    fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            ..Default::default()
        }
    }

    /// The row's text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Rendered widget, top line first, positioned at `area`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub area: Rect,
    pub lines: Vec<Line>,
}

impl View {
    /// Number of terminal rows used.
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Plain text of every line.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }
}

impl TreeSelect {
    /// Render into `area` for the caller's current selection.
    ///
    /// The closed control takes the first row. When open, the search field
    /// and up to `max_height` option rows follow, clipped to `area`.
    pub fn render(&mut self, area: Rect, current: &Selection) -> View {
        self.hits.clear();
        let mut view = View {
            area,
            lines: Vec::new(),
        };
        if area.width == 0 || area.height == 0 {
            return view;
        }

        view.lines.push(self.render_trigger(area, current));
        if !self.open {
            return view;
        }

        let mut y = area.y.saturating_add(1);
        if self.config.searchable && y < area.bottom() {
            view.lines.push(self.render_search(area.width));
            self.hits
                .register(HitTarget::Search, Rect::new(area.x, y, area.width, 1));
            y += 1;
        }

        let available = usize::from(area.bottom().saturating_sub(y));
        let height = usize::from(self.config.max_height).min(available);
        // Only re-follow the cursor when the height changes, so wheel
        // scrolling is not undone by the next frame.
        let resized = self.viewport.height() != height;
        self.viewport.set_height(height, self.rows.len());
        if resized {
            self.scroll_to_cursor();
        }
        if height == 0 {
            return view;
        }

        if self.rows.is_empty() {
            let text = truncate_to_width("No results", usize::from(area.width));
            view.lines.push(Line::new(vec![Span::new(text, Role::Muted)]));
            return view;
        }

        let range = self.viewport.range(self.rows.len());
        let list_height = range.len() as u16;
        self.hits.register(
            HitTarget::List,
            Rect::new(area.x, y, area.width, list_height),
        );

        let scrollbar = self.viewport.needs_scrollbar(self.rows.len());
        let content_width = if scrollbar {
            area.width.saturating_sub(1)
        } else {
            area.width
        };
        let thumb = self.viewport.thumb(self.rows.len());
        let selected = current.as_set();

        for (offset, index) in range.enumerate() {
            let row_y = y + offset as u16;
            let row = &self.rows[index];
            let is_selected = selected.contains(row.value.as_str());
            let mut line = render_row(row, is_selected, self.mode(), usize::from(content_width));
            line.highlighted = self.cursor == Some(index);
            line.selected = is_selected;

            if scrollbar {
                let on_thumb =
                    thumb.is_some_and(|(start, len)| offset >= start && offset < start + len);
                let glyph = if on_thumb { SCROLL_THUMB } else { SCROLL_TRACK };
                line.spans.push(Span::new(glyph, Role::Muted));
            }

            let chevron_x = area
                .x
                .saturating_add((INDENT.len() * usize::from(row.depth)) as u16);
            let chevron_id = row.has_children.then(|| row.id.clone());
            let row_id = row.id.clone();
            view.lines.push(line);

            self.hits.register(
                HitTarget::Row(row_id),
                Rect::new(area.x, row_y, content_width, 1),
            );
            if let Some(id) = chevron_id
                && chevron_x < area.x.saturating_add(content_width)
            {
                self.hits
                    .register(HitTarget::Chevron(id), Rect::new(chevron_x, row_y, 2, 1));
            }
        }

        view
    }

    fn render_trigger(&mut self, area: Rect, current: &Selection) -> Line {
        let width = usize::from(area.width);
        let disabled = self.config.disabled;
        let summary = self.summary(current);
        let has_value = !summary.is_placeholder();

        let mut right = Vec::new();
        if has_value && !disabled {
            right.push(Span::new(format!(" {}", CLEAR), Role::Muted));
        }
        right.push(Span::new(format!(" {}", DROPDOWN), Role::Muted));
        let right_width: usize = right.iter().map(|s| display_width(&s.text)).sum();
        let left_width = width.saturating_sub(right_width);

        if !disabled {
            self.hits
                .register(HitTarget::Trigger, Rect::new(area.x, area.y, area.width, 1));
        }

        let mut spans = Vec::new();
        match summary {
            Summary::Placeholder(text) => {
                spans.push(Span::new(truncate_to_width(&text, left_width), Role::Muted));
            }
            Summary::Single(label) => {
                let role = if disabled { Role::Disabled } else { Role::Text };
                spans.push(Span::new(truncate_to_width(&label, left_width), role));
            }
            Summary::Chips { chips, overflow } => {
                let mut used = 0usize;
                for chip in chips {
                    let label = truncate_to_width(&chip.label, CHIP_MAX_WIDTH);
                    let sep = if used == 0 { "" } else { " " };
                    let chip_width = display_width(sep) + display_width(&label) + 2;
                    if used + chip_width > left_width {
                        break;
                    }
                    if !sep.is_empty() {
                        spans.push(Span::new(sep, Role::Text));
                    }
                    spans.push(Span::new(format!("{} ", label), Role::Accent));
                    let close_x = area.x.saturating_add((used + chip_width - 1) as u16);
                    spans.push(Span::new(CLEAR, Role::Accent).bold());
                    if !disabled {
                        self.hits.register(
                            HitTarget::RemoveChip(chip.value),
                            Rect::new(close_x, area.y, 1, 1),
                        );
                    }
                    used += chip_width;
                }
                if overflow > 0 {
                    let more = format!(" +{}", overflow);
                    if used + display_width(&more) <= left_width {
                        used += display_width(&more);
                        spans.push(Span::new(more, Role::Muted));
                    }
                }
            }
        }

        // Pad the summary so the buttons sit at the right edge.
        let left_used: usize = spans.iter().map(|s| display_width(&s.text)).sum();
        if left_used < left_width {
            spans.push(Span::new(" ".repeat(left_width - left_used), Role::Text));
        }
        if has_value && !disabled {
            let clear_x = area.x.saturating_add((left_width + 1) as u16);
            if clear_x < area.right() {
                self.hits
                    .register(HitTarget::Clear, Rect::new(clear_x, area.y, 1, 1));
            }
        }

        spans.extend(right);
        Line::new(spans)
    }

    fn render_search(&self, width: u16) -> Line {
        let width = usize::from(width);
        let prefix = "/ ";
        let mut spans = vec![Span::new(prefix, Role::Muted)];

        let status = if self.index.is_active() {
            format!(" {} found", self.index.match_count())
        } else {
            String::new()
        };
        let field_width = width.saturating_sub(prefix.len() + display_width(&status));

        if self.search.is_empty() {
            spans.push(Span::new(
                pad_to_width(&truncate_to_width("Search...", field_width), field_width),
                Role::Muted,
            ));
        } else {
            spans.push(Span::new(
                pad_to_width(&truncate_to_width(self.search.text(), field_width), field_width),
                Role::Text,
            ));
        }
        if !status.is_empty() && display_width(&status) + prefix.len() <= width {
            spans.push(Span::new(status, Role::Muted));
        }
        Line::new(spans)
    }
}

fn render_row(row: &VisibleRow, selected: bool, mode: SelectionMode, width: usize) -> Line {
    let mut spans = Vec::new();
    let mut used = 0usize;

    let indent = INDENT.repeat(usize::from(row.depth));
    let chevron = if !row.has_children {
        CHEVRON_NONE
    } else if row.is_expanded {
        CHEVRON_EXPANDED
    } else {
        CHEVRON_COLLAPSED
    };
    let lead = format!("{}{}", indent, chevron);
    used += display_width(&lead);
    spans.push(Span::new(lead, Role::Muted));

    if mode == SelectionMode::Multiple {
        let (box_text, role) = if selected {
            (CHECKED, Role::Primary)
        } else {
            (UNCHECKED, Role::Muted)
        };
        used += display_width(box_text);
        spans.push(Span::new(box_text, role));
    }

    let check = mode == SelectionMode::Single && selected;
    let trailing = if check { 2 } else { 0 };
    let label_width = width.saturating_sub(used + trailing);
    let label = truncate_to_width(&row.label, label_width);
    used += display_width(&label);

    let role = if row.disabled {
        Role::Disabled
    } else if row.is_match {
        Role::Match
    } else if selected {
        Role::Primary
    } else {
        Role::Text
    };
    let mut label_span = Span::new(label, role);
    if row.is_match {
        label_span = label_span.bold();
    }
    spans.push(label_span);

    if used + trailing < width {
        spans.push(Span::new(" ".repeat(width - used - trailing), Role::Text));
    }
    if check && width >= used + trailing {
        spans.push(Span::new(format!(" {}", CHECK_MARK), Role::Primary));
    }

    // Very narrow areas: clip whatever did not fit.
    let total: usize = spans.iter().map(|s| display_width(&s.text)).sum();
    if total > width {
        let text: String = spans.iter().map(|s| s.text.as_str()).collect();
        return Line::new(vec![Span::new(truncate_to_width(&text, width), Role::Text)]);
    }
    Line::new(spans)
}
