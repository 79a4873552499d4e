//! Rendering of the picker overlay.
//!
//! The picker is drawn as a centered popup over the host area: the input
//! surface on top, a help line, and the toolbar as the bottom accessory row.

use chrono::{Datelike, Timelike};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::date::{DateField, DateWheel};
use crate::mode::DateMode;
use crate::picker::{ModalPicker, Surface};
use crate::style::PickerStyle;
use crate::toolbar::Toolbar;
use crate::wheel::{ListWheel, Wheel};

/// Render `picker` as a centered popup over `area`.
pub fn render_modal_picker(frame: &mut Frame, area: Rect, picker: &ModalPicker) {
    let style = picker.style();

    let (width, height, title) = match picker.surface() {
        Surface::Date(wheel) => match wheel.mode() {
            DateMode::Date => (44u16, 7u16, " Select date "),
            DateMode::Time => (44, 7, " Select time "),
            DateMode::DateTime => (48, 7, " Select date & time "),
        },
        Surface::Single(_) => (40, 13, " Select value "),
        Surface::Multi { .. } => (56, 13, " Select values "),
    };

    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(style.tint).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(style.tint))
        .style(Style::new().bg(style.picker_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let layout = Layout::vertical([
        Constraint::Min(0),    // Input surface
        Constraint::Length(1), // Help line
        Constraint::Length(1), // Toolbar
    ])
    .split(inner);

    match picker.surface() {
        Surface::Date(wheel) => render_date_wheel(frame, layout[0], wheel, style),
        Surface::Single(wheel) => render_list_column(frame, layout[0], wheel, style, true),
        Surface::Multi { wheels, focused } => {
            let constraints = vec![Constraint::Ratio(1, wheels.len().max(1) as u32); wheels.len()];
            let columns = Layout::horizontal(constraints).split(layout[0]);
            for (i, wheel) in wheels.iter().enumerate() {
                render_list_column(frame, columns[i], wheel, style, i == *focused);
            }
        }
    }

    render_help(frame, layout[1], picker.surface(), style);
    render_toolbar(frame, layout[2], picker.toolbar(), style);
}

fn render_list_column(
    frame: &mut Frame,
    area: Rect,
    wheel: &ListWheel,
    style: &PickerStyle,
    focused: bool,
) {
    let mut lines: Vec<Line> = vec![];

    let visible = area.height as usize;
    let selected = wheel.selected_index();

    // Keep the highlighted row visible
    let scroll_offset = if selected >= visible && visible > 0 {
        selected - visible + 1
    } else {
        0
    };

    for (i, item) in wheel
        .items()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible)
    {
        let is_selected = i == selected;
        let cursor = if is_selected { "> " } else { "  " };

        let cursor_style = if focused {
            Style::new().fg(style.tint)
        } else {
            Style::new().fg(style.dim)
        };
        let item_style = if is_selected {
            Style::new().fg(style.picker_fg).bold()
        } else {
            Style::new().fg(style.dim)
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, cursor_style),
            Span::styled(item.as_str(), item_style),
        ]));
    }

    if wheel.is_empty() {
        lines.push(Line::styled("  (no values)", Style::new().fg(style.dim)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_date_wheel(frame: &mut Frame, area: Rect, wheel: &DateWheel, style: &PickerStyle) {
    let value = wheel.value();
    let focused = wheel.focused_field();

    let mut spans: Vec<Span> = vec![];
    for (i, field) in wheel.fields().iter().enumerate() {
        // Separator between fields: '-' within the date, ':' within the
        // time, a gap in between.
        if i > 0 {
            let sep = match field {
                DateField::Month | DateField::Day => "-",
                DateField::Minute => ":",
                DateField::Year | DateField::Hour => "  ",
            };
            spans.push(Span::styled(sep, Style::new().fg(style.dim)));
        }

        let text = match field {
            DateField::Year => format!("{:04}", value.year()),
            DateField::Month => format!("{:02}", value.month()),
            DateField::Day => format!("{:02}", value.day()),
            DateField::Hour => format!("{:02}", value.hour()),
            DateField::Minute => format!("{:02}", value.minute()),
        };
        let field_style = if *field == focused {
            Style::new().fg(style.picker_bg).bg(style.tint).bold()
        } else {
            Style::new().fg(style.picker_fg)
        };
        spans.push(Span::styled(text, field_style));
    }

    if let Some(offset) = wheel.time_zone() {
        spans.push(Span::styled(
            format!("  UTC{}", offset),
            Style::new().fg(style.dim),
        ));
    }

    let line_width: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding = (area.width as usize).saturating_sub(line_width) / 2;
    spans.insert(0, Span::raw(" ".repeat(padding)));

    // Center vertically with a leading blank line when there is room
    let mut lines = vec![];
    if area.height > 2 {
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(spans));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_help(frame: &mut Frame, area: Rect, surface: &Surface, style: &PickerStyle) {
    let keys = match surface {
        Surface::Date(_) => "[↑/↓] adjust · [←/→] field · [Tab] toolbar · [Esc] cancel",
        Surface::Single(_) => "[↑/↓] row · [Tab] toolbar · [Enter] activate · [Esc] cancel",
        Surface::Multi { .. } => "[↑/↓] row · [←/→] column · [Tab] toolbar · [Esc] cancel",
    };
    let paragraph = Paragraph::new(Line::styled(keys, Style::new().fg(style.dim))).centered();
    frame.render_widget(paragraph, area);
}

fn render_toolbar(frame: &mut Frame, area: Rect, toolbar: &Toolbar, style: &PickerStyle) {
    // A spacer splits the bar into a left and a right group, like a flexible
    // space between Cancel and Done.
    let mut spans: Vec<Span> = vec![];
    let mut used: usize = 0;
    let mut spacer_at: Option<usize> = None;

    for (i, action) in toolbar.actions().iter().enumerate() {
        let Some(label) = action.label() else {
            if spacer_at.is_none() {
                spacer_at = Some(spans.len());
            }
            continue;
        };

        let text = format!(" {} ", label);
        let is_focused = toolbar.focused_index() == Some(i);
        let action_style = if is_focused {
            Style::new().fg(style.picker_bg).bg(style.tint).bold()
        } else {
            Style::new().fg(style.picker_fg).bg(style.toolbar_bg)
        };
        used += text.chars().count();
        spans.push(Span::styled(text, action_style));
    }

    let gap = (area.width as usize).saturating_sub(used);
    let filler = Span::styled(" ".repeat(gap), Style::new().bg(style.toolbar_bg));
    match spacer_at {
        Some(at) => spans.insert(at, filler),
        None => spans.push(filler),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::new().bg(style.toolbar_bg));
    frame.render_widget(paragraph, area);
}
