//! UI rendering with Ratatui.

use crate::app::{App, AppState, FormField, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use reservas_core::controllers::{
    DELETE_PROMPT_HEADER, DELETE_PROMPT_LABEL, DELETE_PROMPT_TITLE, REPORT_SEPARATOR,
};
use reservas_core::{ChargeType, FormController, ListController, NoticeLevel, Screen};

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    if app.state == AppState::Quit {
        return;
    }

    let area = frame.area();
    let block = Block::default()
        .title(format!(" 🚗 {} ", app.screen.kind().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.screen {
        Screen::Form(form) => render_form(frame, app, form, inner),
        Screen::List(list) => render_list(frame, app, list, inner),
    }

    match app.input_mode {
        InputMode::DeletePrompt => render_delete_prompt(frame, app, area),
        InputMode::Notice => render_notice(frame, app, area),
        InputMode::Normal => {}
    }
}

/// Render the reservation form and the summary of the last registration.
fn render_form(frame: &mut Frame, app: &App, form: &FormController, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16 * 2),
            Constraint::Length(1), // Help line
            Constraint::Min(3),    // Summary
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(FormField::ALL.map(|_| Constraint::Length(2)))
        .split(chunks[0]);

    let input = &form.input;
    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = *field == app.focus && app.input_mode == InputMode::Normal;
        let value = match field {
            FormField::Client => text_value(&input.client, "", focused),
            FormField::Vehicle => match input.vehicle {
                Some(vehicle) => format!("◂ {vehicle} ▸"),
                None => "◂ Selecciona un vehículo ▸".to_string(),
            },
            FormField::Date => text_value(&input.date, "AAAA-MM-DD", focused),
            FormField::Hours => format!("◂ {} ▸", input.hours),
            FormField::Charge => charge_value(input.charge),
        };
        render_field(frame, field.label(), &value, *row, focused);
    }

    let help = Paragraph::new("Tab: campo | ◂ ▸: cambiar | Enter: registrar | F2: ver reservas | Esc: salir")
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, chunks[1]);

    let summary_block = Block::default()
        .title(Span::styled(" Información ", Style::default().fg(Color::DarkGray)))
        .borders(Borders::TOP);
    let summary_inner = summary_block.inner(chunks[2]);
    frame.render_widget(summary_block, chunks[2]);

    let summary = Paragraph::new(form.summary().unwrap_or_default())
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, summary_inner);
}

fn text_value(text: &str, placeholder: &str, focused: bool) -> String {
    match (text.is_empty(), focused) {
        (true, false) => placeholder.to_string(),
        (_, true) => format!("{text}_"),
        (false, false) => text.to_string(),
    }
}

fn charge_value(charge: ChargeType) -> String {
    let radio = |option: ChargeType| {
        let mark = if option == charge { "(•)" } else { "( )" };
        format!("{mark} {}", option.label())
    };
    format!("{}   {}", radio(ChargeType::Slow), radio(ChargeType::Fast))
}

fn render_field(frame: &mut Frame, label: &str, value: &str, area: Rect, focused: bool) {
    let value_style = if focused {
        Style::default()
            .bg(Color::Rgb(60, 60, 80))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let line = Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the reservation report.
fn render_list(frame: &mut Frame, app: &App, list: &ListController, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let rows: Vec<Line> = report_rows(list.report(), chunks[0].width)
        .into_iter()
        .map(Line::from)
        .collect();
    let report = Paragraph::new(rows)
        .style(Style::default().fg(Color::White))
        .scroll((app.list_scroll, 0));
    frame.render_widget(report, chunks[0]);

    let help = Paragraph::new("d: eliminar reserva | b: volver | ↑↓: desplazar | q: salir")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}

/// Columns available to the report inside the list screen's border and margin.
pub fn list_width(area: Rect) -> u16 {
    area.width.saturating_sub(4)
}

/// The report as drawn `width` columns wide: long lines wrap at spaces and
/// separators are cut to the width.
pub fn report_rows(report: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for line in report.lines() {
        if line == REPORT_SEPARATOR {
            rows.push("-".repeat(width));
        } else {
            wrap_line(line, width, &mut rows);
        }
    }
    rows
}

fn wrap_line(line: &str, width: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0;
    for word in line.split(' ') {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;

        // Words longer than a row are split
        while current_len > width {
            let tail: String = current.chars().skip(width).collect();
            current = current.chars().take(width).collect();
            rows.push(std::mem::replace(&mut current, tail));
            current_len -= width;
        }
    }
    rows.push(current);
}

/// Render the "delete by name" prompt.
fn render_delete_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(50.min(area.width), 6.min(area.height), area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" {DELETE_PROMPT_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(DELETE_PROMPT_HEADER), chunks[0]);

    let input = Line::from(vec![
        Span::styled(DELETE_PROMPT_LABEL, Style::default().fg(Color::DarkGray)),
        Span::styled(app.prompt_input.as_str(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK)),
    ]);
    frame.render_widget(Paragraph::new(input), chunks[1]);

    let help = Paragraph::new("Enter: aceptar | Esc: cancelar").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

/// Render the pending notice on top of the screen.
fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref notice) = app.notice else {
        return;
    };

    let dialog_area = centered_rect(60.min(area.width), 7.min(area.height), area);
    frame.render_widget(Clear, dialog_area);

    let color = match notice.level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Error => Color::Red,
    };
    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(notice.message.as_str())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let hint = Paragraph::new("Pulsa cualquier tecla")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(hint, chunks[1]);
}

/// Helper to create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
