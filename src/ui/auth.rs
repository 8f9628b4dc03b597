//! The sliding auth card: login/registration forms plus the overlay panel.

use crate::app::App;
use crate::state::panel::{
    CARD_WIDTH_UNITS, FORM_PANEL_WIDTH_UNITS, REGISTRATION_PANEL_WIDTH_UNITS,
};
use crate::state::FormFocus;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_auth_screen(f: &mut Frame, app: &App, area: Rect) {
    let card = card_area(area);
    if card.width < 12 || card.height < 8 {
        f.render_widget(Paragraph::new("Terminal too small..."), area);
        return;
    }

    let (form_units, registration_units) = app.view.drawn_offsets();
    let form_area = panel_rect(card, form_units, FORM_PANEL_WIDTH_UNITS);
    let overlay_area = panel_rect(card, registration_units, REGISTRATION_PANEL_WIDTH_UNITS);

    if app.view.visibility.login {
        draw_login_form(f, app, form_area);
    } else {
        draw_registration_form(f, app, form_area);
    }
    // Drawn last so it covers the forms while sliding across them.
    draw_registration_panel(f, app, overlay_area);
}

/// Centered card the panels slide within.
fn card_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(96);
    let height = area.height.saturating_sub(2).min(16);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a panel's logical offset and width onto terminal cells inside the card.
fn panel_rect(card: Rect, offset_units: f32, width_units: u16) -> Rect {
    let x_off = scale(offset_units, card.width).min(card.width);
    let width = scale(f32::from(width_units), card.width).min(card.width - x_off);
    Rect {
        x: card.x + x_off,
        y: card.y,
        width,
        height: card.height,
    }
}

fn scale(units: f32, card_width: u16) -> u16 {
    (units * f32::from(card_width) / f32::from(CARD_WIDTH_UNITS)).round() as u16
}

fn draw_login_form(f: &mut Frame, app: &App, area: Rect) {
    let outer_block = Block::default().title("Login").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default()
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let username_style = if app.forms.focus == FormFocus::Username {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.forms.login_username.as_str())
            .block(Block::default().borders(Borders::ALL).title("Username"))
            .style(username_style),
        chunks[0],
    );
    let password_style = if app.forms.focus == FormFocus::Password {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new("*".repeat(app.forms.login_password.len()))
            .block(Block::default().borders(Borders::ALL).title("Password"))
            .style(password_style),
        chunks[1],
    );

    draw_submit_button(f, app, chunks[2]);
    set_field_cursor(f, app, chunks[0], chunks[1], &app.forms.login_username, &app.forms.login_password);
}

fn draw_registration_form(f: &mut Frame, app: &App, area: Rect) {
    let outer_block = Block::default().title("Register").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default()
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let username_style = if app.forms.focus == FormFocus::Username {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.forms.registration_username.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose Username"),
            )
            .style(username_style),
        chunks[0],
    );
    let password_style = if app.forms.focus == FormFocus::Password {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new("*".repeat(app.forms.registration_password.len()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose Password"),
            )
            .style(password_style),
        chunks[1],
    );

    draw_submit_button(f, app, chunks[2]);
    set_field_cursor(
        f,
        app,
        chunks[0],
        chunks[1],
        &app.forms.registration_username,
        &app.forms.registration_password,
    );
}

fn draw_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let button_area = Layout::default()
        .margin(1)
        .constraints([Constraint::Length(3)])
        .split(area)[0];
    let submit_style = if app.forms.focus == FormFocus::Submit {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled("[ SUBMIT ]", submit_style)).alignment(Alignment::Center),
        button_area,
    );
}

fn set_field_cursor(
    f: &mut Frame,
    app: &App,
    username_area: Rect,
    password_area: Rect,
    username: &str,
    password: &str,
) {
    match app.forms.focus {
        FormFocus::Username => {
            f.set_cursor_position((username_area.x + username.len() as u16 + 1, username_area.y + 1));
        }
        FormFocus::Password => {
            f.set_cursor_position((password_area.x + password.len() as u16 + 1, password_area.y + 1));
        }
        _ => {}
    }
}

/// The overlay panel: mode-dependent title, subtitle and toggle button.
fn draw_registration_panel(f: &mut Frame, app: &App, area: Rect) {
    let labels = app.view.labels;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double);

    let switch_style = if app.forms.focus == FormFocus::Switch {
        Style::default().bg(Color::Magenta).fg(Color::Black)
    } else {
        Style::default().fg(Color::Magenta)
    };

    // Vertically center the content inside the panel
    let content_lines = 5u16;
    let inner_height = area.height.saturating_sub(2);
    let pad_top = inner_height.saturating_sub(content_lines) / 2;

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..pad_top {
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        labels.title,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::raw(labels.subtitle)));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", labels.button),
        switch_style,
    )));

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}
