//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod auth;
pub mod banner;
pub mod popups;

use crate::app::App;
use crate::state::AuthMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(9), // Banner height
            Constraint::Min(0),    // Auth card
            Constraint::Length(3), // Footer
        ])
        .split(size);

    banner::draw_banner(f, app, chunks[0]);
    auth::draw_auth_screen(f, app, chunks[1]);

    let help_text =
        "[Tab]/[Shift+Tab] Change Focus | [Enter] Select\n[F2] Animation | [F3] Glitch | [Esc] Quit";
    let status_text = match app.panel.mode() {
        AuthMode::Login => "Sign in",
        AuthMode::Registration => "Create account",
    };

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(chunks[2]);

    f.render_widget(
        Paragraph::new(help_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            status_text,
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::TOP)),
        footer_chunks[1],
    );

    if app.ui.show_quit_confirm {
        popups::draw_quit_confirm_popup(f, app);
    }
}
