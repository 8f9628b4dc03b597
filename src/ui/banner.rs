//! Banner drawing utilities for the UI.

use crate::app::App;
use crate::global_prefs::global_prefs;
use figlet_rs::FIGfont;
use rand::prelude::*;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BANNER_TEXT: &str = "PORTAL";
const GLITCH_GLYPHS: [char; 4] = ['▒', '░', '▓', '█'];

pub fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    let lines = styled_banner_lines(area.width, app.ui.tick_count);
    let banner = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}

fn styled_banner_lines(width: u16, tick_count: u64) -> Vec<Line<'static>> {
    let standard_font = FIGfont::standard().unwrap();
    let figlet_text = standard_font.convert(BANNER_TEXT).unwrap();
    let figlet_string = figlet_text.to_string();

    let glitch = global_prefs().banner_glitch_enabled;
    let mut rng = thread_rng();

    let mut lines = vec![Line::raw("")];
    for src in figlet_string.lines() {
        let pad = (width as usize).saturating_sub(src.chars().count()) / 2;
        let mut spans = vec![Span::raw(" ".repeat(pad))];
        for ch in src.chars() {
            if ch == ' ' {
                spans.push(Span::raw(" "));
                continue;
            }
            // Brief one-cell glitches, in step with the tick counter
            if glitch && tick_count % 7 == 0 && rng.gen_ratio(1, 40) {
                let glyph = GLITCH_GLYPHS[rng.gen_range(0..GLITCH_GLYPHS.len())];
                spans.push(Span::styled(
                    glyph.to_string(),
                    Style::default().fg(Color::Cyan),
                ));
            } else {
                spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(Color::Magenta),
                ));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}
