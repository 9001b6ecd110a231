//! HUD state and frame layout

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::colony::Colony;
use crate::render::WorldView;

/// Display toggles that live outside the simulation
#[derive(Debug, Clone)]
pub struct HudState {
    pub show_fog: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self { show_fog: true }
    }
}

/// Draw one frame: the world on top, queen gauge and stats below
pub fn draw(frame: &mut Frame, colony: &Colony, hud: &HudState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(6),
        ])
        .split(frame.size());

    let world_block = Block::default().borders(Borders::ALL).title(" Colony ");
    let world_area = world_block.inner(chunks[0]);
    frame.render_widget(world_block, chunks[0]);
    frame.render_widget(
        WorldView {
            colony,
            show_fog: hud.show_fog,
        },
        world_area,
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Queen lvl {} ", colony.store.queen_level())),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .ratio(colony.queen_cooldown.clamp(0.0, 1.0) as f64);
    frame.render_widget(gauge, chunks[1]);

    let stats = vec![
        Line::from(vec![
            Span::styled("Supply: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} food", colony.store.food()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            Span::styled("Workers: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("x {}", colony.counts.workers),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Fighters: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("x {}", colony.counts.fighters),
                Style::default().fg(Color::White),
            ),
            Span::styled("  Scouts: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("x {}", colony.counts.scouts),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Enemies: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("x {}", colony.enemies.len()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            key_span("1/2/3"),
            help_span(" spawn worker/fighter/scout  "),
            key_span("e"),
            help_span(" wave  "),
            key_span("f"),
            help_span(" fog  "),
            key_span("r"),
            help_span(" reset  "),
            key_span("q"),
            help_span(" quit"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title(" Stats ")),
        chunks[2],
    );
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn help_span(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::Gray))
}
