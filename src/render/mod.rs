//! Terminal rendering of the world
//!
//! The world is drawn with upper-half-block characters so each terminal
//! cell carries two vertically stacked world cells, top row of the map
//! first. Rendering is read-only over colony state.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::colony::Colony;
use crate::core::types::IntVec2;
use crate::grid::overlay::AgentMarker;
use crate::grid::terrain::CellKind;

/// RGB triple in [0, 255] per channel
pub type Rgb = (u8, u8, u8);

/// Base palette for terrain cells
pub fn cell_color(kind: CellKind) -> Rgb {
    match kind {
        CellKind::Sky => (135, 206, 235),
        CellKind::Dirt => (110, 70, 35),
        CellKind::BackgroundDirt => (58, 36, 18),
        CellKind::Rock => (120, 120, 120),
        CellKind::Trunk => (92, 60, 28),
        CellKind::Leaves => (42, 140, 42),
        CellKind::Bush => (30, 110, 50),
        CellKind::Grass => (84, 180, 62),
        CellKind::Food => (230, 80, 160),
        CellKind::None => (0, 0, 0),
    }
}

/// Color for an agent marker, if the marker draws at all
pub fn marker_color(marker: AgentMarker) -> Option<Rgb> {
    match marker {
        AgentMarker::Empty => None,
        AgentMarker::Ally { tint } => {
            let v = (tint * 255.0) as u8;
            Some((v, v, v))
        }
        AgentMarker::Enemy => Some((200, 40, 40)),
        AgentMarker::FoodCarry => Some((230, 80, 160)),
        AgentMarker::Queen => Some((240, 210, 40)),
    }
}

/// Darken a color by the fog intensity at its cell
pub fn shade(color: Rgb, fog: f32) -> Rgb {
    let visible = (1.0 - fog).clamp(0.0, 1.0);
    (
        (color.0 as f32 * visible) as u8,
        (color.1 as f32 * visible) as u8,
        (color.2 as f32 * visible) as u8,
    )
}

/// Composite one world cell: marker over terrain, then fog
pub fn composite(colony: &Colony, pos: IntVec2, show_fog: bool) -> Rgb {
    let base = match marker_color(colony.overlay.get(pos)) {
        Some(color) => color,
        None => cell_color(colony.terrain.get(pos)),
    };
    if show_fog {
        shade(base, colony.fog.get(pos))
    } else {
        base
    }
}

/// Ratatui widget painting the world with half blocks
///
/// The viewport is centered horizontally on the queen and anchored so the
/// top of the map is at the top of the widget area.
pub struct WorldView<'a> {
    pub colony: &'a Colony,
    pub show_fog: bool,
}

impl Widget for WorldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let world_width = self.colony.config.width as i32;
        let world_height = self.colony.config.height as i32;
        let queen_x = self.colony.queen_position().x;

        let offset_x = (queen_x - area.width as i32 / 2)
            .clamp(0, (world_width - area.width as i32).max(0));

        for row in 0..area.height {
            for col in 0..area.width {
                let x = offset_x + col as i32;
                // Two world rows per terminal row, top of the map first
                let top_y = world_height - 1 - 2 * row as i32;
                let bottom_y = top_y - 1;
                if x >= world_width || top_y < 0 {
                    continue;
                }

                let top = composite(self.colony, IntVec2::new(x, top_y), self.show_fog);
                let bottom = if bottom_y >= 0 {
                    composite(self.colony, IntVec2::new(x, bottom_y), self.show_fog)
                } else {
                    (0, 0, 0)
                };

                buf.get_mut(area.x + col, area.y + row)
                    .set_symbol("▀")
                    .set_fg(Color::Rgb(top.0, top.1, top.2))
                    .set_bg(Color::Rgb(bottom.0, bottom.1, bottom.2));
            }
        }
    }
}
