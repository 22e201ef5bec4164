use std::{collections::HashSet, fmt, io::Write};

use crossterm::{
    QueueableCommand, queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};

use crate::maze::{Cell, Grid, Position};

/// Marks drawn on top of open cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// Part of the solution route
    Route,
    Start,
    Goal,
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Overlay::Route => "🟨".with(Color::Yellow),
            Overlay::Start => "🟩".with(Color::Green),
            Overlay::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each overlay must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Writes grids to a terminal (or any writer) one styled cell at a time.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Warns on the output when the terminal is narrower than the rendered grid.
    /// Writing to a pipe or file has no terminal size and is never warned about.
    pub fn check_width(&mut self, grid: &Grid) -> std::io::Result<bool> {
        let needed = grid.width() * Cell::CELL_WIDTH as usize;
        let Ok((term_width, _)) = terminal::size() else {
            return Ok(true);
        };
        if (term_width as usize) >= needed {
            return Ok(true);
        }
        tracing::warn!(
            "[app] terminal is {} columns wide, grid needs {}",
            term_width,
            needed
        );
        let msg = format!(
            "Terminal width ({}) is too small for a {}x{} grid, lines will wrap.\n",
            term_width,
            grid.width(),
            grid.height()
        );
        self.out.queue(style::PrintStyledContent(
            msg.with(Color::Yellow).attribute(Attribute::Bold),
        ))?;
        Ok(false)
    }

    /// Draws the grid with the route, start and goal drawn over open cells.
    pub fn draw(
        &mut self,
        grid: &Grid,
        route: &[Position],
        start: Option<Position>,
        goal: Option<Position>,
    ) -> std::io::Result<()> {
        let route = route.iter().copied().collect::<HashSet<_>>();
        for (y, row) in grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = Position::new(x, y);
                match overlay_at(pos, &route, start, goal) {
                    Some(overlay) if !cell.is_wall() => {
                        self.out.queue(style::Print(overlay))?;
                    }
                    _ => {
                        self.out.queue(style::Print(cell))?;
                    }
                }
            }
            self.out.queue(style::Print("\n"))?;
        }
        self.out.flush()
    }

    /// Writes the grid as rows of 0/1 digits without styling.
    pub fn draw_raw(&mut self, grid: &Grid) -> std::io::Result<()> {
        for row in grid.to_rows() {
            let line = row.iter().map(|value| char::from(b'0' + value)).collect::<String>();
            queue!(self.out, style::Print(line), style::Print("\n"))?;
        }
        self.out.flush()
    }

    pub fn line(&mut self, text: impl fmt::Display) -> std::io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn heading(&mut self, text: &str) -> std::io::Result<()> {
        queue!(
            self.out,
            style::PrintStyledContent(text.with(Color::Green).attribute(Attribute::Bold)),
            style::Print("\n")
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Endpoints win over the route they sit on.
fn overlay_at(
    pos: Position,
    route: &HashSet<Position>,
    start: Option<Position>,
    goal: Option<Position>,
) -> Option<Overlay> {
    if Some(pos) == start {
        Some(Overlay::Start)
    } else if Some(pos) == goal {
        Some(Overlay::Goal)
    } else if route.contains(&pos) {
        Some(Overlay::Route)
    } else {
        None
    }
}
