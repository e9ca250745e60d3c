//! A ratatui backend that renders into a `vt100` screen.
//!
//! Frames go through the same escape sequences a real terminal would see, so
//! tests can read back exactly what the user would.

use std::fmt;
use std::io;

use crossterm::Command;
use crossterm::{cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    size: Size,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    /// Screen text, rows joined by newlines with trailing blanks trimmed.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// Text of `width` columns of one screen row, starting at column `start`.
    pub fn row_slice(&self, row: u16, start: u16, width: u16) -> String {
        self.parser
            .screen()
            .rows(start, width)
            .nth(usize::from(row))
            .unwrap_or_default()
    }

    fn run(&mut self, command: impl Command) {
        let mut ansi = String::new();
        if command.write_ansi(&mut ansi).is_ok() {
            self.parser.process(ansi.as_bytes());
        }
    }

    fn apply_style(&mut self, cell_style: Style) {
        self.run(style::SetAttribute(style::Attribute::Reset));
        if let Some(fg) = terminal_color(cell_style.fg) {
            self.run(style::SetForegroundColor(fg));
        }
        if let Some(bg) = terminal_color(cell_style.bg) {
            self.run(style::SetBackgroundColor(bg));
        }
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents())
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut next: Option<(u16, u16)> = None;
        let mut current: Option<Style> = None;

        for (x, y, cell) in content {
            if next != Some((x, y)) {
                self.run(cursor::MoveTo(x, y));
            }
            let cell_style = cell.style();
            if current != Some(cell_style) {
                self.apply_style(cell_style);
                current = Some(cell_style);
            }
            self.parser.process(cell.symbol().as_bytes());
            next = Some((x + 1, y));
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, col) = self.parser.screen().cursor_position();
        Ok(Position::new(col, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let Position { x, y } = position.into();
        self.run(cursor::MoveTo(x, y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.run(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::new(self.size.width * 8, self.size.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn terminal_color(color: Option<Color>) -> Option<style::Color> {
    use style::Color as Term;

    Some(match color? {
        Color::Reset => return None,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::Gray => Term::Grey,
        Color::DarkGray => Term::DarkGrey,
        Color::LightRed => Term::Red,
        Color::LightGreen => Term::Green,
        Color::LightYellow => Term::Yellow,
        Color::LightBlue => Term::Blue,
        Color::LightMagenta => Term::Magenta,
        Color::LightCyan => Term::Cyan,
        Color::White => Term::White,
        Color::Rgb(r, g, b) => Term::Rgb { r, g, b },
        Color::Indexed(i) => Term::AnsiValue(i),
    })
}
