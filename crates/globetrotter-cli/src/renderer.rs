//! Terminal rendering for the markdown the core's display types produce.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Header lines keep their leading hashes so nesting stays visible.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[36m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
