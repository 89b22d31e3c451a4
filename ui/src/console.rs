//! Line-oriented text output sink.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::Stylize,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

/// Style hint for a written line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Style {
    Plain,
    /// Good news and scene descriptions.
    Info,
    /// Menu prompts.
    Prompt,
    /// Secondary options.
    Note,
    /// Combat and bad news.
    Danger,
}

/// Output capability handed to the game loop.
pub trait Console {
    fn writeln(&mut self, text: &str, style: Style);

    /// Wipe the display before redrawing a scene.
    fn clear(&mut self);

    /// Push buffered output to the display.
    fn flush(&mut self);
}

/// Terminal console with ANSI styling.
#[derive(Default)]
pub struct Terminal;

impl Console for Terminal {
    fn writeln(&mut self, text: &str, style: Style) {
        let line = match style {
            Style::Plain => text.stylize(),
            Style::Info => text.green(),
            Style::Prompt => text.cyan(),
            Style::Note => text.yellow(),
            Style::Danger => text.red(),
        };
        println!("{line}");
    }

    fn clear(&mut self) {
        let mut out = io::stdout();
        // Ignore terminal errors, a game scene that fails to clear is
        // not worth interrupting the game over.
        let _ = out
            .queue(Clear(ClearType::All))
            .and_then(|o| o.queue(cursor::MoveTo(0, 0)))
            .map(|_| ());
        let _ = out.flush();
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
    }
}

/// Console that records lines, for tests.
#[derive(Default)]
pub struct Capture {
    pub lines: Vec<String>,
}

impl Capture {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Console for Capture {
    fn writeln(&mut self, text: &str, _style: Style) {
        self.lines.push(text.to_string());
    }

    fn clear(&mut self) {}

    fn flush(&mut self) {}
}
