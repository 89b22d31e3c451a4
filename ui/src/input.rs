//! Blocking line input for the turn loop.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Input capability. Reads block until a line is available; `None`
/// means the input source is exhausted (EOF) and the game should wind
/// down.
pub trait Input {
    fn read_line(&mut self) -> Option<String>;
}

/// Interactive stdin input.
#[derive(Default)]
pub struct StdinInput;

impl Input for StdinInput {
    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim().to_string()),
        }
    }
}

/// Scripted input for tests.
pub struct Script(VecDeque<String>);

impl Script {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Script {
        Script(lines.into_iter().map(str::to_string).collect())
    }
}

impl Input for Script {
    fn read_line(&mut self) -> Option<String> {
        self.0.pop_front()
    }
}
