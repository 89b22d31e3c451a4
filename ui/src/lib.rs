//! Game display and user interface.

mod console;
pub use console::{Capture, Console, Style, Terminal};

mod game;
pub use game::{Game, State};

mod input;
pub use input::{Input, Script, StdinInput};

mod map_view;
pub use map_view::MapView;
