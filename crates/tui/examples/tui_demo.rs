// crates/tui/examples/tui_demo.rs
// Demo of the Shelfmark TUI with a few books already on the shelf

use shelfmark_config::Config;
use shelfmark_library::Library;
use shelfmark_tui::{App, Controller};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut library = Library::new();
    library.add("Dune", "Frank Herbert", 412, false);
    library.add("Emma", "Jane Austen", 474, true);
    library.add("The Left Hand of Darkness", "Ursula K. Le Guin", 304, false);

    let config = Config::default();
    let mut app = App::with_config(&config).with_controller(Controller::with_library(library));

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result?;
    Ok(())
}
