// sortty: step-through sorting algorithm visualizer for the terminal

mod sequence;
mod session;
mod step;
mod stepper;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [sequence]", program_name);
        eprintln!();
        eprintln!("Steps through bubble, insertion, and merge sort on a sequence of");
        eprintln!("comma-separated integers, forward and backward.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {} 5,2,9,1,7        # Load the sequence into all three visualizers",
            program_name
        );
        eprintln!(
            "  {}                  # Start empty; press e to enter a sequence",
            program_name
        );
        std::process::exit(0);
    }

    if args.len() > 2 {
        eprintln!("Error: Too many arguments");
        eprintln!();
        eprintln!("Usage: {} [sequence]", program_name);
        eprintln!("The sequence must be a single comma-separated argument, e.g. 5,2,9");
        std::process::exit(1);
    }

    let initial_input = args.get(1).map(|s| s.as_str());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(initial_input);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
