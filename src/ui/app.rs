//! Main TUI application state and logic

use crate::session::{EngineError, Session};
use crate::step::Step;
use crate::stepper::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// One on-screen visualizer: a session plus its input box and the snapshot
/// most recently emitted to us
pub struct Visualizer {
    /// The navigable history for this algorithm
    pub session: Session,

    /// Last committed input string
    pub input: String,

    /// Snapshot last handed to the renderer callback (None until the first
    /// successful initialize)
    pub shown: Option<Step>,
}

impl Visualizer {
    fn new(algorithm: Algorithm) -> Self {
        Visualizer {
            session: Session::new(algorithm),
            input: String::new(),
            shown: None,
        }
    }
}

/// The main application state
pub struct App {
    /// One visualizer per algorithm; all three coexist with independent
    /// histories and cursors
    pub visualizers: Vec<Visualizer>,

    /// Index of the focused visualizer
    pub focused: usize,

    /// Whether the focused visualizer's input box is being edited
    pub editing: bool,

    /// In-progress input text while editing
    pub edit_buffer: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app, optionally pre-filling and initializing every
    /// visualizer with the same input string
    pub fn new(initial_input: Option<&str>) -> Self {
        let mut visualizers: Vec<Visualizer> =
            Algorithm::ALL.iter().map(|&a| Visualizer::new(a)).collect();

        let mut status_message = String::from("Ready! Press e to enter a sequence");
        if let Some(input) = initial_input {
            for viz in &mut visualizers {
                if viz.session.initialize(input).is_ok() {
                    viz.input = input.to_string();
                    viz.shown = viz.session.initial().cloned();
                }
            }
            status_message = match visualizers[0].shown {
                Some(_) => format!("Loaded '{}'", input),
                None => format!("Not a valid array of numbers: '{}'", input),
            };
        }

        App {
            visualizers,
            focused: 0,
            editing: false,
            edit_buffer: String::new(),
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                let viz = &mut self.visualizers[self.focused];
                let Visualizer { session, shown, .. } = viz;
                match session.advance(|step| *shown = Some(step.clone())) {
                    Ok(()) => self.status_message = "Playing...".to_string(),
                    Err(_) => {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // One pane per visualizer, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Length(1),
            ])
            .split(size);

        for (i, viz) in self.visualizers.iter().enumerate() {
            super::panes::render_visualizer_pane(
                frame,
                chunks[i],
                viz,
                i == self.focused,
                self.editing && i == self.focused,
                &self.edit_buffer,
            );
        }

        let focused = &self.visualizers[self.focused];
        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            focused.session.cursor(),
            focused.session.total_steps(),
            self.is_playing,
            self.editing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing {
            self.handle_editing_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                // Open the focused input box for editing
                self.is_playing = false;
                self.editing = true;
                self.edit_buffer = self.visualizers[self.focused].input.clone();
                self.status_message = "Editing input (Enter to sort, Esc to cancel)".to_string();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    let Visualizer { session, shown, .. } = &mut self.visualizers[self.focused];
                    if session.advance(|step| *shown = Some(step.clone())).is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.is_playing = false;
                self.focused = (self.focused + 1) % self.visualizers.len();
            }
            KeyCode::BackTab => {
                self.is_playing = false;
                self.focused =
                    (self.focused + self.visualizers.len() - 1) % self.visualizers.len();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end of the focused history
                self.is_playing = false;
                let Visualizer { session, shown, .. } = &mut self.visualizers[self.focused];
                while session.advance(|step| *shown = Some(step.clone())).is_ok() {}
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump back to the start
                self.is_playing = false;
                let Visualizer { session, shown, .. } = &mut self.visualizers[self.focused];
                while !session.at_start() {
                    session.retreat(|step| *shown = Some(step.clone()));
                }
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Handle keys while the input box is open
    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                self.edit_buffer.clear();
                self.status_message = "Edit cancelled".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.commit_input();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Initialize the focused session from the edit buffer.
    ///
    /// A failed parse leaves the session's previous history, cursor and
    /// displayed snapshot untouched.
    fn commit_input(&mut self) {
        let viz = &mut self.visualizers[self.focused];
        match viz.session.initialize(&self.edit_buffer) {
            Ok(()) => {
                viz.input = self.edit_buffer.clone();
                viz.shown = viz.session.initial().cloned();
                self.status_message = format!(
                    "{}: {} steps generated",
                    viz.session.algorithm(),
                    viz.session.total_steps()
                );
            }
            Err(e) => {
                self.status_message = format!("Please enter a valid array of numbers ({})", e);
            }
        }
        self.edit_buffer.clear();
    }

    /// Step forward in the focused visualizer
    fn step_forward(&mut self) {
        let Visualizer { session, shown, .. } = &mut self.visualizers[self.focused];
        match session.advance(|step| *shown = Some(step.clone())) {
            Ok(()) => {
                self.status_message = format!(
                    "Step {}/{}",
                    session.cursor(),
                    session.total_steps()
                );
            }
            Err(EngineError::AtEnd { total: 0 }) => {
                self.status_message = "No sequence loaded, press e".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in the focused visualizer (silent no-op at the start)
    fn step_backward(&mut self) {
        let Visualizer { session, shown, .. } = &mut self.visualizers[self.focused];
        session.retreat(|step| *shown = Some(step.clone()));
        if session.at_start() {
            self.status_message = "At start".to_string();
        } else {
            self.status_message = format!(
                "Step {}/{}",
                session.cursor(),
                session.total_steps()
            );
        }
    }
}
