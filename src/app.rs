//! Main application loop for the lissajous viewer.

use crate::color::{ColorSource, RandomColors, MIN_TERMINAL_COLORS};
use crate::config::Config;
use crate::controller::{Controller, Update};
use crate::error::{LissajousError, Result};
use crate::geometry::GridSize;
use crate::input::{Action, InputHandler};
use crate::render::Rasterizer;

use crossterm::event::{self, Event, KeyEvent};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::thread;
use std::time::Duration;

/// Non-blocking source of key events.
pub trait KeySource {
    /// Return the next pending key, or `None` right away if there is none.
    fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads keys from the terminal without waiting.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Number of colors the terminal can show. `TERM=dumb` counts as none.
#[must_use]
pub fn terminal_colors() -> u16 {
    match std::env::var("TERM") {
        Ok(term) if term == "dumb" => 0,
        _ => crossterm::style::available_color_count(),
    }
}

/// Startup checks run before the terminal is touched.
///
/// # Errors
///
/// [`LissajousError::NoColorSupport`] if fewer than [`MIN_TERMINAL_COLORS`]
/// are available, [`LissajousError::EmptyDisplay`] for a zero-area grid.
pub fn check_display(grid: GridSize, colors: u16) -> Result<()> {
    if colors < MIN_TERMINAL_COLORS {
        return Err(LissajousError::NoColorSupport { available: colors });
    }
    if grid.is_empty() {
        return Err(LissajousError::EmptyDisplay { rows: grid.rows, cols: grid.cols });
    }
    Ok(())
}

/// Terminal modes switched on for a session and off again when it ends.
pub trait TerminalModes {
    /// Switch the terminal into the modes the viewer needs.
    fn enter(&mut self) -> Result<()>;

    /// Undo [`enter`](Self::enter).
    fn leave(&mut self) -> Result<()>;
}

/// Raw mode plus the alternate screen on stdout.
#[derive(Debug, Default)]
pub struct CrosstermModes;

impl TerminalModes for CrosstermModes {
    fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        Ok(())
    }
}

/// Terminal modes and a hidden cursor for the lifetime of a run.
///
/// [`restore`](Self::restore) undoes the setup once; later calls and the
/// drop after an explicit restore do nothing.
pub struct Session<B: Backend, M: TerminalModes> {
    terminal: Terminal<B>,
    modes: M,
    active: bool,
}

impl Session<CrosstermBackend<Stdout>, CrosstermModes> {
    /// Take over the real terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched into raw mode or
    /// the alternate screen.
    pub fn start() -> Result<Self> {
        Self::with_backend(CrosstermBackend::new(stdout()), CrosstermModes)
    }
}

impl<B: Backend, M: TerminalModes> Session<B, M> {
    /// Enter `modes`, then hide the cursor and clear `backend`.
    ///
    /// If the backend setup fails the modes are left again before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns the first terminal error hit during setup.
    pub fn with_backend(backend: B, mut modes: M) -> Result<Self> {
        modes.enter()?;

        let setup = |backend: B| -> Result<Terminal<B>> {
            let mut terminal = Terminal::new(backend)?;
            terminal.hide_cursor()?;
            terminal.clear()?;
            Ok(terminal)
        };

        match setup(backend) {
            Ok(terminal) => Ok(Self { terminal, modes, active: true }),
            Err(e) => {
                let _ = modes.leave();
                Err(e)
            }
        }
    }

    /// The ratatui terminal being drawn to.
    pub fn terminal(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Leave the terminal modes and show the cursor again.
    ///
    /// Both steps are attempted even if the first one fails.
    ///
    /// # Errors
    ///
    /// Returns the first terminal error hit while restoring.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let left = self.modes.leave();
        let shown = self.terminal.show_cursor().map_err(LissajousError::from);
        crate::debug!("app", "terminal restored");
        left.and(shown)
    }
}

impl<B: Backend, M: TerminalModes> Drop for Session<B, M> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// The interactive lissajous viewer.
#[derive(Debug, Clone, Default)]
pub struct App {
    config: Config,
    input: InputHandler,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, input: InputHandler::new() }
    }

    /// Controller for `grid` with randomly colored points.
    #[must_use]
    pub fn controller(&self, grid: GridSize) -> Controller<RandomColors> {
        let render = &self.config.render;
        let rasterizer =
            Rasterizer::new(grid, RandomColors::from_seed(render.seed)).with_glyph(render.glyph);
        Controller::new(self.config.initial_parameters(), rasterizer)
            .with_controls(self.config.controls)
    }

    /// Runs the application until the user quits.
    ///
    /// # Errors
    ///
    /// Fatal startup errors are returned before anything is drawn. Terminal
    /// errors during the run are returned after the terminal is restored.
    pub fn run(&self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        let grid = GridSize::new(rows, cols);
        let colors = terminal_colors();
        crate::info!("app", "display {}x{} with {} colors", rows, cols, colors);
        check_display(grid, colors)?;

        let mut session = Session::start()?;
        let mut controller = self.controller(grid);
        let result = self.run_loop(session.terminal(), &mut CrosstermKeys, &mut controller);
        session.restore()?;

        result
    }

    /// Poll keys and redraw on change until quit.
    ///
    /// No key means a short sleep, never a blocking read. Each confirmed
    /// change is drawn and flushed in a single terminal frame.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or drawing fails.
    pub fn run_loop<B, K, C>(
        &self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
        controller: &mut Controller<C>,
    ) -> Result<()>
    where
        B: Backend,
        K: KeySource + ?Sized,
        C: ColorSource,
    {
        let idle = self.config.idle_sleep();

        loop {
            let action = match keys.next_key()? {
                Some(key) => self.input.handle_key(key),
                None => {
                    thread::sleep(idle);
                    Action::None
                }
            };

            match controller.update(action) {
                Update::Quit => return Ok(()),
                Update::Unchanged => {}
                Update::Changed => {
                    terminal.draw(|frame| controller.redraw(frame.buffer_mut()))?;
                }
            }
        }
    }
}
