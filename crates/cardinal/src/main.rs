use std::path::{Path, PathBuf};
use std::time::Duration;

use cardinal_canvas::{DisplaySize, WatchFace, readout};
use cardinal_config::Config;
use cardinal_core::{ClockSource, Face, LocalClock};
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::{info, warn};

mod logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config_path = Config::path().ok();
    let config = load_config(config_path.as_deref())?;
    let log_path = logging::init(&config.log_filter).wrap_err("failed to set up logging")?;
    info!(log = ?log_path, config = ?config_path, "starting cardinal");
    if config_path.is_none() {
        warn!("no home directory, settings will not be saved");
    }

    let app = App::new(config, LocalClock, config_path)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    info!("cardinal stopped");
    result
}

/// Read the configuration file, or use the defaults when there is nowhere to
/// keep one.
fn load_config(path: Option<&Path>) -> color_eyre::Result<Config> {
    match path {
        Some(path) => Config::load_from(path).wrap_err("failed to load configuration"),
        None => Ok(Config::default()),
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App<C> {
    /// Is the application running?
    running: bool,
    /// Source of the time shown on each frame.
    clock: C,
    /// Dial built from the configuration.
    face: Face,
    /// Current settings, written back when one is changed from the keyboard.
    config: Config,
    /// Where to persist the configuration, if anywhere.
    config_path: Option<PathBuf>,
    /// Show the per-hand text readout under the face.
    show_readout: bool,
}

impl<C: ClockSource> App<C> {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, clock: C, config_path: Option<PathBuf>) -> color_eyre::Result<Self> {
        let face = config.face().wrap_err("invalid hand configuration")?;
        Ok(Self {
            running: false,
            clock,
            face,
            config,
            config_path,
            show_readout: false,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.clock.now();
        let geometry = self.face.render(now);
        let color = self.config.theme.color();
        let area = frame.area();

        let readout_height = if self.show_readout { 2 } else { 0 };
        let chunks = Layout::vertical([
            Constraint::Fill(1),                // Watch face
            Constraint::Length(1),              // Digital time
            Constraint::Length(readout_height), // Hand readout
            Constraint::Length(1),              // Help text
        ])
        .split(area);

        let display = DisplaySize {
            width: self.config.display.width,
            height: self.config.display.height,
        };
        let face = WatchFace::new(&self.face, &geometry)
            .size(display)
            .color(color)
            .draw_shapes(self.config.draw_shapes);
        frame.render_widget(face, face_area(chunks[0], display));

        let time = Paragraph::new(now.to_string())
            .style(Style::new().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(time, chunks[1]);

        if self.show_readout {
            let lines: Vec<Line> = readout(&geometry)
                .into_iter()
                .map(|s| Line::from(s).dark_gray())
                .collect();
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[2]);
        }

        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color  ".dark_gray(),
            "s".bold().fg(color),
            " toggle shapes  ".dark_gray(),
            "d".bold().fg(color),
            " readout".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the hands keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // Poll for events with 100ms timeout, well inside the one second tick
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.toggle_shapes(),
            (_, KeyCode::Char('d')) => self.toggle_readout(),
            _ => {}
        }
    }

    /// Cycle through available color themes and remember the choice.
    fn cycle_color_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        info!(theme = self.config.theme.name(), "color theme changed");
        self.persist();
    }

    /// Toggle polygon and circle drawing around the hands.
    fn toggle_shapes(&mut self) {
        self.config.draw_shapes = !self.config.draw_shapes;
        info!(draw_shapes = self.config.draw_shapes, "shape drawing toggled");
        self.persist();
    }

    fn toggle_readout(&mut self) {
        self.show_readout = !self.show_readout;
    }

    /// Write the configuration back; failures are logged, not fatal.
    fn persist(&self) {
        if let Some(path) = &self.config_path
            && let Err(err) = self.config.save_to(path)
        {
            warn!(error = %err, "failed to save configuration");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Largest area inside `area` that keeps the display's aspect ratio.
///
/// Terminal cells are roughly twice as tall as they are wide.
fn face_area(area: Rect, display: DisplaySize) -> Rect {
    let width_for_height =
        u64::from(area.height) * 2 * u64::from(display.width) / u64::from(display.height.max(1));
    let width = width_for_height.min(u64::from(area.width)) as u16;
    let [_, centered, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    centered
}
