//! Main TUI application state and logic

use super::panes::{
    render_console_pane, render_operations_pane, render_status_bar, render_structures_pane,
    OperationsScrollState,
};
use crate::constants::AUTOPLAY_INTERVAL_MS;
use crate::player::Player;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structures,
    Operations,
    Console,
}

impl FocusedPane {
    /// Move focus to the next pane (structures -> console -> operations)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structures => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Operations,
            FocusedPane::Operations => FocusedPane::Structures,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Structures => FocusedPane::Operations,
            FocusedPane::Console => FocusedPane::Structures,
            FocusedPane::Operations => FocusedPane::Console,
        }
    }
}

/// The main application state
pub struct App {
    pub player: Player,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub structures_scroll: usize,
    pub operations_scroll: OperationsScrollState,
    pub console_scroll: usize,

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
    pub fn new(player: Player) -> Self {
        let status_message = player.trace().title.clone();
        App {
            player,
            focused_pane: FocusedPane::Structures,
            structures_scroll: 0,
            operations_scroll: OperationsScrollState::new(),
            console_scroll: usize::MAX,
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
        let interval = Duration::from_millis(AUTOPLAY_INTERVAL_MS);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= interval {
                if self.player.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.console_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so autoplay keeps ticking
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

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Structures (top) | Console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let position = self.player.history_position();

        render_structures_pane(
            frame,
            left_rows[0],
            self.player.current(),
            self.focused_pane == FocusedPane::Structures,
            &mut self.structures_scroll,
        );

        render_console_pane(
            frame,
            left_rows[1],
            &self.player.console_output(),
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        render_operations_pane(
            frame,
            columns[1],
            self.player.trace().snapshots(),
            position,
            self.focused_pane == FocusedPane::Operations,
            &mut self.operations_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            position,
            self.player.total_snapshots(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.player.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.console_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Structures => {
                    self.structures_scroll = self.structures_scroll.saturating_sub(1);
                }
                FocusedPane::Operations => {
                    self.operations_scroll.offset = self.operations_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Structures => {
                    self.structures_scroll = self.structures_scroll.saturating_add(1);
                }
                FocusedPane::Operations => {
                    self.operations_scroll.offset = self.operations_scroll.offset.saturating_add(1);
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.player.jump_to_end() {
                    Ok(()) => "Jumped to end".to_string(),
                    Err(e) => e.to_string(),
                };
                self.console_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.player.rewind_to_start() {
                    Ok(()) => "Jumped to start".to_string(),
                    Err(e) => e.to_string(),
                };
                self.console_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Take the first step on the next tick
            self.last_play_time = Instant::now()
                .checked_sub(Duration::from_millis(AUTOPLAY_INTERVAL_MS))
                .unwrap_or_else(Instant::now);
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    fn step_forward(&mut self) {
        match self.player.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.console_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    fn step_backward(&mut self) {
        match self.player.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.console_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
