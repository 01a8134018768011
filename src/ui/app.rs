use crate::error::MoveError;
use crate::game::{GameEngine, Outcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{info, warn};

/// Terminal front-end for one session. Holds the current game and turns key
/// presses into drops.
pub struct App {
    engine: GameEngine,
    initial: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// `engine` is also the state a restart returns to.
    pub fn new(engine: GameEngine) -> Self {
        let selected_column = engine.board().width() / 2;
        App {
            initial: engine.clone(),
            engine,
            selected_column, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last_column = self.engine.board().width() - 1;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < last_column {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = (c as usize) - ('1' as usize);
                if column <= last_column {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.engine = self.initial.clone();
                self.selected_column = self.engine.board().width() / 2;
                self.message = Some("New game started!".to_string());
                info!("game restarted");
            }
            _ => {}
        }
    }

    /// Drop the current player's piece and describe the result
    fn drop_piece(&mut self, column: usize) {
        match self.engine.drop_piece(column) {
            Ok(Outcome::Continue { .. }) => {}
            Ok(Outcome::Win { winner, .. }) => {
                let label = self.engine.player(winner).label();
                self.message = Some(format!("{winner} ({label}) wins! Press 'r' to restart."));
            }
            Ok(Outcome::Tie { .. }) => {
                self.message = Some("It's a tie! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                warn!(column, error = %err, "move rejected");
                self.message = Some(match err {
                    MoveError::GameOver => "Game over! Press 'r' to restart.".to_string(),
                    MoveError::ColumnFull { .. } => "Column is full!".to_string(),
                    other => other.to_string(),
                });
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}
