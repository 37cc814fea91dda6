use crate::ai::HeuristicAi;
use crate::config::AppConfig;
use crate::game::{EventError, GameSession, Player, Stage};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    session: GameSession,
    ai: HeuristicAi,
    selected_column: usize,
    selected_color: Player,
    ai_move_due: Option<Instant>,
    ai_delay: Duration,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let ai = match config.ai.seed {
            Some(seed) => HeuristicAi::seeded(seed),
            None => HeuristicAi::new(),
        };
        App {
            session: GameSession::new(),
            ai,
            selected_column: 3, // Start in middle
            selected_color: Player::Red,
            ai_move_due: None,
            ai_delay: Duration::from_millis(config.ai.delay_ms),
            poll_interval: Duration::from_millis(config.ui.poll_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Perform the delayed AI move once its deadline has passed. The
    /// pause is a deadline checked from the poll loop, so input stays
    /// responsive while the "thinking" time runs.
    fn tick(&mut self) {
        if self.session.stage() != Stage::AiTurn {
            self.ai_move_due = None;
            return;
        }
        let due = *self
            .ai_move_due
            .get_or_insert_with(|| Instant::now() + self.ai_delay);
        if Instant::now() < due {
            return;
        }
        self.ai_move_due = None;

        let ai = &mut self.ai;
        self.session
            .play_ai_move(|board, ai_color, player_color| {
                ai.choose_column(board, ai_color, player_color)
            });
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.session.stage() {
            Stage::ChoosingColor => self.handle_color_choice_key(key),
            Stage::PlayerTurn | Stage::AiTurn => self.handle_turn_key(key),
            Stage::PlayerWon | Stage::AiWon | Stage::Draw => {
                // Any key starts the next game.
                self.session.continue_after_game_end();
                self.selected_column = 3;
                self.selected_color = Player::Red;
            }
        }
    }

    fn handle_color_choice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.selected_color = self.selected_color.other();
            }
            KeyCode::Char('r') => self.session.choose_color(Player::Red),
            KeyCode::Char('y') => self.session.choose_color(Player::Yellow),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.choose_color(self.selected_color);
            }
            _ => {}
        }
    }

    fn handle_turn_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            _ => {}
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        match self.session.choose_column(self.selected_column) {
            Ok(()) => {
                if self.session.stage() == Stage::AiTurn {
                    self.ai_move_due = Some(Instant::now() + self.ai_delay);
                }
            }
            Err(EventError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            // Dropping is simply not available right now (AI's turn).
            Err(EventError::InvalidColumn) | Err(EventError::WrongStage) => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.selected_column,
            self.selected_color,
            &self.message,
        );
    }
}
