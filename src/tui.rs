//! TUI (Terminal User Interface) module for Mastermind
//!
//! This module provides an interactive terminal board using Ratatui.
//!
//! # Architecture
//! - `TuiRenderer`: core UI component handling rendering and input
//! - Implements `BoardRenderer` so the game loop stays front-end agnostic
//!
//! # State Machine
//! The UI follows these transitions:
//! - `EnteringGuess` → `RoundScored` → back to `EnteringGuess`
//! - Terminal state: `GameOver` (N restarts, ESC quits)

use crate::board::{BoardRenderer, PlayerAction};
use crate::error::GameError;
use crate::feedback::FeedbackResult;
use crate::palette::Peg;
use crate::session::{Outcome, Session};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 1;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn peg_colors(peg: Peg) -> (Color, Color) {
    let bg = match peg {
        Peg::Red => Color::Red,
        Peg::Orange => Color::Rgb(255, 165, 0),
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
        Peg::Blue => Color::Blue,
        Peg::Purple => Color::Rgb(128, 0, 128),
        Peg::Salmon => Color::Rgb(250, 128, 114),
        Peg::Brown => Color::Rgb(139, 69, 19),
        Peg::Black => Color::Black,
    };
    let fg = match peg {
        Peg::Yellow | Peg::Orange | Peg::Salmon => Color::Black,
        _ => Color::White,
    };
    (bg, fg)
}

/// One scored board row: the guess pegs plus its key-peg counts.
#[derive(Debug, Clone)]
struct BoardRow {
    pegs: Vec<Peg>,
    result: FeedbackResult,
}

#[derive(Debug)]
enum TuiState {
    EnteringGuess,
    /// A round was just scored; pause so the player sees the key pegs.
    RoundScored,
    /// Session ended (won or lost) - banner stored in `message`.
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many
/// function arguments.
struct RenderContext<'a> {
    rows: &'a [BoardRow],
    current_input: &'a [Peg],
    state: &'a TuiState,
    code_length: usize,
    max_rounds: usize,
    legend: &'a [Peg],
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI board component.
///
/// Manages terminal rendering, input handling, and board display.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<BoardRow>,
    current_input: Vec<Peg>,
    state: TuiState,
    code_length: usize,
    max_rounds: usize,
    legend: Vec<Peg>,
    message: String,
    error_message: String,
    status: String,
}

impl TuiRenderer {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiRenderer::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            current_input: Vec::new(),
            state: TuiState::EnteringGuess,
            code_length: 0,
            max_rounds: 0,
            legend: Vec::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            state: &self.state,
            code_length: self.code_length,
            max_rounds: self.max_rounds,
            legend: &self.legend,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(16), // Board rows
                Constraint::Min(6),     // Info panel (legend, messages)
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("MASTERMIND")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title("Board")
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        // A short terminal can collapse the board chunk entirely.
        let available_rows = (inner.height / ROW_SPACING) as usize;
        if available_rows == 0 {
            return;
        }
        let showing_current_input =
            matches!(ctx.state, TuiState::EnteringGuess) && ctx.rows.len() < ctx.max_rounds;
        let rows_needed = if showing_current_input {
            ctx.rows.len() + 1
        } else {
            ctx.rows.len()
        };

        // Prioritize most recent rows when space runs out.
        let skip_count = rows_needed.saturating_sub(available_rows);

        for (display_index, row) in ctx.rows.iter().skip(skip_count).enumerate() {
            Self::render_board_row(f, row, display_index, inner, skip_count, ctx.code_length);
        }

        if showing_current_input {
            let display_row = if rows_needed > available_rows {
                available_rows.saturating_sub(1)
            } else {
                ctx.rows.len() - skip_count
            };
            Self::render_current_input(
                f,
                display_row,
                inner,
                ctx.current_input,
                ctx.code_length,
                ctx.rows.len(),
            );
        }
    }

    fn peg_spans(pegs: &[Peg]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for &peg in pegs {
            let (bg, fg) = peg_colors(peg);
            spans.push(Span::styled(
                format!(" {} ", peg.code()),
                Style::default().fg(fg).bg(bg),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board_row(
        f: &mut Frame,
        row: &BoardRow,
        display_index: usize,
        area: Rect,
        skip_count: usize,
        code_length: usize,
    ) {
        let y = area.y + (display_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let round_number = display_index + skip_count + 1;
        let mut spans = vec![Span::raw(format!("{round_number:>3}. "))];
        spans.extend(Self::peg_spans(&row.pegs));

        // Key pegs: filled dot per exact match, open dot per partial.
        let keys: String = std::iter::repeat('●')
            .take(row.result.exact)
            .chain(std::iter::repeat('○').take(row.result.partial))
            .collect();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(keys, Style::default().fg(Color::White)));
        if row.result.is_win(code_length) {
            spans.push(Span::styled("  cracked!", WIN_STYLE));
        }

        Self::render_line(f, area, y, spans);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_current_input(
        f: &mut Frame,
        display_row: usize,
        area: Rect,
        current_input: &[Peg],
        code_length: usize,
        rows_played: usize,
    ) {
        let y = area.y + (display_row as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw(format!("{:>3}. ", rows_played + 1))];
        spans.extend(Self::peg_spans(current_input));
        for _ in current_input.len()..code_length {
            spans.push(Span::styled(
                " _ ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.legend.is_empty() {
            lines.push(Line::from(vec![Span::styled("Colors:", HEADER_STYLE)]));
            let mut spans = vec![Span::raw("  ")];
            spans.extend(Self::peg_spans(ctx.legend));
            lines.push(Line::from(spans));
            let names = ctx
                .legend
                .iter()
                .map(|p| format!("{}={}", p.code(), p.name()))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(Line::from(format!("  {names}")));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(format!(
            "Rounds used: {} / {}",
            ctx.rows.len(),
            ctx.max_rounds
        )));
        lines.push(Line::from("Key pegs: ● exact   ○ partial"));
        lines.push(Line::from(""));

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                ctx.error_message,
                ERROR_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type color letters | BACKSPACE: Remove | ENTER: Check | ESC: Quit"
            }
            TuiState::RoundScored => "Press any key for the next round | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<PlayerAction>, io::Error> {
        let poll_result = event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))?;
        if !poll_result {
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, etc.)
        match event {
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Ok(None),
            Event::Resize(_, _) => {
                debug_log!("handle_input() - Ignoring resize event");
                Ok(None)
            }
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to
                // avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }

                // Filter out garbage characters from terminal escape
                // sequences (alt-tab shows up as replacement characters)
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}'
                        || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD
                            && c != '\t'
                            && c != '\n'
                            && c != '\r')
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }

                match &self.state {
                    TuiState::EnteringGuess => Ok(self.handle_guess_input(key)),
                    TuiState::RoundScored => Ok(self.handle_round_scored_input(key)),
                    TuiState::GameOver => Ok(Self::handle_game_over_input(key)),
                }
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        self.error_message.clear();

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if Self::has_modifier_keys(&key) {
                    debug_log!(
                        "handle_guess_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                    return None;
                }
                match Peg::from_code(c) {
                    Some(peg) if self.legend.contains(&peg) => {
                        if self.current_input.len() < self.code_length {
                            self.current_input.push(peg);
                            info_log!("handle_guess_input() - Placed {}", peg);
                        }
                    }
                    _ => {
                        self.error_message = format!(
                            "'{}' is not one of this game's colors",
                            c.to_ascii_uppercase()
                        );
                    }
                }
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == self.code_length => {
                let pegs = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess");
                return Some(PlayerAction::Guess(pegs));
            }
            KeyCode::Enter => {
                self.error_message = format!(
                    "Place all {} pegs before checking ({} placed)",
                    self.code_length,
                    self.current_input.len()
                );
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(PlayerAction::Exit);
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only color letters are allowed! ('{c}')");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_round_scored_input(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        if key.code == KeyCode::Esc {
            Some(PlayerAction::Exit)
        } else {
            self.state = TuiState::EnteringGuess;
            self.status = "Enter your next guess".to_string();
            None
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<PlayerAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(PlayerAction::NewGame),
            KeyCode::Esc => Some(PlayerAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

impl BoardRenderer for TuiRenderer {
    fn display_session_start(&mut self, session: &Session) {
        let config = session.config();
        self.rows.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.code_length = config.code_length;
        self.max_rounds = config.max_rounds;
        self.legend = config.palette.pegs().to_vec();
        self.message = if config.allow_duplicates {
            "The secret may repeat colors.".to_string()
        } else {
            "The secret has no repeated colors.".to_string()
        };
        self.error_message.clear();
        self.status = format!(
            "New game - crack the {}-peg code in {} rounds",
            config.code_length, config.max_rounds
        );
        self.draw_or_log();
    }

    fn read_action(&mut self, _session: &Session) -> Option<PlayerAction> {
        info_log!("read_action() - Starting input loop");
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(PlayerAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {
                    // No action yet (peg placed or key ignored), keep looping
                }
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(PlayerAction::Exit);
                }
            }
        }
    }

    fn display_feedback(&mut self, session: &Session, result: FeedbackResult) {
        if let Some(round) = session.rounds().last() {
            let pegs: Vec<Peg> = round.guess().iter().copied().flatten().collect();
            self.rows.push(BoardRow { pegs, result });
        }
        if !session.outcome().is_terminal() {
            self.state = TuiState::RoundScored;
            self.status = format!(
                "{} exact, {} partial - {} round(s) left",
                result.exact,
                result.partial,
                session.rounds_remaining()
            );
        }
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, session: &Session, secret: &[Peg]) {
        self.state = TuiState::GameOver;
        let secret_codes: String = secret.iter().map(|p| p.code()).collect();
        match session.outcome() {
            Outcome::Won => {
                self.message = format!(
                    "YOU WIN! Cracked {secret_codes} in {} round(s).",
                    session.rounds_played()
                );
                self.status = "You win!".to_string();
            }
            Outcome::Lost | Outcome::Pending => {
                self.message = format!("GAME OVER. The secret was {secret_codes}.");
                self.status = "Out of rounds".to_string();
            }
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
