use std::{thread::sleep, time::{Duration, Instant}};

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use crossterm::style::Color;
use log::{debug, info};

use wrapsnake::{Cell, Direction::{*, self}, Engine, Occupant, OccupantKind, StepOutcome};

use crate::term::{Coords, Glyph, TermManager};

const POLL_INTERVAL_MS: u64 = 5;

// Terminal characters are taller than wide, so vertical moves get more time
const VERTICAL_STRETCH: f64 = 1.35;

const SNAKE_BODY: Glyph = Glyph::new('█', Color::Green);
const FOOD: Glyph = Glyph::new('O', Color::Red);

pub enum Flow {
    Continue,
    Quit,
}

pub struct SnakeGame {
    engine: Engine,
    term: TermManager,
    tick_interval: Duration,
    paused: bool,
}

impl SnakeGame {
    pub fn new(engine: Engine, term: TermManager, tick_interval: Duration) -> Self {
        SnakeGame { engine, term, tick_interval, paused: false }
    }

    pub fn show_intro(&mut self) -> Result<Flow> {
        let lines = &[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Continue)
    }

    /// Runs the board until the player quits. Crashes restart the snake in place.
    pub fn play(&mut self) -> Result<()> {
        self.redraw()?;

        let mut dir_change: Option<Direction> = None;
        let mut last_step = Instant::now();

        loop {
            sleep(Duration::from_millis(POLL_INTERVAL_MS));

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => return Ok(()),
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => dir_change = Some(Up),
                        KeyCode::Char('a') | KeyCode::Left => dir_change = Some(Left),
                        KeyCode::Char('s') | KeyCode::Down => dir_change = Some(Down),
                        KeyCode::Char('d') | KeyCode::Right => dir_change = Some(Right),
                        KeyCode::Esc => self.toggle_pause()?,
                        _ => {}
                    }
                }
            }

            if self.paused || last_step.elapsed() < self.step_interval() {
                continue;
            }
            last_step = Instant::now();

            let length = self.engine.length();
            let outcome = self.engine.tick(dir_change.take());

            if outcome.collided {
                if let Flow::Quit = self.crashed(length)? {
                    return Ok(());
                }
                self.redraw()?;
            } else {
                self.draw_step(&outcome)?;
            }
        }
    }

    pub fn shutdown(&mut self) -> Result<()> {
        self.term.restore()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn step_interval(&self) -> Duration {
        match self.engine.snake().direction() {
            Up | Down => self.tick_interval.mul_f64(VERTICAL_STRETCH),
            Left | Right => self.tick_interval,
        }
    }

    fn crashed(&mut self, length: usize) -> Result<Flow> {
        info!("crashed at length {}", length);

        self.term.show_message(&[
            "Crashed!",
            &*format!("Length: {}", length),
            "",
            "Press any key to play again,",
            "or CTRL+C to quit."
        ])?;

        if is_ctrl_c(&self.term.read_key_blocking()?) {
            return Ok(Flow::Quit);
        }

        self.term.hide_message()?;
        Ok(Flow::Continue)
    }

    fn redraw(&mut self) -> Result<()> {
        let grid = *self.engine.grid();
        self.term.clear()?;
        self.term.draw_borders((grid.width() + 2, grid.height() + 2))?;

        let snake = self.engine.snake().clone();
        let food = *self.engine.food();
        self.draw_occupant(&snake)?;
        self.draw_occupant(&food)?;
        self.term.print_at(screen_pos(snake.head()), head_glyph(snake.direction()))?;

        self.term.flush()?;
        Ok(())
    }

    fn draw_step(&mut self, outcome: &StepOutcome) -> Result<()> {
        if self.engine.length() > 1 {
            self.term.print_at(screen_pos(outcome.previous_head), SNAKE_BODY)?;
        }

        if let Some(tail) = outcome.vacated {
            self.term.print_at(screen_pos(tail), Glyph::BLANK)?;
        }

        let direction = self.engine.snake().direction();
        self.term.print_at(screen_pos(outcome.head), head_glyph(direction))?;

        if outcome.ate {
            let food = self.engine.food().position();
            debug!("length {}, next food at {}", self.engine.length(), food);
            self.term.print_at(screen_pos(food), FOOD)?;
        }

        self.term.flush()?;
        Ok(())
    }

    fn draw_occupant(&mut self, occupant: &dyn Occupant) -> Result<()> {
        let glyph = match occupant.kind() {
            OccupantKind::Snake => SNAKE_BODY,
            OccupantKind::Food => FOOD,
        };

        for cell in occupant.cells() {
            self.term.print_at(screen_pos(*cell), glyph)?;
        }

        Ok(())
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

/// Grid cells sit inside a one-character border.
fn screen_pos(cell: Cell) -> Coords {
    (cell.col + 1, cell.row + 1)
}

fn head_glyph(direction: Direction) -> Glyph {
    let ch = match direction {
        Up => '^',
        Down => 'v',
        Left => '<',
        Right => '>',
    };
    Glyph::new(ch, Color::Green)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
