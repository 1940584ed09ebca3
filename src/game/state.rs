//! Simulation state and the tick engine.

use tracing::debug;

use crate::error::LoadError;
use crate::game::{Board, Coord, FoodPolicy, Snake, SnakeId, cell, discover_snakes};

/// Rows of the default scenario board.
const DEFAULT_ROWS: u16 = 18;
/// Columns of the default scenario board.
const DEFAULT_COLS: usize = 20;
/// Row 2 of the default scenario; every other inner row is open floor.
const DEFAULT_SNAKE_ROW: &[u8; DEFAULT_COLS] = b"# d>D    *         #";

/// What happened to one snake during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeOutcome {
    /// The head entered food; the snake grew by one cell.
    Ate,
    /// The head entered open floor; length unchanged.
    Moved,
    /// The head was about to enter a wall, a snake or the board edge.
    Crashed,
    /// The snake was already dead.
    Skipped,
}

/// Per-snake outcomes of one tick, in snake index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, counting from 1.
    pub tick: u64,
    /// Outcome for each snake.
    pub outcomes: Vec<SnakeOutcome>,
}

impl TickReport {
    /// Indices of the snakes that crashed this tick.
    pub fn crashed(&self) -> impl Iterator<Item = SnakeId> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|&(_, &outcome)| outcome == SnakeOutcome::Crashed)
            .map(|(idx, _)| idx)
    }

    /// Number of snakes with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: SnakeOutcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }
}

/// Complete simulation state: the board and the snakes traced on it.
///
/// The state owns both exclusively. Snake paths exist only as symbols in
/// the board; the records hold just their ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    snakes: Vec<Snake>,
    ticks: u64,
}

impl GameState {
    /// Create a state from a board and snake records without tracing.
    ///
    /// The records are trusted as given; use [`GameState::from_board`] to
    /// derive them, or [`check_invariants`](crate::game::check_invariants)
    /// to audit hand-built ones.
    #[must_use]
    pub const fn new(board: Board, snakes: Vec<Snake>) -> Self {
        Self {
            board,
            snakes,
            ticks: 0,
        }
    }

    /// Build a state from a board, tracing every snake from its tail.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownSymbol`] for the first cell outside the
    /// alphabet, or [`LoadError::Trace`] if any tail's chain is malformed or
    /// two paths overlap.
    pub fn from_board(board: Board) -> Result<Self, LoadError> {
        if let Some((at, symbol)) = board.iter_cells().find(|&(_, c)| !cell::is_known(c)) {
            return Err(LoadError::UnknownSymbol {
                at,
                symbol: char::from(symbol),
            });
        }
        let snakes = discover_snakes(&board)?;
        Ok(Self {
            board,
            snakes,
            ticks: 0,
        })
    }

    /// The canonical starting state: a walled 20x18 board, one snake of
    /// length three heading right on row 2, and one food cell ahead of it.
    ///
    /// # Panics
    ///
    /// Never in practice; the rows are fixed and rectangular.
    #[must_use]
    pub fn default_scenario() -> Self {
        let wall = [cell::WALL; DEFAULT_COLS];
        let mut floor = [cell::EMPTY; DEFAULT_COLS];
        floor[0] = cell::WALL;
        floor[DEFAULT_COLS - 1] = cell::WALL;

        let rows: Vec<&[u8]> = (0..DEFAULT_ROWS)
            .map(|row| match row {
                r if r == 0 || r == DEFAULT_ROWS - 1 => &wall[..],
                2 => &DEFAULT_SNAKE_ROW[..],
                _ => &floor[..],
            })
            .collect();

        let board = Board::from_rows(&rows).expect("default scenario rows are rectangular");
        Self {
            board,
            snakes: vec![Snake::new(Coord::new(2, 2), Coord::new(2, 4))],
            ticks: 0,
        }
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// All snakes, in discovery order.
    #[must_use]
    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    /// A snake by index.
    #[must_use]
    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.get(id)
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Snakes still moving.
    pub fn alive_snakes(&self) -> impl Iterator<Item = &Snake> {
        self.snakes.iter().filter(|s| s.alive)
    }

    /// Advance every live snake by one step, in ascending index order.
    ///
    /// Each snake looks at the cell its head is about to enter:
    /// - food: the head advances and the tail stays, then `food` is asked
    ///   to place a replacement;
    /// - a wall, any snake cell or the board edge: the head becomes the
    ///   crashed marker and the snake dies;
    /// - anything else: head then tail advance one cell.
    ///
    /// Earlier snakes move first, so a later snake sees their new cells.
    pub fn tick<F: FoodPolicy + ?Sized>(&mut self, food: &mut F) -> TickReport {
        let outcomes = (0..self.snakes.len())
            .map(|id| self.advance_snake(id, food))
            .collect();
        self.ticks += 1;
        TickReport {
            tick: self.ticks,
            outcomes,
        }
    }

    /// Apply one snake's transition for this tick.
    fn advance_snake<F: FoodPolicy + ?Sized>(
        &mut self,
        id: SnakeId,
        food: &mut F,
    ) -> SnakeOutcome {
        let snake = self.snakes[id];
        if !snake.alive {
            return SnakeOutcome::Skipped;
        }

        match self.next_square(id) {
            Some(cell::FOOD) => {
                self.move_head(id);
                let placed = food.place_food(&mut self.board);
                debug!(snake = id, head = %self.snakes[id].head, ?placed, "snake ate");
                SnakeOutcome::Ate
            }
            Some(symbol) if symbol != cell::WALL && !cell::is_snake(symbol) => {
                self.move_head(id);
                self.move_tail(id);
                SnakeOutcome::Moved
            }
            _ => {
                self.board.set(snake.head, cell::CRASHED);
                self.snakes[id].crash();
                debug!(snake = id, head = %snake.head, "snake crashed");
                SnakeOutcome::Crashed
            }
        }
    }

    /// The symbol in the cell the snake's head is about to enter.
    ///
    /// `None` if that cell is off the board.
    fn next_square(&self, id: SnakeId) -> Option<u8> {
        let head = self.snakes[id].head;
        let symbol = self.board.get(head)?;
        let next = self.board.step(head, symbol)?;
        self.board.get(next)
    }

    /// Move the head one cell along its direction, leaving a body cell behind.
    fn move_head(&mut self, id: SnakeId) {
        let head = self.snakes[id].head;
        let Some(symbol) = self.board.get(head) else {
            return;
        };
        let Some(next) = self.board.step(head, symbol) else {
            return;
        };

        self.board.set(head, cell::head_to_body(symbol));
        self.board.set(next, symbol);
        self.snakes[id].head = next;
    }

    /// Move the tail one cell along its direction, turning the body cell it
    /// lands on into a tail and clearing the cell it leaves.
    fn move_tail(&mut self, id: SnakeId) {
        let tail = self.snakes[id].tail;
        let Some(symbol) = self.board.get(tail) else {
            return;
        };
        let Some(next) = self.board.step(tail, symbol) else {
            return;
        };
        let Some(body) = self.board.get(next) else {
            return;
        };
        debug_assert!(
            cell::is_body(body),
            "tail of snake {id} at {tail} steps onto {:?}",
            char::from(body)
        );

        self.board.set(tail, cell::EMPTY);
        self.board.set(next, cell::body_to_tail(body));
        self.snakes[id].tail = next;
    }
}
