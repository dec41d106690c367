use dicehole_core::{OperatorSet, Point};
use dicehole_generator::GeneratedPuzzle;
use dicehole_solver::Solution;

use crate::{
    Frame, GameError, Hole, HoleId, Piece, PieceId, PieceKind, PuzzleLayout, PuzzleOptions,
};

/// Coarse state of a puzzle, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PuzzlePhase {
    /// Nothing is carried and the expression is incomplete.
    Idle,
    /// A piece follows the pointer.
    Carrying,
    /// Every hole is full and the result is known, but it is not the best one.
    Evaluating,
    /// The best achievable result has been formed. Never left once entered.
    Won,
}

/// A dicehole puzzle session.
///
/// The puzzle is the sole owner of its pieces and holes. The shell forwards
/// pointer events ([`on_pointer_down`](Self::on_pointer_down),
/// [`on_pointer_move`](Self::on_pointer_move), [`on_pointer_up`](Self::on_pointer_up))
/// and calls [`update`](Self::update) once per frame, then draws
/// [`frame`](Self::frame).
///
/// The winning distance is computed once, from the dice and operators the
/// puzzle was created with.
#[derive(Debug, Clone)]
pub struct Puzzle {
    goal: i64,
    operators: OperatorSet,
    best: Solution,
    pieces: Vec<Piece>,
    holes: [Hole; 3],
    options: PuzzleOptions,
    carried: Option<PieceId>,
    result: Option<i64>,
    won: bool,
}

impl Puzzle {
    /// Creates a puzzle from a goal, die faces and the available operators.
    ///
    /// Dice are placed at [`PuzzleLayout::die_center`] and one token is created
    /// for each available operator, in the layout's token order.
    ///
    /// # Errors
    ///
    /// - [`GameError::Solver`] if fewer than two dice or no operators are given.
    /// - [`GameError::InvalidLayout`] if the layout fails [`PuzzleLayout::validate`].
    /// - [`GameError::MissingToken`] if an available operator has no token position.
    pub fn new(
        goal: i64,
        dice: &[i64],
        operators: OperatorSet,
        layout: &PuzzleLayout,
        options: PuzzleOptions,
    ) -> Result<Self, GameError> {
        let best = dicehole_solver::find_best(operators, dice, goal)?;
        layout.validate()?;
        if let Some(operator) = operators
            .operators()
            .find(|op| layout.token_center(*op).is_none())
        {
            return Err(GameError::MissingToken { operator });
        }

        let dice_pieces = dice.iter().enumerate().map(|(i, &value)| {
            Piece::new(PieceKind::Die(value), layout.die_center(i), layout.piece_size)
        });
        let token_pieces = layout
            .tokens
            .iter()
            .filter(|(op, _)| operators.contains_operator(*op))
            .map(|&(op, center)| Piece::new(PieceKind::Token(op), center, layout.piece_size));
        let pieces = dice_pieces.chain(token_pieces).collect();
        let holes = HoleId::ALL
            .map(|id| Hole::new(id.kind(), layout.hole_center(id), layout.hole_size));

        log::info!(
            "new puzzle: goal={goal}, dice={dice:?}, best distance={} ({})",
            best.distance,
            best
        );

        Ok(Self {
            goal,
            operators,
            best,
            pieces,
            holes,
            options,
            carried: None,
            result: None,
            won: false,
        })
    }

    /// Creates a puzzle from a generated goal and dice.
    ///
    /// # Errors
    ///
    /// Same as [`Puzzle::new`].
    pub fn from_generated(
        puzzle: &GeneratedPuzzle,
        operators: OperatorSet,
        layout: &PuzzleLayout,
        options: PuzzleOptions,
    ) -> Result<Self, GameError> {
        Self::new(puzzle.goal, &puzzle.dice, operators, layout, options)
    }

    /// Creates a puzzle with all operators, the default layout and default options.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if fewer than two dice are given.
    pub fn with_dice(goal: i64, dice: &[i64]) -> Result<Self, GameError> {
        Self::new(
            goal,
            dice,
            OperatorSet::ALL,
            &PuzzleLayout::default(),
            PuzzleOptions::default(),
        )
    }

    /// Returns the goal.
    #[must_use]
    pub fn goal(&self) -> i64 {
        self.goal
    }

    /// Returns the available operators.
    #[must_use]
    pub fn operators(&self) -> OperatorSet {
        self.operators
    }

    /// Returns the smallest achievable distance to the goal.
    #[must_use]
    pub fn best_distance(&self) -> u64 {
        self.best.distance
    }

    /// Returns an expression that reaches [`best_distance`](Self::best_distance).
    #[must_use]
    pub fn hint(&self) -> &Solution {
        &self.best
    }

    /// Returns the pieces in pointer-down priority order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns a piece.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this puzzle.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Returns the holes, indexed by [`HoleId::index`].
    #[must_use]
    pub fn holes(&self) -> &[Hole; 3] {
        &self.holes
    }

    /// Returns a hole.
    #[must_use]
    pub fn hole(&self, id: HoleId) -> &Hole {
        &self.holes[id.index()]
    }

    /// Returns the piece being carried, if any.
    #[must_use]
    pub fn carried(&self) -> Option<PieceId> {
        self.carried
    }

    /// Returns the expression result, or `None` while any hole is empty.
    #[must_use]
    pub fn result(&self) -> Option<i64> {
        self.result
    }

    /// Returns `true` once the best achievable result has been formed.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> PuzzlePhase {
        if self.won {
            PuzzlePhase::Won
        } else if self.carried.is_some() {
            PuzzlePhase::Carrying
        } else if self.result.is_some() {
            PuzzlePhase::Evaluating
        } else {
            PuzzlePhase::Idle
        }
    }

    /// Returns `true` if every hole holds a value.
    #[must_use]
    pub fn all_holes_filled(&self) -> bool {
        self.holes.iter().all(|hole| !hole.is_empty())
    }

    /// Builds the drawable view of the current state.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::build(self)
    }

    /// Picks up the first piece under `point`.
    ///
    /// Dice are tried before tokens, each in creation order. Nothing happens
    /// while another piece is carried, so at most one piece is ever touched.
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.carried.is_some() {
            return;
        }
        for (i, piece) in self.pieces.iter_mut().enumerate() {
            piece.handle_pointer_down(point);
            if piece.is_touched() {
                let id = PieceId(i);
                log::debug!("picked up {} {id} at {point:?}", piece.kind());
                self.carried = Some(id);
                return;
            }
        }
    }

    /// Moves the carried piece, if any, to `point`.
    pub fn on_pointer_move(&mut self, point: Point) {
        if let Some(id) = self.carried {
            self.pieces[id.index()].set_position(point);
        }
    }

    /// Drops the carried piece and lets pieces snap into holes.
    ///
    /// Every hole is tested against every piece it accepts. The dropped piece
    /// is tried last, so it wins a hole that other pieces also overlap. The
    /// piece stays where the last move left it; `point` is only logged.
    pub fn on_pointer_up(&mut self, point: Point) {
        let Some(released) = self.carried.take() else {
            return;
        };
        self.pieces[released.index()].release();
        log::debug!("released {released} at {point:?}");

        let order = (0..self.pieces.len())
            .filter(|&i| i != released.index())
            .chain([released.index()])
            .collect::<Vec<_>>();
        for id in HoleId::ALL {
            let hole = &mut self.holes[id.index()];
            for &i in &order {
                let piece = &mut self.pieces[i];
                if hole.accepts(piece.kind())
                    && hole.snap_if_close(piece, self.options.snap_to_hole)
                {
                    log::debug!("{} snapped into {id} hole", piece.kind());
                }
            }
        }
    }

    /// Advances the puzzle by one frame.
    ///
    /// Holes without an overlapping piece of the accepted kind are emptied,
    /// the expression is evaluated when every hole is full, and the win is
    /// latched when the result is as close to the goal as possible.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TypeMismatch`] if a hole holds the wrong kind of value
    /// and [`GameError::Arithmetic`] if the expression overflows. The result is
    /// cleared in both cases.
    pub fn update(&mut self) -> Result<(), GameError> {
        for id in HoleId::ALL {
            let hole = &mut self.holes[id.index()];
            let kind = hole.kind();
            let accepted = self.pieces.iter().filter(|piece| kind.accepts(piece.kind()));
            if hole.clear_if_empty(accepted) {
                log::debug!("{id} hole emptied");
            }
        }

        self.result = None;
        if !self.all_holes_filled() {
            return Ok(());
        }
        let result = self.evaluate_holes()?;
        self.result = Some(result);

        if !self.won && self.goal.abs_diff(result) == self.best.distance {
            log::info!(
                "puzzle solved: {} {} {} = {result} (goal {})",
                self.hole(HoleId::Lhs).contents(),
                self.hole(HoleId::Operator).contents(),
                self.hole(HoleId::Rhs).contents(),
                self.goal
            );
            self.won = true;
        }
        Ok(())
    }

    fn evaluate_holes(&self) -> Result<i64, GameError> {
        let number = |id: HoleId| {
            let found = self.hole(id).contents();
            found.as_number().ok_or(GameError::TypeMismatch {
                hole: id,
                expected: "number",
                found,
            })
        };
        let lhs = number(HoleId::Lhs)?;
        let rhs = number(HoleId::Rhs)?;
        let found = self.hole(HoleId::Operator).contents();
        let op = found.as_operator().ok_or(GameError::TypeMismatch {
            hole: HoleId::Operator,
            expected: "operator",
            found,
        })?;
        Ok(op.apply(lhs, rhs)?)
    }
}
