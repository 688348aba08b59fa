use crate::puzzle::{Move, Puzzle, PuzzleError};

/// A puzzle that remembers how to take back every move played on it.
pub struct TrackedPuzzle {
    puzzle: Puzzle,
    // Undo moves, most recent last
    history: Vec<Move>,
    moves_made: usize,
}

impl TrackedPuzzle {
    pub fn new(puzzle: Puzzle) -> Self {
        TrackedPuzzle {
            puzzle,
            history: Vec::new(),
            moves_made: 0,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn into_inner(self) -> Puzzle {
        self.puzzle
    }

    /// Slide the tile at `m` into the blank and record it.
    pub fn play(&mut self, m: Move) -> Result<(), PuzzleError> {
        let undo = self.puzzle.apply_move(m)?;
        self.history.push(undo);
        self.moves_made += 1;
        Ok(())
    }

    /// `play` for a move taken from `legal_moves`.
    pub(crate) fn play_legal(&mut self, m: Move) {
        let undo = self.puzzle.slide(m);
        self.history.push(undo);
        self.moves_made += 1;
    }

    /// Take back the last recorded move. Returns the move that was replayed
    /// to undo it, or None if there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        let undo = self.history.pop()?;
        self.puzzle.slide(undo);
        self.moves_made -= 1;
        Some(undo)
    }

    /// Forget recorded moves without touching the grid.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.moves_made = 0;
    }

    /// Moves played since the last `clear_history`, minus those undone.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
