use std::fmt;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// 3x3 grid in row-major order. A plain value: copying it is how the search
/// explores a move without touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses nine cells written as `X`, `O` or `.`/`-`/`_`. Whitespace and
    /// `|` separate rows and are skipped.
    pub fn parse(layout: &str) -> Result<Self, String> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in layout.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                other => return Err(format!("Unexpected board character '{}'", other)),
            };
            if count == CELL_COUNT {
                return Err("Board layout has more than 9 cells".to_string());
            }
            cells[count] = mark;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(format!("Board layout has {} cells, expected 9", count));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| "Position out of bounds".to_string())?;
        *cell = mark;
        Ok(())
    }

    /// Copy of this board with `mark` at `index`. Callers pass indices taken
    /// from `empty_cells`, which are always in range.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Indices of empty cells in ascending order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
