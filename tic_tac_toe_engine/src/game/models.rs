use serde::{Deserialize, Serialize};
use std::fmt;

/// A row/column pair, both in `0..3`.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    Horizontal,
    Vertical,
    Diagonal,
}

/// A fully occupied line. `line_index` is the row for `Horizontal`, the column
/// for `Vertical`, and 0 (main) or 1 (anti) for `Diagonal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    pub symbol: Symbol,
    pub line_type: LineType,
    pub line_index: usize,
}

impl WinningLine {
    /// The three cells making up this line, in board order.
    pub fn cells(&self) -> [Position; 3] {
        let i = self.line_index;
        match (self.line_type, i) {
            (LineType::Horizontal, _) => [(i, 0), (i, 1), (i, 2)],
            (LineType::Vertical, _) => [(0, i), (1, i), (2, i)],
            (LineType::Diagonal, 0) => [(0, 0), (1, 1), (2, 2)],
            (LineType::Diagonal, _) => [(0, 2), (1, 1), (2, 0)],
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().contains(&pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum RoundResult {
    Ongoing,
    Winner {
        symbol: Symbol,
        line_type: LineType,
        line_index: usize,
    },
    Draw,
}

impl From<WinningLine> for RoundResult {
    fn from(line: WinningLine) -> Self {
        RoundResult::Winner {
            symbol: line.symbol,
            line_type: line.line_type,
            line_index: line.line_index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    pub const SIZE: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Returns `None` for coordinates outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn place(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if cell.is_empty() => {
                *cell = symbol.into();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }

    /// First fully occupied line in scan order: row i then column i for
    /// i = 0..3, then the main diagonal, then the anti-diagonal.
    pub fn detect_win(&self) -> Option<WinningLine> {
        let b = &self.cells;
        let line = |a: Cell, m: Cell, z: Cell| a.symbol().filter(|_| a == m && m == z);
        let win = |symbol, line_type, line_index| WinningLine {
            symbol,
            line_type,
            line_index,
        };

        for i in 0..Self::SIZE {
            if let Some(symbol) = line(b[i][0], b[i][1], b[i][2]) {
                return Some(win(symbol, LineType::Horizontal, i));
            }
            if let Some(symbol) = line(b[0][i], b[1][i], b[2][i]) {
                return Some(win(symbol, LineType::Vertical, i));
            }
        }

        if let Some(symbol) = line(b[0][0], b[1][1], b[2][2]) {
            return Some(win(symbol, LineType::Diagonal, 0));
        }
        if let Some(symbol) = line(b[0][2], b[1][1], b[2][0]) {
            return Some(win(symbol, LineType::Diagonal, 1));
        }

        None
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..Self::SIZE)
            .flat_map(|row| (0..Self::SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col].is_empty())
            .collect()
    }

    /// Whether `symbol` would own a complete line if it were placed at `pos`.
    /// The fill happens on a scratch copy, so `self` is never touched.
    pub fn completes_line(&self, pos: Position, symbol: Symbol) -> bool {
        let mut trial = *self;
        trial.place(pos.0, pos.1, symbol) && trial.has_line_of(symbol)
    }

    fn has_line_of(&self, symbol: Symbol) -> bool {
        let target = Cell::from(symbol);
        let b = &self.cells;
        let owned = |cells: [Cell; 3]| cells.iter().all(|&c| c == target);

        (0..Self::SIZE).any(|i| owned(b[i]) || owned([b[0][i], b[1][i], b[2][i]]))
            || owned([b[0][0], b[1][1], b[2][2]])
            || owned([b[0][2], b[1][1], b[2][0]])
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell.symbol() {
                    Some(symbol) => symbol.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", marks.join(" "))?;
        }
        Ok(())
    }
}
