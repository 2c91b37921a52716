use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    First,
    Second,
}

impl Owner {
    // Even turns belong to the first player
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Owner::First
        } else {
            Owner::Second
        }
    }

    pub fn other(self) -> Self {
        match self {
            Owner::First => Owner::Second,
            Owner::Second => Owner::First,
        }
    }
}

pub type Cell = Option<Owner>;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Rows may have different lengths, so this stays a Vec of Vecs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Board(Vec<Vec<Cell>>);

impl Board {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Board(rows)
    }

    pub fn empty(rows: usize, cols: usize) -> Self {
        Board(vec![vec![None; cols]; rows])
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.0
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    pub fn col_count(&self, row: usize) -> usize {
        self.0.get(row).map_or(0, Vec::len)
    }

    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.0.get(coord.row)?.get(coord.col).copied()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.row_count() && coord.col < self.col_count(coord.row)
    }

    // Returns a new board; the receiver is left untouched
    pub fn with_piece(&self, coord: Coordinate, owner: Owner) -> Board {
        let mut rows = self.0.clone();
        if let Some(cell) = rows.get_mut(coord.row).and_then(|r| r.get_mut(coord.col)) {
            *cell = Some(owner);
        }
        Board(rows)
    }

    // Row-major
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| (0..cells.len()).map(move |col| Coordinate::new(row, col)))
    }
}

// First player is x, second player is o
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            for cell in row {
                let c = match cell {
                    Some(Owner::First) => 'x',
                    Some(Owner::Second) => 'o',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            if i + 1 < self.0.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
