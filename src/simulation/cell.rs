/// State of a single grid cell.
///
/// Layout: one byte, `Dead = 0` and `Alive = 1`, so a neighbor count is a
/// plain sum of `as u8` casts.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Next state under the B3/S23 rule given the number of live neighbors
    pub fn next(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,                     // Birth
            _ => Cell::Dead, // Under/overpopulation or stays dead
        }
    }

    /// Decode a `#`/`.` character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Alive),
            '.' => Some(Cell::Dead),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
