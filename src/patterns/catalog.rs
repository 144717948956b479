use crate::simulation::Cell;

/// Family a life form belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifeForm {
    StillLife,
    Oscillator,
    Spaceship,
}

/// Rigid rectangular pattern, stored as `#`/`.` rows.
///
/// Dead cells are part of the pattern: a match requires them to be dead in
/// the grid too, which is how the margins around still lifes are expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    rows: &'static [&'static str],
}

impl Pattern {
    pub const fn new(name: &'static str, rows: &'static [&'static str]) -> Self {
        Self { name, rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::from(self.rows[row].as_bytes()[col] == b'#')
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }
}

/// Named group of equivalent pattern variants whose counts are summed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Identifier, e.g. `"blinker"`
    pub name: &'static str,
    /// Human-readable label used in reports
    pub label: &'static str,
    pub kind: LifeForm,
    pub variants: &'static [Pattern],
}

/// Ordered, immutable set of categories scanned every generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The ten reference life forms, in report order
    pub fn reference() -> Self {
        Self {
            categories: REFERENCE_CATEGORIES.to_vec(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ============================================
// Still lifes
// ============================================

const BLOCK: &[Pattern] = &[Pattern::new("block", &["....", ".##.", ".##.", "...."])];

const BEEHIVE: &[Pattern] = &[Pattern::new("beehive", &[".##.", "#..#", ".##."])];

const LOAF: &[Pattern] = &[Pattern::new("loaf", &[".##.", "#..#", ".#.#", "..#."])];

const BOAT: &[Pattern] = &[Pattern::new("boat", &["##.", "#.#", ".#."])];

const TUB: &[Pattern] = &[Pattern::new("tub", &[".#.", "#.#", ".#."])];

// ============================================
// Oscillators
// ============================================

const BLINKER: &[Pattern] = &[
    Pattern::new("blinker-vertical", &[".#.", ".#.", ".#."]),
    Pattern::new("blinker-horizontal", &["...", "###", "..."]),
];

const TOAD: &[Pattern] = &[
    Pattern::new("toad-1", &["..#.", "#..#", "#..#", ".#.."]),
    Pattern::new("toad-2", &["....", ".###", "###.", "...."]),
];

const BEACON: &[Pattern] = &[
    Pattern::new("beacon-1", &["##..", "##..", "..##", "..##"]),
    Pattern::new("beacon-2", &["##..", "#...", "...#", "..##"]),
];

// ============================================
// Spaceships
// ============================================

const GLIDER: &[Pattern] = &[
    Pattern::new("glider-1", &[".#.", "..#", "###"]),
    Pattern::new("glider-2", &["#.#", ".##", ".#."]),
    Pattern::new("glider-3", &["..#", "#.#", ".##"]),
    Pattern::new("glider-4", &["#..", ".##", "##."]),
];

const LIGHTWEIGHT_SPACESHIP: &[Pattern] = &[
    Pattern::new("lwss-1", &["#..#.", "....#", "#...#", ".####"]),
    Pattern::new("lwss-2", &["..##.", "##.##", "####.", ".##.."]),
    Pattern::new("lwss-3", &[".####", "#...#", "....#", "#..#."]),
];

const REFERENCE_CATEGORIES: &[Category] = &[
    Category {
        name: "block",
        label: "Block",
        kind: LifeForm::StillLife,
        variants: BLOCK,
    },
    Category {
        name: "beehive",
        label: "Beehive",
        kind: LifeForm::StillLife,
        variants: BEEHIVE,
    },
    Category {
        name: "loaf",
        label: "Loaf",
        kind: LifeForm::StillLife,
        variants: LOAF,
    },
    Category {
        name: "boat",
        label: "Boat",
        kind: LifeForm::StillLife,
        variants: BOAT,
    },
    Category {
        name: "tub",
        label: "Tub",
        kind: LifeForm::StillLife,
        variants: TUB,
    },
    Category {
        name: "blinker",
        label: "Blinker",
        kind: LifeForm::Oscillator,
        variants: BLINKER,
    },
    Category {
        name: "toad",
        label: "Toad",
        kind: LifeForm::Oscillator,
        variants: TOAD,
    },
    Category {
        name: "beacon",
        label: "Beacon",
        kind: LifeForm::Oscillator,
        variants: BEACON,
    },
    Category {
        name: "glider",
        label: "Glider",
        kind: LifeForm::Spaceship,
        variants: GLIDER,
    },
    Category {
        name: "lightweight-spaceship",
        label: "LW spaceship",
        kind: LifeForm::Spaceship,
        variants: LIGHTWEIGHT_SPACESHIP,
    },
];
