use std::fmt;

/// A single code peg color.
///
/// The nine colors are ordered; each difficulty plays with a prefix of this
/// list. Every color has a one-letter code for text entry (e.g. `ROYG`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Salmon,
    Brown,
    Black,
}

impl Peg {
    pub const ALL: [Peg; 9] = [
        Peg::Red,
        Peg::Orange,
        Peg::Yellow,
        Peg::Green,
        Peg::Blue,
        Peg::Purple,
        Peg::Salmon,
        Peg::Brown,
        Peg::Black,
    ];

    pub fn code(self) -> char {
        match self {
            Peg::Red => 'R',
            Peg::Orange => 'O',
            Peg::Yellow => 'Y',
            Peg::Green => 'G',
            Peg::Blue => 'B',
            Peg::Purple => 'P',
            Peg::Salmon => 'S',
            Peg::Brown => 'N',
            Peg::Black => 'K',
        }
    }

    pub fn from_code(c: char) -> Option<Peg> {
        match c.to_ascii_uppercase() {
            'R' => Some(Peg::Red),
            'O' => Some(Peg::Orange),
            'Y' => Some(Peg::Yellow),
            'G' => Some(Peg::Green),
            'B' => Some(Peg::Blue),
            'P' => Some(Peg::Purple),
            'S' => Some(Peg::Salmon),
            'N' => Some(Peg::Brown),
            'K' => Some(Peg::Black),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Peg::Red => "red",
            Peg::Orange => "orange",
            Peg::Yellow => "yellow",
            Peg::Green => "green",
            Peg::Blue => "blue",
            Peg::Purple => "purple",
            Peg::Salmon => "salmon",
            Peg::Brown => "brown",
            Peg::Black => "black",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The ordered set of colors available for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pegs: Vec<Peg>,
}

impl Palette {
    pub fn new(pegs: Vec<Peg>) -> Self {
        Self { pegs }
    }

    /// The first `size` colors of the standard nine-color list.
    pub fn standard(size: usize) -> Self {
        let size = size.min(Peg::ALL.len());
        Self {
            pegs: Peg::ALL[..size].to_vec(),
        }
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    pub fn contains(&self, peg: Peg) -> bool {
        self.pegs.contains(&peg)
    }

    /// One-letter legend, e.g. `R=red O=orange ...`.
    pub fn legend(&self) -> String {
        self.pegs
            .iter()
            .map(|p| format!("{}={}", p.code(), p.name()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
