use std::fmt::{Debug, Display};

// one reading per character; anything outside the named readings is kept
// verbatim as `Other` so reports can still show it
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    /// `t`, temperature above threshold
    HighTemperature,
    /// `h`, humidity below threshold
    LowHumidity,
    /// `r`
    Rain,
    /// `a`
    Alert,
    /// `x`, reading with no risk
    Normal,
    Other(char),
}

// the automata only ever look at these three
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(usize)]
pub enum SymbolClass {
    T = 0,
    H = 1,
    Other = 2,
}

impl Symbol {
    pub fn from_char(c: char) -> Symbol {
        match c {
            't' => Symbol::HighTemperature,
            'h' => Symbol::LowHumidity,
            'r' => Symbol::Rain,
            'a' => Symbol::Alert,
            'x' => Symbol::Normal,
            c => Symbol::Other(c),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::HighTemperature => 't',
            Symbol::LowHumidity => 'h',
            Symbol::Rain => 'r',
            Symbol::Alert => 'a',
            Symbol::Normal => 'x',
            Symbol::Other(c) => c,
        }
    }

    pub fn class(self) -> SymbolClass {
        match self {
            Symbol::HighTemperature => SymbolClass::T,
            Symbol::LowHumidity => SymbolClass::H,
            Symbol::Rain | Symbol::Alert | Symbol::Normal | Symbol::Other(_) => SymbolClass::Other,
        }
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl SymbolClass {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Debug for SymbolClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SymbolClass::T => "t",
            SymbolClass::H => "h",
            SymbolClass::Other => "other",
        };
        write!(f, "{}", s)
    }
}

pub struct SymbolClassIterator {
    state: usize,
}

impl SymbolClassIterator {
    pub fn new() -> SymbolClassIterator {
        SymbolClassIterator { state: 0 }
    }
}

impl Default for SymbolClassIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SymbolClassIterator {
    type Item = SymbolClass;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.state {
            0 => SymbolClass::T,
            1 => SymbolClass::H,
            2 => SymbolClass::Other,
            _ => return None,
        };
        self.state += 1;
        Some(next)
    }
}

// splits a sequence into symbols, paired with the byte offset of each one
pub fn symbols(sequence: &str) -> impl Iterator<Item = (usize, Symbol)> + '_ {
    sequence.char_indices().map(|(i, c)| (i, Symbol::from_char(c)))
}
