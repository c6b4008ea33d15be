use std::fmt::Display;

// upper bound of a repetition; `Infinite` is an open range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeUInt {
    Finite(u32),
    Infinite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Repeat {
    pub low: u32,
    pub high: RangeUInt,
}

impl Repeat {
    pub const fn at_least(low: u32) -> Repeat {
        Repeat {
            low,
            high: RangeUInt::Infinite,
        }
    }

    pub const fn between(low: u32, high: u32) -> Repeat {
        Repeat {
            low,
            high: RangeUInt::Finite(high),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self.high {
            RangeUInt::Finite(high) => self.low <= high,
            RangeUInt::Infinite => true,
        }
    }
}

// renders as a regex counted repetition
impl Display for Repeat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.high {
            RangeUInt::Finite(high) if high == self.low => write!(f, "{{{}}}", self.low),
            RangeUInt::Finite(high) => write!(f, "{{{},{}}}", self.low, high),
            RangeUInt::Infinite => write!(f, "{{{},}}", self.low),
        }
    }
}
