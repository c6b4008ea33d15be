mod patterns;
mod quantifier;


pub use patterns::{
    detect_patterns, PatternDetector, PatternError, PatternMatches, RunPattern, DROUGHT, FLOOD,
};
pub use quantifier::{RangeUInt, Repeat};
