use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::quantifier::Repeat;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid repetition {0:?}")]
    InvalidRepeat(Repeat),
    #[error("failed to compile pattern `{pattern}`")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One symbol repeated, immediately followed by another symbol repeated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunPattern {
    pub lead: char,
    pub lead_repeat: Repeat,
    pub trail: char,
    pub trail_repeat: Repeat,
}

pub const DROUGHT: RunPattern = RunPattern {
    lead: 't',
    lead_repeat: Repeat::at_least(3),
    trail: 'h',
    trail_repeat: Repeat::at_least(2),
};

pub const FLOOD: RunPattern = RunPattern {
    lead: 'r',
    lead_repeat: Repeat::at_least(2),
    trail: 'x',
    trail_repeat: Repeat::at_least(3),
};

impl RunPattern {
    pub fn to_regex_string(&self) -> String {
        let mut buf = [0u8; 4];
        let lead = regex::escape(self.lead.encode_utf8(&mut buf));
        let trail = regex::escape(self.trail.encode_utf8(&mut buf));
        format!("{}{}{}{}", lead, self.lead_repeat, trail, self.trail_repeat)
    }

    pub fn compile(&self) -> Result<Regex, PatternError> {
        for repeat in [self.lead_repeat, self.trail_repeat] {
            if !repeat.is_valid() {
                return Err(PatternError::InvalidRepeat(repeat));
            }
        }

        let pattern = self.to_regex_string();
        Regex::new(&pattern).map_err(|source| PatternError::Compile { pattern, source })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatternMatches {
    pub drought: Vec<String>,
    pub flood: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PatternDetector {
    drought: Regex,
    flood: Regex,
}

impl PatternDetector {
    pub fn new(drought: &RunPattern, flood: &RunPattern) -> Result<Self, PatternError> {
        Ok(Self {
            drought: drought.compile()?,
            flood: flood.compile()?,
        })
    }

    pub fn standard() -> Result<Self, PatternError> {
        Self::new(&DROUGHT, &FLOOD)
    }

    // leftmost, non-overlapping, greedy; same order as they appear
    pub fn detect(&self, sequence: &str) -> PatternMatches {
        let collect = |re: &Regex| -> Vec<String> {
            re.find_iter(sequence).map(|m| m.as_str().to_string()).collect()
        };

        let matches = PatternMatches {
            drought: collect(&self.drought),
            flood: collect(&self.flood),
        };
        debug!(sequence, ?matches, "detected patterns");
        matches
    }
}

static STANDARD: Lazy<PatternDetector> =
    Lazy::new(|| PatternDetector::standard().expect("built-in patterns are valid"));

pub fn detect_patterns(sequence: &str) -> PatternMatches {
    STANDARD.detect(sequence)
}
