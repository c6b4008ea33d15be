use serde::Serialize;
use sequia::{BalancedStackPDA, RunLengthDFA};
use sequia_re::{PatternDetector, PatternMatches};

pub const DEMO_SEQUENCES: &[&str] = &[
    "xxttthhxx", "ttthh", "ttth", "tttthhhr", "rrxxrxx", "rrxxx", "rrxxxx", "tttthhhh",
];

pub const PDA_DEMO_SEQUENCES: &[&str] = &["th", "tthh", "ttthhh", "tth", "thh", "xth"];

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub sequence: String,
    #[serde(flatten)]
    pub matches: PatternMatches,
    pub dfa_accepts: bool,
    pub dfa_accepted_at: Option<usize>,
    pub pda_accepts: bool,
    pub pda_rejection: Option<String>,
}

pub struct Analyzer {
    detector: PatternDetector,
    dfa: RunLengthDFA,
    pda: BalancedStackPDA,
}

impl Analyzer {
    pub fn new(detector: PatternDetector) -> Self {
        Self {
            detector,
            dfa: RunLengthDFA::new(),
            pda: BalancedStackPDA::new(),
        }
    }

    pub fn analyze(&mut self, sequence: &str) -> Analysis {
        let matches = self.detector.detect(sequence);
        let dfa_accepted_at = self.dfa.find(sequence);
        let pda_result = self.pda.check(sequence);

        Analysis {
            sequence: sequence.to_string(),
            matches,
            dfa_accepts: dfa_accepted_at.is_some(),
            dfa_accepted_at,
            pda_accepts: pda_result.is_ok(),
            pda_rejection: pda_result.err().map(|r| r.to_string()),
        }
    }
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "yes"
    } else {
        "no"
    }
}

pub fn render_text(analyses: &[Analysis]) -> String {
    let mut out = String::new();
    for a in analyses {
        out.push_str(&format!(
            "{}: drought {:?}, flood {:?}, dfa {}",
            a.sequence,
            a.matches.drought,
            a.matches.flood,
            yes_no(a.dfa_accepts)
        ));
        if let Some(end) = a.dfa_accepted_at {
            out.push_str(&format!(" (at {})", end));
        }
        out.push_str(&format!(", pda {}", yes_no(a.pda_accepts)));
        if let Some(reason) = &a.pda_rejection {
            out.push_str(&format!(" ({})", reason));
        }
        out.push('\n');
    }
    out
}

// the three sections of the demo: regex matches, DFA verdicts, PDA verdicts
pub fn render_demo(analyzer: &mut Analyzer) -> String {
    let mut out = String::from("=== Pattern detection ===\n");
    for s in DEMO_SEQUENCES {
        let a = analyzer.analyze(s);
        out.push_str(&format!(
            "{}: drought {:?}, flood {:?}\n",
            a.sequence, a.matches.drought, a.matches.flood
        ));
    }

    out.push_str("\n=== Run-length DFA ===\n");
    for s in DEMO_SEQUENCES {
        let a = analyzer.analyze(s);
        out.push_str(&format!("{}: drought pattern {}\n", a.sequence, yes_no(a.dfa_accepts)));
    }

    out.push_str("\n=== Balanced stack PDA ===\n");
    for s in PDA_DEMO_SEQUENCES {
        let a = analyzer.analyze(s);
        out.push_str(&format!("{}: accepted {}\n", a.sequence, yes_no(a.pda_accepts)));
    }
    out
}
