//! The drought regex and the run-length DFA describe the same language, so
//! they must agree on whether a sequence contains the pattern at all.

use proptest::prelude::*;
use sequia::RunLengthDFA;
use sequia_re::detect_patterns;

fn readings() -> impl Strategy<Value = String> {
    "[thraxz]{0,40}"
}

#[test]
fn demo_sequences_agree() {
    let mut dfa = RunLengthDFA::new();
    for s in ["xxttthhxx", "ttthh", "ttth", "tttthhhr", "rrxxrxx", "rrxxx", "rrxxxx", "tttthhhh"] {
        assert_eq!(
            !detect_patterns(s).drought.is_empty(),
            dfa.run(s),
            "regex and DFA disagree on '{}'",
            s
        );
    }
}

proptest! {
    #[test]
    fn drought_regex_agrees_with_dfa(s in readings()) {
        let mut dfa = RunLengthDFA::new();
        prop_assert_eq!(!detect_patterns(&s).drought.is_empty(), dfa.run(&s));
    }

    #[test]
    fn matches_are_substrings_in_order(s in readings()) {
        let matches = detect_patterns(&s);
        let mut cursor = 0;
        for m in matches.drought.iter() {
            let found = s[cursor..].find(m.as_str());
            prop_assert!(found.is_some());
            cursor += found.unwrap_or(0) + m.len();
        }
    }
}
