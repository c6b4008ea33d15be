//! Property-based tests for both recognizers.
//!
//! The DFA is compared against a direct scan for `ttthh`, which is the
//! shortest witness of "three or more `t` then two or more `h`". The PDA is
//! checked against the defining shape of t^n h^n.

use proptest::prelude::*;
use sequia::{BalancedStackPDA, RunLengthDFA};

fn readings() -> impl Strategy<Value = String> {
    "[thraxz]{0,40}"
}

fn is_balanced(s: &str) -> bool {
    let n = s.chars().take_while(|c| *c == 't').count();
    n >= 1 && s.len() == 2 * n && s[n..].chars().all(|c| c == 'h')
}

proptest! {
    #[test]
    fn dfa_finds_the_pattern_iff_it_is_present(s in readings()) {
        let mut dfa = RunLengthDFA::new();
        prop_assert_eq!(dfa.run(&s), s.contains("ttthh"));
    }

    #[test]
    fn dfa_reuse_matches_fresh_instance(first in readings(), second in readings()) {
        let mut shared = RunLengthDFA::new();
        shared.run(&first);
        prop_assert_eq!(shared.run(&second), RunLengthDFA::new().run(&second));
    }

    #[test]
    fn find_ends_right_after_first_witness(s in readings()) {
        let mut dfa = RunLengthDFA::new();
        let expected = s.find("ttthh").map(|i| i + 5);
        prop_assert_eq!(dfa.find(&s), expected);
    }

    #[test]
    fn pda_accepts_exactly_balanced_blocks(s in readings()) {
        prop_assert_eq!(BalancedStackPDA::new().accepts(&s), is_balanced(&s));
    }

    #[test]
    fn equal_blocks_are_accepted(n in 1usize..200) {
        let s = "t".repeat(n) + &"h".repeat(n);
        prop_assert!(BalancedStackPDA::new().accepts(&s));
    }

    #[test]
    fn unequal_blocks_are_rejected(n in 0usize..100, m in 0usize..100) {
        prop_assume!(n != m);
        let s = "t".repeat(n) + &"h".repeat(m);
        prop_assert!(!BalancedStackPDA::new().accepts(&s));
    }
}
