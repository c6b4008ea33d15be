//! Run-length recognizer for the drought pattern: three or more `t`
//! immediately followed by two or more `h`, anywhere in the sequence.
//!
//! The automaton is driven by a single table indexed by `(state, symbol class)`.
//! Every cell names the next state and what happens to each counter, so there
//! is no fallthrough logic in [`RunLengthDFA::step`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::alphabet::{symbols, Symbol, SymbolClass};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub enum State {
    #[default]
    Initial,
    SeenOneT,
    SeenTwoT,
    /// at least three `t` in the current run
    ThresholdT,
    SeenOneH,
    Accept,
}

impl State {
    pub const COUNT: usize = 6;

    pub const ALL: [State; State::COUNT] = [
        State::Initial,
        State::SeenOneT,
        State::SeenTwoT,
        State::ThresholdT,
        State::SeenOneH,
        State::Accept,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_accepting(self) -> bool {
        self == State::Accept
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum CounterOp {
    Keep,
    Clear,
    Set(u32),
    Increment,
}

impl CounterOp {
    pub fn apply(self, value: u32) -> u32 {
        match self {
            CounterOp::Keep => value,
            CounterOp::Clear => 0,
            CounterOp::Set(v) => v,
            CounterOp::Increment => value.saturating_add(1),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Transition {
    pub next: State,
    pub t_count: CounterOp,
    pub h_count: CounterOp,
}

const fn to(next: State, t_count: CounterOp, h_count: CounterOp) -> Transition {
    Transition { next, t_count, h_count }
}

// every way back to Initial clears both counters
const RESET: Transition = to(State::Initial, CounterOp::Clear, CounterOp::Clear);

// rows = states (in `State::ALL` order), columns = symbol classes (t, h, other)
const TRANSITIONS: [[Transition; SymbolClass::COUNT]; State::COUNT] = [
    // Initial
    [to(State::SeenOneT, CounterOp::Set(1), CounterOp::Clear), RESET, RESET],
    // SeenOneT
    [to(State::SeenTwoT, CounterOp::Set(2), CounterOp::Keep), RESET, RESET],
    // SeenTwoT
    [to(State::ThresholdT, CounterOp::Set(3), CounterOp::Keep), RESET, RESET],
    // ThresholdT
    [
        to(State::ThresholdT, CounterOp::Increment, CounterOp::Keep),
        to(State::SeenOneH, CounterOp::Keep, CounterOp::Set(1)),
        RESET,
    ],
    // SeenOneH: a `t` here starts a fresh run with that same `t`
    [
        to(State::SeenOneT, CounterOp::Set(1), CounterOp::Clear),
        to(State::Accept, CounterOp::Keep, CounterOp::Increment),
        RESET,
    ],
    // Accept absorbs everything
    [
        to(State::Accept, CounterOp::Keep, CounterOp::Keep),
        to(State::Accept, CounterOp::Keep, CounterOp::Keep),
        to(State::Accept, CounterOp::Keep, CounterOp::Keep),
    ],
];

#[derive(Debug, Clone, Default)]
pub struct RunLengthDFA {
    state: State,
    t_count: u32,
    h_count: u32,
}

impl RunLengthDFA {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition(state: State, class: SymbolClass) -> Transition {
        TRANSITIONS[state.index()][class.index()]
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn t_count(&self) -> u32 {
        self.t_count
    }

    pub fn h_count(&self) -> u32 {
        self.h_count
    }

    pub fn reset(&mut self) {
        self.state = State::Initial;
        self.t_count = 0;
        self.h_count = 0;
    }

    pub fn step(&mut self, symbol: Symbol) {
        let transition = Self::transition(self.state, symbol.class());
        trace!(from = ?self.state, to = ?transition.next, %symbol, "dfa step");

        self.state = transition.next;
        self.t_count = transition.t_count.apply(self.t_count);
        self.h_count = transition.h_count.apply(self.h_count);
    }

    /// Resets, then consumes `sequence` until the pattern is found.
    /// Returns the byte offset just past the symbol that completed it.
    pub fn find(&mut self, sequence: &str) -> Option<usize> {
        self.reset();
        for (offset, symbol) in symbols(sequence) {
            self.step(symbol);
            if self.state.is_accepting() {
                let end = offset + symbol.to_char().len_utf8();
                debug!(sequence, end, "dfa accepted");
                return Some(end);
            }
        }

        debug!(sequence, state = ?self.state, "dfa rejected");
        None
    }

    pub fn run(&mut self, sequence: &str) -> bool {
        self.find(sequence).is_some()
    }

    pub fn run_symbols<I>(&mut self, input: I) -> bool
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.reset();
        for symbol in input {
            self.step(symbol);
            if self.state.is_accepting() {
                return true;
            }
        }
        false
    }

    pub fn table() -> TransitionTable {
        let rows = State::ALL
            .iter()
            .map(|&state| TransitionRow {
                state,
                on_t: Self::transition(state, SymbolClass::T),
                on_h: Self::transition(state, SymbolClass::H),
                on_other: Self::transition(state, SymbolClass::Other),
            })
            .collect();

        TransitionTable {
            initial_state: State::Initial,
            accept_state: State::Accept,
            rows,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionRow {
    pub state: State,
    pub on_t: Transition,
    pub on_h: Transition,
    pub on_other: Transition,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionTable {
    pub initial_state: State,
    pub accept_state: State,
    pub rows: Vec<TransitionRow>,
}
