// recognizer for L = { t^n h^n | n >= 1 }
//
// the stack only ever holds one kind of marker, so it is kept as a depth
// counter local to each call

use thiserror::Error;
use tracing::debug;

use crate::alphabet::{symbols, Symbol, SymbolClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("sequence does not start with `t`")]
    MissingLeadingRun { found: Option<Symbol> },
    #[error("more `h` than `t` at offset {position}")]
    Underflow { position: usize },
    #[error("{unmatched} `t` left without a matching `h`")]
    Unbalanced { unmatched: usize },
    #[error("unexpected `{found}` at offset {position}")]
    TrailingInput { position: usize, found: Symbol },
}

#[derive(Debug, Default)]
struct MarkerStack {
    depth: usize,
}

impl MarkerStack {
    fn push(&mut self) {
        self.depth += 1;
    }

    fn pop(&mut self) -> Option<()> {
        self.depth = self.depth.checked_sub(1)?;
        Some(())
    }

    fn is_empty(&self) -> bool {
        self.depth == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedStackPDA;

impl BalancedStackPDA {
    pub fn new() -> Self {
        BalancedStackPDA
    }

    pub fn accepts(&self, sequence: &str) -> bool {
        self.check(sequence).is_ok()
    }

    /// On acceptance returns `n`, the length of the `t` block.
    pub fn check(&self, sequence: &str) -> Result<usize, Rejection> {
        let result = Self::scan(sequence);
        match &result {
            Ok(n) => debug!(sequence, n, "pda accepted"),
            Err(rejection) => debug!(sequence, %rejection, "pda rejected"),
        }
        result
    }

    fn scan(sequence: &str) -> Result<usize, Rejection> {
        let mut input = symbols(sequence).peekable();
        let mut stack = MarkerStack::default();
        let mut pushed = 0;

        while input.next_if(|(_, s)| s.class() == SymbolClass::T).is_some() {
            stack.push();
            pushed += 1;
        }

        while let Some((position, _)) = input.next_if(|(_, s)| s.class() == SymbolClass::H) {
            if stack.pop().is_none() {
                return Err(Rejection::Underflow { position });
            }
        }

        let rest = input.next();
        if pushed == 0 {
            return Err(Rejection::MissingLeadingRun {
                found: rest.map(|(_, s)| s),
            });
        }
        if !stack.is_empty() {
            return Err(Rejection::Unbalanced {
                unmatched: stack.depth,
            });
        }
        match rest {
            Some((position, found)) => Err(Rejection::TrailingInput { position, found }),
            None => Ok(pushed),
        }
    }
}
