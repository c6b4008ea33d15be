pub mod alphabet;
pub mod dfa;
pub mod graph;
mod pda;


pub use alphabet::{Symbol, SymbolClass};
pub use dfa::{RunLengthDFA, State, TransitionTable};
pub use pda::{BalancedStackPDA, Rejection};
