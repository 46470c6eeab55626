//! Pure domain operations: no logging, no I/O.

pub mod calculator;
pub mod greeting;

pub use calculator::{CalcError, calculate};
pub use greeting::{GreetError, greet};
