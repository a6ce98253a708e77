//! A decision procedure for classical propositional logic, based on the
//! sequent calculus G3c.
//!
//! Formulas are hash-consed in a `Formulas` store. A `Sequent` is refined by
//! `Rule`s, either automatically by a `Strategy` driven by `search::Search`,
//! or one rule at a time through the goal engine `Prover`.

pub mod calculus;
pub mod error;
pub mod io;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;

pub use error::{Error, Result};
