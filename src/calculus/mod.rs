pub mod formula;
pub mod formulas;
pub mod goal;
pub mod rule;
pub mod sequent;
pub mod strategy;
