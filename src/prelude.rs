pub use crate::calculus::formula::{Connective, Formula, FormulaType};
pub use crate::calculus::formulas::{Equivalence, Formulas, Negation, Policy};
pub use crate::calculus::goal::{Address, Goal, Prover, Refinement};
pub use crate::calculus::rule::{
    Application, NoSubgoal, Rule, Side, Status, Subgoals,
};
pub use crate::calculus::sequent::{Cedent, Sequent};
pub use crate::calculus::strategy::{Move, Strategy, G3c};
pub use crate::util::id::Id;
