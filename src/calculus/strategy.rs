use crate::prelude::*;

/// What the previous step on a branch was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Start,
    Decomposition,
    ClashDetection,
}

impl Move {
    pub fn of(rule: Rule) -> Self {
        if rule.is_axiom() {
            Move::ClashDetection
        } else {
            Move::Decomposition
        }
    }
}

/// Chooses the next rule for a goal during automatic search.
pub trait Strategy {
    /// `None` means no rule is left: the branch is finished.
    fn next_rule(&self, goal: &Sequent, last: Move) -> Option<Rule>;
}

/// Decompose the left, then the right, then check for an axiom once.
#[derive(Clone, Copy, Debug, Default)]
pub struct G3c;

impl G3c {
    fn left_compound(goal: &Sequent) -> Option<Formula> {
        FormulaType::DECOMPOSABLE
            .iter()
            .find_map(|kind| goal.get_left(*kind))
    }

    fn right_compound(goal: &Sequent) -> Option<Formula> {
        FormulaType::DECOMPOSABLE
            .iter()
            .find_map(|kind| goal.get_right(*kind))
    }
}

impl Strategy for G3c {
    fn next_rule(&self, goal: &Sequent, last: Move) -> Option<Rule> {
        if let Some(principal) = Self::left_compound(goal) {
            return Rule::left(principal);
        }
        if let Some(principal) = Self::right_compound(goal) {
            return Rule::right(principal);
        }
        if last != Move::ClashDetection {
            return Some(Rule::Axiom);
        }
        None
    }
}
