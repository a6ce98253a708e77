use crate::prelude::*;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

/// A rule of G3c, together with its principal formula.
///
/// ```text
///   A, B, S => T            S => A, T   S => B, T
///  ------------- L-AND     --------------------- R-AND
///   A & B, S => T              S => A & B, T
///
///   A, S => T   B, S => T      S => A, B, T
///  --------------------- L-OR --------------- R-OR
///       A | B, S => T          S => A | B, T
///
///   S => A, T   B, S => T      A, S => B, T
///  --------------------- L-IMP --------------- R-IMP
///      A -> B, S => T          S => A -> B, T
///
///   S => A, T                  A, S => T
///  ----------- L-NOT          ----------- R-NOT
///   ~A, S => T                 S => ~A, T
/// ```
///
/// `Axiom` closes `A, S => A, T`, `false, S => T` and `S => true, T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    LeftAnd(Formula),
    RightAnd(Formula),
    LeftOr(Formula),
    RightOr(Formula),
    LeftImplies(Formula),
    RightImplies(Formula),
    LeftNot(Formula),
    RightNot(Formula),
    Axiom,
}

/// Outcome of the clash-detection rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no such subgoal")]
pub struct NoSubgoal;

/// The ordered conclusions of a regular rule.
#[derive(Clone, Debug)]
pub struct Subgoals {
    sequents: Vec<Sequent>,
}

impl Subgoals {
    pub fn len(&self) -> usize {
        self.sequents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequents.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Sequent, NoSubgoal> {
        self.sequents.get(index).ok_or(NoSubgoal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequent> {
        self.sequents.iter()
    }
}

impl IntoIterator for Subgoals {
    type Item = Sequent;
    type IntoIter = std::vec::IntoIter<Sequent>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequents.into_iter()
    }
}

pub enum Application {
    Decomposition(Subgoals),
    ClashDetection(Status),
}

impl Rule {
    /// The left rule decomposing `principal`, if its type has one.
    pub fn left(principal: Formula) -> Option<Self> {
        match principal.kind() {
            FormulaType::And => Some(Rule::LeftAnd(principal)),
            FormulaType::Or => Some(Rule::LeftOr(principal)),
            FormulaType::Implies => Some(Rule::LeftImplies(principal)),
            FormulaType::Not => Some(Rule::LeftNot(principal)),
            FormulaType::Atomic | FormulaType::Eq => None,
        }
    }

    /// The right rule decomposing `principal`, if its type has one.
    pub fn right(principal: Formula) -> Option<Self> {
        match principal.kind() {
            FormulaType::And => Some(Rule::RightAnd(principal)),
            FormulaType::Or => Some(Rule::RightOr(principal)),
            FormulaType::Implies => Some(Rule::RightImplies(principal)),
            FormulaType::Not => Some(Rule::RightNot(principal)),
            FormulaType::Atomic | FormulaType::Eq => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::LeftAnd(_) => "LEFT_AND",
            Rule::RightAnd(_) => "RIGHT_AND",
            Rule::LeftOr(_) => "LEFT_OR",
            Rule::RightOr(_) => "RIGHT_OR",
            Rule::LeftImplies(_) => "LEFT_IMPLIES",
            Rule::RightImplies(_) => "RIGHT_IMPLIES",
            Rule::LeftNot(_) => "LEFT_NOT",
            Rule::RightNot(_) => "RIGHT_NOT",
            Rule::Axiom => "AX",
        }
    }

    pub fn principal(self) -> Option<Formula> {
        match self {
            Rule::LeftAnd(principal)
            | Rule::RightAnd(principal)
            | Rule::LeftOr(principal)
            | Rule::RightOr(principal)
            | Rule::LeftImplies(principal)
            | Rule::RightImplies(principal)
            | Rule::LeftNot(principal)
            | Rule::RightNot(principal) => Some(principal),
            Rule::Axiom => None,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Rule::LeftAnd(_)
            | Rule::LeftOr(_)
            | Rule::LeftImplies(_)
            | Rule::LeftNot(_) => Some(Side::Left),
            Rule::RightAnd(_)
            | Rule::RightOr(_)
            | Rule::RightImplies(_)
            | Rule::RightNot(_) => Some(Side::Right),
            Rule::Axiom => None,
        }
    }

    /// The type of formula the rule decomposes.
    pub fn kind(self) -> Option<FormulaType> {
        match self {
            Rule::LeftAnd(_) | Rule::RightAnd(_) => Some(FormulaType::And),
            Rule::LeftOr(_) | Rule::RightOr(_) => Some(FormulaType::Or),
            Rule::LeftImplies(_) | Rule::RightImplies(_) => {
                Some(FormulaType::Implies)
            }
            Rule::LeftNot(_) | Rule::RightNot(_) => Some(FormulaType::Not),
            Rule::Axiom => None,
        }
    }

    pub fn is_axiom(self) -> bool {
        self == Rule::Axiom
    }

    pub fn num_subgoals(self) -> usize {
        match self {
            Rule::RightAnd(_) | Rule::LeftOr(_) | Rule::LeftImplies(_) => 2,
            Rule::LeftAnd(_)
            | Rule::RightOr(_)
            | Rule::RightImplies(_)
            | Rule::LeftNot(_)
            | Rule::RightNot(_) => 1,
            Rule::Axiom => 0,
        }
    }

    /// Apply the rule to `premise`, which is left untouched.
    ///
    /// Panics if the principal formula does not occur on the rule's side.
    pub fn apply(self, formulas: &Formulas, premise: &Sequent) -> Application {
        match self {
            Rule::Axiom => {
                let status = if premise.is_identity_axiom() {
                    Status::Success
                } else {
                    Status::Failure
                };
                Application::ClashDetection(status)
            }
            _ => Application::Decomposition(self.subgoals(formulas, premise)),
        }
    }

    /// The conclusions of a regular rule, branch 0 first.
    ///
    /// Panics on `Axiom`, if the principal formula is not of the rule's type,
    /// or if it does not occur on the rule's side.
    pub fn subgoals(self, formulas: &Formulas, premise: &Sequent) -> Subgoals {
        let principal = self
            .principal()
            .unwrap_or_else(|| panic!("{} has no subgoals", self.name()));
        assert_eq!(
            Some(principal.kind()),
            self.kind(),
            "{} applied to a formula of the wrong type",
            self.name()
        );
        let mut first = premise.clone();
        match self.side() {
            Some(Side::Left) => {
                assert!(
                    premise.left().contains(principal),
                    "{} applied to a formula absent from the left",
                    self.name()
                );
                first.remove_left(principal);
            }
            Some(Side::Right) => {
                assert!(
                    premise.right().contains(principal),
                    "{} applied to a formula absent from the right",
                    self.name()
                );
                first.remove_right(principal);
            }
            None => unreachable!("regular rule without a side"),
        }

        let subformulas = formulas.subformulas(principal);
        debug_assert_eq!(
            subformulas.len(),
            formulas.connective(principal).map_or(0, Connective::arity)
        );
        let sequents = match self {
            Rule::LeftAnd(_) => {
                first.add_left(subformulas[0]);
                first.add_left(subformulas[1]);
                vec![first]
            }
            Rule::RightAnd(_) => {
                let mut second = first.clone();
                first.add_right(subformulas[0]);
                second.add_right(subformulas[1]);
                vec![first, second]
            }
            Rule::LeftOr(_) => {
                let mut second = first.clone();
                first.add_left(subformulas[0]);
                second.add_left(subformulas[1]);
                vec![first, second]
            }
            Rule::RightOr(_) => {
                first.add_right(subformulas[0]);
                first.add_right(subformulas[1]);
                vec![first]
            }
            Rule::LeftImplies(_) => {
                let mut second = first.clone();
                first.add_right(subformulas[0]);
                second.add_left(subformulas[1]);
                vec![first, second]
            }
            Rule::RightImplies(_) => {
                first.add_left(subformulas[0]);
                first.add_right(subformulas[1]);
                vec![first]
            }
            Rule::LeftNot(_) => {
                first.add_right(subformulas[0]);
                vec![first]
            }
            Rule::RightNot(_) => {
                first.add_left(subformulas[0]);
                vec![first]
            }
            Rule::Axiom => unreachable!("axiom has no subgoals"),
        };
        debug_assert_eq!(sequents.len(), self.num_subgoals());
        Subgoals { sequents }
    }
}
