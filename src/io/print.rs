use crate::prelude::*;
use std::fmt;

pub struct PrintFormula<'a>(pub &'a Formulas, pub Formula);

impl fmt::Display for PrintFormula<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintFormula(formulas, formula) = *self;
        if let Some(name) = formulas.name(formula) {
            return write!(f, "{}", name);
        }
        let connective = match formulas.connective(formula) {
            Some(connective) => connective,
            None => unreachable!("formula is neither atomic nor compound"),
        };
        match formulas.subformulas(formula) {
            [sub] => {
                write!(f, "{}{}", connective, PrintFormula(formulas, *sub))
            }
            [left, right] => write!(
                f,
                "({} {} {})",
                PrintFormula(formulas, *left),
                connective,
                PrintFormula(formulas, *right)
            ),
            _ => unreachable!("connective of arity above two"),
        }
    }
}

struct PrintCedent<'a>(&'a Formulas, &'a Cedent);

impl fmt::Display for PrintCedent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintCedent(formulas, cedent) = *self;
        let mut first = true;
        for formula in cedent.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", PrintFormula(formulas, formula))?;
            first = false;
        }
        Ok(())
    }
}

/// `L1, L2 => R1, R2`, with no padding around an empty side.
pub struct PrintSequent<'a>(pub &'a Formulas, pub &'a Sequent);

impl fmt::Display for PrintSequent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintSequent(formulas, sequent) = *self;
        if !sequent.left().is_empty() {
            write!(f, "{} ", PrintCedent(formulas, sequent.left()))?;
        }
        write!(f, "=>")?;
        if !sequent.right().is_empty() {
            write!(f, " {}", PrintCedent(formulas, sequent.right()))?;
        }
        Ok(())
    }
}

pub struct PrintRule<'a>(pub &'a Formulas, pub Rule);

impl fmt::Display for PrintRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintRule(formulas, rule) = *self;
        match rule.principal() {
            Some(principal) => write!(
                f,
                "{} {}",
                rule.name(),
                PrintFormula(formulas, principal)
            ),
            None => write!(f, "{}", rule.name()),
        }
    }
}
