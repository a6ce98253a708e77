use crate::io::print::{PrintFormula, PrintRule, PrintSequent};
use crate::prelude::*;
use std::fmt::Display;

/// Hooks called while a derivation is replayed.
pub trait Record {
    fn decomposition(
        &mut self,
        _formulas: &Formulas,
        _goal: &Sequent,
        _rule: Rule,
        _subgoals: &Subgoals,
    ) {
    }

    fn axiom(&mut self, _formulas: &Formulas, _goal: &Sequent) {}

    fn saturated(&mut self, _formulas: &Formulas, _goal: &Sequent) {}

    fn statistic<T: Display>(&mut self, _key: &'static str, _value: T) {}
}

pub struct Silent;
impl Record for Silent {}

/// Numbered proof lines on stdout.
///
/// Goals are numbered as they are created, so a step can name its children
/// before they are printed.
#[derive(Default)]
pub struct PrintProof {
    next: usize,
    pending: Vec<usize>,
}

impl PrintProof {
    fn current(&mut self) -> usize {
        match self.pending.pop() {
            Some(number) => number,
            None => self.fresh(),
        }
    }

    fn fresh(&mut self) -> usize {
        self.next += 1;
        self.next
    }
}

impl Record for PrintProof {
    fn decomposition(
        &mut self,
        formulas: &Formulas,
        goal: &Sequent,
        rule: Rule,
        subgoals: &Subgoals,
    ) {
        let number = self.current();
        let children: Vec<_> =
            (0..subgoals.len()).map(|_| self.fresh()).collect();
        self.pending.extend(children.iter().rev());
        let children = children
            .iter()
            .map(|child| child.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}. {}    [{}] -> {}",
            number,
            PrintSequent(formulas, goal),
            PrintRule(formulas, rule),
            children
        );
    }

    fn axiom(&mut self, formulas: &Formulas, goal: &Sequent) {
        let number = self.current();
        println!("{}. {}    [AX]", number, PrintSequent(formulas, goal));
    }

    fn saturated(&mut self, formulas: &Formulas, goal: &Sequent) {
        println!("% open branch: {}", PrintSequent(formulas, goal));
        for atom in goal.left().distinct().filter(|f| f.is_atomic()) {
            println!("{} = true", PrintFormula(formulas, atom));
        }
        for atom in goal.right().distinct().filter(|f| f.is_atomic()) {
            println!("{} = false", PrintFormula(formulas, atom));
        }
    }

    fn statistic<T: Display>(&mut self, key: &'static str, value: T) {
        println!("% {}: {}", key, value);
    }
}

/// Keeps what it is told instead of printing it.
#[derive(Default)]
pub struct Collect {
    pub rules: Vec<Rule>,
    pub saturated: Vec<Sequent>,
    pub statistics: Vec<(&'static str, String)>,
}

impl Record for Collect {
    fn decomposition(
        &mut self,
        _formulas: &Formulas,
        _goal: &Sequent,
        rule: Rule,
        _subgoals: &Subgoals,
    ) {
        self.rules.push(rule);
    }

    fn axiom(&mut self, _formulas: &Formulas, _goal: &Sequent) {
        self.rules.push(Rule::Axiom);
    }

    fn saturated(&mut self, _formulas: &Formulas, goal: &Sequent) {
        self.saturated.push(goal.clone());
    }

    fn statistic<T: Display>(&mut self, key: &'static str, value: T) {
        self.statistics.push((key, value.to_string()));
    }
}
