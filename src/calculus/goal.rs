use crate::error::{Error, Result};
use crate::io::syntax;
use crate::prelude::*;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub struct Goal;

/// `<goal>.<rule>`: a rule by its position in a goal's applicable rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address {
    pub goal: Id<Goal>,
    pub rule: usize,
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || Error::Address { text: text.into() };
        let mut parts = text.trim().splitn(2, '.');
        let goal = parts.next().ok_or_else(invalid)?;
        let rule = parts.next().ok_or_else(invalid)?;
        let goal = goal.parse::<u32>().map_err(|_| invalid())?;
        let rule = rule.parse::<usize>().map_err(|_| invalid())?;
        let goal = Id::from(goal as usize);
        Ok(Self { goal, rule })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.goal, self.rule)
    }
}

/// What a call to `Prover::refine` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refinement {
    /// Stale goal or rule: nothing changed.
    NothingToDo,
    /// The goal was an axiom and is gone.
    Closed,
    /// The goal was replaced by these new goals, in subgoal order.
    Expanded(Vec<Id<Goal>>),
}

struct Entry {
    sequent: Sequent,
    rules: Option<Vec<Rule>>,
}

impl Entry {
    fn new(sequent: Sequent) -> Self {
        let rules = None;
        Self { sequent, rules }
    }
}

fn applicable_rules(sequent: &Sequent) -> Vec<Rule> {
    let mut rules = vec![];
    for kind in FormulaType::DECOMPOSABLE.iter().copied() {
        rules.extend(sequent.left().of_type(kind).filter_map(Rule::left));
        rules.extend(sequent.right().of_type(kind).filter_map(Rule::right));
    }
    if sequent.is_identity_axiom() {
        rules.push(Rule::Axiom);
    }
    rules
}

/// Interactive prover: a set of open goals refined one rule at a time.
pub struct Prover {
    formulas: Formulas,
    goals: BTreeMap<Id<Goal>, Entry>,
    next_goal: Id<Goal>,
}

impl Prover {
    /// A prover whose only goal is the empty sequent.
    pub fn new(formulas: Formulas) -> Self {
        let goals = BTreeMap::new();
        let next_goal = Id::default();
        let mut prover = Self {
            formulas,
            goals,
            next_goal,
        };
        prover.load_sequent(Sequent::default());
        prover
    }

    pub fn formulas(&self) -> &Formulas {
        &self.formulas
    }

    pub fn formulas_mut(&mut self) -> &mut Formulas {
        &mut self.formulas
    }

    /// Drop every goal and restart numbering.
    pub fn reset(&mut self) {
        self.goals.clear();
        self.next_goal = Id::default();
    }

    /// Replace the whole proof state with the single goal 0.
    pub fn load_sequent(&mut self, sequent: Sequent) {
        self.reset();
        let id = self.insert(sequent);
        debug!("loaded goal {}", id);
    }

    /// Parse `text` as a sequent and load it.
    ///
    /// On a syntax error the goals are left as they were.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let sequent = syntax::sequent_in(&mut self.formulas, text)?;
        self.load_sequent(sequent);
        Ok(())
    }

    pub fn goal(&self, id: Id<Goal>) -> Option<&Sequent> {
        self.goals.get(&id).map(|entry| &entry.sequent)
    }

    /// Open goals in increasing id order.
    pub fn goals(&self) -> impl Iterator<Item = (Id<Goal>, &Sequent)> {
        self.goals.iter().map(|(id, entry)| (*id, &entry.sequent))
    }

    pub fn goal_ids(&self) -> impl Iterator<Item = Id<Goal>> + '_ {
        self.goals.keys().copied()
    }

    /// The open goal with the lowest id.
    pub fn first_goal(&self) -> Option<Id<Goal>> {
        self.goals.keys().next().copied()
    }

    pub fn num_goals(&self) -> usize {
        self.goals.len()
    }

    /// Rules applicable to a goal, computed once per goal.
    pub fn applicable_rules(&mut self, id: Id<Goal>) -> Option<&[Rule]> {
        let entry = self.goals.get_mut(&id)?;
        let sequent = &entry.sequent;
        let rules = entry
            .rules
            .get_or_insert_with(|| applicable_rules(sequent));
        Some(rules.as_slice())
    }

    pub fn rule_at(&mut self, address: Address) -> Option<Rule> {
        self.applicable_rules(address.goal)?
            .get(address.rule)
            .copied()
    }

    /// Apply `rule` to goal `id`.
    ///
    /// A goal that does not exist, or a rule not among its applicable rules,
    /// is not an error: nothing happens.
    pub fn refine(&mut self, id: Id<Goal>, rule: Rule) -> Refinement {
        let applicable = self
            .applicable_rules(id)
            .map_or(false, |rules| rules.contains(&rule));
        if !applicable {
            debug!("nothing to do for {} on goal {}", rule.name(), id);
            return Refinement::NothingToDo;
        }

        let entry = match self.goals.remove(&id) {
            Some(entry) => entry,
            None => unreachable!("applicable rule for missing goal"),
        };
        match rule.apply(&self.formulas, &entry.sequent) {
            Application::ClashDetection(status) => {
                debug_assert_eq!(status, Status::Success);
                debug!("closed goal {} by {}", id, rule.name());
                Refinement::Closed
            }
            Application::Decomposition(subgoals) => {
                let children: Vec<_> = subgoals
                    .into_iter()
                    .map(|subgoal| self.insert(subgoal))
                    .collect();
                debug!(
                    "refined goal {} by {} into {:?}",
                    id,
                    rule.name(),
                    children
                );
                Refinement::Expanded(children)
            }
        }
    }

    pub fn refine_at(&mut self, address: Address) -> Refinement {
        match self.rule_at(address) {
            Some(rule) => self.refine(address.goal, rule),
            None => Refinement::NothingToDo,
        }
    }

    /// No goals are left.
    pub fn is_complete(&self) -> bool {
        self.goals.is_empty()
    }

    /// Some goal has no applicable rule, so the proof can never complete.
    pub fn is_exhausted(&mut self) -> bool {
        let ids: Vec<_> = self.goal_ids().collect();
        ids.into_iter().any(|id| {
            self.applicable_rules(id)
                .map_or(false, |rules| rules.is_empty())
        })
    }

    fn insert(&mut self, sequent: Sequent) -> Id<Goal> {
        let id = self.next_goal;
        self.next_goal = id.next();
        self.goals.insert(id, Entry::new(sequent));
        id
    }
}

impl Default for Prover {
    fn default() -> Self {
        Self::new(Formulas::default())
    }
}
