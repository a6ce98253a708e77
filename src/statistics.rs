use crate::io::record::Record;
use crate::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct Statistics {
    problem_formulas: usize,
    problem_connectives: usize,
    interned_formulas: usize,
    applications: BTreeMap<&'static str, usize>,
    failed_axioms: usize,
    created_goals: usize,
    closed_branches: usize,
    saturated_branches: usize,
    max_open_goals: usize,
    max_branch_depth: usize,
}

impl Statistics {
    pub fn new(formulas: &Formulas, problem: &Sequent) -> Self {
        let problem_formulas = problem.left().len() + problem.right().len();
        let problem_connectives = problem
            .left()
            .iter()
            .chain(problem.right().iter())
            .map(|formula| formulas.connectives(formula))
            .sum();
        let interned_formulas = formulas.len();
        Self {
            problem_formulas,
            problem_connectives,
            interned_formulas,
            ..Self::default()
        }
    }

    pub fn record<R: Record>(&self, record: &mut R) {
        record.statistic("problem formulas", self.problem_formulas);
        record.statistic("problem connectives", self.problem_connectives);
        record.statistic("interned formulas", self.interned_formulas);
        for (name, count) in &self.applications {
            record.statistic(*name, *count);
        }
        record.statistic("failed axioms", self.failed_axioms);
        record.statistic("created goals", self.created_goals);
        record.statistic("closed branches", self.closed_branches);
        record.statistic("saturated branches", self.saturated_branches);
        record.statistic("max open goals", self.max_open_goals);
        record.statistic("max branch depth", self.max_branch_depth);
    }

    pub fn problem_formulas(&self) -> usize {
        self.problem_formulas
    }

    pub fn problem_connectives(&self) -> usize {
        self.problem_connectives
    }

    pub fn interned_formulas(&self) -> usize {
        self.interned_formulas
    }

    pub fn rule_applications(&self) -> usize {
        self.applications.values().sum::<usize>() + self.failed_axioms
    }

    pub fn applications_of(&self, name: &str) -> usize {
        self.applications.get(name).copied().unwrap_or_default()
    }

    pub fn failed_axioms(&self) -> usize {
        self.failed_axioms
    }

    pub fn created_goals(&self) -> usize {
        self.created_goals
    }

    pub fn closed_branches(&self) -> usize {
        self.closed_branches
    }

    pub fn max_open_goals(&self) -> usize {
        self.max_open_goals
    }

    pub fn max_branch_depth(&self) -> usize {
        self.max_branch_depth
    }

    pub(crate) fn increment_applications(&mut self, rule: Rule) {
        *self.applications.entry(rule.name()).or_default() += 1;
    }

    pub(crate) fn increment_failed_axioms(&mut self) {
        self.failed_axioms += 1;
    }

    pub(crate) fn increment_created_goals(&mut self, created: usize) {
        self.created_goals += created;
    }

    pub(crate) fn increment_closed_branches(&mut self) {
        self.closed_branches += 1;
    }

    pub(crate) fn increment_saturated_branches(&mut self) {
        self.saturated_branches += 1;
    }

    pub(crate) fn open_goals(&mut self, open: usize) {
        self.max_open_goals = self.max_open_goals.max(open);
    }

    pub(crate) fn branch_depth(&mut self, depth: usize) {
        self.max_branch_depth = self.max_branch_depth.max(depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::record::Collect;
    use crate::io::syntax::sequent_in;

    #[test]
    fn problem_size() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "a & b, a & b => ~c").unwrap();
        let statistics = Statistics::new(&formulas, &problem);
        assert_eq!(statistics.problem_formulas(), 3);
        assert_eq!(statistics.problem_connectives(), 3);
        // false, true, a, b, c, a & b, ~c
        assert_eq!(statistics.interned_formulas(), 7);

        let mut record = Collect::default();
        statistics.record(&mut record);
        assert_eq!(record.statistics[0], ("problem formulas", "3".into()));
        assert_eq!(record.statistics[2], ("interned formulas", "7".into()));
    }
}
