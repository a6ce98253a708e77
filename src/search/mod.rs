pub mod derivation;

use crate::prelude::*;
use crate::statistics::Statistics;
use log::{debug, info, trace};

/// Decision reached by a complete search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Provable,
    Unprovable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// Every branch closed: the rules applied, depth-first, branch 0 first.
    Proof(Vec<Rule>),
    /// A branch on which the strategy has nothing left to do.
    Saturated(Sequent),
    /// The step limit was reached first.
    GaveUp,
}

impl SearchResult {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            SearchResult::Proof(_) => Some(Verdict::Provable),
            SearchResult::Saturated(_) => Some(Verdict::Unprovable),
            SearchResult::GaveUp => None,
        }
    }
}

struct Branch {
    goal: Sequent,
    last: Move,
    depth: usize,
}

/// Runs a strategy over every branch of a derivation.
///
/// G3c rules are invertible, so the first saturated branch settles the
/// problem and nothing is ever retracted.
pub struct Search<'formulas, S> {
    formulas: &'formulas Formulas,
    strategy: S,
    step_limit: Option<usize>,
    statistics: Statistics,
}

impl<'formulas, S: Strategy> Search<'formulas, S> {
    pub fn new(formulas: &'formulas Formulas, strategy: S) -> Self {
        let step_limit = None;
        let statistics = Statistics::default();
        Self {
            formulas,
            strategy,
            step_limit,
            statistics,
        }
    }

    pub fn with_step_limit(mut self, step_limit: Option<usize>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn search(&mut self, problem: &Sequent) -> SearchResult {
        self.statistics = Statistics::new(self.formulas, problem);
        let result = self.run(problem);
        match &result {
            SearchResult::Proof(proof) => {
                info!("proof found in {} steps", proof.len())
            }
            SearchResult::Saturated(_) => info!("saturated branch found"),
            SearchResult::GaveUp => info!("step limit reached"),
        }
        result
    }

    fn run(&mut self, problem: &Sequent) -> SearchResult {
        let mut proof = vec![];
        let mut steps = 0;
        let mut open = vec![Branch {
            goal: problem.clone(),
            last: Move::Start,
            depth: 0,
        }];
        self.statistics.increment_created_goals(1);

        while let Some(Branch { goal, last, depth }) = open.pop() {
            let rule = match self.strategy.next_rule(&goal, last) {
                Some(rule) => rule,
                None => {
                    debug!("no rule left at depth {}", depth);
                    self.statistics.increment_saturated_branches();
                    return SearchResult::Saturated(goal);
                }
            };
            if self.step_limit.map_or(false, |limit| steps >= limit) {
                return SearchResult::GaveUp;
            }
            steps += 1;
            let depth = depth + 1;
            self.statistics.branch_depth(depth);
            trace!("step {}: {} at depth {}", steps, rule.name(), depth);

            match rule.apply(self.formulas, &goal) {
                Application::ClashDetection(Status::Success) => {
                    self.statistics.increment_applications(rule);
                    self.statistics.increment_closed_branches();
                    proof.push(rule);
                }
                Application::ClashDetection(Status::Failure) => {
                    self.statistics.increment_failed_axioms();
                    open.push(Branch {
                        goal,
                        last: Move::of(rule),
                        depth,
                    });
                }
                Application::Decomposition(subgoals) => {
                    self.statistics.increment_applications(rule);
                    self.statistics.increment_created_goals(subgoals.len());
                    proof.push(rule);
                    let last = Move::of(rule);
                    open.extend(subgoals.into_iter().rev().map(|goal| {
                        Branch { goal, last, depth }
                    }));
                }
            }
            self.statistics.open_goals(open.len());
        }
        SearchResult::Proof(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::syntax::sequent_in;

    fn search(formulas: &mut Formulas, text: &str) -> SearchResult {
        let problem = sequent_in(formulas, text).unwrap();
        Search::new(formulas, G3c).search(&problem)
    }

    fn names(proof: &[Rule]) -> Vec<&'static str> {
        proof.iter().map(|rule| rule.name()).collect()
    }

    #[test]
    fn identity() {
        let mut formulas = Formulas::default();
        match search(&mut formulas, "p -> p") {
            SearchResult::Proof(proof) => {
                assert_eq!(names(&proof), ["RIGHT_IMPLIES", "AX"])
            }
            other => panic!("expected a proof, got {:?}", other),
        }
    }

    #[test]
    fn conjunction_elimination() {
        let mut formulas = Formulas::default();
        match search(&mut formulas, "p & q => p") {
            SearchResult::Proof(proof) => {
                assert_eq!(names(&proof), ["LEFT_AND", "AX"])
            }
            other => panic!("expected a proof, got {:?}", other),
        }
    }

    #[test]
    fn atoms_only() {
        let mut formulas = Formulas::default();
        let result = search(&mut formulas, "p => q");
        let p = formulas.atomic("p");
        let q = formulas.atomic("q");
        let leaf = Sequent::new(vec![p], vec![q]);
        assert_eq!(result, SearchResult::Saturated(leaf));
        assert_eq!(result.verdict(), Some(Verdict::Unprovable));
    }

    #[test]
    fn disjunction_commutes() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "p | q => q | p").unwrap();
        let mut search = Search::new(&formulas, G3c);
        match search.search(&problem) {
            SearchResult::Proof(proof) => assert_eq!(
                names(&proof),
                ["LEFT_OR", "RIGHT_OR", "AX", "RIGHT_OR", "AX"]
            ),
            other => panic!("expected a proof, got {:?}", other),
        }
        assert_eq!(search.statistics().closed_branches(), 2);
        assert_eq!(search.statistics().failed_axioms(), 0);
    }

    #[test]
    fn excluded_middle_and_peirce() {
        let mut formulas = Formulas::default();
        let problems =
            ["p | ~p", "((p -> q) -> p) -> p", "~~p => p", "false => q"];
        for text in &problems {
            let result = search(&mut formulas, text);
            assert_eq!(result.verdict(), Some(Verdict::Provable), "{}", text);
        }
    }

    #[test]
    fn unprovable() {
        let mut formulas = Formulas::default();
        for text in &["p | q => p", "(p -> q) -> q", "", "true => false"] {
            let result = search(&mut formulas, text);
            assert_eq!(result.verdict(), Some(Verdict::Unprovable), "{}", text);
        }
    }

    #[test]
    fn failed_axiom_is_tried_once() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "a => b").unwrap();
        let mut search = Search::new(&formulas, G3c);
        search.search(&problem);
        assert_eq!(search.statistics().failed_axioms(), 1);
        assert_eq!(search.statistics().rule_applications(), 1);
    }

    #[test]
    fn step_limit() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "a & b => b & a").unwrap();
        let mut limited = Search::new(&formulas, G3c).with_step_limit(Some(2));
        assert_eq!(limited.search(&problem), SearchResult::GaveUp);
        assert_eq!(limited.search(&problem).verdict(), None);
        let mut enough = Search::new(&formulas, G3c).with_step_limit(Some(6));
        assert_eq!(enough.search(&problem).verdict(), Some(Verdict::Provable));
    }

    #[test]
    fn equivalences() {
        let mut formulas = Formulas::default();
        let result = search(&mut formulas, "a <=> b => b <=> a");
        assert_eq!(result.verdict(), Some(Verdict::Provable));

        let mut kept = Formulas::new(Policy {
            negation: Negation::Keep,
            equivalence: Equivalence::Keep,
        });
        let opaque = search(&mut kept, "a <=> b => b <=> a");
        assert_eq!(opaque.verdict(), Some(Verdict::Unprovable));
        let same = search(&mut kept, "a <=> b => a <=> b");
        assert_eq!(same.verdict(), Some(Verdict::Provable));
    }

    #[test]
    fn negation_policies_agree() {
        for negation in &[
            Negation::Keep,
            Negation::AsImplication,
            Negation::FromImplication,
        ] {
            let mut formulas = Formulas::new(Policy {
                negation: *negation,
                equivalence: Equivalence::Expand,
            });
            let provable = search(&mut formulas, "~(p & q) => ~p | ~q");
            assert_eq!(provable.verdict(), Some(Verdict::Provable));
            let unprovable = search(&mut formulas, "~p | q => ~q");
            assert_eq!(unprovable.verdict(), Some(Verdict::Unprovable));
        }
    }

    #[test]
    fn statistics() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "p | q => q | p").unwrap();
        let mut search = Search::new(&formulas, G3c);
        search.search(&problem);
        let statistics = search.statistics();
        assert_eq!(statistics.applications_of("LEFT_OR"), 1);
        assert_eq!(statistics.applications_of("RIGHT_OR"), 2);
        assert_eq!(statistics.applications_of("AX"), 2);
        assert_eq!(statistics.created_goals(), 5);
        assert_eq!(statistics.max_open_goals(), 2);
        assert_eq!(statistics.max_branch_depth(), 3);
    }
}

#[cfg(test)]
mod properties {
    use super::{Search, SearchResult, Verdict};
    use crate::calculus::formula::Connective;
    use crate::calculus::formulas::{Equivalence, Formulas, Negation, Policy};
    use crate::calculus::sequent::Sequent;
    use crate::calculus::strategy::G3c;
    use crate::io::syntax::Expr;
    use proptest::prelude::{prop_oneof, proptest, Just};
    use proptest::strategy::{BoxedStrategy, Strategy as _};

    const ATOMS: [&str; 3] = ["a", "b", "c"];

    fn exprs() -> BoxedStrategy<Expr> {
        let leaf = prop_oneof![
            Just(Expr::False),
            Just(Expr::True),
            proptest::sample::select(ATOMS.to_vec())
                .prop_map(|name| Expr::Atom(name.into())),
        ];
        leaf.prop_recursive(5, 32, 2, |inner| {
            let connective = proptest::sample::select(vec![
                Connective::And,
                Connective::Or,
                Connective::Implies,
                Connective::Eq,
            ]);
            prop_oneof![
                inner.clone().prop_map(|sub| Expr::Not(Box::new(sub))),
                (connective, inner.clone(), inner).prop_map(
                    |(connective, left, right)| {
                        let (left, right) = (Box::new(left), Box::new(right));
                        Expr::Binary(connective, left, right)
                    }
                ),
            ]
        })
        .boxed()
    }

    fn negations() -> impl proptest::strategy::Strategy<Value = Negation> {
        proptest::sample::select(vec![
            Negation::Keep,
            Negation::AsImplication,
            Negation::FromImplication,
        ])
    }

    fn evaluate(expr: &Expr, assignment: u8) -> bool {
        match expr {
            Expr::False => false,
            Expr::True => true,
            Expr::Atom(name) => {
                let index = ATOMS.iter().position(|atom| atom == name);
                let index =
                    index.unwrap_or_else(|| panic!("unknown atom {}", name));
                assignment & (1 << index) != 0
            }
            Expr::Not(sub) => !evaluate(sub, assignment),
            Expr::Binary(connective, left, right) => {
                let left = evaluate(left, assignment);
                let right = evaluate(right, assignment);
                match connective {
                    Connective::And => left && right,
                    Connective::Or => left || right,
                    Connective::Implies => !left || right,
                    Connective::Eq => left == right,
                    Connective::Not => unreachable!(),
                }
            }
        }
    }

    fn is_tautology(expr: &Expr) -> bool {
        (0..(1u8 << ATOMS.len())).all(|assignment| evaluate(expr, assignment))
    }

    proptest! {
        #[test]
        fn interning_is_idempotent(expr in exprs(), negation in negations()) {
            let mut formulas = Formulas::new(Policy {
                negation,
                equivalence: Equivalence::Keep,
            });
            let first = expr.build(&mut formulas);
            let count = formulas.len();
            let second = expr.build(&mut formulas);
            assert_eq!(first, second);
            assert_eq!(formulas.len(), count);
        }

        #[test]
        fn branches_are_bounded_by_connectives(
            expr in exprs(),
            negation in negations()
        ) {
            let mut formulas = Formulas::new(Policy {
                negation,
                equivalence: Equivalence::Expand,
            });
            let formula = expr.build(&mut formulas);
            let problem = Sequent::new(vec![], vec![formula]);
            let mut search = Search::new(&formulas, G3c);
            let result = search.search(&problem);
            assert_ne!(result, SearchResult::GaveUp);
            assert!(
                search.statistics().max_branch_depth()
                    <= formulas.connectives(formula) + 1
            );
        }

        #[test]
        fn provable_exactly_when_valid(expr in exprs()) {
            let mut formulas = Formulas::default();
            let formula = expr.build(&mut formulas);
            let problem = Sequent::new(vec![], vec![formula]);
            let verdict =
                Search::new(&formulas, G3c).search(&problem).verdict();
            let expected = if is_tautology(&expr) {
                Verdict::Provable
            } else {
                Verdict::Unprovable
            };
            assert_eq!(verdict, Some(expected));
        }
    }
}
