use crate::io::record::Record;
use crate::prelude::*;

/// Replay a proof script from `problem`, reporting each step.
///
/// Panics if the script is not a proof of `problem`.
pub fn replay<R: Record>(
    record: &mut R,
    formulas: &Formulas,
    problem: &Sequent,
    proof: &[Rule],
) {
    let mut open = vec![problem.clone()];
    for rule in proof.iter().copied() {
        let goal = match open.pop() {
            Some(goal) => goal,
            None => panic!("{} applied with no goal left", rule.name()),
        };
        match rule.apply(formulas, &goal) {
            Application::ClashDetection(status) => {
                assert_eq!(status, Status::Success, "axiom on an open goal");
                record.axiom(formulas, &goal);
            }
            Application::Decomposition(subgoals) => {
                record.decomposition(formulas, &goal, rule, &subgoals);
                open.extend(subgoals.into_iter().rev());
            }
        }
    }
    assert!(open.is_empty(), "proof leaves {} goals open", open.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::record::Collect;
    use crate::io::syntax::sequent_in;
    use crate::search::{Search, SearchResult};

    fn prove(formulas: &mut Formulas, text: &str) -> (Sequent, Vec<Rule>) {
        let problem = sequent_in(formulas, text).unwrap();
        match Search::new(formulas, G3c).search(&problem) {
            SearchResult::Proof(proof) => (problem, proof),
            other => panic!("no proof of {}: {:?}", text, other),
        }
    }

    #[test]
    fn replay_reports_every_step() {
        let mut formulas = Formulas::default();
        let (problem, proof) = prove(&mut formulas, "a & b => b & a");
        let mut record = Collect::default();
        replay(&mut record, &formulas, &problem, &proof);
        assert_eq!(record.rules, proof);
        assert_eq!(
            record.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            ["LEFT_AND", "RIGHT_AND", "AX", "AX"]
        );
        assert!(record.saturated.is_empty());
    }

    #[test]
    #[should_panic]
    fn incomplete_proof() {
        let mut formulas = Formulas::default();
        let (problem, proof) = prove(&mut formulas, "a | b => b | a");
        replay(&mut Collect::default(), &formulas, &problem, &proof[..2]);
    }

    #[test]
    #[should_panic]
    fn axiom_on_open_goal() {
        let mut formulas = Formulas::default();
        let problem = sequent_in(&mut formulas, "a => b").unwrap();
        replay(&mut Collect::default(), &formulas, &problem, &[Rule::Axiom]);
    }
}
