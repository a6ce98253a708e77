use crate::options::Options;
use g3c::io::exit;
use g3c::io::record::{PrintProof, Record, Silent};
use g3c::io::szs;
use g3c::prelude::*;
use g3c::search::derivation;
use g3c::search::SearchResult;
use g3c::statistics::Statistics;
use std::str::FromStr;

pub(crate) enum Output {
    Proof,
    Silent,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(output: &str) -> Result<Self, Self::Err> {
        match output {
            "proof" => Ok(Self::Proof),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("{}: not a valid proof output", output)),
        }
    }
}

fn print_statistics(options: &Options, statistics: &Statistics) {
    if options.statistics {
        statistics.record(&mut PrintProof::default());
    }
}

fn report<R: Record>(
    record: &mut R,
    options: &Options,
    formulas: &Formulas,
    problem: &Sequent,
    result: SearchResult,
    statistics: &Statistics,
) -> ! {
    let name = options.problem_name();
    match result {
        SearchResult::Proof(proof) => {
            szs::theorem(&name);
            szs::begin_proof(&name);
            derivation::replay(record, formulas, problem, &proof);
            szs::end_proof(&name);
            print_statistics(options, statistics);
            exit::proved()
        }
        SearchResult::Saturated(leaf) => {
            szs::counter_satisfiable(&name);
            szs::begin_model(&name);
            record.saturated(formulas, &leaf);
            szs::end_model(&name);
            print_statistics(options, statistics);
            exit::not_proved()
        }
        SearchResult::GaveUp => {
            szs::gave_up(&name);
            print_statistics(options, statistics);
            exit::not_proved()
        }
    }
}

impl Output {
    pub(crate) fn result(
        &self,
        options: &Options,
        formulas: &Formulas,
        problem: &Sequent,
        result: SearchResult,
        statistics: &Statistics,
    ) -> ! {
        match self {
            Self::Proof => report(
                &mut PrintProof::default(),
                options,
                formulas,
                problem,
                result,
                statistics,
            ),
            Self::Silent => report(
                &mut Silent,
                options,
                formulas,
                problem,
                result,
                statistics,
            ),
        }
    }
}
