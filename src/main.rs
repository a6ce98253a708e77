mod options;
mod output;

use g3c::io::repl::Repl;
use g3c::io::{exit, log, syntax, szs};
use g3c::prelude::*;
use g3c::search::Search;
use g3c::Error;
use options::Options;
use std::io::{stdin, stdout};

fn main() {
    let options = Options::parse();
    log::start_logging(options.verbose);
    let mut formulas = Formulas::new(options.policy());

    if options.interactive {
        let mut repl = Repl::new(formulas);
        let stdin = stdin();
        if let Err(error) = repl.run(stdin.lock(), stdout()) {
            println!("% {}", error);
            exit::bad_input()
        }
        exit::proved()
    }

    let name = options.problem_name();
    let problem = options
        .problem_text()
        .and_then(|text| syntax::problem_in(&mut formulas, &text));
    let problem = match problem {
        Ok(problem) => problem,
        Err(Error::Io(error)) => {
            println!("% {}", error);
            szs::os_error(&name);
            exit::bad_input()
        }
        Err(error) => {
            println!("% {}", error);
            szs::input_error(&name);
            exit::bad_input()
        }
    };

    let mut search = Search::new(&formulas, G3c).with_step_limit(options.steps);
    let result = search.search(&problem);
    options.output.result(
        &options,
        &formulas,
        &problem,
        result,
        search.statistics(),
    )
}
