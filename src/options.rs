use crate::output::Output;
use g3c::prelude::*;
use g3c::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use structopt::StructOpt;

const NAME: &str = "g3c";

const ABOUT: &str = "
g3c decides classical propositional logic with the sequent calculus G3c.
The system reads one sequent `A, B => C, D` from a file, the command line
or stdin, and may output a proof or a counter-model on stdout.
Lines starting with `%` are comments.
";

#[derive(StructOpt)]
#[structopt(name = NAME, author, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(
        parse(from_os_str),
        help = "path to input problem, stdin if absent"
    )]
    pub(crate) path: Option<PathBuf>,

    #[structopt(long, help = "problem sequent", conflicts_with = "path")]
    pub(crate) sequent: Option<String>,

    #[structopt(long, help = "interactive proof mode")]
    pub(crate) interactive: bool,

    #[structopt(
        long,
        help="proof output",
        possible_values=&["proof", "silent"],
        default_value="proof"
    )]
    pub(crate) output: Output,

    #[structopt(long, help = "limit number of rule applications")]
    pub(crate) steps: Option<usize>,

    #[structopt(
        long,
        help = "representation of negation",
        possible_values = &["keep", "implication", "from-implication"],
        default_value = "keep"
    )]
    pub(crate) negation: Negation,

    #[structopt(
        long,
        help = "representation of equivalence",
        possible_values = &["keep", "expand"],
        default_value = "expand"
    )]
    pub(crate) equivalence: Equivalence,

    #[structopt(long, help = "print search statistics")]
    pub(crate) statistics: bool,

    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "log more, repeat for more detail"
    )]
    pub(crate) verbose: u64,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }

    pub(crate) fn policy(&self) -> Policy {
        Policy {
            negation: self.negation,
            equivalence: self.equivalence,
        }
    }

    pub(crate) fn problem_name(&self) -> String {
        if self.sequent.is_some() {
            return "sequent".into();
        }
        self.path
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".into())
    }

    pub(crate) fn problem_text(&self) -> Result<String> {
        if let Some(sequent) = &self.sequent {
            return Ok(sequent.clone());
        }
        if let Some(path) = &self.path {
            return Ok(fs::read_to_string(path)?);
        }
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}
