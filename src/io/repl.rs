//! Interactive top level over a `Prover`.

use crate::calculus::goal::{Address, Goal, Prover, Refinement};
use crate::error::Result;
use crate::io::print::{PrintRule, PrintSequent};
use crate::prelude::*;
use log::debug;
use std::io::{BufRead, Write};

const HELP: &str = "\
:load <sequent>     replace all goals by <sequent>, e.g. :load a, a -> b => b
:goals [<goal>]     show open goals
:rules [<goal>]     show the applicable rules of a goal (default: every goal)
:refine <goal>.<rule>
                    apply a rule, addressed as listed by :rules
:auto               refine with the first rule until done or stuck
:clear              drop all goals
:help, :?           show this text
:quit               leave
# ...               comment";

pub struct Repl {
    prover: Prover,
}

impl Repl {
    pub fn new(formulas: Formulas) -> Self {
        let prover = Prover::new(formulas);
        Self { prover }
    }

    pub fn prover(&self) -> &Prover {
        &self.prover
    }

    /// Read commands until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<()> {
        for line in input.lines() {
            if !self.execute(&line?, &mut output)? {
                break;
            }
            output.flush()?;
        }
        Ok(())
    }

    /// Run one command. `false` means the session is over.
    pub fn execute<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }
        debug!("command: {}", line);
        let (command, argument) = match line.find(char::is_whitespace) {
            Some(split) => (&line[..split], line[split..].trim()),
            None => (line, ""),
        };
        match command {
            ":load" => self.load(argument, out)?,
            ":goals" => self.goals(argument, out)?,
            ":rules" => self.rules(argument, out)?,
            ":refine" => self.refine(argument, out)?,
            ":auto" => self.auto(out)?,
            ":clear" => {
                self.prover.reset();
                writeln!(out, "all goals dropped")?;
            }
            ":help" | ":?" => writeln!(out, "{}", HELP)?,
            ":quit" => return Ok(false),
            _ => writeln!(out, "unknown command {}, try :help", command)?,
        }
        Ok(true)
    }

    fn load<W: Write>(&mut self, text: &str, out: &mut W) -> Result<()> {
        match self.prover.load(text) {
            Ok(()) => self.goals("", out),
            Err(error) => {
                writeln!(out, "{}", error)?;
                Ok(())
            }
        }
    }

    fn goal_argument<W: Write>(
        &self,
        argument: &str,
        out: &mut W,
    ) -> Result<Option<Id<Goal>>> {
        let id = if argument.is_empty() {
            self.prover.first_goal()
        } else {
            argument
                .parse::<u32>()
                .ok()
                .map(|id| Id::from(id as usize))
                .filter(|id| self.prover.goal(*id).is_some())
        };
        if id.is_none() {
            writeln!(out, "no such goal")?;
        }
        Ok(id)
    }

    fn print_goal<W: Write>(&self, id: Id<Goal>, out: &mut W) -> Result<()> {
        if let Some(sequent) = self.prover.goal(id) {
            let formulas = self.prover.formulas();
            writeln!(out, "{}: {}", id, PrintSequent(formulas, sequent))?;
        }
        Ok(())
    }

    fn goals<W: Write>(&self, argument: &str, out: &mut W) -> Result<()> {
        if !argument.is_empty() {
            if let Some(id) = self.goal_argument(argument, out)? {
                self.print_goal(id, out)?;
            }
            return Ok(());
        }
        if self.prover.is_complete() {
            writeln!(out, "no more goals, proof complete")?;
        }
        let ids: Vec<_> = self.prover.goal_ids().collect();
        for id in ids {
            self.print_goal(id, out)?;
        }
        Ok(())
    }

    fn rules<W: Write>(&mut self, argument: &str, out: &mut W) -> Result<()> {
        if argument.is_empty() {
            if self.prover.is_complete() {
                writeln!(out, "no more goals, proof complete")?;
            }
            let ids: Vec<_> = self.prover.goal_ids().collect();
            for id in ids {
                self.print_goal(id, out)?;
                self.goal_rules(id, out)?;
            }
            return Ok(());
        }
        if let Some(id) = self.goal_argument(argument, out)? {
            self.goal_rules(id, out)?;
        }
        Ok(())
    }

    fn goal_rules<W: Write>(
        &mut self,
        id: Id<Goal>,
        out: &mut W,
    ) -> Result<()> {
        let rules = self.prover.applicable_rules(id).unwrap_or(&[]).to_vec();
        if rules.is_empty() {
            writeln!(out, "goal {} has no applicable rules", id)?;
        }
        let formulas = self.prover.formulas();
        for (index, rule) in rules.into_iter().enumerate() {
            writeln!(out, "{}.{}\t{}", id, index, PrintRule(formulas, rule))?;
        }
        Ok(())
    }

    fn refine<W: Write>(&mut self, argument: &str, out: &mut W) -> Result<()> {
        let address: Address = match argument.parse() {
            Ok(address) => address,
            Err(error) => {
                writeln!(out, "{}", error)?;
                return Ok(());
            }
        };
        if self.prover.goal(address.goal).is_none() {
            writeln!(out, "no such goal")?;
            return Ok(());
        }
        if self.prover.rule_at(address).is_none() {
            writeln!(out, "no such rule")?;
            return Ok(());
        }
        let refinement = self.prover.refine_at(address);
        self.report(address.goal, refinement, out)
    }

    fn auto<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while let Some(id) = self.prover.first_goal() {
            let rule = match self.prover.applicable_rules(id) {
                Some(rules) if !rules.is_empty() => rules[0],
                _ => {
                    writeln!(out, "goal {} has no applicable rules", id)?;
                    return Ok(());
                }
            };
            let refinement = self.prover.refine(id, rule);
            self.report(id, refinement, out)?;
        }
        Ok(())
    }

    fn report<W: Write>(
        &mut self,
        id: Id<Goal>,
        refinement: Refinement,
        out: &mut W,
    ) -> Result<()> {
        match refinement {
            Refinement::NothingToDo => writeln!(out, "nothing to do")?,
            Refinement::Closed => writeln!(out, "goal {} closed", id)?,
            Refinement::Expanded(children) => {
                for child in children {
                    self.print_goal(child, out)?;
                }
            }
        }
        if self.prover.is_complete() {
            writeln!(out, "no more goals, proof complete")?;
        }
        Ok(())
    }
}
