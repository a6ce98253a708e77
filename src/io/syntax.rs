//! Text syntax for formulas and sequents.
//!
//! ```text
//! sequent ::= cedent? ("=>" cedent?)?
//! cedent  ::= formula ("," formula)*
//! formula ::= implies ("<=>" implies)*
//! implies ::= or ("->" implies)?
//! or      ::= and ("|" and)*
//! and     ::= unary ("&" unary)*
//! unary   ::= "~" unary | "(" formula ")" | "false" | "true" | identifier
//! ```
//!
//! Without `=>` the whole text is the right-hand side.
//! Parsing yields an owned `Expr` tree, so a failed parse never touches a
//! formula store. Formulas nested beyond `MAX_NESTING` or taller than
//! `MAX_HEIGHT` are syntax errors.

use crate::error::{Error, Result};
use crate::prelude::*;
use nom::{
    bytes::complete::{tag, take_while},
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, map, opt, recognize},
    error::ErrorKind,
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

/// Deepest nesting of `~`, parentheses and `->` accepted.
pub const MAX_NESTING: usize = 100;
/// Tallest formula accepted, counted in connectives.
pub const MAX_HEIGHT: usize = 1000;

/// A parsed formula, not yet interned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    False,
    True,
    Atom(String),
    Not(Box<Expr>),
    Binary(Connective, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn binary(connective: Connective, left: Expr, right: Expr) -> Self {
        Expr::Binary(connective, Box::new(left), Box::new(right))
    }

    /// Intern this formula, subformulas first.
    pub fn build(&self, formulas: &mut Formulas) -> Formula {
        match self {
            Expr::False => formulas.falsum(),
            Expr::True => formulas.verum(),
            Expr::Atom(name) => formulas.atomic(name),
            Expr::Not(sub) => {
                let sub = sub.build(formulas);
                formulas.not(sub)
            }
            Expr::Binary(connective, left, right) => {
                let left = left.build(formulas);
                let right = right.build(formulas);
                formulas.compound(*connective, &[left, right])
            }
        }
    }
}

/// A parsed sequent, not yet interned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentExpr {
    pub left: Vec<Expr>,
    pub right: Vec<Expr>,
}

impl SequentExpr {
    /// Intern the left side, then the right, each in textual order.
    pub fn build(&self, formulas: &mut Formulas) -> Sequent {
        let left: Vec<_> =
            self.left.iter().map(|expr| expr.build(formulas)).collect();
        let right: Vec<_> =
            self.right.iter().map(|expr| expr.build(formulas)).collect();
        Sequent::new(left, right)
    }
}

fn symbol<'a>(
    symbol: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    delimited(multispace0, tag(symbol), multispace0)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn atom(input: &str) -> IResult<&str, Expr> {
    map(identifier, |name| match name {
        "false" => Expr::False,
        "true" => Expr::True,
        _ => Expr::Atom(name.into()),
    })(input)
}

/// An expression together with its height.
type Parsed<'a> = IResult<&'a str, (Expr, usize)>;

fn too_deep(input: &str) -> nom::Err<nom::error::Error<&str>> {
    let error = nom::error::Error::new(input, ErrorKind::TooLarge);
    nom::Err::Failure(error)
}

fn node(input: &str, expr: Expr, height: usize) -> Parsed {
    if height > MAX_HEIGHT {
        return Err(too_deep(input));
    }
    Ok((input, (expr, height)))
}

fn unary(input: &str, nesting: usize) -> Parsed {
    if nesting > MAX_NESTING {
        return Err(too_deep(input));
    }
    let (input, _) = multispace0(input)?;
    let (input, negation) = opt(char('~'))(input)?;
    if negation.is_some() {
        let (input, (sub, height)) = unary(input, nesting + 1)?;
        return node(input, Expr::Not(Box::new(sub)), height + 1);
    }
    let (input, open) = opt(char('('))(input)?;
    if open.is_some() {
        let (input, parsed) = formula(input, nesting + 1)?;
        let (input, _) = preceded(multispace0, char(')'))(input)?;
        return Ok((input, parsed));
    }
    let (input, expr) = atom(input)?;
    Ok((input, (expr, 0)))
}

fn left_associative(
    mut input: &str,
    nesting: usize,
    connective: Connective,
    operand: fn(&str, usize) -> Parsed,
) -> Parsed {
    let (rest, (mut expr, mut height)) = operand(input, nesting)?;
    input = rest;
    while let Ok((rest, _)) = symbol(connective.symbol())(input) {
        let (rest, (right, right_height)) = operand(rest, nesting)?;
        expr = Expr::binary(connective, expr, right);
        height = height.max(right_height) + 1;
        if height > MAX_HEIGHT {
            return Err(too_deep(rest));
        }
        input = rest;
    }
    Ok((input, (expr, height)))
}

fn and(input: &str, nesting: usize) -> Parsed {
    left_associative(input, nesting, Connective::And, unary)
}

fn or(input: &str, nesting: usize) -> Parsed {
    left_associative(input, nesting, Connective::Or, and)
}

fn implies(input: &str, nesting: usize) -> Parsed {
    let (input, (left, height)) = or(input, nesting)?;
    match symbol("->")(input) {
        Ok((input, _)) => {
            let (input, (right, right_height)) = implies(input, nesting + 1)?;
            let expr = Expr::binary(Connective::Implies, left, right);
            node(input, expr, height.max(right_height) + 1)
        }
        Err(_) => Ok((input, (left, height))),
    }
}

fn formula(input: &str, nesting: usize) -> Parsed {
    left_associative(input, nesting, Connective::Eq, implies)
}

fn top_formula(input: &str) -> IResult<&str, Expr> {
    let (input, (expr, _)) = formula(input, 0)?;
    Ok((input, expr))
}

fn cedent(input: &str) -> IResult<&str, Vec<Expr>> {
    separated_list0(symbol(","), top_formula)(input)
}

fn sequent(input: &str) -> IResult<&str, SequentExpr> {
    let (input, first) = cedent(input)?;
    let (input, second) = opt(preceded(symbol("=>"), cedent))(input)?;
    let sequent = match second {
        Some(right) => SequentExpr { left: first, right },
        None => SequentExpr {
            left: vec![],
            right: first,
        },
    };
    Ok((input, sequent))
}

fn syntax_error(text: &str) -> Error {
    Error::Syntax { text: text.into() }
}

pub fn parse_formula(text: &str) -> Result<Expr> {
    all_consuming(terminated(top_formula, multispace0))(text)
        .map(|(_, expr)| expr)
        .map_err(|_| syntax_error(text))
}

pub fn parse_sequent(text: &str) -> Result<SequentExpr> {
    all_consuming(terminated(sequent, multispace0))(text)
        .map(|(_, sequent)| sequent)
        .map_err(|_| syntax_error(text))
}

/// Parse and intern a formula.
pub fn formula_in(formulas: &mut Formulas, text: &str) -> Result<Formula> {
    Ok(parse_formula(text)?.build(formulas))
}

/// Parse and intern a sequent. On error, `formulas` is unchanged.
pub fn sequent_in(formulas: &mut Formulas, text: &str) -> Result<Sequent> {
    Ok(parse_sequent(text)?.build(formulas))
}

/// Text of a problem file: one sequent, `%` lines are comments.
pub fn problem_in(formulas: &mut Formulas, text: &str) -> Result<Sequent> {
    let body = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('%'))
        .collect::<Vec<_>>()
        .join("\n");
    sequent_in(formulas, &body)
}
