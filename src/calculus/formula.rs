use crate::util::id::Id;
use std::fmt;

/// Index of the FALSE constant in every store: it is the first formula built.
pub(crate) const FALSE_INDEX: usize = 0;
/// Index of the TRUE constant in every store: it is the second formula built.
pub(crate) const TRUE_INDEX: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Connective {
    And,
    Or,
    Implies,
    Eq,
    Not,
}

impl Connective {
    pub fn arity(self) -> usize {
        match self {
            Connective::Not => 1,
            Connective::And
            | Connective::Or
            | Connective::Implies
            | Connective::Eq => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
            Connective::Implies => "->",
            Connective::Eq => "<=>",
            Connective::Not => "~",
        }
    }

    pub(crate) fn formula_type(self) -> FormulaType {
        match self {
            Connective::And => FormulaType::And,
            Connective::Or => FormulaType::Or,
            Connective::Implies => FormulaType::Implies,
            Connective::Eq => FormulaType::Eq,
            Connective::Not => FormulaType::Not,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classification of a formula by its main connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormulaType {
    Atomic,
    And,
    Or,
    Implies,
    Eq,
    Not,
}

impl FormulaType {
    pub(crate) const COUNT: usize = 6;

    /// The types decomposed by some rule, in the order rules are looked for.
    pub const DECOMPOSABLE: [FormulaType; 4] = [
        FormulaType::And,
        FormulaType::Or,
        FormulaType::Implies,
        FormulaType::Not,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn is_decomposable(self) -> bool {
        Self::DECOMPOSABLE.contains(&self)
    }
}

impl fmt::Display for FormulaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FormulaType::Atomic => "ATOMIC_WFF",
            FormulaType::And => "AND_WFF",
            FormulaType::Or => "OR_WFF",
            FormulaType::Implies => "IMPLIES_WFF",
            FormulaType::Eq => "EQ_WFF",
            FormulaType::Not => "NOT_WFF",
        };
        write!(f, "{}", name)
    }
}

/// Handle to an interned formula.
///
/// Handles are only meaningful relative to the `Formulas` store which
/// produced them. Within one store, equal handles are equal formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Formula {
    id: Id<Formula>,
    kind: FormulaType,
}

impl Formula {
    pub(crate) fn new(id: Id<Formula>, kind: FormulaType) -> Self {
        Self { id, kind }
    }

    pub(crate) fn falsum() -> Self {
        Self::new(Id::new(FALSE_INDEX), FormulaType::Atomic)
    }

    pub(crate) fn verum() -> Self {
        Self::new(Id::new(TRUE_INDEX), FormulaType::Atomic)
    }

    pub fn id(self) -> Id<Formula> {
        self.id
    }

    pub fn index(self) -> usize {
        self.id.index()
    }

    pub fn kind(self) -> FormulaType {
        self.kind
    }

    pub fn is_atomic(self) -> bool {
        self.kind == FormulaType::Atomic
    }

    pub fn is_false(self) -> bool {
        self.is_atomic() && self.index() == FALSE_INDEX
    }

    pub fn is_true(self) -> bool {
        self.is_atomic() && self.index() == TRUE_INDEX
    }
}
