use crate::calculus::formula::{FALSE_INDEX, TRUE_INDEX};
use crate::prelude::*;
use crate::util::lut::LUT;
use fnv::FnvHashMap;
use std::str::FromStr;

/// How negations are represented.
///
/// The two rewrites are inverse to each other, so at most one may be active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Negation {
    Keep,
    /// `~A` is built as `A -> false`.
    AsImplication,
    /// `A -> false` is built as `~A`.
    FromImplication,
}

impl Default for Negation {
    fn default() -> Self {
        Negation::Keep
    }
}

impl FromStr for Negation {
    type Err = String;

    fn from_str(negation: &str) -> Result<Self, Self::Err> {
        match negation {
            "keep" => Ok(Self::Keep),
            "implication" => Ok(Self::AsImplication),
            "from-implication" => Ok(Self::FromImplication),
            _ => Err(format!("{}: not a valid negation policy", negation)),
        }
    }
}

/// How equivalences are represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Equivalence {
    Keep,
    /// `A <=> B` is built as `(A -> B) & (B -> A)`.
    Expand,
}

impl Default for Equivalence {
    fn default() -> Self {
        Equivalence::Expand
    }
}

impl FromStr for Equivalence {
    type Err = String;

    fn from_str(equivalence: &str) -> Result<Self, Self::Err> {
        match equivalence {
            "keep" => Ok(Self::Keep),
            "expand" => Ok(Self::Expand),
            _ => Err(format!(
                "{}: not a valid equivalence policy",
                equivalence
            )),
        }
    }
}

/// Rewriting applied while building compound formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub negation: Negation,
    pub equivalence: Equivalence,
}

enum Entry {
    Atomic(String),
    Compound(Connective, Box<[Formula]>),
}

type CompoundKey = (Connective, Formula, Option<Formula>);

/// Hash-consing store for propositional formulas.
///
/// Every structurally-distinct formula is built exactly once and receives the
/// next index. Nothing is ever removed.
pub struct Formulas {
    policy: Policy,
    entries: LUT<Formula, Entry>,
    atoms: FnvHashMap<String, Formula>,
    compounds: FnvHashMap<CompoundKey, Formula>,
    by_type: [Vec<Formula>; FormulaType::COUNT],
}

impl Formulas {
    pub fn new(policy: Policy) -> Self {
        Self::with_constants("false", "true", policy)
    }

    /// A store whose constants are the atoms `false_name` and `true_name`.
    ///
    /// Panics if the two names coincide.
    pub fn with_constants(
        false_name: &str,
        true_name: &str,
        policy: Policy,
    ) -> Self {
        assert_ne!(
            false_name, true_name,
            "names for false and true constants must be different"
        );
        let entries = LUT::default();
        let atoms = FnvHashMap::default();
        let compounds = FnvHashMap::default();
        let by_type = Default::default();
        let mut formulas = Self {
            policy,
            entries,
            atoms,
            compounds,
            by_type,
        };
        let falsum = formulas.atomic(false_name);
        let verum = formulas.atomic(true_name);
        debug_assert_eq!(falsum.index(), FALSE_INDEX);
        debug_assert_eq!(verum.index(), TRUE_INDEX);
        formulas
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of distinct formulas built so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    pub fn falsum(&self) -> Formula {
        Formula::falsum()
    }

    pub fn verum(&self) -> Formula {
        Formula::verum()
    }

    pub fn get(&self, index: usize) -> Option<Formula> {
        if index >= self.len() {
            return None;
        }
        let id = Id::new(index);
        let kind = match &self.entries[id] {
            Entry::Atomic(_) => FormulaType::Atomic,
            Entry::Compound(connective, _) => connective.formula_type(),
        };
        Some(Formula::new(id, kind))
    }

    /// All formulas of type `kind`, in order of construction.
    pub fn of_type(&self, kind: FormulaType) -> &[Formula] {
        &self.by_type[kind.index()]
    }

    pub fn atomic(&mut self, name: &str) -> Formula {
        if let Some(atom) = self.atoms.get(name) {
            return *atom;
        }
        let atom =
            self.register(Entry::Atomic(name.into()), FormulaType::Atomic);
        self.atoms.insert(name.into(), atom);
        atom
    }

    /// The canonical formula `connective(subformulas)`, after rewriting.
    ///
    /// Panics if the number of subformulas does not match the arity.
    pub fn compound(
        &mut self,
        connective: Connective,
        subformulas: &[Formula],
    ) -> Formula {
        assert_eq!(
            subformulas.len(),
            connective.arity(),
            "wrong number of subformulas for {:?}",
            connective
        );
        debug_assert!(subformulas.iter().all(|sub| sub.index() < self.len()));

        match connective {
            Connective::Not
                if self.policy.negation == Negation::AsImplication =>
            {
                let falsum = self.falsum();
                self.intern(Connective::Implies, &[subformulas[0], falsum])
            }
            Connective::Implies
                if self.policy.negation == Negation::FromImplication
                    && subformulas[1].is_false() =>
            {
                self.intern(Connective::Not, &[subformulas[0]])
            }
            Connective::Eq
                if self.policy.equivalence == Equivalence::Expand =>
            {
                let (left, right) = (subformulas[0], subformulas[1]);
                let forward =
                    self.compound(Connective::Implies, &[left, right]);
                let backward =
                    self.compound(Connective::Implies, &[right, left]);
                self.intern(Connective::And, &[forward, backward])
            }
            _ => self.intern(connective, subformulas),
        }
    }

    pub fn not(&mut self, formula: Formula) -> Formula {
        self.compound(Connective::Not, &[formula])
    }

    pub fn and(&mut self, left: Formula, right: Formula) -> Formula {
        self.compound(Connective::And, &[left, right])
    }

    pub fn or(&mut self, left: Formula, right: Formula) -> Formula {
        self.compound(Connective::Or, &[left, right])
    }

    pub fn implies(&mut self, left: Formula, right: Formula) -> Formula {
        self.compound(Connective::Implies, &[left, right])
    }

    pub fn iff(&mut self, left: Formula, right: Formula) -> Formula {
        self.compound(Connective::Eq, &[left, right])
    }

    /// The name of an atomic formula.
    pub fn name(&self, formula: Formula) -> Option<&str> {
        match &self.entries[formula.id()] {
            Entry::Atomic(name) => Some(name.as_str()),
            Entry::Compound(_, _) => None,
        }
    }

    pub fn connective(&self, formula: Formula) -> Option<Connective> {
        match &self.entries[formula.id()] {
            Entry::Atomic(_) => None,
            Entry::Compound(connective, _) => Some(*connective),
        }
    }

    /// Immediate subformulas: empty for atoms, otherwise one per argument.
    pub fn subformulas(&self, formula: Formula) -> &[Formula] {
        match &self.entries[formula.id()] {
            Entry::Atomic(_) => &[],
            Entry::Compound(_, subformulas) => &subformulas[..],
        }
    }

    /// Number of connective occurrences in the formula tree.
    pub fn connectives(&self, formula: Formula) -> usize {
        let mut count = 0;
        let mut todo = vec![formula];
        while let Some(next) = todo.pop() {
            let subformulas = self.subformulas(next);
            if !subformulas.is_empty() {
                count += 1;
                todo.extend_from_slice(subformulas);
            }
        }
        count
    }

    fn intern(
        &mut self,
        connective: Connective,
        subformulas: &[Formula],
    ) -> Formula {
        let key = (connective, subformulas[0], subformulas.get(1).copied());
        if let Some(canonical) = self.compounds.get(&key) {
            return *canonical;
        }
        let entry = Entry::Compound(connective, subformulas.into());
        let canonical = self.register(entry, connective.formula_type());
        self.compounds.insert(key, canonical);
        canonical
    }

    fn register(&mut self, entry: Entry, kind: FormulaType) -> Formula {
        let formula = Formula::new(self.entries.push(entry), kind);
        self.by_type[kind.index()].push(formula);
        formula
    }
}

impl Default for Formulas {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep_all() -> Policy {
        Policy {
            negation: Negation::Keep,
            equivalence: Equivalence::Keep,
        }
    }

    #[test]
    fn atoms_are_interned() {
        let mut formulas = Formulas::new(keep_all());
        let p = formulas.atomic("p");
        let q = formulas.atomic("q");
        assert_eq!(formulas.atomic("p"), p);
        assert_ne!(p, q);
        assert_eq!(formulas.name(p), Some("p"));
        assert_eq!(formulas.len(), 4);
    }

    #[test]
    fn compounds_are_interned() {
        let mut formulas = Formulas::new(keep_all());
        let p = formulas.atomic("p");
        let q = formulas.atomic("q");
        let first = formulas.and(p, q);
        let count = formulas.len();
        let second = formulas.and(p, q);
        assert_eq!(first, second);
        assert_eq!(formulas.len(), count);
        assert_ne!(formulas.and(q, p), first);
        assert_ne!(formulas.or(p, q), first);
    }

    #[test]
    fn constants_come_first() {
        let formulas = Formulas::default();
        assert!(formulas.falsum().is_false());
        assert!(formulas.verum().is_true());
        assert_eq!(formulas.name(formulas.falsum()), Some("false"));
        assert_eq!(formulas.name(formulas.verum()), Some("true"));
    }

    #[test]
    fn constants_by_name() {
        let mut formulas =
            Formulas::with_constants("@FALSE", "@TRUE", keep_all());
        assert!(formulas.atomic("@FALSE").is_false());
        assert!(formulas.atomic("@TRUE").is_true());
        assert!(!formulas.atomic("false").is_false());
    }

    #[test]
    #[should_panic]
    fn constants_must_differ() {
        Formulas::with_constants("bottom", "bottom", Policy::default());
    }

    #[test]
    #[should_panic]
    fn arity_is_checked() {
        let mut formulas = Formulas::default();
        let p = formulas.atomic("p");
        formulas.compound(Connective::And, &[p]);
    }

    #[test]
    #[should_panic]
    fn negation_arity_is_checked() {
        let mut formulas = Formulas::default();
        let p = formulas.atomic("p");
        formulas.compound(Connective::Not, &[p, p]);
    }

    #[test]
    fn negation_as_implication() {
        let policy = Policy {
            negation: Negation::AsImplication,
            equivalence: Equivalence::Keep,
        };
        let mut formulas = Formulas::new(policy);
        let a = formulas.atomic("a");
        let negated = formulas.not(a);
        let falsum = formulas.falsum();
        assert_eq!(negated, formulas.implies(a, falsum));
        assert_eq!(negated.kind(), FormulaType::Implies);
        assert!(formulas.of_type(FormulaType::Not).is_empty());
    }

    #[test]
    fn negation_kept() {
        let mut formulas = Formulas::new(keep_all());
        let a = formulas.atomic("a");
        let negated = formulas.not(a);
        let falsum = formulas.falsum();
        assert_ne!(negated, formulas.implies(a, falsum));
        assert_eq!(negated.kind(), FormulaType::Not);
        assert_eq!(formulas.subformulas(negated), &[a]);
    }

    #[test]
    fn implication_of_false_as_negation() {
        let policy = Policy {
            negation: Negation::FromImplication,
            equivalence: Equivalence::Keep,
        };
        let mut formulas = Formulas::new(policy);
        let a = formulas.atomic("a");
        let b = formulas.atomic("b");
        let falsum = formulas.falsum();
        let implication = formulas.implies(a, falsum);
        assert_eq!(implication, formulas.not(a));
        assert_eq!(implication.kind(), FormulaType::Not);
        assert_eq!(formulas.implies(a, b).kind(), FormulaType::Implies);
    }

    #[test]
    fn equivalence_expanded() {
        let mut formulas = Formulas::default();
        let a = formulas.atomic("a");
        let b = formulas.atomic("b");
        let iff = formulas.iff(a, b);
        let forward = formulas.implies(a, b);
        let backward = formulas.implies(b, a);
        assert_eq!(iff, formulas.and(forward, backward));
        assert!(formulas.of_type(FormulaType::Eq).is_empty());
    }

    #[test]
    fn equivalence_kept() {
        let mut formulas = Formulas::new(keep_all());
        let a = formulas.atomic("a");
        let b = formulas.atomic("b");
        let iff = formulas.iff(a, b);
        assert_eq!(iff.kind(), FormulaType::Eq);
        assert_eq!(formulas.connective(iff), Some(Connective::Eq));
        assert_eq!(formulas.of_type(FormulaType::Eq), &[iff]);
    }

    #[test]
    fn rewritten_negation_never_equals_a_constant() {
        let policy = Policy {
            negation: Negation::AsImplication,
            equivalence: Equivalence::Expand,
        };
        let mut formulas = Formulas::new(policy);
        let verum = formulas.verum();
        let negated = formulas.not(verum);
        assert!(!negated.is_false());
        assert!(!negated.is_atomic());
        assert_eq!(formulas.subformulas(negated), &[verum, formulas.falsum()]);
    }

    #[test]
    fn indices_are_monotonic() {
        let mut formulas = Formulas::new(keep_all());
        let p = formulas.atomic("p");
        let q = formulas.atomic("q");
        let and = formulas.and(p, q);
        let not = formulas.not(and);
        assert!(p.index() < q.index());
        assert!(q.index() < and.index());
        assert!(and.index() < not.index());
        assert_eq!(formulas.get(not.index()), Some(not));
        assert_eq!(formulas.get(formulas.len()), None);
        assert_eq!(formulas.connectives(not), 2);
        assert_eq!(formulas.connectives(p), 0);
    }

    #[test]
    fn stores_are_independent() {
        let mut first = Formulas::default();
        let mut second = Formulas::default();
        first.atomic("x");
        let y = first.atomic("y");
        let only = second.atomic("y");
        assert_ne!(y.index(), only.index());
        assert_eq!(second.name(only), Some("y"));
    }
}
