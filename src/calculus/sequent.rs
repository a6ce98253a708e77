use crate::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// One side of a sequent: a multiset of formulas, indexed by formula type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cedent {
    counts: BTreeMap<Formula, u32>,
    by_type: [BTreeSet<Formula>; FormulaType::COUNT],
    len: usize,
}

impl Cedent {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, formula: Formula) -> bool {
        self.counts.contains_key(&formula)
    }

    pub fn count(&self, formula: Formula) -> u32 {
        self.counts.get(&formula).copied().unwrap_or_default()
    }

    /// Some formula of type `kind`: the earliest-built one, if any.
    pub fn get(&self, kind: FormulaType) -> Option<Formula> {
        self.by_type[kind.index()].iter().next().copied()
    }

    /// Distinct formulas of type `kind`, earliest-built first.
    pub fn of_type(
        &self,
        kind: FormulaType,
    ) -> impl Iterator<Item = Formula> + '_ {
        self.by_type[kind.index()].iter().copied()
    }

    /// Distinct formulas, earliest-built first.
    pub fn distinct(&self) -> impl Iterator<Item = Formula> + '_ {
        self.counts.keys().copied()
    }

    /// Every occurrence, repeated formulas adjacent.
    pub fn iter(&self) -> impl Iterator<Item = Formula> + '_ {
        self.counts.iter().flat_map(|(formula, count)| {
            std::iter::repeat(*formula).take(*count as usize)
        })
    }

    pub fn has_decomposable(&self) -> bool {
        FormulaType::DECOMPOSABLE
            .iter()
            .any(|kind| !self.by_type[kind.index()].is_empty())
    }

    fn add(&mut self, formula: Formula) {
        let count = self.counts.entry(formula).or_insert(0);
        *count += 1;
        if *count == 1 {
            self.by_type[formula.kind().index()].insert(formula);
        }
        self.len += 1;
    }

    fn remove(&mut self, formula: Formula) {
        let count = self
            .counts
            .get_mut(&formula)
            .unwrap_or_else(|| panic!("removed absent formula {:?}", formula));
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&formula);
            self.by_type[formula.kind().index()].remove(&formula);
        }
        self.len -= 1;
    }
}

/// A sequent `left => right`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequent {
    left: Cedent,
    right: Cedent,
}

impl Sequent {
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = Formula>,
        R: IntoIterator<Item = Formula>,
    {
        let mut sequent = Self::default();
        for formula in left {
            sequent.add_left(formula);
        }
        for formula in right {
            sequent.add_right(formula);
        }
        sequent
    }

    pub fn left(&self) -> &Cedent {
        &self.left
    }

    pub fn right(&self) -> &Cedent {
        &self.right
    }

    pub fn add_left(&mut self, formula: Formula) {
        self.left.add(formula);
    }

    pub fn add_right(&mut self, formula: Formula) {
        self.right.add(formula);
    }

    /// Remove one occurrence of `formula` from the left.
    ///
    /// Panics if there is none.
    pub fn remove_left(&mut self, formula: Formula) {
        self.left.remove(formula);
    }

    /// Remove one occurrence of `formula` from the right.
    ///
    /// Panics if there is none.
    pub fn remove_right(&mut self, formula: Formula) {
        self.right.remove(formula);
    }

    pub fn get_left(&self, kind: FormulaType) -> Option<Formula> {
        self.left.get(kind)
    }

    pub fn get_right(&self, kind: FormulaType) -> Option<Formula> {
        self.right.get(kind)
    }

    pub fn has_decomposable(&self) -> bool {
        self.left.has_decomposable() || self.right.has_decomposable()
    }

    /// `false` on the left, `true` on the right, or a formula on both sides.
    pub fn is_identity_axiom(&self) -> bool {
        if self.left.contains(Formula::falsum())
            || self.right.contains(Formula::verum())
        {
            return true;
        }
        let (smaller, larger) =
            if self.left.counts.len() <= self.right.counts.len() {
                (&self.left, &self.right)
            } else {
                (&self.right, &self.left)
            };
        smaller.distinct().any(|formula| larger.contains(formula))
    }
}
