use crate::util::id::Id;
use std::ops::Index;

/// Append-only storage addressed by `Id<T>`.
pub(crate) struct Block<T> {
    items: Vec<T>,
}

impl<T> Block<T> {
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn push(&mut self, item: T) -> Id<T> {
        let id = Id::new(self.items.len());
        self.items.push(item);
        id
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        let items = vec![];
        Self { items }
    }
}

impl<T> Index<Id<T>> for Block<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &Self::Output {
        let index = id.index();
        debug_assert!(index < self.items.len(), "out of range");
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let mut block = Block::default();
        let first = block.push("first");
        let second = block.push("second");
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(block.len(), 2);
        assert_eq!(block[second], "second");
    }
}
