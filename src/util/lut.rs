use crate::util::block::Block;
use crate::util::id::Id;
use std::marker::PhantomData;
use std::ops::Index;

pub(crate) struct LUT<K, V> {
    _phantom: PhantomData<K>,
    block: Block<V>,
}

impl<K, V> LUT<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.block.len()
    }

    pub(crate) fn push(&mut self, value: V) -> Id<K> {
        self.block.push(value).transmute()
    }
}

impl<K, V> Default for LUT<K, V> {
    fn default() -> Self {
        let _phantom = PhantomData;
        let block = Block::default();
        Self { _phantom, block }
    }
}

impl<K, V> Index<Id<K>> for LUT<K, V> {
    type Output = V;

    fn index(&self, id: Id<K>) -> &Self::Output {
        &self.block[id.transmute()]
    }
}
