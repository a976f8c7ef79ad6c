use std::{ops::Deref, sync::Arc};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// The set of keys an `IndexView` is defined on.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexArea<Key> {
    Empty,
    Full,
    Set(Vec<Key>),
}

/// Read-only keyed access.
pub trait IndexView<Key>: Send + Sync {
    type Item;

    fn get(&self, key: &Key) -> Option<Self::Item>;

    fn area(&self) -> IndexArea<Key> {
        IndexArea::Full
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Key, V> IndexView<Key> for Arc<V>
where
    V: IndexView<Key> + ?Sized,
{
    type Item = V::Item;

    fn get(&self, key: &Key) -> Option<Self::Item> {
        self.deref().get(key)
    }

    fn area(&self) -> IndexArea<Key> {
        self.deref().area()
    }
}

impl<'a, Key, V> IndexView<Key> for &'a V
where
    V: IndexView<Key> + ?Sized,
{
    type Item = V::Item;

    fn get(&self, key: &Key) -> Option<Self::Item> {
        (**self).get(key)
    }

    fn area(&self) -> IndexArea<Key> {
        (**self).area()
    }
}
