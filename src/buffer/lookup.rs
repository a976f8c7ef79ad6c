use {
    crate::{
        buffer::vec::VecBuffer,
        error::ViewError,
        view::{
            array::{ArrayView, ArrayViewExt},
            index::{IndexArea, IndexView},
        },
    },
    log::debug,
    std::{collections::HashMap, hash::Hash, sync::Arc},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Read-only association from keys to values.
///
/// Keys keep the order in which they were first encountered;
/// `keys()` and `values()` are parallel views.
pub struct Lookup<Key, Item>
where
    Key: Clone + Hash + Eq + Send + Sync,
{
    index: Arc<HashMap<Key, usize>>,
    keys: VecBuffer<Key>,
    values: VecBuffer<Item>,
}

impl<Key, Item> Clone for Lookup<Key, Item>
where
    Key: Clone + Hash + Eq + Send + Sync,
{
    fn clone(&self) -> Self {
        Lookup {
            index: self.index.clone(),
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<Key, Item> Lookup<Key, Item>
where
    Key: Clone + Hash + Eq + Send + Sync,
{
    fn with_parts(index: HashMap<Key, usize>, keys: Vec<Key>, values: Vec<Item>) -> Self {
        Lookup {
            index: Arc::new(index),
            keys: VecBuffer::with_data(keys),
            values: VecBuffer::with_data(values),
        }
    }

    pub fn keys(&self) -> VecBuffer<Key> {
        self.keys.clone()
    }

    pub fn values(&self) -> VecBuffer<Item> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.keys.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &Key) -> Option<Item>
    where
        Item: Clone,
    {
        self.index
            .get(key)
            .map(|slot| self.values.as_slice()[*slot].clone())
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Key, T> Lookup<Key, VecBuffer<T>>
where
    Key: Clone + Hash + Eq + Send + Sync,
{
    /// Buckets the (projected) elements of `src` by key.
    /// Within a bucket, elements keep their order in `src`.
    pub fn group_by<V, KF, VF>(src: &V, mut key: KF, mut value: VF) -> Self
    where
        V: ArrayView + ?Sized,
        KF: FnMut(&V::Item) -> Key,
        VF: FnMut(V::Item) -> T,
    {
        let mut index = HashMap::new();
        let mut keys = Vec::new();
        let mut buckets: Vec<Vec<T>> = Vec::new();

        for item in src.iter() {
            let k = key(&item);
            let slot = match index.get(&k) {
                Some(slot) => *slot,
                None => {
                    let slot = keys.len();
                    index.insert(k.clone(), slot);
                    keys.push(k);
                    buckets.push(Vec::new());
                    slot
                }
            };
            buckets[slot].push(value(item));
        }

        debug!(
            "grouped {} elements into {} buckets",
            src.len(),
            buckets.len()
        );

        Lookup::with_parts(
            index,
            keys,
            buckets.into_iter().map(VecBuffer::with_data).collect(),
        )
    }
}

impl<Key, Item> Lookup<Key, Item>
where
    Key: Clone + Hash + Eq + Send + Sync,
{
    /// One value per key; fails on the first element
    /// whose key was already taken.
    pub fn from_unique<V, KF, VF>(src: &V, mut key: KF, mut value: VF) -> Result<Self, ViewError>
    where
        V: ArrayView + ?Sized,
        KF: FnMut(&V::Item) -> Key,
        VF: FnMut(V::Item) -> Item,
    {
        let mut index = HashMap::with_capacity(src.len());
        let mut keys = Vec::with_capacity(src.len());
        let mut values = Vec::with_capacity(src.len());

        for (idx, item) in src.iter().enumerate() {
            let k = key(&item);
            if index.contains_key(&k) {
                return Err(ViewError::DuplicateKey { idx });
            }
            index.insert(k.clone(), keys.len());
            keys.push(k);
            values.push(value(item));
        }

        Ok(Lookup::with_parts(index, keys, values))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<Key, Item> IndexView<Key> for Lookup<Key, Item>
where
    Key: Clone + Hash + Eq + Send + Sync,
    Item: Clone + Send + Sync,
{
    type Item = Item;

    fn get(&self, key: &Key) -> Option<Item> {
        Lookup::get(self, key)
    }

    fn area(&self) -> IndexArea<Key> {
        IndexArea::Set(self.keys.to_vec())
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
