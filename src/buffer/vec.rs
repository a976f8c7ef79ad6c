use {
    crate::view::{array::ArrayView, sequence::ArrayViewIter},
    std::{fmt, sync::Arc},
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Immutable, shared storage. Realized views end up here.
///
/// Cloning a `VecBuffer` only clones the handle, never the elements.
pub struct VecBuffer<T> {
    data: Arc<Vec<T>>,
}

impl<T> VecBuffer<T> {
    /// takes ownership of `data` without copying it
    pub fn with_data(data: Vec<T>) -> Self {
        VecBuffer {
            data: Arc::new(data),
        }
    }

    pub fn new() -> Self {
        VecBuffer::with_data(Vec::new())
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Already concrete, so this only hands out another handle
    /// to the same storage.
    pub fn realize(&self) -> Self {
        self.clone()
    }

    pub fn shares_storage(&self, other: &VecBuffer<T>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        Arc::try_unwrap(self.data).unwrap_or_else(|data| data.as_ref().clone())
    }
}

impl<T> Clone for VecBuffer<T> {
    fn clone(&self) -> Self {
        VecBuffer {
            data: self.data.clone(),
        }
    }
}

impl<T> Default for VecBuffer<T> {
    fn default() -> Self {
        VecBuffer::new()
    }
}

impl<T> From<Vec<T>> for VecBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        VecBuffer::with_data(data)
    }
}

impl<T> FromIterator<T> for VecBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VecBuffer::with_data(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for VecBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<VecBuffer<U>> for VecBuffer<T> {
    fn eq(&self, other: &VecBuffer<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<T> ArrayView for VecBuffer<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, idx: &usize) -> T {
        self.data[*idx].clone()
    }
}

impl<'a, T> IntoIterator for &'a VecBuffer<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type IntoIter = ArrayViewIter<'a, VecBuffer<T>>;

    fn into_iter(self) -> Self::IntoIter {
        ArrayViewIter::new(self)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
