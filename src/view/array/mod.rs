use {
    crate::{
        buffer::{lookup::Lookup, vec::VecBuffer},
        error::ViewError,
        projection::{
            concat_array::Concat,
            flatten_array::{self, FlattenUniform, GroupIndices},
            map_array::{Enumerate, Map, MapWithIndex},
            map_indices::{ByIndices, MapIndices, Offset, Reversed, Strided, Wrapped},
            scan_array,
            split_array::{Segments, SubArrays},
            zip_array::{Zip, Zip3, Zip4, ZipEachWithNext},
        },
        view::sequence::{ArrayViewIntoIter, ArrayViewIter, IndicesWhere, SelectMany},
    },
    log::trace,
    std::{
        hash::Hash,
        iter::{Filter, Sum},
        ops::Deref,
        sync::Arc,
    },
};

pub mod fn_view;
pub use fn_view::{build, from_fn, range, repeat, FnView, RangeView, Repeat};

                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                Array View
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

/// Fixed-length, randomly indexable sequence.
///
/// `get` must be a pure function of `idx` and of whatever the view
/// captured at construction. `len` never changes over the lifetime
/// of the view.
pub trait ArrayView: Send + Sync {
    type Item;

    fn len(&self) -> usize;

    /// Unchecked access, `idx` has to lie in `0..len()`.
    fn get(&self, idx: &usize) -> Self::Item;
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

impl<V: ArrayView + ?Sized> ArrayView for Arc<V> {
    type Item = V::Item;

    fn len(&self) -> usize {
        self.deref().len()
    }

    fn get(&self, idx: &usize) -> Self::Item {
        self.deref().get(idx)
    }
}

impl<V: ArrayView + ?Sized> ArrayView for Box<V> {
    type Item = V::Item;

    fn len(&self) -> usize {
        self.deref().len()
    }

    fn get(&self, idx: &usize) -> Self::Item {
        self.deref().get(idx)
    }
}

impl<'a, V: ArrayView + ?Sized> ArrayView for &'a V {
    type Item = V::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, idx: &usize) -> Self::Item {
        (**self).get(idx)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

pub trait ArrayViewExt: ArrayView {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn try_get(&self, idx: &usize) -> Result<Self::Item, ViewError> {
        if *idx < self.len() {
            Ok(self.get(idx))
        } else {
            Err(ViewError::OutOfRange {
                idx: *idx,
                len: self.len(),
            })
        }
    }

    /// element at `idx`, or `default` if `idx` is out of range
    fn get_or(&self, idx: &usize, default: Self::Item) -> Self::Item {
        if *idx < self.len() {
            self.get(idx)
        } else {
            default
        }
    }

    fn first(&self) -> Result<Self::Item, ViewError> {
        self.try_get(&0).map_err(|_| ViewError::EmptySequence)
    }

    fn last(&self) -> Result<Self::Item, ViewError> {
        match self.len() {
            0 => Err(ViewError::EmptySequence),
            len => Ok(self.get(&(len - 1))),
        }
    }

    fn first_or(&self, default: Self::Item) -> Self::Item {
        self.get_or(&0, default)
    }

    fn last_or(&self, default: Self::Item) -> Self::Item {
        match self.len() {
            0 => default,
            len => self.get(&(len - 1)),
        }
    }

    fn iter<'a>(&'a self) -> ArrayViewIter<'a, Self> {
        ArrayViewIter::new(self)
    }

    fn into_seq(self) -> ArrayViewIntoIter<Self>
    where
        Self: Sized,
    {
        ArrayViewIntoIter::new(self)
    }

    fn indices(&self) -> RangeView {
        range(self.len())
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // element projections

    fn map<DstItem, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> DstItem + Send + Sync,
    {
        Map::new(self, f)
    }

    fn map_with_index<DstItem, F>(self, f: F) -> MapWithIndex<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> DstItem + Send + Sync,
    {
        MapWithIndex::new(self, f)
    }

    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Combines elements pairwise; the surplus of the longer view is dropped.
    fn zip<B, DstItem, F>(self, other: B, f: F) -> Zip<Self, B, F>
    where
        Self: Sized,
        B: ArrayView,
        F: Fn(Self::Item, B::Item) -> DstItem + Send + Sync,
    {
        Zip::new(self, other, f)
    }

    fn zip3<B, C, DstItem, F>(self, b: B, c: C, f: F) -> Zip3<Self, B, C, F>
    where
        Self: Sized,
        B: ArrayView,
        C: ArrayView,
        F: Fn(Self::Item, B::Item, C::Item) -> DstItem + Send + Sync,
    {
        Zip3::new(self, b, c, f)
    }

    fn zip4<B, C, D, DstItem, F>(self, b: B, c: C, d: D, f: F) -> Zip4<Self, B, C, D, F>
    where
        Self: Sized,
        B: ArrayView,
        C: ArrayView,
        D: ArrayView,
        F: Fn(Self::Item, B::Item, C::Item, D::Item) -> DstItem + Send + Sync,
    {
        Zip4::new(self, b, c, d, f)
    }

    fn zip_each_with_next<DstItem, F>(self, f: F) -> ZipEachWithNext<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, Self::Item) -> DstItem + Send + Sync,
    {
        ZipEachWithNext::new(self, f)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // index remapping

    fn map_indices<F>(self, f: F) -> MapIndices<Self, F>
    where
        Self: Sized,
        F: Fn(usize) -> usize + Send + Sync,
    {
        let len = self.len();
        MapIndices::new(self, len, f)
    }

    /// # Panics
    /// if `to < from`. The caller has to ensure `to <= len()`.
    fn slice(self, from: usize, to: usize) -> MapIndices<Self, Offset>
    where
        Self: Sized,
    {
        assert!(from <= to, "slice start {} is past its end {}", from, to);
        MapIndices::new(self, to - from, Offset(from))
    }

    fn take(self, n: usize) -> MapIndices<Self, Offset>
    where
        Self: Sized,
    {
        self.slice(0, n)
    }

    /// # Panics
    /// if `n > len()`, as do `take_last` and `skip_last`
    fn skip(self, n: usize) -> MapIndices<Self, Offset>
    where
        Self: Sized,
    {
        let len = self.len();
        self.slice(n, len)
    }

    fn take_last(self, n: usize) -> MapIndices<Self, Offset>
    where
        Self: Sized,
    {
        let len = self.len();
        assert!(n <= len, "cannot take {} elements from a view of length {}", n, len);
        self.slice(len - n, len)
    }

    fn skip_last(self, n: usize) -> MapIndices<Self, Offset>
    where
        Self: Sized,
    {
        let len = self.len();
        assert!(n <= len, "cannot skip {} elements of a view of length {}", n, len);
        self.slice(0, len - n)
    }

    /// every `step`-th element, starting with the first
    ///
    /// # Panics
    /// if `step` is zero
    fn stride(self, step: usize) -> MapIndices<Self, Strided>
    where
        Self: Sized,
    {
        let src_len = self.len();
        MapIndices::new(self, src_len / step, Strided { step, src_len })
    }

    fn reverse(self) -> MapIndices<Self, Reversed>
    where
        Self: Sized,
    {
        let len = self.len();
        MapIndices::new(self, len, Reversed { len })
    }

    /// Repeats the source cyclically up to length `n`.
    /// Accessing any element of a resized empty view panics.
    fn resize(self, n: usize) -> MapIndices<Self, Wrapped>
    where
        Self: Sized,
    {
        let src_len = self.len();
        MapIndices::new(self, n, Wrapped { src_len })
    }

    fn select_by_indices<I>(self, indices: I) -> MapIndices<Self, ByIndices<I>>
    where
        Self: Sized,
        I: ArrayView<Item = usize>,
    {
        let len = indices.len();
        MapIndices::new(self, len, ByIndices(indices))
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // composition

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: ArrayView<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    fn append(self, item: Self::Item) -> Concat<Self, Repeat<Self::Item>>
    where
        Self: Sized,
        Self::Item: Clone + Send + Sync,
    {
        self.concat(repeat(item, 1))
    }

    fn prepend(self, item: Self::Item) -> Concat<Repeat<Self::Item>, Self>
    where
        Self: Sized,
        Self::Item: Clone + Send + Sync,
    {
        repeat(item, 1).concat(self)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // splitting

    /// `[take(at), skip(at)]`
    fn split(self, at: usize) -> Segments<Self, Repeat<usize>>
    where
        Self: Sized + Clone,
    {
        Segments::new(self, repeat(at, 1))
    }

    /// Cuts the view at each of the given (sorted, in-range) boundaries.
    fn split_by_indices<I>(self, indices: I) -> Segments<Self, I>
    where
        Self: Sized + Clone,
        I: ArrayView<Item = usize>,
    {
        Segments::new(self, indices)
    }

    /// groups of `size` consecutive elements, the last one may be shorter
    fn sub_arrays(self, size: usize) -> SubArrays<Self>
    where
        Self: Sized + Clone,
    {
        SubArrays::new(self, size)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // flattening

    /// Flattens sub-views which all have exactly `size` elements.
    fn flatten_uniform(self, size: usize) -> FlattenUniform<Self>
    where
        Self: Sized,
        Self::Item: ArrayView,
    {
        FlattenUniform::new(self, size)
    }

    /// Flattens sub-views of arbitrary length. Realizes the result.
    fn flatten(&self) -> VecBuffer<<Self::Item as ArrayView>::Item>
    where
        Self::Item: ArrayView,
    {
        flatten_array::flatten(self)
    }

    fn group_indices_to_indices(self, group_size: usize) -> GroupIndices<Self>
    where
        Self: Sized + ArrayView<Item = usize>,
    {
        GroupIndices::new(self, group_size)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // forward-only sequences

    fn filter<'a, P>(&'a self, pred: P) -> Filter<ArrayViewIter<'a, Self>, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().filter(pred)
    }

    fn indices_where<'a, P>(&'a self, pred: P) -> IndicesWhere<'a, Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        IndicesWhere::new(self, pred)
    }

    fn select_many<'a, W, F>(&'a self, f: F) -> SelectMany<'a, Self, W, F>
    where
        W: ArrayView,
        F: FnMut(Self::Item) -> W,
    {
        SelectMany::new(self, f)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // scan family

    fn accumulate<F>(&self, f: F) -> VecBuffer<Self::Item>
    where
        F: FnMut(&Self::Item, Self::Item) -> Self::Item,
    {
        scan_array::accumulate(self, f)
    }

    fn post_accumulate<F>(&self, seed: Self::Item, f: F) -> VecBuffer<Self::Item>
    where
        F: FnMut(&Self::Item, Self::Item) -> Self::Item,
    {
        scan_array::post_accumulate(self, seed, f)
    }

    fn scan<Acc, F>(&self, seed: Acc, f: F) -> VecBuffer<Acc>
    where
        F: FnMut(&Acc, Self::Item) -> Acc,
    {
        scan_array::scan(self, seed, f)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // realization

    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    fn copy_to(&self, dst: &mut [Self::Item]) -> Result<(), ViewError> {
        if dst.len() < self.len() {
            return Err(ViewError::DestinationTooSmall {
                needed: self.len(),
                available: dst.len(),
            });
        }

        for (slot, item) in dst.iter_mut().zip(self.iter()) {
            *slot = item;
        }
        Ok(())
    }

    /// Evaluates the whole chain once and stores the result,
    /// so later accesses no longer walk the composition.
    fn realize(&self) -> VecBuffer<Self::Item> {
        trace!("realize view of {} elements", self.len());
        VecBuffer::with_data(self.to_vec())
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // aggregates

    fn fold<Acc, F>(&self, init: Acc, f: F) -> Acc
    where
        F: FnMut(Acc, Self::Item) -> Acc,
    {
        self.iter().fold(init, f)
    }

    fn sum(&self) -> Self::Item
    where
        Self::Item: Sum,
    {
        self.iter().sum()
    }

    fn min(&self) -> Result<Self::Item, ViewError>
    where
        Self::Item: Ord,
    {
        self.iter().min().ok_or(ViewError::EmptySequence)
    }

    fn max(&self) -> Result<Self::Item, ViewError>
    where
        Self::Item: Ord,
    {
        self.iter().max().ok_or(ViewError::EmptySequence)
    }

    fn any<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.iter().any(pred)
    }

    fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.iter().all(pred)
    }

    fn count_where<P>(&self, pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(pred).count()
    }

    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|x| x == *item)
    }

    fn index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|x| x == *item)
    }

    /// element-wise equality
    fn sequence_equals<B>(&self, other: &B) -> bool
    where
        B: ArrayView + ?Sized,
        Self::Item: PartialEq<B::Item>,
    {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    //<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
    // grouping

    fn group_by<K, KF>(&self, key: KF) -> Lookup<K, VecBuffer<Self::Item>>
    where
        K: Clone + Hash + Eq + Send + Sync,
        KF: FnMut(&Self::Item) -> K,
    {
        Lookup::group_by(self, key, |x| x)
    }

    fn group_by_map<K, V, KF, VF>(&self, key: KF, value: VF) -> Lookup<K, VecBuffer<V>>
    where
        K: Clone + Hash + Eq + Send + Sync,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
    {
        Lookup::group_by(self, key, value)
    }

    fn to_lookup<K, V, KF, VF>(&self, key: KF, value: VF) -> Result<Lookup<K, V>, ViewError>
    where
        K: Clone + Hash + Eq + Send + Sync,
        KF: FnMut(&Self::Item) -> K,
        VF: FnMut(Self::Item) -> V,
    {
        Lookup::from_unique(self, key, value)
    }
}

impl<V: ArrayView + ?Sized> ArrayViewExt for V {}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
