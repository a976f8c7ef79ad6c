use crate::view::array::ArrayView;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Translates an index of the target view into an index of the source view.
pub trait IndexMapping: Send + Sync {
    fn map_index(&self, idx: usize) -> usize;
}

impl<F> IndexMapping for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn map_index(&self, idx: usize) -> usize {
        self(idx)
    }
}

/// `idx + from`
#[derive(Clone, Copy, Debug)]
pub struct Offset(pub usize);

impl IndexMapping for Offset {
    fn map_index(&self, idx: usize) -> usize {
        idx + self.0
    }
}

/// `len - 1 - idx`
#[derive(Clone, Copy, Debug)]
pub struct Reversed {
    pub len: usize,
}

impl IndexMapping for Reversed {
    fn map_index(&self, idx: usize) -> usize {
        self.len - 1 - idx
    }
}

/// `(idx * step) mod src_len`
#[derive(Clone, Copy, Debug)]
pub struct Strided {
    pub step: usize,
    pub src_len: usize,
}

impl IndexMapping for Strided {
    fn map_index(&self, idx: usize) -> usize {
        (idx * self.step) % self.src_len
    }
}

/// `idx mod src_len`
#[derive(Clone, Copy, Debug)]
pub struct Wrapped {
    pub src_len: usize,
}

impl IndexMapping for Wrapped {
    fn map_index(&self, idx: usize) -> usize {
        idx % self.src_len
    }
}

/// looks the source index up in another view
#[derive(Clone)]
pub struct ByIndices<I>(pub I);

impl<I> IndexMapping for ByIndices<I>
where
    I: ArrayView<Item = usize>,
{
    fn map_index(&self, idx: usize) -> usize {
        self.0.get(&idx)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// General index remapping: `get(i) = src.get(mapping(i))`.
#[derive(Clone)]
pub struct MapIndices<SrcView, M> {
    src_view: SrcView,
    len: usize,
    mapping: M,
}

impl<SrcView, M> MapIndices<SrcView, M> {
    pub fn new(src_view: SrcView, len: usize, mapping: M) -> Self {
        MapIndices {
            src_view,
            len,
            mapping,
        }
    }
}

impl<SrcView, M> ArrayView for MapIndices<SrcView, M>
where
    SrcView: ArrayView,
    M: IndexMapping,
{
    type Item = SrcView::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, idx: &usize) -> Self::Item {
        self.src_view.get(&self.mapping.map_index(*idx))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn slice1() {
        let v = range(10).slice(3, 7);

        assert_eq!(v.len(), 4);
        assert_eq!(v.to_vec(), vec![3, 4, 5, 6]);
        assert!(range(10).slice(4, 4).is_empty());
    }

    #[test]
    fn take_skip() {
        let v = range(6);

        assert_eq!(v.take(2).to_vec(), vec![0, 1]);
        assert_eq!(v.skip(2).to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(v.take_last(2).to_vec(), vec![4, 5]);
        assert_eq!(v.skip_last(2).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(v.skip(6).len(), 0);
    }

    #[test]
    #[should_panic(expected = "past its end")]
    fn slice_inverted() {
        range(10).slice(5, 3);
    }

    #[test]
    #[should_panic(expected = "past its end")]
    fn skip_past_end() {
        range(6).skip(7);
    }

    #[test]
    #[should_panic(expected = "cannot take 7 elements")]
    fn take_last_past_end() {
        range(6).take_last(7);
    }

    #[test]
    #[should_panic(expected = "cannot skip 7 elements")]
    fn skip_last_past_end() {
        range(6).skip_last(7);
    }

    #[test]
    fn stride1() {
        assert_eq!(range(10).stride(3).to_vec(), vec![0, 3, 6]);
        assert_eq!(range(9).stride(3).to_vec(), vec![0, 3, 6]);
        assert_eq!(range(2).stride(3).len(), 0);
    }

    #[test]
    fn reverse1() {
        let v = VecBuffer::with_data(vec!['a', 'b', 'c']);

        assert_eq!(v.clone().reverse().to_vec(), vec!['c', 'b', 'a']);
        assert_eq!(v.clone().reverse().reverse().to_vec(), v.to_vec());
        assert!(range(0).reverse().is_empty());
    }

    #[test]
    fn resize1() {
        assert_eq!(range(3).resize(7).to_vec(), vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(range(5).resize(2).to_vec(), vec![0, 1]);
        assert!(range(0).resize(0).is_empty());
    }

    #[test]
    fn map_indices1() {
        let v = range(5).map(|x| x * 10);
        let swapped = v.map_indices(|i| i ^ 1);

        assert_eq!(swapped.get(&0), 10);
        assert_eq!(swapped.get(&1), 0);
        assert_eq!(swapped.get(&2), 30);
    }

    #[test]
    fn select_by_indices1() {
        let src = VecBuffer::with_data(vec!["zero", "one", "two", "three"]);
        let picked = src.select_by_indices(VecBuffer::with_data(vec![3, 3, 0]));

        assert_eq!(picked.len(), 3);
        assert_eq!(picked.to_vec(), vec!["three", "three", "zero"]);
    }
}
