use {
    crate::{
        projection::map_indices::{MapIndices, Offset},
        view::array::{ArrayView, ArrayViewExt},
    },
    std::cmp::min,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// The pieces of a view cut at a list of boundaries.
///
/// With boundaries `b` the segments are
/// `[0, b[0]), [b[0], b[1]), .., [b[n-1], len)`.
/// Boundaries must be sorted and within range; this is not checked.
#[derive(Clone)]
pub struct Segments<SrcView, B> {
    src_view: SrcView,
    boundaries: B,
}

impl<SrcView, B> Segments<SrcView, B>
where
    SrcView: ArrayView + Clone,
    B: ArrayView<Item = usize>,
{
    pub fn new(src_view: SrcView, boundaries: B) -> Self {
        Segments {
            src_view,
            boundaries,
        }
    }

    fn boundary(&self, idx: usize) -> usize {
        if idx == 0 {
            0
        } else if idx > self.boundaries.len() {
            self.src_view.len()
        } else {
            self.boundaries.get(&(idx - 1))
        }
    }
}

impl<SrcView, B> ArrayView for Segments<SrcView, B>
where
    SrcView: ArrayView + Clone,
    B: ArrayView<Item = usize>,
{
    type Item = MapIndices<SrcView, Offset>;

    fn len(&self) -> usize {
        self.boundaries.len() + 1
    }

    fn get(&self, idx: &usize) -> Self::Item {
        self.src_view
            .clone()
            .slice(self.boundary(*idx), self.boundary(idx + 1))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// consecutive groups of `size` elements, the last one may be shorter
#[derive(Clone)]
pub struct SubArrays<SrcView> {
    src_view: SrcView,
    size: usize,
}

impl<SrcView> SubArrays<SrcView>
where
    SrcView: ArrayView + Clone,
{
    pub fn new(src_view: SrcView, size: usize) -> Self {
        SubArrays { src_view, size }
    }
}

impl<SrcView> ArrayView for SubArrays<SrcView>
where
    SrcView: ArrayView + Clone,
{
    type Item = MapIndices<SrcView, Offset>;

    fn len(&self) -> usize {
        (self.src_view.len() + self.size - 1) / self.size
    }

    fn get(&self, idx: &usize) -> Self::Item {
        let from = idx * self.size;
        let to = min(from + self.size, self.src_view.len());
        self.src_view.clone().slice(from, to)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn split1() {
        let parts = range(5).split(2);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts.get(&0).to_vec(), vec![0, 1]);
        assert_eq!(parts.get(&1).to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn split_by_indices1() {
        let parts = range(10).split_by_indices(VecBuffer::with_data(vec![3, 6]));

        assert_eq!(parts.len(), 3);
        assert_eq!(parts.get(&0).to_vec(), vec![0, 1, 2]);
        assert_eq!(parts.get(&1).to_vec(), vec![3, 4, 5]);
        assert_eq!(parts.get(&2).to_vec(), vec![6, 7, 8, 9]);

        let none = range(4).split_by_indices(range(0));
        assert_eq!(none.len(), 1);
        assert_eq!(none.get(&0).to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sub_arrays1() {
        let groups = range(10).sub_arrays(3);

        assert_eq!(groups.len(), 4);
        assert_eq!(groups.get(&0).to_vec(), vec![0, 1, 2]);
        assert_eq!(groups.get(&3).to_vec(), vec![9]);

        assert_eq!(range(9).sub_arrays(3).len(), 3);
        assert_eq!(range(0).sub_arrays(3).len(), 0);
    }
}
