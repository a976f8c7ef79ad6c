use {
    crate::{
        buffer::vec::VecBuffer,
        view::array::{ArrayView, ArrayViewExt},
    },
    log::debug,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Flattens a view of equally sized chunks.
/// Every chunk must have exactly `size` elements.
#[derive(Clone)]
pub struct FlattenUniform<SrcView> {
    top: SrcView,
    size: usize,
}

impl<SrcView> FlattenUniform<SrcView>
where
    SrcView: ArrayView,
    SrcView::Item: ArrayView,
{
    pub fn new(top: SrcView, size: usize) -> Self {
        FlattenUniform { top, size }
    }
}

impl<SrcView> ArrayView for FlattenUniform<SrcView>
where
    SrcView: ArrayView,
    SrcView::Item: ArrayView,
{
    type Item = <SrcView::Item as ArrayView>::Item;

    fn len(&self) -> usize {
        self.top.len() * self.size
    }

    fn get(&self, idx: &usize) -> Self::Item {
        self.top.get(&(idx / self.size)).get(&(idx % self.size))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Flattens chunks of arbitrary length into one buffer.
///
/// The buffer is allocated once for the summed chunk lengths and every
/// chunk is read exactly once, in order.
pub fn flatten<SrcView>(top: &SrcView) -> VecBuffer<<SrcView::Item as ArrayView>::Item>
where
    SrcView: ArrayView + ?Sized,
    SrcView::Item: ArrayView,
{
    let chunks = top.to_vec();
    let total = chunks.iter().map(|chunk| chunk.len()).sum();

    let mut data = Vec::with_capacity(total);
    for chunk in chunks.iter() {
        data.extend(chunk.iter());
    }

    debug!("flattened {} chunks into {} elements", chunks.len(), total);
    VecBuffer::with_data(data)
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Expands group indices into the indices of their members:
/// `get(i) = src[i / group_size] * group_size + i % group_size`
#[derive(Clone)]
pub struct GroupIndices<SrcView> {
    src_view: SrcView,
    group_size: usize,
}

impl<SrcView> GroupIndices<SrcView>
where
    SrcView: ArrayView<Item = usize>,
{
    pub fn new(src_view: SrcView, group_size: usize) -> Self {
        GroupIndices {
            src_view,
            group_size,
        }
    }
}

impl<SrcView> ArrayView for GroupIndices<SrcView>
where
    SrcView: ArrayView<Item = usize>,
{
    type Item = usize;

    fn len(&self) -> usize {
        self.src_view.len() * self.group_size
    }

    fn get(&self, idx: &usize) -> usize {
        let group = self.src_view.get(&(idx / self.group_size));
        group * self.group_size + idx % self.group_size
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use {
        crate::prelude::*,
        std::sync::atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn flatten1() {
        let chunks = VecBuffer::with_data(vec![
            VecBuffer::with_data(vec!['h', 'a', 'l', 'l', 'o']),
            VecBuffer::with_data(vec!['w', 'e', 'l', 't']),
            VecBuffer::with_data(vec![]),
            VecBuffer::with_data(vec!['!']),
        ]);

        let target = chunks.flatten();

        assert_eq!(target.len(), 10);
        assert_eq!(target.get(&0), 'h');
        assert_eq!(target.get(&5), 'w');
        assert_eq!(target.get(&6), 'e');
        assert_eq!(target.get(&9), '!');
        assert_eq!(target.try_get(&10).ok(), None);
    }

    #[test]
    fn flatten_reads_once() {
        let counter = AtomicUsize::new(0);
        let reads = &counter;

        let chunks = range(4).map(|n| {
            from_fn(n, move |i| {
                reads.fetch_add(1, Ordering::Relaxed);
                i
            })
        });
        let flat = chunks.flatten();

        assert_eq!(flat.to_vec(), vec![0, 0, 1, 0, 1, 2]);
        assert_eq!(counter.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn flatten_empty() {
        let chunks = range(0).map(|n| range(n));
        assert!(chunks.flatten().is_empty());
    }

    #[test]
    fn flatten_uniform1() {
        let rows = range(3).map(|r| range(4).map(move |c| r * 10 + c));
        let flat = rows.flatten_uniform(4);

        assert_eq!(flat.len(), 12);
        assert_eq!(flat.get(&0), 0);
        assert_eq!(flat.get(&5), 11);
        assert_eq!(flat.get(&11), 23);
    }

    #[test]
    fn group_indices_to_indices1() {
        let groups = VecBuffer::with_data(vec![2, 0]);
        let target = groups.group_indices_to_indices(3);

        assert_eq!(target.to_vec(), vec![6, 7, 8, 0, 1, 2]);
    }
}
