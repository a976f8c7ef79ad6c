use crate::view::array::ArrayView;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct Map<SrcView, F> {
    src_view: SrcView,
    f: F,
}

impl<SrcView, F> Map<SrcView, F> {
    pub fn new(src_view: SrcView, f: F) -> Self {
        Map { src_view, f }
    }
}

impl<DstItem, SrcView, F> ArrayView for Map<SrcView, F>
where
    SrcView: ArrayView,
    F: Fn(SrcView::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        self.src_view.len()
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(self.src_view.get(idx))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// like `Map`, but `f` also receives the position of the element
#[derive(Clone)]
pub struct MapWithIndex<SrcView, F> {
    src_view: SrcView,
    f: F,
}

impl<SrcView, F> MapWithIndex<SrcView, F> {
    pub fn new(src_view: SrcView, f: F) -> Self {
        MapWithIndex { src_view, f }
    }
}

impl<DstItem, SrcView, F> ArrayView for MapWithIndex<SrcView, F>
where
    SrcView: ArrayView,
    F: Fn(SrcView::Item, usize) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        self.src_view.len()
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(self.src_view.get(idx), *idx)
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct Enumerate<SrcView> {
    src_view: SrcView,
}

impl<SrcView> Enumerate<SrcView> {
    pub fn new(src_view: SrcView) -> Self {
        Enumerate { src_view }
    }
}

impl<SrcView> ArrayView for Enumerate<SrcView>
where
    SrcView: ArrayView,
{
    type Item = (usize, SrcView::Item);

    fn len(&self) -> usize {
        self.src_view.len()
    }

    fn get(&self, idx: &usize) -> (usize, SrcView::Item) {
        (*idx, self.src_view.get(idx))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn map_arr1() {
        let buffer = VecBuffer::with_data(vec![0, 7, 9]);
        let target = buffer.map(|x| x + 10);

        assert_eq!(target.len(), 3);
        assert_eq!(target.get(&0), 10);
        assert_eq!(target.get(&1), 17);
        assert_eq!(target.get(&2), 19);
        assert_eq!(target.get_or(&3, -1), -1);
    }

    #[test]
    fn map_chain() {
        let target = range(5)
            .map(|x| x as i64)
            .map(|x| x * x)
            .map(|x| -x);

        assert_eq!(target.to_vec(), vec![0, -1, -4, -9, -16]);
    }

    #[test]
    fn map_with_index1() {
        let target = repeat(10, 4).map_with_index(|x, i| x * i);
        assert_eq!(target.to_vec(), vec![0, 10, 20, 30]);
    }

    #[test]
    fn enumerate1() {
        let buffer = VecBuffer::with_data(vec!['a', 'b', 'c']);
        let target = buffer.enumerate();

        assert_eq!(target.len(), 3);
        assert_eq!(target.get(&0), (0, 'a'));
        assert_eq!(target.get(&2), (2, 'c'));
    }
}
