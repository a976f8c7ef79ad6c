use crate::view::array::ArrayView;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Adapter View implementing `ArrayView` for a borrowed slice
#[derive(Clone, Copy, Debug)]
pub struct SliceView<'a, T> {
    data: &'a [T],
}

impl<'a, T> SliceView<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceView { data }
    }
}

impl<'a, T> ArrayView for SliceView<'a, T>
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

impl<'a, T> From<&'a [T]> for SliceView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        SliceView::new(data)
    }
}

impl<'a, T> From<&'a Vec<T>> for SliceView<'a, T> {
    fn from(data: &'a Vec<T>) -> Self {
        SliceView::new(data.as_slice())
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::{prelude::*, projection::slice2arr::*};

    #[test]
    fn slice2arr1() {
        let data = vec![1, 3, 5];
        let view = SliceView::from(&data);

        assert_eq!(view.len(), 3);
        assert_eq!(view.get(&2), 5);
        assert_eq!(view.map(|x| x + 1).to_vec(), vec![2, 4, 6]);
    }
}
