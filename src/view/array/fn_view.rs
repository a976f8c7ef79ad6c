use {
    crate::{buffer::vec::VecBuffer, view::array::ArrayView},
    log::debug,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// View defined by its length and an index function.
/// No bounds checking is done here, `f` is only ever called
/// with indices in `0..len`.
#[derive(Clone)]
pub struct FnView<F> {
    len: usize,
    f: F,
}

impl<T, F> ArrayView for FnView<F>
where
    F: Fn(usize) -> T + Send + Sync,
{
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, idx: &usize) -> T {
        (self.f)(*idx)
    }
}

pub fn from_fn<T, F>(len: usize, f: F) -> FnView<F>
where
    F: Fn(usize) -> T + Send + Sync,
{
    FnView { len, f }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `0, 1, .., len-1`
#[derive(Clone, Copy, Debug)]
pub struct RangeView {
    len: usize,
}

impl ArrayView for RangeView {
    type Item = usize;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, idx: &usize) -> usize {
        *idx
    }
}

pub fn range(len: usize) -> RangeView {
    RangeView { len }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone, Debug)]
pub struct Repeat<T> {
    item: T,
    len: usize,
}

impl<T> ArrayView for Repeat<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, _idx: &usize) -> T {
        self.item.clone()
    }
}

pub fn repeat<T>(item: T, len: usize) -> Repeat<T> {
    Repeat { item, len }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Eagerly unfolds `seed` with `next` for as long as `has_next`
/// holds for the current value.
/// Never returns if `has_next` stays true.
pub fn build<T, N, P>(seed: T, mut next: N, mut has_next: P) -> VecBuffer<T>
where
    N: FnMut(&T) -> T,
    P: FnMut(&T) -> bool,
{
    let mut data = Vec::new();
    let mut cur = seed;

    while has_next(&cur) {
        let succ = next(&cur);
        data.push(cur);
        cur = succ;
    }

    debug!("built view of {} elements", data.len());
    VecBuffer::with_data(data)
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::view::array::*;

    #[test]
    fn from_fn1() {
        let squares = from_fn(4, |i| i * i);

        assert_eq!(squares.len(), 4);
        assert_eq!(squares.get(&3), 9);
        assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn range1() {
        assert_eq!(range(3).to_vec(), vec![0, 1, 2]);
        assert!(range(0).is_empty());
    }

    #[test]
    fn repeat1() {
        let r = repeat('x', 3);
        assert_eq!(r.to_vec(), vec!['x', 'x', 'x']);
    }

    #[test]
    fn build1() {
        let powers = build(1, |x| x * 2, |x| *x < 100);
        assert_eq!(powers.to_vec(), vec![1, 2, 4, 8, 16, 32, 64]);

        let none = build(5, |x| x + 1, |_| false);
        assert!(none.is_empty());
    }
}
