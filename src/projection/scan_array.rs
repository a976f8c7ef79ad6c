use {
    crate::{
        buffer::vec::VecBuffer,
        view::array::{ArrayView, ArrayViewExt},
    },
    log::trace,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Running left fold: `r[0] = src[0]`, `r[i] = f(r[i-1], src[i])`.
/// Empty for an empty source.
pub fn accumulate<V, F>(src: &V, mut f: F) -> VecBuffer<V::Item>
where
    V: ArrayView + ?Sized,
    F: FnMut(&V::Item, V::Item) -> V::Item,
{
    let mut data: Vec<V::Item> = Vec::with_capacity(src.len());

    for item in src.iter() {
        let next = match data.last() {
            Some(prev) => f(prev, item),
            None => item,
        };
        data.push(next);
    }

    trace!("accumulated {} elements", data.len());
    VecBuffer::with_data(data)
}

/// `r[0] = seed`, `r[i+1] = f(r[i], src[i])`, one element longer than `src`
pub fn post_accumulate<V, F>(src: &V, seed: V::Item, mut f: F) -> VecBuffer<V::Item>
where
    V: ArrayView + ?Sized,
    F: FnMut(&V::Item, V::Item) -> V::Item,
{
    let mut data = Vec::with_capacity(src.len() + 1);
    data.push(seed);

    for (i, item) in src.iter().enumerate() {
        let next = f(&data[i], item);
        data.push(next);
    }

    trace!("post-accumulated {} elements", data.len());
    VecBuffer::with_data(data)
}

/// `r[i] = f(acc, src[i])` where `acc` is `seed` for the first element
/// and `r[i-1]` for all others
pub fn scan<V, Acc, F>(src: &V, seed: Acc, mut f: F) -> VecBuffer<Acc>
where
    V: ArrayView + ?Sized,
    F: FnMut(&Acc, V::Item) -> Acc,
{
    let mut data: Vec<Acc> = Vec::with_capacity(src.len());

    for item in src.iter() {
        let next = f(data.last().unwrap_or(&seed), item);
        data.push(next);
    }

    trace!("scanned {} elements", data.len());
    VecBuffer::with_data(data)
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn accumulate1() {
        let sums = repeat(1, 5).accumulate(|a, b| a + b);
        assert_eq!(sums.to_vec(), vec![1, 2, 3, 4, 5]);

        let products = range(5).map(|x| x + 1).accumulate(|a, b| a * b);
        assert_eq!(products.to_vec(), vec![1, 2, 6, 24, 120]);

        assert!(range(0).accumulate(|a, b| a + b).is_empty());
    }

    #[test]
    fn post_accumulate1() {
        let offsets = repeat(1, 5).post_accumulate(0, |a, b| a + b);
        assert_eq!(offsets.to_vec(), vec![0, 1, 2, 3, 4, 5]);

        let empty = range(0).post_accumulate(7, |a, b| a + b);
        assert_eq!(empty.to_vec(), vec![7]);
    }

    #[test]
    fn scan1() {
        let words = VecBuffer::with_data(vec!["a", "bc", "def"]);
        let lines = words.scan(String::from(">"), |acc, w| format!("{}{}", acc, w));

        assert_eq!(lines.to_vec(), vec![">a", ">abc", ">abcdef"]);
        assert_eq!(lines.len(), words.len());
    }
}
