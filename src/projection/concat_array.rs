use crate::view::array::ArrayView;

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `a` followed by `b`
#[derive(Clone)]
pub struct Concat<A, B> {
    a: A,
    b: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Concat { a, b }
    }
}

impl<A, B> ArrayView for Concat<A, B>
where
    A: ArrayView,
    B: ArrayView<Item = A::Item>,
{
    type Item = A::Item;

    fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    fn get(&self, idx: &usize) -> Self::Item {
        let split = self.a.len();
        if *idx < split {
            self.a.get(idx)
        } else {
            self.b.get(&(idx - split))
        }
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn concat1() {
        let a = VecBuffer::with_data(vec!['h', 'a', 'l', 'l', 'o']);
        let b = VecBuffer::with_data(vec!['w', 'e', 'l', 't']);

        let target = a.concat(b);

        assert_eq!(target.len(), 9);
        assert_eq!(target.get(&0), 'h');
        assert_eq!(target.get(&4), 'o');
        assert_eq!(target.get(&5), 'w');
        assert_eq!(target.get(&8), 't');
    }

    #[test]
    fn concat_empty() {
        let v = range(3);

        assert_eq!(v.concat(range(0)).to_vec(), vec![0, 1, 2]);
        assert_eq!(range(0).concat(v).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn append_prepend() {
        let v = range(3).map(|x| x as i32);

        assert_eq!(v.clone().append(-1).to_vec(), vec![0, 1, 2, -1]);
        assert_eq!(v.clone().prepend(-1).to_vec(), vec![-1, 0, 1, 2]);
        assert_eq!(v.append(7).prepend(8).len(), 5);
    }
}
