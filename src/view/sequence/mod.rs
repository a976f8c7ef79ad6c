use {
    crate::view::array::ArrayView,
    std::iter::FusedIterator,
};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Forward sequence over a borrowed view.
pub struct ArrayViewIter<'a, V>
where
    V: ArrayView + ?Sized,
{
    view: &'a V,
    cur: usize,
    end: usize,
}

impl<'a, V> ArrayViewIter<'a, V>
where
    V: ArrayView + ?Sized,
{
    pub fn new(view: &'a V) -> Self {
        ArrayViewIter {
            view,
            cur: 0,
            end: view.len(),
        }
    }
}

impl<'a, V> Iterator for ArrayViewIter<'a, V>
where
    V: ArrayView + ?Sized,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur < self.end {
            let i = self.cur;
            self.cur += 1;
            Some(self.view.get(&i))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.cur;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.cur = self.cur.saturating_add(n).min(self.end);
        self.next()
    }
}

impl<'a, V> DoubleEndedIterator for ArrayViewIter<'a, V>
where
    V: ArrayView + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.cur < self.end {
            self.end -= 1;
            Some(self.view.get(&self.end))
        } else {
            None
        }
    }
}

impl<'a, V> ExactSizeIterator for ArrayViewIter<'a, V> where V: ArrayView + ?Sized {}
impl<'a, V> FusedIterator for ArrayViewIter<'a, V> where V: ArrayView + ?Sized {}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Forward sequence that owns its view.
pub struct ArrayViewIntoIter<V>
where
    V: ArrayView,
{
    view: V,
    cur: usize,
    end: usize,
}

impl<V> ArrayViewIntoIter<V>
where
    V: ArrayView,
{
    pub fn new(view: V) -> Self {
        let end = view.len();
        ArrayViewIntoIter { view, cur: 0, end }
    }
}

impl<V> Iterator for ArrayViewIntoIter<V>
where
    V: ArrayView,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur < self.end {
            let i = self.cur;
            self.cur += 1;
            Some(self.view.get(&i))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.cur;
        (n, Some(n))
    }
}

impl<V> DoubleEndedIterator for ArrayViewIntoIter<V>
where
    V: ArrayView,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.cur < self.end {
            self.end -= 1;
            Some(self.view.get(&self.end))
        } else {
            None
        }
    }
}

impl<V> ExactSizeIterator for ArrayViewIntoIter<V> where V: ArrayView {}
impl<V> FusedIterator for ArrayViewIntoIter<V> where V: ArrayView {}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// positions of all elements that satisfy a predicate
pub struct IndicesWhere<'a, V, P>
where
    V: ArrayView + ?Sized,
{
    src: ArrayViewIter<'a, V>,
    idx: usize,
    pred: P,
}

impl<'a, V, P> IndicesWhere<'a, V, P>
where
    V: ArrayView + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    pub fn new(view: &'a V, pred: P) -> Self {
        IndicesWhere {
            src: ArrayViewIter::new(view),
            idx: 0,
            pred,
        }
    }
}

impl<'a, V, P> Iterator for IndicesWhere<'a, V, P>
where
    V: ArrayView + ?Sized,
    P: FnMut(&V::Item) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for item in self.src.by_ref() {
            let i = self.idx;
            self.idx += 1;
            if (self.pred)(&item) {
                return Some(i);
            }
        }
        None
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// Maps every element to a view and walks through all of them in order.
pub struct SelectMany<'a, V, W, F>
where
    V: ArrayView + ?Sized,
    W: ArrayView,
{
    outer: ArrayViewIter<'a, V>,
    inner: Option<ArrayViewIntoIter<W>>,
    f: F,
}

impl<'a, V, W, F> SelectMany<'a, V, W, F>
where
    V: ArrayView + ?Sized,
    W: ArrayView,
    F: FnMut(V::Item) -> W,
{
    pub fn new(view: &'a V, f: F) -> Self {
        SelectMany {
            outer: ArrayViewIter::new(view),
            inner: None,
            f,
        }
    }
}

impl<'a, V, W, F> Iterator for SelectMany<'a, V, W, F>
where
    V: ArrayView + ?Sized,
    W: ArrayView,
    F: FnMut(V::Item) -> W,
{
    type Item = W::Item;

    fn next(&mut self) -> Option<W::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(x) = inner.next() {
                    return Some(x);
                }
            }

            let sub = (self.f)(self.outer.next()?);
            self.inner = Some(ArrayViewIntoIter::new(sub));
        }
    }
}

impl<'a, V, W, F> FusedIterator for SelectMany<'a, V, W, F>
where
    V: ArrayView + ?Sized,
    W: ArrayView,
    F: FnMut(V::Item) -> W,
{
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
