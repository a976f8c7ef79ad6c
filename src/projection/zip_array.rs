use {crate::view::array::ArrayView, std::cmp::min};

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct Zip<A, B, F> {
    a: A,
    b: B,
    f: F,
}

impl<A, B, F> Zip<A, B, F> {
    pub fn new(a: A, b: B, f: F) -> Self {
        Zip { a, b, f }
    }
}

impl<DstItem, A, B, F> ArrayView for Zip<A, B, F>
where
    A: ArrayView,
    B: ArrayView,
    F: Fn(A::Item, B::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        min(self.a.len(), self.b.len())
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(self.a.get(idx), self.b.get(idx))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct Zip3<A, B, C, F> {
    a: A,
    b: B,
    c: C,
    f: F,
}

impl<A, B, C, F> Zip3<A, B, C, F> {
    pub fn new(a: A, b: B, c: C, f: F) -> Self {
        Zip3 { a, b, c, f }
    }
}

impl<DstItem, A, B, C, F> ArrayView for Zip3<A, B, C, F>
where
    A: ArrayView,
    B: ArrayView,
    C: ArrayView,
    F: Fn(A::Item, B::Item, C::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        min(self.a.len(), min(self.b.len(), self.c.len()))
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(self.a.get(idx), self.b.get(idx), self.c.get(idx))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

#[derive(Clone)]
pub struct Zip4<A, B, C, D, F> {
    a: A,
    b: B,
    c: C,
    d: D,
    f: F,
}

impl<A, B, C, D, F> Zip4<A, B, C, D, F> {
    pub fn new(a: A, b: B, c: C, d: D, f: F) -> Self {
        Zip4 { a, b, c, d, f }
    }
}

impl<DstItem, A, B, C, D, F> ArrayView for Zip4<A, B, C, D, F>
where
    A: ArrayView,
    B: ArrayView,
    C: ArrayView,
    D: ArrayView,
    F: Fn(A::Item, B::Item, C::Item, D::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        min(min(self.a.len(), self.b.len()), min(self.c.len(), self.d.len()))
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(
            self.a.get(idx),
            self.b.get(idx),
            self.c.get(idx),
            self.d.get(idx),
        )
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>

/// `f(v[i], v[i+1])` for every adjacent pair
#[derive(Clone)]
pub struct ZipEachWithNext<SrcView, F> {
    src_view: SrcView,
    f: F,
}

impl<SrcView, F> ZipEachWithNext<SrcView, F> {
    pub fn new(src_view: SrcView, f: F) -> Self {
        ZipEachWithNext { src_view, f }
    }
}

impl<DstItem, SrcView, F> ArrayView for ZipEachWithNext<SrcView, F>
where
    SrcView: ArrayView,
    F: Fn(SrcView::Item, SrcView::Item) -> DstItem + Send + Sync,
{
    type Item = DstItem;

    fn len(&self) -> usize {
        self.src_view.len().saturating_sub(1)
    }

    fn get(&self, idx: &usize) -> DstItem {
        (self.f)(self.src_view.get(idx), self.src_view.get(&(idx + 1)))
    }
}

//<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
