//! Lazy Views over Arrays
//!
//! Using **arrview** you can build chains of transformations over any
//! randomly-indexable data source without allocating intermediate storage.
//!
//! An *ArrayView* is an abstract accessor-interface with a fixed length
//! and an element accessor `get(idx)`.
//! *Projections* are transformations from one view into another.
//! Every projection that can keep `len()` and `get()` in O(1) stays an
//! `ArrayView`; those that can't either degrade to a forward-only
//! iterator (`filter`, `select_many`) or realize their result into a
//! `VecBuffer` (`flatten`, the scan family, grouping).
//!
//! Views are immutable and hold no caches, so the same view can be read
//! from many threads at once.
//!
//!# Examples
//!
//! ```
//! use arrview::prelude::*;
//!
//! let buffer = VecBuffer::with_data(vec![3, 5, -9, 1]);
//!
//! let projected = buffer.clone()
//!                     .map(|x| x + 10)   // maps to 13, 15, 1, 11
//!                     .reverse();
//!
//! assert_eq!(projected.len(), 4);
//! assert_eq!(projected.get(&0), 11);
//! assert_eq!(projected.get(&3), 13);
//!
//! let big: Vec<i32> = projected.filter(|x| *x > 10).collect();
//! assert_eq!(big, vec![11, 15, 13]);
//! ```

pub mod error;
pub mod view;
pub mod buffer;
pub mod projection;

pub use error::ViewError;

pub mod prelude {
    pub use crate::{
        buffer::{lookup::Lookup, vec::VecBuffer},
        error::ViewError,
        projection::slice2arr::SliceView,
        view::{
            array::{build, from_fn, range, repeat, ArrayView, ArrayViewExt, FnView},
            index::{IndexArea, IndexView},
        },
    };
}
