
                    /*\
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                   Views
<<<<>>>><<>><><<>><<<*>>><<>><><<>><<<<>>>>
                    \*/

pub mod array;
pub mod sequence;
pub mod index;

pub use {
    array::{ArrayView, ArrayViewExt, FnView},
    index::{IndexArea, IndexView},
    sequence::{ArrayViewIntoIter, ArrayViewIter},
};
