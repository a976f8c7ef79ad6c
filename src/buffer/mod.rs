pub mod vec;
pub mod lookup;
