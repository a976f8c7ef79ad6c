
pub mod slice2arr;
pub mod map_array;
pub mod zip_array;
pub mod map_indices;
pub mod concat_array;
pub mod split_array;
pub mod flatten_array;
pub mod scan_array;
