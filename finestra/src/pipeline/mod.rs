pub mod align;
pub mod load;
pub mod summary;
