pub mod constructor_table;
pub mod sandbox;
pub mod shared;
