pub mod category;
pub mod name;
pub mod slot;
