pub mod rating;
pub mod shared;
pub mod speech;
pub mod storytelling;
pub mod word;
