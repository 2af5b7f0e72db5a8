pub mod health;
pub mod rating;
pub mod speech;
pub mod storytelling;
pub mod word;
