pub mod insight;
pub mod repository;
pub mod score;
