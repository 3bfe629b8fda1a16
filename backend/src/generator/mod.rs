//! Shared generator interface and seeding helpers

pub mod bit_generator;
pub mod seeding;

pub use bit_generator::BitGenerator;
pub use seeding::{words_from_le_bytes, SeedBytes};
