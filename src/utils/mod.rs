pub mod error;
pub mod geometry;
pub mod logger;
pub mod text;
pub mod validation;
