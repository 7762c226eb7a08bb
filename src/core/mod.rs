pub mod markup;
pub mod sampler;
pub mod uri;

pub use crate::domain::model::{Interval, IntervalSet, MarkupOptions, UriMatch};
pub use crate::domain::ports::{MatchUris, RandomSource};
pub use crate::utils::error::Result;
