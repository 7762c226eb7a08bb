pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::markup::{encode_uris_to_markup, MarkupRewriter};
pub use core::sampler::{gen_random_number, sample, sample_slice, IntervalSampler, RngSource};
pub use core::uri::UriMatcher;
pub use domain::model::{Interval, IntervalSet, MarkupOptions, UriMatch};
pub use domain::ports::{MatchUris, RandomSource};
pub use utils::error::{Result, UtilsError};
