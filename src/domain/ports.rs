use crate::domain::model::UriMatch;

/// Source of uniformly distributed floats in `[0, 1)`.
///
/// Injected into the sampler so that draws can be made deterministic.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// URI-detection capability used by the markup rewriter.
///
/// Implementations must return matches ordered left to right and
/// non-overlapping, with byte offsets into `text` that fall on char
/// boundaries. The rewriter skips (and logs) any match breaking this
/// rather than panicking on the slice.
pub trait MatchUris {
    fn match_uris<'t>(&self, text: &'t str) -> Vec<UriMatch<'t>>;
}
