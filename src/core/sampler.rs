use crate::core::{Interval, IntervalSet, RandomSource};
use crate::utils::error::{Result, UtilsError};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        // Standard 分佈的 f64 落在 [0, 1)
        self.rng.gen::<f64>()
    }
}

fn uniform<R: RandomSource + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    rng.next_f64() * (max - min) + min
}

/// Largest `f64` strictly below `x` (finite `x` only).
fn prev_float(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

/// 浮點進位可能讓結果碰到上界，拉回 `[low, high)` 內
fn clamp_into(interval: &Interval, value: f64) -> f64 {
    value.max(interval.low()).min(prev_float(interval.high()))
}

/// Uniform value in `[min, max)`.
///
/// `min == max` is accepted and returns `min`.
pub fn gen_random_number<R: RandomSource + ?Sized>(min: f64, max: f64, rng: &mut R) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
        return Err(UtilsError::invalid_argument(format!(
            "cannot draw a number from [{}, {})",
            min, max
        )));
    }
    let value = uniform(min, max, rng);
    if min < max && value >= max {
        return Ok(prev_float(max).max(min));
    }
    Ok(value)
}

/// Uniform value over the union of the intervals in `set`.
///
/// Each interval is weighted by its width. A value is drawn in
/// `[0, total_size)`, shifted to the first low bound, then pushed across
/// every gap it has already passed. The result always lies inside one
/// non-empty interval of the set.
pub fn sample<R: RandomSource + ?Sized>(set: &IntervalSet, rng: &mut R) -> f64 {
    let intervals = set.as_slice();

    if let [only] = intervals {
        return clamp_into(only, uniform(only.low(), only.high(), rng));
    }

    let mut n = uniform(0.0, set.total_size(), rng) + intervals[0].low();
    let mut index = intervals.len() - 1;
    for (i, pair) in intervals.windows(2).enumerate() {
        if n < pair[0].high() {
            index = i;
            break;
        }
        n += pair[1].low() - pair[0].high();
    }

    // 停在空區間（只會因進位發生）時，改用後面、再不行就前面的非空區間
    let chosen = intervals[index..]
        .iter()
        .chain(intervals[..index].iter().rev())
        .find(|interval| interval.width() > 0.0)
        .unwrap_or(&intervals[index]);
    let value = clamp_into(chosen, n);

    tracing::trace!(value, intervals = intervals.len(), "sampled interval union");
    value
}

/// Validates raw `(low, high)` pairs before sampling.
pub fn sample_slice<R: RandomSource + ?Sized>(pairs: &[(f64, f64)], rng: &mut R) -> Result<f64> {
    let set = IntervalSet::from_pairs(pairs)?;
    Ok(sample(&set, rng))
}

/// Owns its random source; convenient when many draws are needed.
pub struct IntervalSampler<R: RandomSource> {
    rng: R,
}

impl IntervalSampler<RngSource<ThreadRng>> {
    pub fn from_thread_rng() -> Self {
        Self::new(RngSource::thread())
    }
}

impl IntervalSampler<RngSource<StdRng>> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> IntervalSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn sample(&mut self, set: &IntervalSet) -> f64 {
        sample(set, &mut self.rng)
    }

    pub fn sample_n(&mut self, set: &IntervalSet, count: usize) -> Vec<f64> {
        let values: Vec<f64> = (0..count).map(|_| sample(set, &mut self.rng)).collect();
        tracing::debug!("🎲 Drew {} value(s) from {} interval(s)", values.len(), set.len());
        values
    }
}
