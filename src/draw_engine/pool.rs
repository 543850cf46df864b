/// Every integer from `min` to `max` inclusive, ascending.
///
/// A degenerate range (`min >= max`) yields an empty pool rather than an
/// error; callers validate bounds through [`Range::new`](super::models::Range::new)
/// before resetting a session.
pub fn generate_pool(min: i64, max: i64) -> Vec<i64> {
    if min >= max {
        return Vec::new();
    }
    (min..=max).collect()
}
