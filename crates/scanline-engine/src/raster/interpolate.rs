/// Linearly interpolates a dependent value `d` over the independent range `[i0, i1]`.
///
/// Returns one entry per integer step, `i1 - i0 + 1` in total, where entry `k` is
/// `d0 + k * (d1 - d0) / (i1 - i0)` rounded down to an integer. Triangle edges use
/// this with `i = y` and `d = x` to precompute the x-extent of every scanline.
///
/// The quotient is computed exactly in integers, so both endpoints are reproduced
/// without floating-point drift.
///
/// A flat range (`i0 == i1`) yields the single entry `[d0]`. A reversed range
/// (`i1 < i0`) yields nothing.
pub fn interpolate(i0: i32, d0: i32, i1: i32, d1: i32) -> Vec<i32> {
    if i1 < i0 {
        return Vec::new();
    }
    if i0 == i1 {
        return vec![d0];
    }

    let steps = i64::from(i1) - i64::from(i0);
    let rise = i64::from(d1) - i64::from(d0);

    (0..=steps)
        .map(|k| (i64::from(d0) + (k * rise).div_euclid(steps)) as i32)
        .collect()
}
