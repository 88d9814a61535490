//! Media-query prelude builders for the breakpoint scale.

// Subtracted from every max-width bound. Keeps adjacent min-width and
// max-width ranges from both matching at the boundary pixel. The value is
// part of the output contract and must not change.
const MAX_WIDTH_OFFSET: f64 = 0.02;

/// Builds a `@media (min-width: ...)` prelude matching viewports at least
/// `breakpoint` pixels wide.
///
/// # Examples
///
/// ```
/// use fluid_css::media;
///
/// assert_eq!(media::min_width(768), "@media (min-width: 768px)");
/// ```
pub fn min_width(breakpoint: impl Into<f64>) -> String {
    let breakpoint = breakpoint.into();
    format!("@media (min-width: {breakpoint}px)")
}

/// Builds a `@media (max-width: ...)` prelude matching viewports strictly
/// narrower than `breakpoint` pixels.
///
/// The emitted bound sits 0.02px below the breakpoint, so a rule gated on
/// `max_width(768)` never overlaps one gated on `min_width(768)`.
///
/// # Examples
///
/// ```
/// use fluid_css::media;
///
/// assert_eq!(media::max_width(768), "@media (max-width: 767.98px)");
/// ```
pub fn max_width(breakpoint: impl Into<f64>) -> String {
    let upper = breakpoint.into() - MAX_WIDTH_OFFSET;
    format!("@media (max-width: {upper}px)")
}

/// Builds a combined prelude matching viewports from `min` up to (but not
/// including) `max` pixels wide.
///
/// The max-width bound gets the same 0.02px offset as [`max_width`], so
/// consecutive ranges tile the viewport axis without overlap.
///
/// # Examples
///
/// ```
/// use fluid_css::media;
///
/// assert_eq!(
///     media::between(768, 1200),
///     "@media (min-width: 768px) and (max-width: 1199.98px)"
/// );
/// ```
pub fn between(min: impl Into<f64>, max: impl Into<f64>) -> String {
    let min = min.into();
    let upper = max.into() - MAX_WIDTH_OFFSET;
    format!("@media (min-width: {min}px) and (max-width: {upper}px)")
}
