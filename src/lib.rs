//! Fluid value interpolation and media-query helpers for responsive CSS.
//!
//! The crate generates CSS fragments as plain strings: a `calc()` expression
//! that scales a pixel value linearly with the viewport width, and the
//! `@media` preludes that gate rules on the breakpoint scale.
//!
//! ```
//! use fluid_css::{interpolate, media, Breakpoint};
//!
//! let font_size = interpolate(Breakpoint::Tablet, 20, Breakpoint::Wide, 40);
//! assert_eq!(
//!     font_size,
//!     "calc(20px + 0.017361111111111112 * (100vw - 768px))"
//! );
//!
//! assert_eq!(media::min_width(Breakpoint::Tablet), "@media (min-width: 768px)");
//! ```

pub mod breakpoints;
pub mod media;

pub use breakpoints::{Breakpoint, Breakpoints, ParseBreakpointError, BREAKPOINTS};

// ── Value interpolation ────────────────────────────────────────────────

/// Builds a `calc()` expression that interpolates a pixel value linearly
/// with the viewport width.
///
/// At a viewport exactly `min_width` pixels wide the expression evaluates to
/// `min_value` pixels, at `max_width` to `max_value` pixels, and it keeps
/// extrapolating along the same line outside that range. Use
/// [`interpolate_clamped`] to pin the value at the endpoints instead.
///
/// Degenerate inputs collapse to a plain pixel literal: when both widths are
/// equal, or both values are equal, there is no line to follow and the
/// output is `min_value` as a fixed length.
///
/// # Examples
///
/// ```
/// use fluid_css::interpolate;
///
/// // 20px at 768px viewport, growing to 40px at 1920px.
/// assert_eq!(
///     interpolate(768, 20, 1920, 40),
///     "calc(20px + 0.017361111111111112 * (100vw - 768px))"
/// );
///
/// // A zero-width range has nothing to interpolate over.
/// assert_eq!(interpolate(768, 20, 768, 40), "20px");
/// ```
pub fn interpolate(
    min_width: impl Into<f64>,
    min_value: impl Into<f64>,
    max_width: impl Into<f64>,
    max_value: impl Into<f64>,
) -> String {
    let min_width = min_width.into();
    let min_value = min_value.into();
    let max_width = max_width.into();
    let max_value = max_value.into();

    // Equal widths make the slope undefined; emit the fixed value instead.
    if max_width == min_width {
        return format!("{min_value}px");
    }

    let slope = (max_value - min_value) / (max_width - min_width);

    // Zero slope means the value never changes across the range.
    if slope == 0.0 {
        return format!("{min_value}px");
    }

    format!("calc({min_value}px + {slope} * (100vw - {min_width}px))")
}

/// Like [`interpolate`], but wraps the expression in `clamp()` so the value
/// stops changing outside the breakpoint range.
///
/// The clamp bounds are the smaller and larger of the two values, so the
/// expression stays well-formed when the value shrinks as the viewport
/// grows. Degenerate inputs skip the wrapper and return the plain literal.
///
/// # Examples
///
/// ```
/// use fluid_css::interpolate_clamped;
///
/// assert_eq!(
///     interpolate_clamped(768, 20, 1920, 40),
///     "clamp(20px, calc(20px + 0.017361111111111112 * (100vw - 768px)), 40px)"
/// );
/// ```
pub fn interpolate_clamped(
    min_width: impl Into<f64>,
    min_value: impl Into<f64>,
    max_width: impl Into<f64>,
    max_value: impl Into<f64>,
) -> String {
    let min_value = min_value.into();
    let max_value = max_value.into();
    let expr = interpolate(min_width, min_value, max_width, max_value);

    // A degenerate range collapsed to a plain literal, nothing to bound.
    if !expr.starts_with("calc(") {
        return expr;
    }

    let lower = min_value.min(max_value);
    let upper = min_value.max(max_value);
    format!("clamp({lower}px, {expr}, {upper}px)")
}
