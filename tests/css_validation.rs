//! Parses every generated string through lightningcss, catching
//! output-grammar bugs that exact-string assertions miss.

use fluid_css::{interpolate, interpolate_clamped, media, Breakpoint, BREAKPOINTS};
use lightningcss::stylesheet::{ParserOptions, StyleSheet};

fn validate_css(css: &str, name: &str) -> Result<(), String> {
    match StyleSheet::parse(css, ParserOptions::default()) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("{name}: CSS parse error: {e}")),
    }
}

/// Wraps a generated value in a declaration and parses the result.
fn validate_value(value: &str, name: &str) {
    let css = format!(".fluid {{ font-size: {value}; }}");
    if let Err(e) = validate_css(&css, name) {
        eprintln!("rejected stylesheet:\n{css}");
        panic!("{e}");
    }
}

/// Wraps a generated prelude around a rule and parses the result.
fn validate_query(query: &str, name: &str) {
    let css = format!("{query} {{ .fluid {{ font-size: 1rem; }} }}");
    if let Err(e) = validate_css(&css, name) {
        eprintln!("rejected stylesheet:\n{css}");
        panic!("{e}");
    }
}

#[test]
fn validate_interpolated_values() {
    validate_value(&interpolate(768.0, 20.0, 1920.0, 40.0), "growing");
    validate_value(&interpolate(320.0, 40.0, 1920.0, 8.0), "shrinking");
    validate_value(&interpolate(375.5, 14.25, 1440.0, 22.0), "fractional");
    validate_value(&interpolate(768.0, 20.0, 768.0, 40.0), "degenerate_width");
    validate_value(&interpolate(320.0, 16.0, 1920.0, 16.0), "flat_value");
}

#[test]
fn validate_clamped_values() {
    validate_value(&interpolate_clamped(768.0, 20.0, 1920.0, 40.0), "clamped_growing");
    validate_value(&interpolate_clamped(320.0, 40.0, 1920.0, 8.0), "clamped_shrinking");
    validate_value(&interpolate_clamped(768.0, 20.0, 768.0, 40.0), "clamped_degenerate");
}

#[test]
fn validate_media_queries() {
    validate_query(&media::min_width(768.0), "min_width");
    validate_query(&media::max_width(768.0), "max_width");
    validate_query(&media::between(768.0, 1200.0), "between");
    validate_query(&media::between(1200.0, 768.0), "between_reversed");
    validate_query(&media::min_width(767.5), "fractional_bound");
}

#[test]
fn validate_whole_breakpoint_table() {
    for bp in Breakpoint::ALL {
        validate_query(&media::min_width(bp), &format!("min_{bp}"));
        validate_query(&media::max_width(bp), &format!("max_{bp}"));
    }

    for pair in Breakpoint::ALL.windows(2) {
        validate_query(&media::between(pair[0], pair[1]), &format!("{}_to_{}", pair[0], pair[1]));
        validate_value(
            &interpolate(pair[0], 16.0, pair[1], 24.0),
            &format!("span_{}_to_{}", pair[0], pair[1]),
        );
    }

    eprintln!(
        "validated {} named breakpoints and {} adjacent ranges",
        Breakpoint::ALL.len(),
        Breakpoint::ALL.len() - 1
    );
}

#[test]
fn validate_table_span_value() {
    validate_value(
        &interpolate(BREAKPOINTS.mobile, 16.0, BREAKPOINTS.wide, 24.0),
        "full_table_span",
    );
}
