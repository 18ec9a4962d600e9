// Host-side tests for the pure control-panel helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/dom.rs"]
mod dom;
#[path = "../src/panel.rs"]
mod panel;

use panel::{parse_height, readout_text};

#[test]
fn slider_values_parse() {
    assert_eq!(parse_height("1.6"), Some(1.6));
    assert_eq!(parse_height("0.5"), Some(0.5));
    assert_eq!(parse_height("3"), Some(3.0));
    assert_eq!(parse_height("  2.0 "), Some(2.0));
}

#[test]
fn garbage_and_non_finite_values_are_rejected() {
    assert_eq!(parse_height(""), None);
    assert_eq!(parse_height("abc"), None);
    assert_eq!(parse_height("NaN"), None);
    assert_eq!(parse_height("inf"), None);
}

#[test]
fn readout_shows_centimeters() {
    assert_eq!(readout_text(1.6), "Levitation height: 160.0cm");
    assert_eq!(readout_text(0.5), "Levitation height: 50.0cm");
    assert_eq!(readout_text(3.0), "Levitation height: 300.0cm");
}
