//! Text renderers for decoded records.
//!
//! `inp` writes the fixed-order line format consumed by the downstream
//! analysis application; `dump` writes a labelled debug listing. Both render
//! field by field over any `io::Write` sink and never reorder fields.

pub mod dump;
pub mod inp;

pub use dump::write_dump;
pub use inp::write_inp;

/// Formats a float the way the downstream INP consumer expects it: 14 digits
/// after the decimal point and a signed two-digit exponent.
///
/// Non-finite values fall back to their `Display` form; a record with zero
/// live time carries a non-finite dead time by contract.
///
/// # Examples
/// ```
/// use dat2inp_core::render::scientific;
///
/// assert_eq!(scientific(20.0), "2.00000000000000e+01");
/// assert_eq!(scientific(0.0), "0.00000000000000e+00");
/// ```
pub fn scientific(value: f32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.14e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("+", exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
