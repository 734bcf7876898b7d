//! dat2inp core library for gamma spectrometry DAT record conversion.
//!
//! This crate implements the conversion pipeline used by the CLI: one DAT
//! file's bytes are decoded into a [`Record`] by the format layer
//! (layout/reader/parser), and renderers serialize the record field by field
//! into the INP text consumed by the downstream analysis application, or
//! into a labelled debug dump. Decoding is byte-oriented and side-effect
//! free; file I/O is confined to the [`decode_dat_file`] helper. Wire-format
//! details are captured in `format::layout` so the parser stays minimal and
//! never indexes bytes directly.
//!
//! Invariants:
//! - Decoding is fail-fast: a buffer shorter than [`RECORD_LEN`] is rejected
//!   before any field is extracted, so partial records cannot escape.
//! - Text fields carry no trailing whitespace or NUL padding.
//! - A zero live time yields a non-finite dead time, never a panic.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use dat2inp_core::decode_dat_file;
//!
//! let record = decode_dat_file(Path::new("NK455.DAT"), Some("MDA01.LIB"))?;
//! println!("spectrum: {}", record.spectrum_identifier);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod format;
pub mod render;

pub use format::layout::RECORD_LEN;
pub use format::{DatError, parse_record};
pub use render::{write_dump, write_inp};

/// One decoded instrument export.
///
/// A record is constructed fresh per input buffer, owned solely by its
/// caller, and immutable once decoding completes. All timestamps are opaque
/// strings in whatever notation the instrument wrote; they are not parsed.
///
/// # Examples
/// ```
/// use dat2inp_core::{RECORD_LEN, parse_record};
///
/// let buffer = vec![0u8; RECORD_LEN];
/// let record = parse_record(&buffer, None).unwrap();
/// assert_eq!(record.spectrum_identifier, "");
/// assert_eq!(record.channel_count, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Spectrum identifier assigned by the instrument.
    pub spectrum_identifier: String,
    /// Sample identifier, free text.
    pub sample_identifier: String,
    /// Project name.
    pub project: String,
    /// Sample location, free text (interior whitespace preserved).
    pub sample_location: String,
    /// Geodetic latitude.
    pub latitude: f32,
    /// Hemisphere code for the latitude (raw byte).
    pub latitude_unit: char,
    /// Geodetic longitude.
    pub longitude: f32,
    /// Hemisphere code for the longitude (raw byte).
    pub longitude_unit: char,
    pub sample_height: f32,
    pub sample_weight: f32,
    pub sample_density: f32,
    pub sample_volume: f32,
    pub sample_quantity: f32,
    pub sample_uncertainty: f32,
    /// Unit code for the sample quantity.
    pub sample_unit: String,
    /// Detector identifier.
    pub detector_identifier: String,
    /// Acquisition year as written by the instrument.
    pub year: String,
    /// Beaker (geometry) identifier.
    pub beaker_identifier: String,
    /// Sampling interval start (opaque timestamp string).
    pub sampling_start: String,
    /// Sampling interval stop (opaque timestamp string).
    pub sampling_stop: String,
    /// Decay reference time (opaque timestamp string).
    pub reference_time: String,
    /// Measurement start (opaque timestamp string).
    pub measurement_start: String,
    /// Measurement stop (opaque timestamp string).
    pub measurement_stop: String,
    /// Elapsed wall-clock counting time in seconds.
    pub real_time: i32,
    /// Detector live time in seconds.
    pub live_time: i32,
    /// Requested measurement time in seconds.
    pub measurement_time: i32,
    /// Derived dead-time percentage: `(real - live) / live * 100`.
    ///
    /// Non-finite when `live_time` is zero; serializes to JSON `null` in
    /// that case.
    pub dead_time: f32,
    /// Nuclide library file reference.
    pub nuclide_library: String,
    /// Detection limit library file reference; the caller-supplied default
    /// is substituted verbatim when the decoded field is empty.
    pub lim_file: String,
    /// Number of spectrum channels.
    pub channel_count: i32,
    /// Spectrum format code.
    pub format: String,
    /// Declared record length flag.
    pub record_length: i16,
    /// Peak-search FWHM tuning parameter.
    pub fwhmps: f32,
    /// Analysis FWHM tuning parameter.
    pub fwhman: f32,
    /// Peak-search threshold.
    pub thresh: f32,
    pub bstf: f32,
    /// Energy tolerance.
    pub etol: f32,
    /// Lowest channel considered by the analysis.
    pub loch: f32,
    pub ica: i16,
    /// Energy calibration file reference.
    pub energy_file: String,
    /// Peak efficiency file reference.
    pub pef_file: String,
    /// Total efficiency file reference.
    pub tef_file: String,
    /// Background spectrum file reference.
    pub background_file: String,
    /// Named integer analysis parameters PA1..PA6.
    pub pa1: i32,
    pub pa2: i32,
    pub pa3: i32,
    pub pa4: i32,
    pub pa5: i32,
    pub pa6: i32,
    /// Output-mode flags (boolean-like shorts).
    pub print_out: i16,
    pub plot_out: i16,
    pub disk_out: i16,
    pub ex_print_out: i16,
    pub ex_disk_out: i16,
    /// Named integer analysis parameters PO1..PO6.
    pub po1: i32,
    pub po2: i32,
    pub po3: i32,
    pub po4: i32,
    pub po5: i32,
    pub po6: i32,
    /// Completion flag.
    pub complete: i16,
    /// Analysis flag.
    pub analysed: i16,
    /// Status shorts ST1..ST6.
    pub st1: i16,
    pub st2: i16,
    pub st3: i16,
    pub st4: i16,
    pub st5: i16,
    pub st6: i16,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("DAT decode error: {0}")]
    Decode(#[from] DatError),
}

/// Reads one DAT file fully and decodes it into a [`Record`].
///
/// Every call reads into a freshly allocated buffer; nothing is shared or
/// reused between files.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use dat2inp_core::decode_dat_file;
///
/// let record = decode_dat_file(Path::new("NK455.DAT"), None)?;
/// println!("dead time: {}", record.dead_time);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_dat_file(
    path: &Path,
    default_lim_file: Option<&str>,
) -> Result<Record, ConvertError> {
    let buffer = std::fs::read(path)?;
    Ok(parse_record(&buffer, default_lim_file)?)
}
