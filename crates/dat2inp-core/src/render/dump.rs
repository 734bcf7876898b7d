use std::io::{self, Write};

use crate::Record;

/// Writes `record` as a labelled `name: value` listing for debugging.
///
/// Floats render in their plain `Display` form here; the exact-precision
/// scientific rendering is reserved for the INP output.
pub fn write_dump<W: Write>(record: &Record, out: &mut W) -> io::Result<()> {
    writeln!(out, "spectrum identifier: {}", record.spectrum_identifier)?;
    writeln!(out, "sample identifier: {}", record.sample_identifier)?;
    writeln!(out, "project: {}", record.project)?;
    writeln!(out, "sample location: {}", record.sample_location)?;
    writeln!(out, "latitude: {}", record.latitude)?;
    writeln!(out, "latitude unit: {}", record.latitude_unit)?;
    writeln!(out, "longitude: {}", record.longitude)?;
    writeln!(out, "longitude unit: {}", record.longitude_unit)?;
    writeln!(out, "sample height: {}", record.sample_height)?;
    writeln!(out, "sample weight: {}", record.sample_weight)?;
    writeln!(out, "sample density: {}", record.sample_density)?;
    writeln!(out, "sample volume: {}", record.sample_volume)?;
    writeln!(out, "sample quantity: {}", record.sample_quantity)?;
    writeln!(out, "sample uncertainty: {}", record.sample_uncertainty)?;
    writeln!(out, "sampling start: {}", record.sampling_start)?;
    writeln!(out, "sampling stop: {}", record.sampling_stop)?;
    writeln!(out, "reference time: {}", record.reference_time)?;
    writeln!(out, "measurement start: {}", record.measurement_start)?;
    writeln!(out, "measurement stop: {}", record.measurement_stop)?;
    writeln!(out, "format: {}", record.format)?;
    writeln!(out, "FWHMPS: {}", record.fwhmps)?;
    writeln!(out, "FWHMAN: {}", record.fwhman)?;
    writeln!(out, "THRESH: {}", record.thresh)?;
    writeln!(out, "BSTF: {}", record.bstf)?;
    writeln!(out, "ETOL: {}", record.etol)?;
    writeln!(out, "LOCH: {}", record.loch)?;
    writeln!(out, "ICA: {}", record.ica)?;
    writeln!(out, "live time: {}", record.live_time)?;
    writeln!(out, "real time: {}", record.real_time)?;
    writeln!(out, "dead time: {}", record.dead_time)?;
    writeln!(out, "measurement time: {}", record.measurement_time)?;
    writeln!(out, "channel count: {}", record.channel_count)?;
    writeln!(out, "record length: {}", record.record_length)?;
    writeln!(out, "sample unit: {}", record.sample_unit)?;
    writeln!(out, "detector id: {}", record.detector_identifier)?;
    writeln!(out, "year: {}", record.year)?;
    writeln!(out, "beaker id: {}", record.beaker_identifier)?;
    writeln!(out, "nuclide library: {}", record.nuclide_library)?;
    writeln!(out, "energy file: {}", record.energy_file)?;
    writeln!(out, "pef file: {}", record.pef_file)?;
    writeln!(out, "tef file: {}", record.tef_file)?;
    writeln!(out, "background file: {}", record.background_file)?;
    writeln!(out, "LIM file: {}", record.lim_file)?;
    writeln!(out)?;
    Ok(())
}
