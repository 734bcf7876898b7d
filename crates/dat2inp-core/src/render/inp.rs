use std::io::{self, Write};

use crate::Record;

use super::scientific;

/// Writes `record` as an INP text record: one field per line, in the order
/// the downstream analysis application expects. The line order is a frozen
/// contract and is distinct from the binary offset order.
pub fn write_inp<W: Write>(record: &Record, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", record.spectrum_identifier)?;
    writeln!(out, "{}", record.sample_identifier)?;
    writeln!(out, "{}", record.project)?;
    writeln!(out, "{}", record.sample_location)?;
    writeln!(out, "{}", scientific(record.latitude))?;
    writeln!(out, "{}", record.latitude_unit)?;
    writeln!(out, "{}", scientific(record.longitude))?;
    writeln!(out, "{}", record.longitude_unit)?;
    writeln!(out, "{}", scientific(record.sample_height))?;
    writeln!(out, "{}", scientific(record.sample_weight))?;
    writeln!(out, "{}", scientific(record.sample_density))?;
    writeln!(out, "{}", scientific(record.sample_volume))?;
    writeln!(out, "{}", scientific(record.sample_quantity))?;
    writeln!(out, "{}", scientific(record.sample_uncertainty))?;
    writeln!(out, "{}", record.sample_unit)?;
    writeln!(out, "{}", record.detector_identifier)?;
    writeln!(out, "{}", record.year)?;
    writeln!(out, "{}", record.beaker_identifier)?;
    writeln!(out, "{}", record.sampling_start)?;
    writeln!(out, "{}", record.sampling_stop)?;
    writeln!(out, "{}", record.reference_time)?;
    writeln!(out, "{}", record.measurement_start)?;
    writeln!(out, "{}", record.measurement_stop)?;
    writeln!(out, "{}", record.real_time)?;
    writeln!(out, "{}", record.live_time)?;
    writeln!(out, "{}", record.measurement_time)?;
    writeln!(out, "{}", scientific(record.dead_time))?;
    writeln!(out, "{}", record.nuclide_library)?;
    writeln!(out, "{}", record.lim_file)?;
    writeln!(out, "{}", record.channel_count)?;
    writeln!(out, "{}", record.format)?;
    writeln!(out, "{}", record.record_length)?;
    writeln!(out, "{}", scientific(record.fwhmps))?;
    writeln!(out, "{}", scientific(record.fwhman))?;
    writeln!(out, "{}", scientific(record.thresh))?;
    writeln!(out, "{}", scientific(record.bstf))?;
    writeln!(out, "{}", scientific(record.etol))?;
    writeln!(out, "{}", scientific(record.loch))?;
    writeln!(out, "{}", record.ica)?;
    writeln!(out, "{}", record.energy_file)?;
    writeln!(out, "{}", record.pef_file)?;
    writeln!(out, "{}", record.tef_file)?;
    writeln!(out, "{}", record.background_file)?;
    writeln!(out, "{}", record.pa1)?;
    writeln!(out, "{}", record.pa2)?;
    writeln!(out, "{}", record.pa3)?;
    writeln!(out, "{}", record.pa4)?;
    writeln!(out, "{}", record.pa5)?;
    writeln!(out, "{}", record.pa6)?;
    writeln!(out, "{}", record.print_out)?;
    writeln!(out, "{}", record.plot_out)?;
    writeln!(out, "{}", record.disk_out)?;
    writeln!(out, "{}", record.ex_print_out)?;
    writeln!(out, "{}", record.ex_disk_out)?;
    writeln!(out, "{}", record.po1)?;
    writeln!(out, "{}", record.po2)?;
    writeln!(out, "{}", record.po3)?;
    writeln!(out, "{}", record.po4)?;
    writeln!(out, "{}", record.po5)?;
    writeln!(out, "{}", record.po6)?;
    writeln!(out, "{}", record.complete)?;
    writeln!(out, "{}", record.analysed)?;
    writeln!(out, "{}", record.st1)?;
    writeln!(out, "{}", record.st2)?;
    writeln!(out, "{}", record.st3)?;
    writeln!(out, "{}", record.st4)?;
    writeln!(out, "{}", record.st5)?;
    writeln!(out, "{}", record.st6)?;
    Ok(())
}
