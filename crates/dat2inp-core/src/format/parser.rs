use crate::Record;

use super::error::DatError;
use super::layout;
use super::reader::DatReader;

/// Decodes one full DAT record from `buf`.
///
/// The buffer must hold at least [`layout::RECORD_LEN`] bytes; shorter input
/// fails before any field is extracted, so a partially populated record can
/// never escape. `default_lim_file` replaces an empty detection limit
/// library field verbatim, without trimming.
pub fn parse_record(buf: &[u8], default_lim_file: Option<&str>) -> Result<Record, DatError> {
    let reader = DatReader::new(buf);
    reader.require_len(layout::RECORD_LEN)?;

    let real_time = reader.read_i32_le(layout::REAL_TIME_OFFSET)?;
    let live_time = reader.read_i32_le(layout::LIVE_TIME_OFFSET)?;
    // A zero live time produces a non-finite quotient; downstream consumers
    // rely on the raw IEEE result, so it is not treated as an error.
    let dead_time = (real_time as f32 - live_time as f32) / live_time as f32 * 100.0;

    let mut lim_file = reader.read_str(layout::LIM_FILE)?;
    if lim_file.is_empty() {
        if let Some(default) = default_lim_file {
            lim_file = default.to_string();
        }
    }

    Ok(Record {
        spectrum_identifier: reader.read_str(layout::SPECTRUM_IDENTIFIER)?,
        sample_identifier: reader.read_str(layout::SAMPLE_IDENTIFIER)?,
        project: reader.read_str(layout::PROJECT)?,
        sample_location: reader.read_str(layout::SAMPLE_LOCATION)?,
        latitude: reader.read_f32_le(layout::LATITUDE_OFFSET)?,
        latitude_unit: reader.read_char(layout::LATITUDE_UNIT_OFFSET)?,
        longitude: reader.read_f32_le(layout::LONGITUDE_OFFSET)?,
        longitude_unit: reader.read_char(layout::LONGITUDE_UNIT_OFFSET)?,
        sample_height: reader.read_f32_le(layout::SAMPLE_HEIGHT_OFFSET)?,
        sample_weight: reader.read_f32_le(layout::SAMPLE_WEIGHT_OFFSET)?,
        sample_density: reader.read_f32_le(layout::SAMPLE_DENSITY_OFFSET)?,
        sample_volume: reader.read_f32_le(layout::SAMPLE_VOLUME_OFFSET)?,
        sample_quantity: reader.read_f32_le(layout::SAMPLE_QUANTITY_OFFSET)?,
        sample_uncertainty: reader.read_f32_le(layout::SAMPLE_UNCERTAINTY_OFFSET)?,
        sample_unit: reader.read_str(layout::SAMPLE_UNIT)?,
        detector_identifier: reader.read_str(layout::DETECTOR_IDENTIFIER)?,
        year: reader.read_str(layout::YEAR)?,
        beaker_identifier: reader.read_str(layout::BEAKER_IDENTIFIER)?,
        sampling_start: reader.read_str(layout::SAMPLING_START)?,
        sampling_stop: reader.read_str(layout::SAMPLING_STOP)?,
        reference_time: reader.read_str(layout::REFERENCE_TIME)?,
        measurement_start: reader.read_str(layout::MEASUREMENT_START)?,
        measurement_stop: reader.read_str(layout::MEASUREMENT_STOP)?,
        real_time,
        live_time,
        measurement_time: reader.read_i32_le(layout::MEASUREMENT_TIME_OFFSET)?,
        dead_time,
        nuclide_library: reader.read_str(layout::NUCLIDE_LIBRARY)?,
        lim_file,
        channel_count: reader.read_i32_le(layout::CHANNEL_COUNT_OFFSET)?,
        format: reader.read_str(layout::FORMAT)?,
        record_length: reader.read_i16_le(layout::RECORD_LENGTH_OFFSET)?,
        fwhmps: reader.read_f32_le(layout::FWHMPS_OFFSET)?,
        fwhman: reader.read_f32_le(layout::FWHMAN_OFFSET)?,
        thresh: reader.read_f32_le(layout::THRESH_OFFSET)?,
        bstf: reader.read_f32_le(layout::BSTF_OFFSET)?,
        etol: reader.read_f32_le(layout::ETOL_OFFSET)?,
        loch: reader.read_f32_le(layout::LOCH_OFFSET)?,
        ica: reader.read_i16_le(layout::ICA_OFFSET)?,
        energy_file: reader.read_str(layout::ENERGY_FILE)?,
        pef_file: reader.read_str(layout::PEF_FILE)?,
        tef_file: reader.read_str(layout::TEF_FILE)?,
        background_file: reader.read_str(layout::BACKGROUND_FILE)?,
        pa1: reader.read_i32_le(layout::PA1_OFFSET)?,
        pa2: reader.read_i32_le(layout::PA2_OFFSET)?,
        pa3: reader.read_i32_le(layout::PA3_OFFSET)?,
        pa4: reader.read_i32_le(layout::PA4_OFFSET)?,
        pa5: reader.read_i32_le(layout::PA5_OFFSET)?,
        pa6: reader.read_i32_le(layout::PA6_OFFSET)?,
        print_out: reader.read_i16_le(layout::PRINT_OUT_OFFSET)?,
        plot_out: reader.read_i16_le(layout::PLOT_OUT_OFFSET)?,
        disk_out: reader.read_i16_le(layout::DISK_OUT_OFFSET)?,
        ex_print_out: reader.read_i16_le(layout::EX_PRINT_OUT_OFFSET)?,
        ex_disk_out: reader.read_i16_le(layout::EX_DISK_OUT_OFFSET)?,
        po1: reader.read_i32_le(layout::PO1_OFFSET)?,
        po2: reader.read_i32_le(layout::PO2_OFFSET)?,
        po3: reader.read_i32_le(layout::PO3_OFFSET)?,
        po4: reader.read_i32_le(layout::PO4_OFFSET)?,
        po5: reader.read_i32_le(layout::PO5_OFFSET)?,
        po6: reader.read_i32_le(layout::PO6_OFFSET)?,
        complete: reader.read_i16_le(layout::COMPLETE_OFFSET)?,
        analysed: reader.read_i16_le(layout::ANALYSED_OFFSET)?,
        st1: reader.read_i16_le(layout::ST1_OFFSET)?,
        st2: reader.read_i16_le(layout::ST2_OFFSET)?,
        st3: reader.read_i16_le(layout::ST3_OFFSET)?,
        st4: reader.read_i16_le(layout::ST4_OFFSET)?,
        st5: reader.read_i16_le(layout::ST5_OFFSET)?,
        st6: reader.read_i16_le(layout::ST6_OFFSET)?,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_record;
    use crate::format::error::DatError;
    use crate::format::layout;

    fn put_str(buf: &mut [u8], field: layout::StrField, value: &[u8]) {
        buf[field.offset] = value.len() as u8;
        buf[field.offset + 1..field.offset + 1 + value.len()].copy_from_slice(value);
    }

    fn base_buffer() -> Vec<u8> {
        let mut buf = vec![0u8; layout::RECORD_LEN];
        buf[layout::REAL_TIME_OFFSET..layout::REAL_TIME_OFFSET + 4]
            .copy_from_slice(&1i32.to_le_bytes());
        buf[layout::LIVE_TIME_OFFSET..layout::LIVE_TIME_OFFSET + 4]
            .copy_from_slice(&1i32.to_le_bytes());
        buf
    }

    #[test]
    fn parse_minimal_record() {
        let mut buf = base_buffer();
        put_str(&mut buf, layout::SPECTRUM_IDENTIFIER, b"ABCD");

        let record = parse_record(&buf, None).unwrap();
        assert_eq!(record.spectrum_identifier, "ABCD");
        assert_eq!(record.real_time, 1);
        assert_eq!(record.live_time, 1);
        assert_eq!(record.dead_time, 0.0);
        assert_eq!(record.sample_identifier, "");
        assert_eq!(record.st6, 0);
    }

    #[test]
    fn parse_trims_padded_fields() {
        let mut buf = base_buffer();
        put_str(&mut buf, layout::SAMPLE_IDENTIFIER, b"SOIL SAMPLE 42   \0\0");
        put_str(&mut buf, layout::DETECTOR_IDENTIFIER, b"D1");

        let record = parse_record(&buf, None).unwrap();
        assert_eq!(record.sample_identifier, "SOIL SAMPLE 42");
        assert_eq!(record.detector_identifier, "D1");
    }

    #[test]
    fn parse_decodes_numerics() {
        let mut buf = base_buffer();
        buf[layout::LATITUDE_OFFSET..layout::LATITUDE_OFFSET + 4]
            .copy_from_slice(&59.65f32.to_le_bytes());
        buf[layout::LATITUDE_UNIT_OFFSET] = b'N';
        buf[layout::CHANNEL_COUNT_OFFSET..layout::CHANNEL_COUNT_OFFSET + 4]
            .copy_from_slice(&4096i32.to_le_bytes());
        buf[layout::RECORD_LENGTH_OFFSET..layout::RECORD_LENGTH_OFFSET + 2]
            .copy_from_slice(&128i16.to_le_bytes());
        buf[layout::ST3_OFFSET..layout::ST3_OFFSET + 2].copy_from_slice(&(-2i16).to_le_bytes());

        let record = parse_record(&buf, None).unwrap();
        assert_eq!(record.latitude, 59.65);
        assert_eq!(record.latitude_unit, 'N');
        assert_eq!(record.channel_count, 4096);
        assert_eq!(record.record_length, 128);
        assert_eq!(record.st3, -2);
    }

    #[test]
    fn dead_time_from_real_and_live_time() {
        let mut buf = base_buffer();
        buf[layout::REAL_TIME_OFFSET..layout::REAL_TIME_OFFSET + 4]
            .copy_from_slice(&120i32.to_le_bytes());
        buf[layout::LIVE_TIME_OFFSET..layout::LIVE_TIME_OFFSET + 4]
            .copy_from_slice(&100i32.to_le_bytes());

        let record = parse_record(&buf, None).unwrap();
        assert_eq!(record.dead_time, 20.0);
    }

    #[test]
    fn zero_live_time_yields_non_finite_dead_time() {
        let mut buf = base_buffer();
        buf[layout::REAL_TIME_OFFSET..layout::REAL_TIME_OFFSET + 4]
            .copy_from_slice(&120i32.to_le_bytes());
        buf[layout::LIVE_TIME_OFFSET..layout::LIVE_TIME_OFFSET + 4]
            .copy_from_slice(&0i32.to_le_bytes());

        let record = parse_record(&buf, None).unwrap();
        assert!(!record.dead_time.is_finite());
    }

    #[test]
    fn truncated_buffer_is_rejected_up_front() {
        let buf = vec![0u8; layout::RECORD_LEN - 1];
        let err = parse_record(&buf, None).unwrap_err();
        match err {
            DatError::Truncated { needed, actual } => {
                assert_eq!(needed, layout::RECORD_LEN);
                assert_eq!(actual, layout::RECORD_LEN - 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_lim_file_takes_caller_default() {
        let buf = base_buffer();
        let record = parse_record(&buf, Some("MDA01.LIB")).unwrap();
        assert_eq!(record.lim_file, "MDA01.LIB");
    }

    #[test]
    fn caller_default_is_not_trimmed() {
        let buf = base_buffer();
        let record = parse_record(&buf, Some("MDA01.LIB ")).unwrap();
        assert_eq!(record.lim_file, "MDA01.LIB ");
    }

    #[test]
    fn present_lim_file_wins_over_default() {
        let mut buf = base_buffer();
        put_str(&mut buf, layout::LIM_FILE, b"CUSTOM.LIB");

        let record = parse_record(&buf, Some("MDA01.LIB")).unwrap();
        assert_eq!(record.lim_file, "CUSTOM.LIB");
    }

    #[test]
    fn overlong_declared_string_is_rejected() {
        let mut buf = base_buffer();
        buf[layout::FORMAT.offset] = layout::FORMAT.cap as u8;

        let err = parse_record(&buf, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too long"));
    }
}
