/// A length-prefixed string field: one declared-length byte at `offset`,
/// followed by at most `cap - 1` bytes of character data.
#[derive(Debug, Clone, Copy)]
pub struct StrField {
    pub offset: usize,
    pub cap: usize,
}

const fn str_field(offset: usize, cap: usize) -> StrField {
    StrField { offset, cap }
}

pub const SPECTRUM_IDENTIFIER: StrField = str_field(0, 5);
pub const SAMPLE_IDENTIFIER: StrField = str_field(5, 41);
pub const PROJECT: StrField = str_field(46, 5);
pub const SAMPLE_LOCATION: StrField = str_field(51, 31);

pub const LATITUDE_OFFSET: usize = 82;
pub const LATITUDE_UNIT_OFFSET: usize = 86;
pub const LONGITUDE_OFFSET: usize = 87;
pub const LONGITUDE_UNIT_OFFSET: usize = 91;

pub const SAMPLE_HEIGHT_OFFSET: usize = 92;
pub const SAMPLE_WEIGHT_OFFSET: usize = 96;
pub const SAMPLE_DENSITY_OFFSET: usize = 100;
pub const SAMPLE_VOLUME_OFFSET: usize = 104;
pub const SAMPLE_QUANTITY_OFFSET: usize = 108;
pub const SAMPLE_UNCERTAINTY_OFFSET: usize = 112;

pub const SAMPLE_UNIT: StrField = str_field(116, 3);
pub const DETECTOR_IDENTIFIER: StrField = str_field(119, 3);
pub const YEAR: StrField = str_field(122, 3);
pub const BEAKER_IDENTIFIER: StrField = str_field(125, 3);

pub const SAMPLING_START: StrField = str_field(128, 13);
pub const SAMPLING_STOP: StrField = str_field(141, 13);
pub const REFERENCE_TIME: StrField = str_field(154, 13);
pub const MEASUREMENT_START: StrField = str_field(167, 13);
pub const MEASUREMENT_STOP: StrField = str_field(180, 13);

pub const REAL_TIME_OFFSET: usize = 193;
pub const LIVE_TIME_OFFSET: usize = 197;
pub const MEASUREMENT_TIME_OFFSET: usize = 201;

pub const NUCLIDE_LIBRARY: StrField = str_field(209, 13);
pub const LIM_FILE: StrField = str_field(222, 13);

pub const CHANNEL_COUNT_OFFSET: usize = 235;
pub const FORMAT: StrField = str_field(239, 3);
pub const RECORD_LENGTH_OFFSET: usize = 243;

pub const FWHMPS_OFFSET: usize = 245;
pub const FWHMAN_OFFSET: usize = 249;
pub const THRESH_OFFSET: usize = 253;
pub const BSTF_OFFSET: usize = 257;
pub const ETOL_OFFSET: usize = 261;
pub const LOCH_OFFSET: usize = 265;
pub const ICA_OFFSET: usize = 269;

pub const ENERGY_FILE: StrField = str_field(271, 13);
pub const PEF_FILE: StrField = str_field(284, 13);
pub const TEF_FILE: StrField = str_field(297, 13);
pub const BACKGROUND_FILE: StrField = str_field(310, 13);

pub const PA1_OFFSET: usize = 323;
pub const PA2_OFFSET: usize = 327;
pub const PA3_OFFSET: usize = 331;
pub const PA4_OFFSET: usize = 335;
pub const PA5_OFFSET: usize = 339;
pub const PA6_OFFSET: usize = 343;

pub const PRINT_OUT_OFFSET: usize = 347;
pub const PLOT_OUT_OFFSET: usize = 349;
pub const DISK_OUT_OFFSET: usize = 351;
pub const EX_PRINT_OUT_OFFSET: usize = 353;
pub const EX_DISK_OUT_OFFSET: usize = 355;

pub const PO1_OFFSET: usize = 357;
pub const PO2_OFFSET: usize = 361;
pub const PO3_OFFSET: usize = 365;
pub const PO4_OFFSET: usize = 369;
pub const PO5_OFFSET: usize = 373;
pub const PO6_OFFSET: usize = 377;

pub const COMPLETE_OFFSET: usize = 381;
pub const ANALYSED_OFFSET: usize = 383;

pub const ST1_OFFSET: usize = 385;
pub const ST2_OFFSET: usize = 387;
pub const ST3_OFFSET: usize = 389;
pub const ST4_OFFSET: usize = 391;
pub const ST5_OFFSET: usize = 393;
pub const ST6_OFFSET: usize = 395;

/// Every field must fit inside this many bytes; shorter buffers are rejected
/// before any field is extracted.
pub const RECORD_LEN: usize = ST6_OFFSET + 2;
