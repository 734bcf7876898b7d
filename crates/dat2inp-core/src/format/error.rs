use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatError {
    #[error("record too short: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error(
        "string field at offset {offset} too long: declared {declared} bytes, capacity {cap}"
    )]
    FieldTooLong {
        offset: usize,
        declared: usize,
        cap: usize,
    },
}
