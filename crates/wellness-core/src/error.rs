use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown stress level: {0}")]
    UnknownStressLevel(String),

    #[error("{field} rating {value} is outside range [{min}, {max}]")]
    RatingOutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },
}
