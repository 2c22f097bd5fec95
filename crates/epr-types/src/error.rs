use thiserror::Error;

#[derive(Error, Debug)]
pub enum EprError {
    #[error("Unknown isotope: {0}")]
    UnknownIsotope(String),

    #[error("Invalid spin-info style {0}: must be 1, 2, 3 or 4")]
    InvalidStyle(u8),
}

pub type EprResult<T> = Result<T, EprError>;
