use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("css colour does not start with `#`")]
    MissingHash,
    #[error("css colour has {} hex digits instead of 6", .0)]
    InvalidLength(usize),
    #[error("css colour contains a non-hex digit: {:?}", .0)]
    InvalidDigit(char),
}

pub type ParseResult<T> = Result<T, ParseError>;
