#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot left-shift a negative value")]
    NegativeShift,
    #[error("attempt to divide by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
