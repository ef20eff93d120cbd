///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// WheelError
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Reasons a wheel operation was rejected.
///
/// None of these are fatal. The widget layer logs them and leaves the wheel untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    #[error("sector label is empty")]
    EmptyLabel,

    #[error("a wheel needs at least {min} sectors")]
    SectorFloor { min: usize },

    #[error("sector id {0} is used more than once")]
    DuplicateSector(usize),

    #[error("no sector with id {0}")]
    UnknownSector(usize),

    #[error("the wheel is already spinning")]
    AlreadySpinning,

    #[error("the wheel is not spinning")]
    NotSpinning,

    #[error("invalid sector color {0:?}")]
    InvalidColor(String),

    #[error("invalid wheel configuration: {0}")]
    InvalidConfig(&'static str),
}
