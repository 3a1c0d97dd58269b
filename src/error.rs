use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("detection {index} has negative dimensions {width}x{height}")]
    InvalidDetection {
        index: usize,
        width: i32,
        height: i32,
    },
}
