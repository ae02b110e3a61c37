use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
