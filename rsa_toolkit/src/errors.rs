use std::string::FromUtf8Error;
use thiserror::Error;

/// Ошибки библиотеки RSA
#[derive(Error, Debug)]
pub enum RsaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid modulus: {0}")]
    InvalidModulus(String),

    #[error("Private exponent not found: the key is public-only")]
    MissingPrivateExponent,

    #[error("Message is too long: {message_bits} bits, modulus has {modulus_bits} bits")]
    MessageTooLong { message_bits: u64, modulus_bits: u64 },

    #[error("Decrypted integer is not valid UTF-8 text")]
    InvalidEncoding(#[from] FromUtf8Error),

    #[error("Gave up on {what} after {attempts} attempts")]
    AttemptsExhausted { what: &'static str, attempts: usize },
}

pub type Result<T> = std::result::Result<T, RsaError>;
