use crate::errors::{Result, RsaError};
use crate::number_theory::mod_pow;
use crate::rsa::key::RsaKey;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// Текстовое сообщение и его представление целым числом.
/// Байты UTF-8 читаются в порядке little-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(self.text.as_bytes())
    }

    pub fn from_biguint(m: &BigUint) -> Result<Self> {
        // to_bytes_le() для нуля даёт [0], а не пустой вектор
        if m.is_zero() {
            return Ok(Self::new(String::new()));
        }
        Ok(Self::new(String::from_utf8(m.to_bytes_le())?))
    }

    /// Шифрование без паддинга: c = m^e mod n
    pub fn encrypt(&self, key: &RsaKey) -> Result<BigUint> {
        let m = self.to_biguint();
        if m.bits() >= key.n().bits() {
            return Err(RsaError::MessageTooLong {
                message_bits: m.bits(),
                modulus_bits: key.n().bits(),
            });
        }
        Ok(mod_pow(&m, key.e(), key.n()))
    }

    /// m = c^d mod n; нужен ключ с закрытой экспонентой
    pub fn decrypt(ciphertext: &BigUint, key: &RsaKey) -> Result<Self> {
        let d = key.d().ok_or(RsaError::MissingPrivateExponent)?;
        Self::from_biguint(&mod_pow(ciphertext, d, key.n()))
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Текст -> целое число
pub fn encode(text: &str) -> BigUint {
    Message::new(text).to_biguint()
}

/// Целое число -> текст
pub fn decode(m: &BigUint) -> Result<String> {
    Message::from_biguint(m).map(Message::into_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero() {
        assert!(encode("").is_zero());
        assert_eq!(decode(&BigUint::zero()).unwrap(), "");
    }

    #[test]
    fn first_byte_is_least_significant() {
        // "ab" = 0x61 + 0x62 * 256
        assert_eq!(encode("ab"), BigUint::from(0x6261u32));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let m = BigUint::from_bytes_le(&[0xff, 0xfe]);
        assert!(matches!(decode(&m), Err(RsaError::InvalidEncoding(_))));
    }
}
