//! RSA с нуля: теория чисел, вероятностные тесты простоты, генерация ключей
//! и атака Винера на малую закрытую экспоненту.

pub mod attacks;
pub mod config;
pub mod continued_fraction;
pub mod errors;
pub mod number_theory;
pub mod primality;
pub mod rsa;

pub use attacks::{FermatAttack, WienerAttack, WienerOutcome};
pub use config::{KeyGenConfig, PrimalityConfig};
pub use continued_fraction::{Convergent, Fraction};
pub use errors::{Result, RsaError};
pub use rsa::{Message, RsaKey, RsaKeyGenerator};
