pub mod key;
pub mod keygen;
pub mod message;

pub use key::{PrivateComponents, RsaKey};
pub use keygen::{RsaKeyGenerator, generate, weak_generate};
pub use message::{Message, decode, encode};
