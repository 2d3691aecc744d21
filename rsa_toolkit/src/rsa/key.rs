use num_bigint::BigUint;
use std::fmt;

/// Закрытая часть ключа: d и простые множители, p >= q
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateComponents {
    d: BigUint,
    p: BigUint,
    q: BigUint,
}

/// Ключ RSA. Без закрытой части — открытый ключ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKey {
    n: BigUint,
    e: BigUint,
    private: Option<PrivateComponents>,
}

impl RsaKey {
    /// Полный ключ. Множители хранятся в порядке p >= q.
    pub fn new(n: BigUint, e: BigUint, d: BigUint, p: BigUint, q: BigUint) -> Self {
        let (p, q) = if p >= q { (p, q) } else { (q, p) };
        Self {
            n,
            e,
            private: Some(PrivateComponents { d, p, q }),
        }
    }

    pub fn public(n: BigUint, e: BigUint) -> Self {
        Self { n, e, private: None }
    }

    /// Открытая часть ключа; исходный ключ не меняется
    pub fn public_key(&self) -> RsaKey {
        RsaKey::public(self.n.clone(), self.e.clone())
    }

    pub fn is_public_only(&self) -> bool {
        self.private.is_none()
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    pub fn d(&self) -> Option<&BigUint> {
        self.private.as_ref().map(|c| &c.d)
    }

    pub fn p(&self) -> Option<&BigUint> {
        self.private.as_ref().map(|c| &c.p)
    }

    pub fn q(&self) -> Option<&BigUint> {
        self.private.as_ref().map(|c| &c.q)
    }

    /// phi(n) = (p-1)(q-1), если множители известны
    pub fn phi(&self) -> Option<BigUint> {
        self.private
            .as_ref()
            .map(|c| (&c.p - 1u8) * (&c.q - 1u8))
    }
}

impl fmt::Display for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.n)?;
        writeln!(f, "e = {}", self.e)?;
        match self.d() {
            Some(d) => write!(f, "d = {d}"),
            None => write!(f, "d = None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RsaKey {
        // p = 61, q = 53, phi = 3120, 17 * 2753 = 46801 = 15 * 3120 + 1
        RsaKey::new(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            BigUint::from(2753u32),
            BigUint::from(53u32),
            BigUint::from(61u32),
        )
    }

    #[test]
    fn factors_are_stored_larger_first() {
        let key = sample();
        assert_eq!(key.p(), Some(&BigUint::from(61u32)));
        assert_eq!(key.q(), Some(&BigUint::from(53u32)));
        assert_eq!(key.phi(), Some(BigUint::from(3120u32)));
    }

    #[test]
    fn public_key_drops_private_part() {
        let key = sample();
        let public = key.public_key();
        assert!(public.is_public_only());
        assert_eq!(public.n(), key.n());
        assert_eq!(public.e(), key.e());
        assert_eq!(public.d(), None);
        assert_ne!(public, key);
        assert!(!key.is_public_only());
    }

    #[test]
    fn display_lists_n_e_d() {
        let text = sample().public_key().to_string();
        assert_eq!(text, "n = 3233\ne = 17\nd = None");
    }
}
