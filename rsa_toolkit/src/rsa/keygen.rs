use crate::config::KeyGenConfig;
use crate::errors::{Result, RsaError};
use crate::number_theory::{gcd, int_sqrt, inverse_mod};
use crate::primality::PrimalityOracle;
use crate::rsa::key::RsaKey;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, thread_rng};

/// Минимальная длина модуля в битах
pub const MIN_KEY_BITS: u64 = 16;

/// Сервис генерации ключей RSA
#[derive(Clone, Debug)]
pub struct RsaKeyGenerator {
    config: KeyGenConfig,
    oracle: PrimalityOracle,
}

impl Default for RsaKeyGenerator {
    fn default() -> Self {
        Self::new(KeyGenConfig::default())
    }
}

impl RsaKeyGenerator {
    /// Создание нового генератора
    pub fn new(config: KeyGenConfig) -> Self {
        let oracle = PrimalityOracle::new(&config.primality);
        Self { config, oracle }
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Генерация ключа с защитой от атак Ферма и Винера.
    /// `e == 0` означает случайную открытую экспоненту.
    pub fn generate<R>(
        &self,
        bits: u64,
        e: &BigUint,
        rng: &mut R,
        witnesses: &mut dyn RngCore,
    ) -> Result<RsaKey>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        check_bits(bits)?;
        let fixed_e = if e.is_zero() {
            None
        } else if e.is_even() || *e < BigUint::from(3u8) {
            return Err(RsaError::InvalidInput(format!(
                "public exponent must be odd and at least 3, got {e}"
            )));
        } else {
            Some(e)
        };
        let one = BigUint::one();

        for attempt in 1..=self.config.max_attempts {
            let p = self.prime(bits / 2, rng, witnesses)?;
            let q = self.prime(bits / 2, rng, witnesses)?;

            // близкие p и q раскладываются методом Ферма
            let distance = if p > q { &p - &q } else { &q - &p };
            if distance <= self.config.min_prime_distance {
                log::debug!("attempt {attempt}: |p - q| too small, redrawing primes");
                continue;
            }

            let n = &p * &q;
            let phi = (&p - &one) * (&q - &one);

            let e = match fixed_e {
                Some(e) if gcd(&phi, e) == one => e.clone(),
                Some(_) => {
                    log::debug!("attempt {attempt}: e shares a factor with phi, redrawing primes");
                    continue;
                }
                None => self.random_public_exponent(&phi, rng)?,
            };

            let d = inverse_mod(&e, &phi);
            // bits(d) > bits(n) / 4, иначе ключ уязвим для атаки Винера
            if d.bits() * 4 <= n.bits() {
                log::debug!("attempt {attempt}: d has only {} bits, restarting", d.bits());
                continue;
            }

            log::info!("generated {}-bit RSA key after {attempt} attempts", n.bits());
            return Ok(RsaKey::new(n, e, d, p, q));
        }

        Err(RsaError::AttemptsExhausted {
            what: "key generation",
            attempts: self.config.max_attempts,
        })
    }

    /// Генерация ключа, уязвимого для атаки Винера: d < n^(1/4) / 3
    pub fn weak_generate<R>(
        &self,
        bits: u64,
        rng: &mut R,
        witnesses: &mut dyn RngCore,
    ) -> Result<RsaKey>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        check_bits(bits)?;
        let one = BigUint::one();
        let two = BigUint::from(2u8);

        for attempt in 1..=self.config.max_attempts {
            let p = self.prime(bits / 2, rng, witnesses)?;
            let q = self.prime(bits / 2, rng, witnesses)?;
            if p == q {
                continue;
            }

            let n = &p * &q;
            let phi = (&p - &one) * (&q - &one);
            let max_d = int_sqrt(&int_sqrt(&n)) / 3u8;
            if max_d <= two {
                log::debug!("attempt {attempt}: modulus too small for a Wiener bound");
                continue;
            }

            let d = (0..self.config.max_prime_candidates)
                .map(|_| rng.gen_biguint_range(&two, &max_d))
                .find(|d| gcd(&phi, d) == one);
            let Some(d) = d else {
                continue;
            };

            let e = inverse_mod(&d, &phi);
            log::info!("generated weak {}-bit RSA key, d has {} bits", n.bits(), d.bits());
            return Ok(RsaKey::new(n, e, d, p, q));
        }

        Err(RsaError::AttemptsExhausted {
            what: "weak key generation",
            attempts: self.config.max_attempts,
        })
    }

    fn prime<R>(&self, bits: u64, rng: &mut R, witnesses: &mut dyn RngCore) -> Result<BigUint>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.oracle
            .random_prime(bits, self.config.max_prime_candidates, rng, witnesses)
    }

    /// Случайное e из [2, min(phi, 2^k)), взаимно простое с phi
    fn random_public_exponent<R>(&self, phi: &BigUint, rng: &mut R) -> Result<BigUint>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let bound = BigUint::one() << self.config.public_exponent_bits;
        let upper = if *phi < bound { phi.clone() } else { bound };
        let two = BigUint::from(2u8);
        if upper <= two {
            return Err(RsaError::InvalidInput(format!(
                "no public exponent fits below {upper}"
            )));
        }

        (0..self.config.max_prime_candidates)
            .map(|_| rng.gen_biguint_range(&two, &upper))
            .find(|e| gcd(phi, e) == BigUint::one())
            .ok_or(RsaError::AttemptsExhausted {
                what: "public exponent search",
                attempts: self.config.max_prime_candidates,
            })
    }
}

fn check_bits(bits: u64) -> Result<()> {
    if bits < MIN_KEY_BITS {
        return Err(RsaError::InvalidInput(format!(
            "key size must be at least {MIN_KEY_BITS} bits, got {bits}"
        )));
    }
    Ok(())
}

/// Ключ со стандартными настройками: кандидаты из `OsRng`, свидетели из `thread_rng`
pub fn generate(bits: u64, e: &BigUint) -> Result<RsaKey> {
    RsaKeyGenerator::default().generate(bits, e, &mut OsRng, &mut thread_rng())
}

pub fn weak_generate(bits: u64) -> Result<RsaKey> {
    RsaKeyGenerator::default().weak_generate(bits, &mut OsRng, &mut thread_rng())
}
