pub(crate) mod fermat;
pub(crate) mod miller_rabin;
pub use fermat::{FermatTest, fermat_witness};
pub use miller_rabin::{MillerRabinTest, miller_rabin_witness};

use crate::config::PrimalityConfig;
use crate::errors::{Result, RsaError};
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, thread_rng};

/// Интерфейс для вероятностного теста простоты.
/// Использует шаблонный метод: фиксированный public API, переопределяется одна итерация.
pub trait PrimalityTest {
    /// Число итераций
    fn rounds(&self) -> u32;

    /// Одна итерация теста со случайным свидетелем, n нечётно и n > 3
    fn run_iteration(&self, n: &BigUint, witnesses: &mut dyn RngCore) -> bool;

    /// true, если n прошёл все итерации; первая неудача прерывает тест
    fn is_probably_prime(&self, n: &BigUint, witnesses: &mut dyn RngCore) -> bool {
        if let Some(verdict) = small_case(n) {
            return verdict;
        }
        (0..self.rounds()).all(|_| self.run_iteration(n, witnesses))
    }
}

/// Ответ без случайных свидетелей: n < 2, n = 2, n = 3 и чётные n
pub(crate) fn small_case(n: &BigUint) -> Option<bool> {
    if *n < BigUint::from(2u8) {
        Some(false)
    } else if *n <= BigUint::from(3u8) {
        Some(true)
    } else if n.is_even() {
        Some(false)
    } else {
        None
    }
}

/// Тест Ферма как дешёвый фильтр, затем подтверждение Миллером–Рабином
#[derive(Clone, Debug)]
pub struct PrimalityOracle {
    fermat: FermatTest,
    miller_rabin: MillerRabinTest,
}

impl Default for PrimalityOracle {
    fn default() -> Self {
        Self::new(&PrimalityConfig::default())
    }
}

impl PrimalityOracle {
    pub fn new(config: &PrimalityConfig) -> Self {
        Self {
            fermat: FermatTest::new(config.fermat_rounds),
            miller_rabin: MillerRabinTest::new(config.miller_rabin_rounds),
        }
    }

    pub fn is_probable_prime(&self, n: &BigUint, witnesses: &mut dyn RngCore) -> bool {
        self.fermat.is_probably_prime(n, witnesses)
            && self.miller_rabin.is_probably_prime(n, witnesses)
    }

    /// Случайное вероятно простое число длины `bits` бит.
    /// Кандидаты берутся из криптостойкого источника `rng`,
    /// свидетели тестов — из `witnesses`.
    pub fn random_prime<R>(
        &self,
        bits: u64,
        max_candidates: usize,
        rng: &mut R,
        witnesses: &mut dyn RngCore,
    ) -> Result<BigUint>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if bits < 2 {
            return Err(RsaError::InvalidInput(format!(
                "a prime needs at least 2 bits, got {bits}"
            )));
        }
        // нечётные числа 2^(bits-1) + 1 + 2j, j в [0, 2^(bits-2))
        let low = (BigUint::one() << (bits - 1)) + 1u8;
        let count = BigUint::one() << (bits - 2);

        for tried in 1..=max_candidates {
            let candidate = &low + (rng.gen_biguint_below(&count) << 1u8);
            if self.is_probable_prime(&candidate, witnesses) {
                log::trace!("{bits}-bit probable prime found after {tried} candidates");
                return Ok(candidate);
            }
        }
        Err(RsaError::AttemptsExhausted {
            what: "random prime search",
            attempts: max_candidates,
        })
    }
}

/// Проверка с настройками по умолчанию и свидетелями из `thread_rng`
pub fn is_probable_prime(n: &BigUint) -> bool {
    PrimalityOracle::default().is_probable_prime(n, &mut thread_rng())
}

/// Простое число длины `bits` с кандидатами из `OsRng`
pub fn random_prime(bits: u64) -> Result<BigUint> {
    let max_candidates = crate::config::KeyGenConfig::default().max_prime_candidates;
    PrimalityOracle::default().random_prime(bits, max_candidates, &mut OsRng, &mut thread_rng())
}
