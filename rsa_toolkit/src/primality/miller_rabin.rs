use crate::config::MILLER_RABIN_ROUNDS;
use crate::number_theory::{factor2, mod_pow};
use crate::primality::{PrimalityTest, small_case};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

/// Структура, реализующая тест Миллера–Рабина
#[derive(Clone, Debug)]
pub struct MillerRabinTest {
    rounds: u32,
}

impl MillerRabinTest {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }
}

impl Default for MillerRabinTest {
    fn default() -> Self {
        Self::new(MILLER_RABIN_ROUNDS)
    }
}

impl PrimalityTest for MillerRabinTest {
    fn rounds(&self) -> u32 {
        self.rounds
    }

    fn run_iteration(&self, n: &BigUint, witnesses: &mut dyn RngCore) -> bool {
        let a = witnesses.gen_biguint_range(&BigUint::from(2u8), n);
        miller_rabin_witness(n, &a)
    }
}

/// Один раунд Миллера–Рабина со свидетелем a из [2, n-1].
/// false доказывает, что n составное.
pub fn miller_rabin_witness(n: &BigUint, a: &BigUint) -> bool {
    if let Some(verdict) = small_case(n) {
        return verdict;
    }
    let one = BigUint::one();
    let upper = n - &one;

    // n - 1 = 2^s * r, r нечётно
    let s = factor2(&upper);
    let r = &upper >> s;

    let mut y = mod_pow(a, &r, n);
    if y == one || y == upper {
        return true;
    }

    for _ in 1..s {
        y = mod_pow(&y, &BigUint::from(2u8), n);
        if y == upper {
            return true;
        }
        if y == one {
            return false;
        }
    }

    false
}
