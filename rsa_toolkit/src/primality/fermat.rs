use crate::config::FERMAT_ROUNDS;
use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

/// Структура, реализующая тест Ферма
#[derive(Clone, Debug)]
pub struct FermatTest {
    rounds: u32,
}

impl FermatTest {
    pub fn new(rounds: u32) -> Self {
        Self { rounds }
    }
}

impl Default for FermatTest {
    fn default() -> Self {
        Self::new(FERMAT_ROUNDS)
    }
}

impl PrimalityTest for FermatTest {
    fn rounds(&self) -> u32 {
        self.rounds
    }

    fn run_iteration(&self, n: &BigUint, witnesses: &mut dyn RngCore) -> bool {
        let a = witnesses.gen_biguint_range(&BigUint::one(), n);
        fermat_witness(n, &a)
    }
}

/// a^(n-1) ≡ 1 (mod n). false доказывает, что n составное.
pub fn fermat_witness(n: &BigUint, a: &BigUint) -> bool {
    let one = BigUint::one();
    if *n <= one {
        return false;
    }
    mod_pow(a, &(n - &one), n) == one
}
