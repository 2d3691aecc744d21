use crate::number_theory::{int_sqrt, inverse_mod, is_square};
use crate::rsa::key::RsaKey;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Число шагов по умолчанию
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Факторизация Ферма: n = a^2 - b^2 = (a - b)(a + b).
/// Быстро находит множители, только если |p - q| мало.
pub struct FermatAttack;

impl FermatAttack {
    /// Выполняет атаку по открытому ключу (n, e)
    pub fn attack(n: &BigUint, e: &BigUint) -> Option<RsaKey> {
        Self::attack_with_limit(n, e, DEFAULT_MAX_STEPS)
    }

    pub fn attack_with_limit(n: &BigUint, e: &BigUint, max_steps: u64) -> Option<RsaKey> {
        // Не пытаемся на очень маленьких n
        if *n < BigUint::from(16u8) {
            return None;
        }

        // a = ceil(sqrt(n))
        let mut a = int_sqrt(n);
        if &a * &a < *n {
            a += 1u8;
        }

        for step in 0..max_steps {
            let b_squared = &a * &a - n;
            if is_square(&b_squared) {
                let b = int_sqrt(&b_squared);
                let q = &a - &b;
                if q > BigUint::one() {
                    let p = &a + &b;
                    let phi = (&p - 1u8) * (&q - 1u8);
                    let d = inverse_mod(e, &phi);
                    if d.is_zero() {
                        log::warn!("factored n but e is not invertible modulo phi");
                        return None;
                    }
                    log::info!("Fermat factorization succeeded after {} steps", step + 1);
                    return Some(RsaKey::new(n.clone(), e.clone(), d, p, q));
                }
            }
            a += 1u8;
        }

        // Если не нашли в пределах bound — считаем не уязвимым
        None
    }
}
