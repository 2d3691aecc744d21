use crate::continued_fraction::{Convergent, Fraction};
use crate::number_theory::{int_sqrt, inverse_mod, is_square};
use crate::rsa::key::RsaKey;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Итог атаки Винера
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WienerOutcome {
    Recovered { key: RsaKey, convergents_tested: usize },
    NotFound { convergents_tested: usize },
}

impl WienerOutcome {
    pub fn key(&self) -> Option<&RsaKey> {
        match self {
            WienerOutcome::Recovered { key, .. } => Some(key),
            WienerOutcome::NotFound { .. } => None,
        }
    }

    pub fn into_key(self) -> Option<RsaKey> {
        match self {
            WienerOutcome::Recovered { key, .. } => Some(key),
            WienerOutcome::NotFound { .. } => None,
        }
    }

    pub fn convergents_tested(&self) -> usize {
        match self {
            WienerOutcome::Recovered { convergents_tested, .. }
            | WienerOutcome::NotFound { convergents_tested } => *convergents_tested,
        }
    }
}

/// Атака Винера: перебор подходящих дробей e/n
#[derive(Clone, Debug, Default)]
pub struct WienerAttack {
    max_convergents: Option<usize>,
}

impl WienerAttack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ограничение на число проверяемых подходящих дробей
    pub fn with_max_convergents(max_convergents: usize) -> Self {
        Self {
            max_convergents: Some(max_convergents),
        }
    }

    /// Восстанавливает полный ключ по (e, n) или возвращает None
    pub fn attack(e: &BigUint, n: &BigUint) -> Option<RsaKey> {
        Self::new().run(e, n).into_key()
    }

    pub fn run(&self, e: &BigUint, n: &BigUint) -> WienerOutcome {
        let not_found = |convergents_tested| WienerOutcome::NotFound { convergents_tested };
        if e.is_zero() {
            return not_found(0);
        }
        let Ok(fraction) = Fraction::new(e.clone(), n.clone()) else {
            return not_found(0);
        };
        let limit = self
            .max_convergents
            .unwrap_or_else(|| convergent_bound(n));

        let mut tested = 0;
        for convergent in fraction.convergents().take(limit) {
            tested += 1;
            log::trace!(
                "convergent #{tested}: {}/{}",
                convergent.numerator,
                convergent.denominator
            );
            if let Some(key) = try_convergent(e, n, &convergent) {
                log::info!("Wiener attack succeeded at convergent #{tested}");
                return WienerOutcome::Recovered {
                    key,
                    convergents_tested: tested,
                };
            }
        }

        log::info!("Wiener attack failed after {tested} convergents");
        not_found(tested)
    }
}

/// Число неполных частных e/n не превосходит ~1.44 * bits(n) + 2
pub fn convergent_bound(n: &BigUint) -> usize {
    2 * n.bits() as usize + 2
}

/// Проверка подходящей дроби k/d как кандидата
fn try_convergent(e: &BigUint, n: &BigUint, convergent: &Convergent) -> Option<RsaKey> {
    let k = &convergent.numerator;
    let d = &convergent.denominator;
    if k.is_zero() || d.is_zero() || d.is_even() {
        return None;
    }

    // phi = (ed - 1) / k должно быть целым
    let (phi, remainder) = (e * d - 1u8).div_rem(k);
    if !remainder.is_zero() {
        return None;
    }

    // b = n - phi + 1 = p + q
    let n_plus_one = n + 1u8;
    if phi >= n_plus_one {
        return None;
    }
    let b = n_plus_one - &phi;

    // p, q — корни x^2 - bx + n
    let b_squared = &b * &b;
    let four_n = n * 4u8;
    if b_squared < four_n {
        return None;
    }
    let discriminant = b_squared - four_n;
    if !is_square(&discriminant) {
        return None;
    }
    let root = int_sqrt(&discriminant);
    if root.is_odd() {
        return None;
    }

    let p = (&b + &root) >> 1u8;
    let q = (&b - &root) >> 1u8;
    let d = inverse_mod(e, &phi);
    if d.is_zero() {
        return None;
    }
    Some(RsaKey::new(n.clone(), e.clone(), d, p, q))
}
