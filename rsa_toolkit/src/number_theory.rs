use crate::errors::{Result, RsaError};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// НОД по алгоритму Евклида.
/// Если a == b или один из аргументов равен нулю, возвращается a.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    if a == b || a.is_zero() || b.is_zero() {
        return a.clone();
    }
    let (mut a, mut b) = if a < b {
        (b.clone(), a.clone())
    } else {
        (a.clone(), b.clone())
    };
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Возвращает (g, x, y) такие что: ax + by = g = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let tmp_r = old_r - &q * &r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - &q * &s;
        old_s = s;
        s = tmp_s;

        let tmp_t = old_t - &q * &t;
        old_t = t;
        t = tmp_t;
    }

    (old_r, old_s, old_t)
}

/// Возведение в степень по модулю: base^exp mod modulus (справа налево)
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let mut base = base % modulus;
    let mut exp = exponent.clone();
    let mut result = BigUint::one() % modulus;

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    result
}

/// Обратный элемент: x в [0, b) такой что a*x ≡ 1 (mod b).
/// Если gcd(a, b) != 1, возвращает 0.
pub fn inverse_mod(a: &BigUint, b: &BigUint) -> BigUint {
    if b.is_zero() || gcd(a, b) != BigUint::one() {
        return BigUint::zero();
    }
    let modulus = BigInt::from_biguint(Sign::Plus, b.clone());
    let (_, x, _) = extended_gcd(&BigInt::from_biguint(Sign::Plus, a.clone()), &modulus);
    // mod_floor всегда неотрицателен при положительном модуле
    x.mod_floor(&modulus).magnitude().clone()
}

/// Целый квадратный корень методом Ньютона: наибольшее x, x*x <= n
pub fn int_sqrt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    // начальное приближение 2^ceil(bits/2) не меньше корня
    let mut x = BigUint::one() << ((n.bits() + 1) / 2);
    let mut y = (&x + n / &x) >> 1;
    while y < x {
        x = y;
        y = (&x + n / &x) >> 1;
    }
    x
}

/// Проверка, является ли n точным квадратом
pub fn is_square(n: &BigUint) -> bool {
    let root = int_sqrt(n);
    &root * &root == *n
}

/// Возвращает s такое, что n = m * 2^s, m нечётно. Для n = 0 возвращает 0.
pub fn factor2(n: &BigUint) -> u64 {
    n.trailing_zeros().unwrap_or(0)
}

/// Символ Якоби (a|n), n — нечётное положительное
pub fn jacobi_symbol(a: &BigInt, n: &BigInt) -> Result<i32> {
    if n.is_even() || !n.is_positive() {
        return Err(RsaError::InvalidModulus(format!(
            "Jacobi symbol needs an odd positive modulus, got {n}"
        )));
    }

    // a в диапазоне [0, n-1]
    let mut a = a.mod_floor(n);
    let mut n = n.clone();
    let three = BigInt::from(3u8);
    let mut result = 1;

    while !a.is_zero() {
        let s = a.trailing_zeros().unwrap_or(0);
        a >>= s;
        // (2|n) = -1 при n ≡ 3, 5 (mod 8)
        let n_mod_8 = &n % 8u8;
        if s % 2 == 1 && (n_mod_8 == three || n_mod_8 == BigInt::from(5u8)) {
            result = -result;
        }

        std::mem::swap(&mut a, &mut n);
        // квадратичный закон взаимности
        if &a % 4u8 == three && &n % 4u8 == three {
            result = -result;
        }
        a = a.mod_floor(&n);
    }

    if n.is_one() { Ok(result) } else { Ok(0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_keeps_zero_operand_rule() {
        let zero = BigUint::zero();
        let twelve = BigUint::from(12u32);
        assert_eq!(gcd(&twelve, &zero), twelve);
        assert_eq!(gcd(&zero, &twelve), zero);
        assert_eq!(gcd(&twelve, &twelve), twelve);
    }

    #[test]
    fn mod_pow_with_unit_modulus_is_zero() {
        let r = mod_pow(&BigUint::from(7u32), &BigUint::zero(), &BigUint::one());
        assert!(r.is_zero());
    }

    #[test]
    fn int_sqrt_small_values() {
        let expected = [0u32, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, &root) in expected.iter().enumerate() {
            assert_eq!(int_sqrt(&BigUint::from(n)), BigUint::from(root), "n = {n}");
        }
    }
}
