//! Цепные дроби для неотрицательных рациональных чисел.

use crate::errors::{Result, RsaError};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::mem;

/// Неотрицательная рациональная дробь numerator / denominator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigUint,
    denominator: BigUint,
}

impl Fraction {
    pub fn new(numerator: BigUint, denominator: BigUint) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RsaError::InvalidInput(
                "fraction denominator must be non-zero".to_string(),
            ));
        }
        Ok(Self { numerator, denominator })
    }

    pub fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Неполные частные [a0; a1, a2, ...]
    pub fn expand(&self) -> PartialQuotients {
        PartialQuotients {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    /// Подходящие дроби h_i / k_i
    pub fn convergents(&self) -> Convergents {
        Convergents {
            quotients: self.expand(),
            h: (BigUint::one(), BigUint::zero()),
            k: (BigUint::zero(), BigUint::one()),
        }
    }
}

/// Итератор неполных частных. Конечен: каждый шаг — шаг алгоритма Евклида.
#[derive(Clone, Debug)]
pub struct PartialQuotients {
    numerator: BigUint,
    denominator: BigUint,
}

impl Iterator for PartialQuotients {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.denominator.is_zero() {
            return None;
        }
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        self.numerator = mem::replace(&mut self.denominator, remainder);
        Some(quotient)
    }
}

/// Подходящая дробь h / k
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convergent {
    pub numerator: BigUint,
    pub denominator: BigUint,
}

/// Итератор подходящих дробей: h_i = a_i*h_{i-1} + h_{i-2}, k_i = a_i*k_{i-1} + k_{i-2}
#[derive(Clone, Debug)]
pub struct Convergents {
    quotients: PartialQuotients,
    // (x_{i-1}, x_{i-2})
    h: (BigUint, BigUint),
    k: (BigUint, BigUint),
}

impl Iterator for Convergents {
    type Item = Convergent;

    fn next(&mut self) -> Option<Convergent> {
        let a = self.quotients.next()?;

        let next_h = &a * &self.h.0 + &self.h.1;
        let next_k = &a * &self.k.0 + &self.k.1;
        self.h.1 = mem::replace(&mut self.h.0, next_h);
        self.k.1 = mem::replace(&mut self.k.0, next_k);

        Some(Convergent {
            numerator: self.h.0.clone(),
            denominator: self.k.0.clone(),
        })
    }
}
