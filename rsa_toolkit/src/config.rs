use num_bigint::BigUint;

/// Число раундов теста Ферма.
/// После прохождения: P(n простое или число Кармайкла) >= 1 - 2^(-100)
pub const FERMAT_ROUNDS: u32 = 100;

/// Число раундов теста Миллера–Рабина: P(n составное) <= 4^(-30)
pub const MILLER_RABIN_ROUNDS: u32 = 30;

/// Параметры вероятностного теста простоты
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimalityConfig {
    pub fermat_rounds: u32,
    pub miller_rabin_rounds: u32,
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self {
            fermat_rounds: FERMAT_ROUNDS,
            miller_rabin_rounds: MILLER_RABIN_ROUNDS,
        }
    }
}

/// Параметры генерации ключей RSA
#[derive(Clone, Debug)]
pub struct KeyGenConfig {
    pub primality: PrimalityConfig,
    /// |p - q| должно быть строго больше (защита от факторизации Ферма)
    pub min_prime_distance: BigUint,
    /// Случайное e выбирается из [2, min(phi, 2^bits))
    pub public_exponent_bits: u32,
    /// Сколько раз можно начать генерацию заново с новыми p, q
    pub max_attempts: usize,
    /// Сколько кандидатов проверяется при поиске одного простого
    pub max_prime_candidates: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            primality: PrimalityConfig::default(),
            min_prime_distance: BigUint::from(10_000_000_000u64),
            public_exponent_bits: 24,
            max_attempts: 1_000,
            max_prime_candidates: 100_000,
        }
    }
}

impl KeyGenConfig {
    pub fn with_min_prime_distance(mut self, distance: BigUint) -> Self {
        self.min_prime_distance = distance;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }
}
