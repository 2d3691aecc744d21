use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};
use quickcheck::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rsa_toolkit::attacks::{FermatAttack, WienerAttack, WienerOutcome, convergent_bound};
use rsa_toolkit::number_theory::inverse_mod;
use rsa_toolkit::rsa::{RsaKeyGenerator, generate, weak_generate};

#[test]
fn test_wiener_recovers_weak_512_bit_key() {
    let key = weak_generate(512).unwrap();
    let recovered = WienerAttack::attack(key.e(), key.n()).expect("Wiener attack failed");
    assert_eq!(recovered, key);
    assert!(!recovered.is_public_only());
}

#[test]
fn test_wiener_fails_on_strong_key() {
    let key = generate(512, &BigUint::zero()).unwrap();
    let outcome = WienerAttack::new().run(key.e(), key.n());
    assert!(matches!(outcome, WienerOutcome::NotFound { .. }));
    assert!(outcome.convergents_tested() > 0);
    assert!(outcome.convergents_tested() <= convergent_bound(key.n()));
}

#[test]
fn test_wiener_attack_e_zero() {
    let n = BigUint::from_u64(90581).unwrap();
    assert!(WienerAttack::attack(&BigUint::zero(), &n).is_none());
}

#[test]
fn test_wiener_attack_invalid_n() {
    let e = BigUint::from_u64(3).unwrap();
    for n in [0u64, 1] {
        let n = BigUint::from_u64(n).unwrap();
        assert!(WienerAttack::attack(&e, &n).is_none(), "n = {}", n);
    }
}

#[test]
fn test_wiener_attack_respects_limit() {
    // d = 5 находится на второй подходящей дроби
    let e = BigUint::from(17993u32);
    let n = BigUint::from(90581u32);
    let outcome = WienerAttack::with_max_convergents(1).run(&e, &n);
    assert_eq!(outcome, WienerOutcome::NotFound { convergents_tested: 1 });

    let outcome = WienerAttack::with_max_convergents(2).run(&e, &n);
    assert_eq!(outcome.convergents_tested(), 2);
    assert_eq!(outcome.key().and_then(|k| k.d()), Some(&BigUint::from(5u8)));
}

#[test]
fn test_wiener_recovered_key_decrypts() {
    let key = weak_generate(256).unwrap();
    let recovered = WienerAttack::attack(key.e(), key.n()).unwrap();
    let m = BigUint::from(42u32);
    let c = m.modpow(key.e(), key.n());
    assert_eq!(c.modpow(recovered.d().unwrap(), key.n()), m);
}

#[test]
fn test_fermat_attack_success() {
    let p = BigUint::from(10007u32);
    let q = BigUint::from(10009u32);
    let n = &p * &q;
    let phi = (&p - 1u32) * (&q - 1u32);
    let e = BigUint::from(65537u32);

    let key = FermatAttack::attack(&n, &e).expect("Атака не удалась");
    assert_eq!(key.d(), Some(&inverse_mod(&e, &phi)));
    assert_eq!(key.p(), Some(&q));
    assert_eq!(key.q(), Some(&p));
    assert_eq!(key.phi(), Some(phi));
}

#[test]
fn test_fermat_attack_failure_within_limit() {
    let p = BigUint::from(10007u32);
    let q = BigUint::from(30011u32); // далеко от p
    let n = &p * &q;
    let e = BigUint::from(65537u32);
    assert!(FermatAttack::attack_with_limit(&n, &e, 100).is_none());
}

#[test]
fn test_fermat_attack_on_small_n() {
    let n = BigUint::from(15u32);
    let e = BigUint::from(3u32);
    assert!(FermatAttack::attack(&n, &e).is_none());
}

#[test]
fn test_fermat_attack_on_equal_primes() {
    let p = BigUint::from(10007u32);
    let n = &p * &p;
    let e = BigUint::from(17u32);
    let key = FermatAttack::attack(&n, &e).expect("Ожидался успех атаки");
    assert_eq!(key.p(), Some(&p));
    assert_eq!(key.q(), Some(&p));
}

#[test]
fn test_fermat_attack_cannot_break_generated_key() {
    let key = generate(256, &BigUint::zero()).unwrap();
    assert!(FermatAttack::attack_with_limit(key.n(), key.e(), 1_000).is_none());
}

quickcheck! {
    fn prop_wiener_recovers_weak_keys(seed: u64, size: u8) -> bool {
        let bits = 32 + (size as u64 % 64);
        let generator = RsaKeyGenerator::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut witnesses = StdRng::seed_from_u64(seed.rotate_left(7));
        let key = generator.weak_generate(bits, &mut rng, &mut witnesses).unwrap();
        WienerAttack::attack(key.e(), key.n()) == Some(key)
    }
}
