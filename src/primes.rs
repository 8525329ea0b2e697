//! Probable-prime generation for the compute-bound demo.
//!
//! Deterministic Miller–Rabin over `u64`: the fixed witness set below is
//! known to be exact for every 64-bit integer, so "probable" only refers to
//! the random candidate draw, not the primality verdict.

use rand::Rng;

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Exact primality test for any `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    // Write n - 1 as d * 2^r with d odd.
    let mut d = n - 1;
    let mut r = 0;
    while d % 2 == 0 {
        d /= 2;
        r += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 0..r - 1 {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Draw random odd candidates of exactly `bits` bits until one is prime.
///
/// Panics if `bits` is outside `[2, 63]`; the demo uses 31 bits so the
/// product of two primes stays well inside `u64`.
pub fn probable_prime<R: Rng>(bits: u32, rng: &mut R) -> u64 {
    assert!((2..=63).contains(&bits), "bit width out of range");
    let low = 1u64 << (bits - 1);
    let high = 1u64 << bits;
    loop {
        let candidate = rng.gen_range(low..high) | 1;
        if is_prime(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        let primes = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 97];
        let composites = [0u64, 1, 4, 6, 9, 15, 21, 25, 49, 91, 100];
        for p in primes {
            assert!(is_prime(p), "{} is prime", p);
        }
        for c in composites {
            assert!(!is_prime(c), "{} is composite", c);
        }
    }

    #[test]
    fn test_large_known_values() {
        assert!(is_prime(2_147_483_647)); // 2^31 - 1, Mersenne
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(3_215_031_751)); // strong pseudoprime to bases 2,3,5,7
        assert!(is_prime(18_446_744_073_709_551_557)); // largest u64 prime
    }

    #[test]
    fn test_semiprime_is_composite() {
        let p1 = 2_147_483_587u64; // both prime, 31 bits
        let p2 = 2_147_483_629u64;
        assert!(is_prime(p1));
        assert!(is_prime(p2));
        assert!(!is_prime(p1 * p2));
    }

    #[test]
    fn test_generated_primes_fit_the_bit_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..5 {
            let p = probable_prime(20, &mut rng);
            assert!(p >= 1 << 19 && p < 1 << 20);
            assert!(is_prime(p));
        }
    }
}
