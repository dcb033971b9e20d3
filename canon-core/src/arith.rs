//! Exact integer arithmetic used by the rewrite rules.
//!
//! Nothing in this module knows about expressions. Every function works on machine integers and
//! either returns an exact result or reports [`Error::Overflow`].

use crate::error::Error;
use once_cell::sync::Lazy;

/// Upper bound (exclusive) of the prime table used for radical factorization.
const SIEVE_LIMIT: usize = 1024;

/// Primes below [`SIEVE_LIMIT`], computed once with the sieve of Eratosthenes.
static PRIMES: Lazy<Vec<u64>> = Lazy::new(|| {
    let mut composite = vec![false; SIEVE_LIMIT];
    let mut primes = Vec::new();
    for n in 2..SIEVE_LIMIT {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);
        let mut multiple = n * n;
        while multiple < SIEVE_LIMIT {
            composite[multiple] = true;
            multiple += n;
        }
    }
    primes
});

/// Computes the greatest common divisor of the magnitudes of `a` and `b` using the binary GCD
/// algorithm.
///
/// `gcd(0, n)` is `|n|`, and `gcd(0, 0)` is `0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    // common factors of two
    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();
    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }
    a << shift
}

/// Raises `base` to the power of `exponent` by repeated squaring.
///
/// Returns [`Error::Overflow`] instead of wrapping if any intermediate product leaves the `i64`
/// range.
pub fn checked_pow(base: i64, exponent: u64) -> Result<i64, Error> {
    let (mut base, mut exponent) = (base, exponent);
    let mut result: i64 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base).ok_or(Error::Overflow)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base).ok_or(Error::Overflow)?;
        }
    }
    Ok(result)
}

/// Returns the largest integer whose square is at most `n`.
pub fn int_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // digit-by-digit, two bits at a time
    let mut remaining = n;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;
    while bit > remaining {
        bit >>= 2;
    }
    while bit != 0 {
        if remaining >= root + bit {
            remaining -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// Returns the largest integer `r` such that `r^k` is at most `n`.
///
/// # Panics
///
/// Panics if `k` is zero.
pub fn int_nth_root(n: u64, k: u32) -> u64 {
    assert!(k > 0, "the zeroth root is undefined");
    match k {
        1 => return n,
        2 => return int_sqrt(n),
        _ => (),
    }

    let exceeds = |r: u64| r.checked_pow(k).map_or(true, |p| p > n);

    // the float estimate is within one or two of the answer; walk to the exact value
    let mut root = (n as f64).powf(1.0 / k as f64) as u64;
    while root > 0 && exceeds(root) {
        root -= 1;
    }
    while !exceeds(root + 1) {
        root += 1;
    }
    root
}

/// Extracts the largest `k`-th power factor from `n`.
///
/// Returns `(f, r)` such that `n = f^k * r`. The `k`-th root of `n` can then be written as
/// `f * root(r, k)`. Trial division runs against the primes below 1024. Whatever is left after
/// that is either a perfect `k`-th power (and folded into `f`) or kept whole in `r`.
///
/// A zero `k` is treated like `k = 1`.
pub fn simplify_root(n: u64, k: u32) -> (u64, u64) {
    if n < 2 || k < 2 {
        return (n, 1);
    }

    let mut factor = 1u64;
    let mut remainder = 1u64;
    let mut residue = n;
    for &prime in PRIMES.iter() {
        if prime.checked_mul(prime).map_or(true, |square| square > residue) {
            break;
        }

        let mut multiplicity = 0;
        while residue % prime == 0 {
            residue /= prime;
            multiplicity += 1;
        }
        if multiplicity > 0 {
            factor *= prime.pow(multiplicity / k);
            remainder *= prime.pow(multiplicity % k);
        }
    }

    if residue > 1 {
        let root = int_nth_root(residue, k);
        if root.checked_pow(k) == Some(residue) {
            factor *= root;
        } else {
            remainder *= residue;
        }
    }

    (factor, remainder)
}
