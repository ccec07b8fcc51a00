//! Modular helpers on rational integers: inverses, linear congruences and
//! the Chinese remainder combination of two congruences.

use num_integer::Integer;
use num_traits::Signed;

/// Inverse of `coeff` modulo `modulus`, i.e. `x` in `[0, modulus)` with `coeff * x ≡ 1`.
///
/// Returns `None` when `coeff` and `modulus` are not coprime. Modulo 1 every
/// number is invertible and the inverse is 0.
pub fn mod_inverse<T: Integer + Signed + Clone>(coeff: &T, modulus: &T) -> Option<T> {
    debug_assert!(modulus.is_positive());

    let coeff = coeff.mod_floor(modulus);
    let egcd = coeff.extended_gcd(modulus);
    if !egcd.gcd.abs().is_one() {
        return None;
    }

    let x = if egcd.gcd.is_negative() { -egcd.x } else { egcd.x };
    Some(x.mod_floor(modulus))
}

/// Solve `coeff * y ≡ rhs (mod modulus)`.
///
/// With `g = gcd(coeff, modulus)`, the solutions form a single class modulo
/// `modulus / g`; the result is `(y, modulus / g)` with `y` in `[0, modulus / g)`.
/// Returns `None` if `g` does not divide `rhs`.
pub fn solve_linear_congruence<T: Integer + Signed + Clone>(
    coeff: &T,
    rhs: &T,
    modulus: &T,
) -> Option<(T, T)> {
    let g = coeff.gcd(modulus);
    if !rhs.is_multiple_of(&g) {
        return None;
    }

    let reduced = modulus.clone() / g.clone();
    let inv = mod_inverse(&(coeff.clone() / g.clone()), &reduced)?;
    let y = ((rhs.clone() / g).mod_floor(&reduced) * inv).mod_floor(&reduced);
    Some((y, reduced))
}

/// Combine `x ≡ r1 (mod m1)` and `x ≡ r2 (mod m2)` into a single class modulo `lcm(m1, m2)`.
///
/// The moduli need not be coprime; `None` is returned if the two congruences
/// are inconsistent.
pub fn crt<T: Integer + Signed + Clone>(r1: &T, m1: &T, r2: &T, m2: &T) -> Option<T> {
    let g = m1.gcd(m2);
    let diff = r2.clone() - r1.clone();
    if !diff.is_multiple_of(&g) {
        return None;
    }

    // Garner step: x = r1 + m1 * k, where (m1 / g) * k ≡ (r2 - r1) / g (mod m2 / g)
    let m2g = m2.clone() / g.clone();
    let inv = mod_inverse(&(m1.clone() / g.clone()), &m2g)?;
    let k = ((diff / g).mod_floor(&m2g) * inv).mod_floor(&m2g);
    let lcm = m1.lcm(m2);
    Some((r1.clone() + m1.clone() * k).mod_floor(&lcm))
}
