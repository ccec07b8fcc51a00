//! Factorization of ideals into prime ideals

use super::ideal::Ideal;
use super::residue::{ResidueSet, ResidueSystem, Span};
use super::{QuadraticBase, QuadraticField};
use core::slice;
use num_integer::Roots;

/// How a rational prime `p` decomposes in the ring of integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Splitting {
    /// `(p) = P²`
    Ramified,
    /// `(p) = P·Q` with `P ≠ Q`
    Split,
    /// `(p)` is itself prime
    Inert,
}

impl<T: QuadraticBase> Ideal<T> {
    /// Decompose the ideal into a product of prime ideals.
    ///
    /// Returns pairs `(P, e)` of distinct prime ideals and positive exponents whose product
    /// `∏ P^e` equals `self`. The whole ring is the empty product.
    ///
    /// The primes dividing the ideal are found among the ideals `(gen0, t)` for residues `t`
    /// of `A/(gen0)`: a residue whose span is a proper subgroup is a candidate, and a
    /// candidate is dropped again once it is found inside the span of a later residue.
    /// The remaining candidates span the maximal proper subgroups, i.e. the prime ideals
    /// containing `gen0`. The cost is bounded by `|norm(gen0)|²` residue reductions.
    ///
    /// # Panics
    /// If the ideal is zero.
    pub fn prime_factors(&self) -> Vec<(Ideal<T>, usize)> {
        let normal = self.normalized();
        let (modulus, _) = normal.generators();
        if modulus.is_zero() {
            panic!("the zero ideal has no prime factorization");
        }

        let field = self.field();
        let system = ResidueSystem::of(modulus);
        let whole = system.size();
        let mut composite = ResidueSet::new(&system);
        let mut candidates = ResidueSet::new(&system);
        for t in system.addresses(field) {
            if composite.contains(&t) {
                continue;
            }

            let span: Vec<_> = Span::new(modulus, slice::from_ref(&t)).collect();
            if span.iter().fold(T::zero(), |n, _| n + T::one()) == whole {
                continue;
            }
            for z in &span {
                composite.insert(z);
                candidates.remove(z);
            }
            candidates.insert(&t);
        }

        let mut factors = Vec::with_capacity(candidates.len());
        for t in system.addresses(field) {
            if !candidates.contains(&t) {
                continue;
            }

            let prime = Ideal::from_generators(field, vec![modulus.clone(), t]);
            let mut power = prime.clone();
            let mut exponent = 0;
            while power.contains_ideal(self) {
                power = &power * &prime;
                exponent += 1;
            }
            if exponent > 0 {
                factors.push((prime, exponent));
            }
        }
        factors
    }

    /// Determine if the ideal is a nonzero prime (hence maximal) ideal
    pub fn is_prime(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        match self.prime_factors().as_slice() {
            [(p, 1)] => p == self,
            _ => false,
        }
    }
}

impl<T: QuadraticBase> QuadraticField<T> {
    /// Classify the decomposition of the rational prime `p` in the ring of integers.
    ///
    /// Returns `None` if `p` is not a prime (up to sign), which shows up as a
    /// factorization of `(p)` whose exponents and norms do not match one of
    /// `P²` with `N(P) = p` (and `p` not a square), `P·Q` with `N(P) = N(Q) = p`,
    /// or `P` with `N(P) = p²`.
    ///
    /// # Panics
    /// If `p` is zero.
    pub fn splitting(&self, p: T) -> Option<Splitting> {
        let p = p.abs();
        let factors = Ideal::principal(self.integer(p.clone())).prime_factors();
        let has_norm = |ideal: &Ideal<T>, n: &T| ideal.norm() == *n;
        // (q²) = (q)² with N((q)) = q² for an inert prime q
        let root = p.sqrt();
        let is_square = root.clone() * root == p;
        match factors.as_slice() {
            [(q, 2)] if !is_square && has_norm(q, &p) => Some(Splitting::Ramified),
            [(q1, 1), (q2, 1)] if has_norm(q1, &p) && has_norm(q2, &p) => Some(Splitting::Split),
            [(q, 1)] if has_norm(q, &(p.clone() * p.clone())) => Some(Splitting::Inert),
            _ => None,
        }
    }
}
