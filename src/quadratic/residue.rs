//! Residue systems of the quotient ring `A/(r)` modulo a principal ideal,
//! canonical remainders, and breadth-first enumeration of finite subgroups of `A/(r)`.
//!
//! For nonzero `r = s + tω` the quotient `A/(r)` has `|norm(r)|` elements, and
//! `{a + bω | 0 <= a < u, 0 <= b < v}` is a complete system of representatives, where
//! `u` is the gcd of the rational parts of `r` and `rω` and `v = |norm(r)| / u`.
//! The pair `(a, b)` is used as the address of a residue class.

use super::integer::QuadraticInt;
use super::{QuadraticBase, QuadraticField};
use crate::arith::{crt, solve_linear_congruence};
use core::ops::Rem;
use num_traits::ToPrimitive;
use std::collections::VecDeque;

/// Shape `(u, v)` of the rectangular residue system of `A/(r)`
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
pub struct ResidueSystem<T> {
    u: T,
    v: T,
}

impl<T: QuadraticBase> ResidueSystem<T> {
    /// Compute the residue system of the quotient modulo `(modulus)`.
    ///
    /// # Panics
    /// If `modulus` is zero.
    pub fn of(modulus: &QuadraticInt<T>) -> Self {
        if modulus.is_zero() {
            panic!("the quotient modulo zero is infinite");
        }

        let n = modulus.norm().abs();
        let u = modulus
            .a
            .gcd(&(modulus.b.clone() * modulus.field.omega_weight().clone()));
        let v = n / u.clone();
        ResidueSystem { u, v }
    }

    /// Range of the rational coordinate
    #[inline]
    pub fn u(&self) -> &T {
        &self.u
    }

    /// Range of the ω coordinate
    #[inline]
    pub fn v(&self) -> &T {
        &self.v
    }

    /// Number of residue classes, equal to `|norm(r)|`
    #[inline]
    pub fn size(&self) -> T {
        self.u.clone() * self.v.clone()
    }

    /// Iterate over the representatives in lexicographic order of `(a, b)`
    pub fn addresses(&self, field: &QuadraticField<T>) -> Addresses<T> {
        Addresses {
            field: field.clone(),
            u: self.u.clone(),
            v: self.v.clone(),
            a: T::zero(),
            b: T::zero(),
        }
    }

    fn len(&self) -> usize {
        to_index(&self.u) * to_index(&self.v)
    }
}

fn to_index<T: ToPrimitive>(t: &T) -> usize {
    t.to_usize()
        .expect("residue system is too large to be enumerated")
}

/// Iterator over the representatives of a [ResidueSystem]
#[derive(Clone, Debug)]
pub struct Addresses<T> {
    field: QuadraticField<T>,
    u: T,
    v: T,
    a: T,
    b: T,
}

impl<T: QuadraticBase> Iterator for Addresses<T> {
    type Item = QuadraticInt<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.a >= self.u {
            return None;
        }

        let item = QuadraticInt::new(self.a.clone(), self.b.clone(), self.field.clone());
        self.b = self.b.clone() + T::one();
        if self.b >= self.v {
            self.b = T::zero();
            self.a = self.a.clone() + T::one();
        }
        Some(item)
    }
}

impl<T: QuadraticBase> QuadraticInt<T> {
    /// The canonical representative of `self` modulo the principal ideal `(modulus)`,
    /// i.e. the unique `z ≡ self (mod modulus)` with `0 <= z.a < u` and `0 <= z.b < v`
    /// where `(u, v)` is the [ResidueSystem] of `modulus`.
    ///
    /// # Panics
    /// If `modulus` is zero.
    pub fn remainder(&self, modulus: &Self) -> Self {
        self.assert_same_field(modulus);
        let ResidueSystem { u, v } = ResidueSystem::of(modulus);
        let n = modulus.norm().abs();
        let (s, t) = (&modulus.a, &modulus.b);

        // n and vω both lie in (modulus)
        let a = self.a.mod_floor(&n);
        let b = self.b.mod_floor(&v);

        // Find y with x + yω ∈ (modulus), which holds iff (x + yω)·conj(modulus) ≡ 0 (mod n).
        // Written out per coordinate this is
        //     weight·t·y ≡ x·conj(modulus).a  and  s·y ≡ x·t  (mod n)
        let x = a.div_floor(&u) * u;
        let weight = modulus.field.omega_weight().clone();
        let (y_t, m_t) = solve_linear_congruence(
            &(t.clone() * weight),
            &(x.clone() * modulus.conj().a),
            &n,
        )
        .expect("x is a multiple of u, so x + yω lies in the ideal for some y");
        let (y_s, m_s) = solve_linear_congruence(s, &(x.clone() * t.clone()), &n)
            .expect("x is a multiple of u, so x + yω lies in the ideal for some y");

        // the solutions y are exactly one class modulo v = lcm(m_t, m_s)
        debug_assert!(m_t.lcm(&m_s) == v);
        let y = crt(&y_t, &m_t, &y_s, &m_s).expect("both congruences share the solution y");

        let mut b = b - y;
        if b.is_negative() {
            b = b + v;
        }
        QuadraticInt::new(a - x, b, self.field.clone())
    }
}

impl<T: QuadraticBase> Rem for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn rem(self, modulus: Self) -> Self {
        self.remainder(&modulus)
    }
}

impl<'a, T: QuadraticBase> Rem<&'a QuadraticInt<T>> for &'a QuadraticInt<T> {
    type Output = QuadraticInt<T>;
    #[inline]
    fn rem(self, modulus: &'a QuadraticInt<T>) -> QuadraticInt<T> {
        self.remainder(modulus)
    }
}

/// A subset of `A/(r)`, stored as a dense grid over the residue addresses
#[derive(Clone, Debug)]
pub(crate) struct ResidueSet {
    stride: usize,
    members: Vec<bool>,
    len: usize,
}

impl ResidueSet {
    pub fn new<T: QuadraticBase>(system: &ResidueSystem<T>) -> Self {
        ResidueSet {
            stride: to_index(&system.v),
            members: vec![false; system.len()],
            len: 0,
        }
    }

    #[inline]
    fn index<T: QuadraticBase>(&self, x: &QuadraticInt<T>) -> usize {
        let i = to_index(&x.a) * self.stride + to_index(&x.b);
        debug_assert!(i < self.members.len());
        i
    }

    /// Add a reduced residue, returns false if it was already present
    pub fn insert<T: QuadraticBase>(&mut self, x: &QuadraticInt<T>) -> bool {
        let i = self.index(x);
        if self.members[i] {
            false
        } else {
            self.members[i] = true;
            self.len += 1;
            true
        }
    }

    pub fn remove<T: QuadraticBase>(&mut self, x: &QuadraticInt<T>) -> bool {
        let i = self.index(x);
        if self.members[i] {
            self.members[i] = false;
            self.len -= 1;
            true
        } else {
            false
        }
    }

    pub fn contains<T: QuadraticBase>(&self, x: &QuadraticInt<T>) -> bool {
        self.members[self.index(x)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

/// Breadth-first enumeration of the additive closure of `{g, gω | g in generators}`
/// inside `A/(modulus)`, i.e. of the image of the ideal `(modulus, generators...)`.
///
/// Every residue is yielded exactly once, starting from zero. The enumeration is
/// bounded by `|norm(modulus)|` since each address is enqueued at most once.
pub(crate) struct Span<T> {
    modulus: QuadraticInt<T>,
    steps: Vec<QuadraticInt<T>>,
    queue: VecDeque<QuadraticInt<T>>,
    pending: VecDeque<QuadraticInt<T>>,
    visited: ResidueSet,
}

impl<T: QuadraticBase> Span<T> {
    /// # Panics
    /// If `modulus` is zero.
    pub fn new(modulus: &QuadraticInt<T>, generators: &[QuadraticInt<T>]) -> Self {
        let system = ResidueSystem::of(modulus);
        let omega = modulus.field.omega();
        let steps = generators
            .iter()
            .flat_map(|g| vec![g.clone(), g.clone() * omega.clone()])
            .collect();

        let zero = modulus.field.zero();
        let mut visited = ResidueSet::new(&system);
        visited.insert(&zero);
        Span {
            modulus: modulus.clone(),
            steps,
            queue: VecDeque::from(vec![zero.clone()]),
            pending: VecDeque::from(vec![zero]),
            visited,
        }
    }

    /// Exhaust the enumeration and return the set of reached residues
    pub fn into_visited(mut self) -> ResidueSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl<T: QuadraticBase> Iterator for Span<T> {
    type Item = QuadraticInt<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(z) = self.pending.pop_front() {
                return Some(z);
            }

            let w = self.queue.pop_front()?;
            for step in &self.steps {
                let z = (w.clone() + step.clone()).remainder(&self.modulus);
                if self.visited.insert(&z) {
                    self.queue.push_back(z.clone());
                    self.pending.push_back(z);
                }
            }
        }
    }
}
