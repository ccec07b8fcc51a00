//! Implementation of ideals of the ring of integers of a quadratic field
//!
//! Every ideal of a quadratic ring of integers can be generated by two elements,
//! so an [Ideal] is stored as a pair of generators `(gen0, gen1)`. Generating sets of
//! arbitrary size are reduced to two elements by enumerating subgroups of the finite
//! quotient `A/(gen0)`, see [Ideal::from_generators].

use super::integer::QuadraticInt;
use super::residue::{ResidueSet, ResidueSystem, Span};
use super::{QuadraticBase, QuadraticField};
use core::fmt;
use core::ops::{Add, Mul};
use core::slice;

/// Failures of the generator reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdealError {
    /// No two-element generating set was found.
    ///
    /// This cannot happen for a valid ring of integers, since every ideal is
    /// generated by two elements. Seeing this error means an internal invariant
    /// is broken (for example an inconsistent discriminant).
    GeneratorSearchExhausted,
    /// The generators belong to different quadratic fields.
    MixedFields,
}

impl fmt::Display for IdealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdealError::GeneratorSearchExhausted => {
                write!(f, "no two-element generating set exists for the ideal")
            }
            IdealError::MixedFields => {
                write!(f, "generators belong to different quadratic fields")
            }
        }
    }
}

impl std::error::Error for IdealError {}

/// An ideal `(gen0, gen1)` of the ring of integers of a [QuadraticField].
///
/// Equality is equality of ideals (mutual containment), not of generators.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "IdealRepr<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: QuadraticBase + serde::Deserialize<'de>"
        )
    )
)]
pub struct Ideal<T> {
    gens: [QuadraticInt<T>; 2],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: QuadraticBase + serde::Deserialize<'de>"))]
struct IdealRepr<T> {
    gens: [QuadraticInt<T>; 2],
}

#[cfg(feature = "serde")]
impl<T: QuadraticBase> TryFrom<IdealRepr<T>> for Ideal<T> {
    type Error = IdealError;
    fn try_from(repr: IdealRepr<T>) -> Result<Self, Self::Error> {
        let [gen0, gen1] = repr.gens;
        if gen0.field() != gen1.field() {
            return Err(IdealError::MixedFields);
        }
        Ok(Ideal::new_raw(gen0, gen1))
    }
}

impl<T: QuadraticBase> Ideal<T> {
    #[inline]
    pub(crate) fn new_raw(gen0: QuadraticInt<T>, gen1: QuadraticInt<T>) -> Self {
        gen0.assert_same_field(&gen1);
        Ideal { gens: [gen0, gen1] }
    }

    /// The zero ideal `{0}`
    #[inline]
    pub fn zero(field: &QuadraticField<T>) -> Self {
        Self::new_raw(field.zero(), field.zero())
    }

    /// The unit ideal, i.e. the whole ring
    #[inline]
    pub fn whole(field: &QuadraticField<T>) -> Self {
        Self::principal(field.one())
    }

    /// The principal ideal `(x)`
    #[inline]
    pub fn principal(x: QuadraticInt<T>) -> Self {
        let zero = x.field().zero();
        Self::new_raw(x, zero)
    }

    /// Find two generators of the ideal generated by `generators`.
    ///
    /// Zero generators are discarded. If at most two remain they are used as they are,
    /// otherwise `gen0` is a generator of least absolute norm (the first one on ties) and
    /// `gen1` is the first residue modulo `gen0`, in lexicographic order, which alone
    /// spans the same subgroup of `A/(gen0)` as all generators together.
    ///
    /// # Errors
    /// [IdealError::MixedFields] if a generator belongs to a different field.
    pub fn try_from_generators<I>(field: &QuadraticField<T>, generators: I) -> Result<Self, IdealError>
    where
        I: IntoIterator<Item = QuadraticInt<T>>,
    {
        let mut gens = Vec::new();
        for g in generators {
            if g.field() != field {
                return Err(IdealError::MixedFields);
            }
            if !g.is_zero() {
                gens.push(g);
            }
        }

        let modulus = match gens.as_slice() {
            [] => return Ok(Self::zero(field)),
            [g0] => return Ok(Self::new_raw(g0.clone(), field.zero())),
            [g0, g1] => return Ok(Self::new_raw(g0.clone(), g1.clone())),
            _ => {
                let mut least = &gens[0];
                for g in &gens[1..] {
                    if g.norm().abs() < least.norm().abs() {
                        least = g;
                    }
                }
                least.clone()
            }
        };

        // the image of the ideal in A/(modulus)
        let mut span = Span::new(&modulus, &gens);
        let size = span.by_ref().count();
        let image = span.into_visited();

        // Residues in a subgroup spanned by an earlier candidate span a subgroup of it,
        // which is strictly smaller unless it was already accepted.
        let system = ResidueSystem::of(&modulus);
        let mut covered = ResidueSet::new(&system);
        for t in system.addresses(field) {
            if !image.contains(&t) || covered.contains(&t) {
                continue;
            }

            let mut candidate_size = 0;
            for z in Span::new(&modulus, slice::from_ref(&t)) {
                covered.insert(&z);
                candidate_size += 1;
            }
            if candidate_size == size {
                return Ok(Self::new_raw(modulus, t));
            }
        }

        Err(IdealError::GeneratorSearchExhausted)
    }

    /// Same as [Ideal::try_from_generators]
    ///
    /// # Panics
    /// If a generator belongs to a different field, or if the generator search fails,
    /// which indicates a broken invariant rather than bad input.
    pub fn from_generators<I>(field: &QuadraticField<T>, generators: I) -> Self
    where
        I: IntoIterator<Item = QuadraticInt<T>>,
    {
        match Self::try_from_generators(field, generators) {
            Ok(ideal) => ideal,
            Err(e) => panic!("{}", e),
        }
    }

    /// Get return-only references to the generators `(gen0, gen1)`
    #[inline]
    pub fn generators(&self) -> (&QuadraticInt<T>, &QuadraticInt<T>) {
        (&self.gens[0], &self.gens[1])
    }

    /// The field of the ring this ideal lives in
    #[inline]
    pub fn field(&self) -> &QuadraticField<T> {
        self.gens[0].field()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.gens[0].is_zero() && self.gens[1].is_zero()
    }

    /// Determine if the ideal is the whole ring
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.contains(&self.field().one())
    }

    /// Returns the same ideal with generators in canonical order: `gen0` is a nonzero
    /// generator of least absolute norm (unless the ideal is zero) and `gen1` is
    /// reduced modulo `gen0`.
    pub fn normalized(&self) -> Self {
        let [mut gen0, mut gen1] = self.gens.clone();
        if gen0.is_zero() {
            core::mem::swap(&mut gen0, &mut gen1);
        }
        if gen0.is_zero() {
            return Self::new_raw(gen0, gen1);
        }

        if !gen1.is_zero() && gen0.norm().abs() > gen1.norm().abs() {
            core::mem::swap(&mut gen0, &mut gen1);
        }
        let gen1 = gen1.remainder(&gen0);
        Self::new_raw(gen0, gen1)
    }

    /// Test if the element lies in the ideal
    pub fn contains(&self, x: &QuadraticInt<T>) -> bool {
        let normal = self.normalized();
        let [gen0, gen1] = &normal.gens;
        if gen0.is_zero() {
            return x.is_zero();
        }

        let x = x.remainder(gen0);
        if x.is_zero() {
            return true;
        }
        Span::new(gen0, slice::from_ref(gen1)).any(|z| z == x)
    }

    /// Test if `other` is a subset of `self`
    #[inline]
    pub fn contains_ideal(&self, other: &Self) -> bool {
        self.contains(&other.gens[0]) && self.contains(&other.gens[1])
    }

    /// The absolute norm of the ideal, i.e. the number of elements of `A/I`.
    ///
    /// # Panics
    /// If the ideal is zero.
    pub fn norm(&self) -> T {
        let normal = self.normalized();
        let [gen0, gen1] = &normal.gens;
        if gen0.is_zero() {
            panic!("the zero ideal has infinite index");
        }

        let image = Span::new(gen0, slice::from_ref(gen1)).fold(T::zero(), |n, _| n + T::one());
        ResidueSystem::of(gen0).size() / image
    }

    /// Raise the ideal to the power `exp`
    pub fn pow(&self, exp: usize) -> Self {
        let mut result = Self::whole(self.field());
        for _ in 0..exp {
            result = &result * self;
        }
        result
    }
}

impl<T: QuadraticBase> From<QuadraticInt<T>> for Ideal<T> {
    #[inline]
    fn from(x: QuadraticInt<T>) -> Self {
        Ideal::principal(x)
    }
}

impl<T: QuadraticBase> PartialEq for Ideal<T> {
    fn eq(&self, other: &Self) -> bool {
        // shortcut if the generators are matched
        if self.gens == other.gens {
            return true;
        }
        self.contains_ideal(other) && other.contains_ideal(self)
    }
}

impl<T: QuadraticBase> Eq for Ideal<T> {}

impl<'a, T: QuadraticBase> Add for &'a Ideal<T> {
    type Output = Ideal<T>;

    /// The sum of ideals, generated by the union of the generators
    fn add(self, rhs: Self) -> Ideal<T> {
        let [a0, a1] = self.gens.clone();
        let [b0, b1] = rhs.gens.clone();
        Ideal::from_generators(self.field(), vec![a0, a1, b0, b1])
    }
}

impl<'a, T: QuadraticBase> Mul for &'a Ideal<T> {
    type Output = Ideal<T>;

    /// The product of ideals, generated by the pairwise products of the generators
    fn mul(self, rhs: Self) -> Ideal<T> {
        let mut products = Vec::with_capacity(4);
        for a in &self.gens {
            for b in &rhs.gens {
                products.push(a * b);
            }
        }
        Ideal::from_generators(self.field(), products)
    }
}

impl<T: QuadraticBase> Add for Ideal<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: QuadraticBase> Mul for Ideal<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_sqrt_m5() -> QuadraticField<i64> {
        QuadraticField::new(-5).unwrap()
    }

    fn ideal(f: &QuadraticField<i64>, gens: &[(i64, i64)]) -> Ideal<i64> {
        Ideal::from_generators(f, gens.iter().map(|&(a, b)| f.element(a, b)))
    }

    #[test]
    fn from_generators_test() {
        let f = z_sqrt_m5();

        let i = ideal(&f, &[(6, 0), (4, 2), (2, 2)]);
        assert_eq!(i.generators(), (&f.element(2, 2), &f.element(0, 2)));

        let i = ideal(&f, &[(4, 0), (6, 0), (10, 0)]);
        assert_eq!(i.generators(), (&f.integer(4), &f.element(0, 2)));
        assert_eq!(i, ideal(&f, &[(2, 0)]));

        // small generating sets are kept, zeros dropped
        let i = ideal(&f, &[(0, 0), (2, 0), (0, 0), (1, 1)]);
        assert_eq!(i.generators(), (&f.integer(2), &f.element(1, 1)));
        let i = ideal(&f, &[(3, 0)]);
        assert_eq!(i.generators(), (&f.integer(3), &f.zero()));
        assert!(ideal(&f, &[]).is_zero());
        assert!(ideal(&f, &[(0, 0), (0, 0), (0, 0)]).is_zero());

        // 2, 1+√-5, 3 generate the unit ideal
        let i = ideal(&f, &[(2, 0), (1, 1), (3, 0)]);
        assert_eq!(i.generators(), (&f.integer(2), &f.element(0, 1)));
        assert!(i.is_whole());
    }

    #[test]
    fn generator_search_never_fails_test() {
        let mut rng = oorandom::Rand64::new(3);
        let mut rand = |bound: u64| rng.rand_range(0..2 * bound + 1) as i64 - bound as i64;

        for d in [-5i64, -1, -3, 2, 5, -7, 10] {
            let f = QuadraticField::new(d).unwrap();
            for _ in 0..20 {
                let gens: Vec<_> = (0..4).map(|_| f.element(rand(8), rand(8))).collect();
                let i = Ideal::try_from_generators(&f, gens.clone());
                assert!(i.is_ok(), "d = {}, generators = {:?}", d, gens);

                // the reduced ideal contains all input generators and vice versa
                let i = i.unwrap();
                for g in &gens {
                    assert!(i.contains(g));
                }
                let (g0, _) = i.generators();
                assert!(gens.contains(g0) || g0.is_zero());
            }
        }
    }

    #[test]
    fn contains_test() {
        let f = z_sqrt_m5();
        let p2 = ideal(&f, &[(2, 0), (1, 1)]);
        assert!(p2.contains(&f.integer(2)));
        assert!(p2.contains(&f.element(1, 1)));
        assert!(p2.contains(&f.element(1, -1)));
        assert!(p2.contains(&f.integer(6)));
        assert!(!p2.contains(&f.one()));
        assert!(!p2.contains(&f.omega()));
        assert!(p2.contains(&f.zero()));

        // generator order does not matter
        let swapped = Ideal::new_raw(f.element(1, 1), f.integer(2));
        assert!(swapped.contains(&f.element(1, -1)));
        assert!(!swapped.contains(&f.one()));

        let zero = Ideal::zero(&f);
        assert!(zero.contains(&f.zero()));
        assert!(!zero.contains(&f.one()));
        let principal = Ideal::new_raw(f.zero(), f.integer(3));
        assert!(principal.contains(&f.element(3, -6)));
        assert!(!principal.contains(&f.element(3, 1)));

        assert!(Ideal::whole(&f).contains(&f.element(17, -4)));
    }

    #[test]
    fn normalized_test() {
        let f = z_sqrt_m5();
        let i = Ideal::new_raw(f.element(1, 1), f.integer(2));
        let n = i.normalized();
        assert_eq!(n.generators(), (&f.integer(2), &f.element(1, 1)));
        assert_eq!(n, i);
        assert_eq!(n.normalized().generators(), n.generators());

        let i = Ideal::new_raw(f.zero(), f.integer(3));
        assert_eq!(i.normalized().generators(), (&f.integer(3), &f.zero()));
        // the receiver itself is untouched
        assert_eq!(i.generators(), (&f.zero(), &f.integer(3)));
    }

    #[test]
    fn containment_order_test() {
        let f = z_sqrt_m5();
        let p2 = ideal(&f, &[(2, 0), (1, 1)]);
        let two = ideal(&f, &[(2, 0)]);
        let four = ideal(&f, &[(4, 0)]);

        assert!(p2.contains_ideal(&p2));
        assert!(p2.contains_ideal(&two));
        assert!(p2.contains_ideal(&four));
        assert!(!two.contains_ideal(&p2));
        assert!(two.contains_ideal(&four));
        assert!(!four.contains_ideal(&two));
        assert_ne!(p2, two);
        assert_eq!(two, ideal(&f, &[(4, 0), (6, 0)]));
    }

    #[test]
    fn arithmic_test() {
        let f = z_sqrt_m5();
        let p2 = ideal(&f, &[(2, 0), (1, 1)]);
        let p3 = ideal(&f, &[(3, 0), (1, 1)]);
        let q3 = ideal(&f, &[(3, 0), (1, -1)]);

        // (2, 1+√-5)² = (2)
        assert_eq!(&p2 * &p2, ideal(&f, &[(2, 0)]));
        assert_eq!(p2.pow(2), ideal(&f, &[(2, 0)]));
        // (3, 1+√-5)(3, 1-√-5) = (3)
        assert_eq!(&p3 * &q3, ideal(&f, &[(3, 0)]));
        // (2, 1+√-5)(3, 1+√-5) = (1+√-5)
        assert_eq!(p2.clone() * p3.clone(), Ideal::principal(f.element(1, 1)));

        assert_eq!(ideal(&f, &[(2, 0)]) + ideal(&f, &[(3, 0)]), Ideal::whole(&f));
        assert_eq!(&p3 + &q3, Ideal::whole(&f));
        assert_eq!(&p2 + &ideal(&f, &[(2, 0)]), p2);
        assert_eq!(&p2 * &Ideal::whole(&f), p2);
        assert!((&p2 * &Ideal::zero(&f)).is_zero());
        assert_eq!(p2.pow(0), Ideal::whole(&f));
    }

    #[test]
    fn norm_test() {
        let f = z_sqrt_m5();
        assert_eq!(ideal(&f, &[(2, 0), (1, 1)]).norm(), 2);
        assert_eq!(ideal(&f, &[(3, 0), (1, -1)]).norm(), 3);
        assert_eq!(ideal(&f, &[(11, 0)]).norm(), 121);
        assert_eq!(ideal(&f, &[(1, 1)]).norm(), 6);
        assert_eq!(Ideal::whole(&f).norm(), 1);

        let g = QuadraticField::new(-3i64).unwrap();
        assert_eq!(Ideal::principal(g.integer(2)).norm(), 4);
        assert_eq!(Ideal::principal(g.element(-1, 2)).norm(), 3);
    }

    #[test]
    #[should_panic]
    fn zero_norm_test() {
        let f = z_sqrt_m5();
        Ideal::zero(&f).norm();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_test() {
        let f = z_sqrt_m5();
        let p2 = ideal(&f, &[(2, 0), (1, 1)]);
        let json = serde_json::to_string(&p2).unwrap();
        let back: Ideal<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.generators(), p2.generators());

        let mixed = r#"{"gens":[{"a":2,"b":0,"field":{"d":-5}},{"a":1,"b":1,"field":{"d":2}}]}"#;
        assert!(serde_json::from_str::<Ideal<i64>>(mixed).is_err());
        let invalid = r#"{"gens":[{"a":2,"b":0,"field":{"d":-20}},{"a":1,"b":1,"field":{"d":-20}}]}"#;
        assert!(serde_json::from_str::<Ideal<i64>>(invalid).is_err());
    }

    #[test]
    fn mixed_fields_test() {
        let f = z_sqrt_m5();
        let g = QuadraticField::new(2i64).unwrap();
        let gens = vec![f.integer(2), g.integer(3), f.element(1, 1)];
        assert_eq!(
            Ideal::try_from_generators(&f, gens).unwrap_err(),
            IdealError::MixedFields
        );
        assert_eq!(
            Ideal::try_from_generators(&f, vec![g.integer(2)]).unwrap_err(),
            IdealError::MixedFields
        );
    }

    #[test]
    #[should_panic]
    fn mixed_fields_panic_test() {
        let f = z_sqrt_m5();
        let g = QuadraticField::new(2i64).unwrap();
        Ideal::from_generators(&f, vec![f.integer(2), g.integer(3)]);
    }
}
