//! Implementation of elements of the ring of integers of a quadratic field

use super::{QuadraticBase, QuadraticField};
use core::ops::{Add, Mul, Neg, Sub};
use num_rational::Ratio;

/// An element `a + bω` of the ring of integers `Z[ω]` of a [QuadraticField].
///
/// Equality is componentwise. Arithmetic between elements of different fields
/// is not defined and panics.
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: QuadraticBase + serde::Deserialize<'de>"
    ))
)]
pub struct QuadraticInt<T> {
    pub(crate) a: T,
    pub(crate) b: T,
    pub(crate) field: QuadraticField<T>,
}

impl<T> QuadraticInt<T> {
    #[inline]
    pub const fn new(a: T, b: T, field: QuadraticField<T>) -> Self {
        QuadraticInt { a, b, field }
    }

    /// Get return-only references to the coefficients `(a, b)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.a, &self.b)
    }

    /// The field this element belongs to
    #[inline]
    pub const fn field(&self) -> &QuadraticField<T> {
        &self.field
    }
}

impl<T: QuadraticBase> QuadraticInt<T> {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// Determine if the element is a rational integer
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.b.is_zero()
    }

    /// Determine if the element is invertible in the ring, i.e. has norm ±1
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.norm().abs().is_one()
    }

    #[inline]
    pub(crate) fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "elements belong to different quadratic fields"
        );
    }

    /// Return the conjugate of the element, i.e. the image under `√d ↦ -√d`.
    ///
    /// With `ω = (1+√d)/2` the conjugate of `a + bω` is `(a+b) - bω`,
    /// otherwise it is `a - bω`.
    #[inline]
    pub fn conj(&self) -> Self {
        if self.field.is_one_mod_four() {
            Self::new(
                self.a.clone() + self.b.clone(),
                -self.b.clone(),
                self.field.clone(),
            )
        } else {
            Self::new(self.a.clone(), -self.b.clone(), self.field.clone())
        }
    }

    /// Get the norm of the element, the rational integer `x · conj(x)`
    #[inline]
    pub fn norm(&self) -> T {
        (self.clone() * self.conj()).a
    }

    /// Get the trace of the element, the rational integer `x + conj(x)`
    #[inline]
    pub fn trace(&self) -> T {
        (self.clone() + self.conj()).a
    }

    /// Coordinates `(p, q)` of the field quotient `self / rhs = p + qω`.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn field_quotient(&self, rhs: &Self) -> (Ratio<T>, Ratio<T>) {
        self.assert_same_field(rhs);
        if rhs.is_zero() {
            panic!("division by zero");
        }

        let num = self.clone() * rhs.conj();
        let den = rhs.norm();
        (Ratio::new(num.a, den.clone()), Ratio::new(num.b, den))
    }

    /// The exact quotient `self / rhs` if it lies in the ring.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let (p, q) = self.field_quotient(rhs);
        if p.is_integer() && q.is_integer() {
            Some(Self::new(p.to_integer(), q.to_integer(), self.field.clone()))
        } else {
            None
        }
    }

    /// Test if `rhs` divides `self` in the ring
    ///
    /// # Panics
    /// If `rhs` is zero.
    #[inline]
    pub fn is_divided_by(&self, rhs: &Self) -> bool {
        self.checked_div(rhs).is_some()
    }

    /// Test if `self` divides `rhs` in the ring
    ///
    /// # Panics
    /// If `self` is zero.
    #[inline]
    pub fn is_divisor_of(&self, rhs: &Self) -> bool {
        rhs.is_divided_by(self)
    }
}

impl<T: QuadraticBase> Neg for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        QuadraticInt::new(-self.a, -self.b, self.field)
    }
}

impl<'a, T: QuadraticBase> Neg for &'a QuadraticInt<T> {
    type Output = QuadraticInt<T>;
    #[inline]
    fn neg(self) -> QuadraticInt<T> {
        -self.clone()
    }
}

impl<T: QuadraticBase> Add<T> for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        QuadraticInt::new(self.a + rhs, self.b, self.field)
    }
}

impl<T: QuadraticBase> Sub<T> for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        QuadraticInt::new(self.a - rhs, self.b, self.field)
    }
}

impl<T: QuadraticBase> Mul<T> for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        QuadraticInt::new(self.a * rhs.clone(), self.b * rhs, self.field)
    }
}

impl<T: QuadraticBase> Add for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.assert_same_field(&rhs);
        QuadraticInt::new(self.a + rhs.a, self.b + rhs.b, self.field)
    }
}

impl<T: QuadraticBase> Sub for QuadraticInt<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.assert_same_field(&rhs);
        QuadraticInt::new(self.a - rhs.a, self.b - rhs.b, self.field)
    }
}

impl<T: QuadraticBase> Mul for QuadraticInt<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.assert_same_field(&rhs);

        let bb = self.b.clone() * rhs.b.clone();
        let w = self.field.omega_weight().clone();
        let a = self.a.clone() * rhs.a.clone() + bb.clone() * w;
        let b = if self.field.is_one_mod_four() {
            // ω² = ω + (d-1)/4
            self.a * rhs.b + self.b * rhs.a + bb
        } else {
            // ω² = d
            self.a * rhs.b + self.b * rhs.a
        };
        QuadraticInt::new(a, b, self.field)
    }
}

macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T: QuadraticBase> $imp<&'a QuadraticInt<T>> for &'a QuadraticInt<T> {
            type Output = QuadraticInt<T>;
            #[inline]
            fn $method(self, rhs: &'a QuadraticInt<T>) -> QuadraticInt<T> {
                $imp::$method(self.clone(), rhs.clone())
            }
        }
    };
}

forward_ref_binop!(impl Add, add);
forward_ref_binop!(impl Sub, sub);
forward_ref_binop!(impl Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn z_sqrt_m5() -> QuadraticField<i64> {
        QuadraticField::new(-5).unwrap()
    }

    fn random_element(field: &QuadraticField<i64>, rng: &mut oorandom::Rand64, bound: u64) -> QuadraticInt<i64> {
        let half = bound as i64;
        let a = rng.rand_range(0..2 * bound + 1) as i64 - half;
        let b = rng.rand_range(0..2 * bound + 1) as i64 - half;
        field.element(a, b)
    }

    #[test]
    fn arithmic_test() {
        let f = z_sqrt_m5();
        let x = f.element(1, 1); // 1+√-5
        let y = f.element(1, -1); // 1-√-5

        assert_eq!(x + y, f.integer(2));
        assert_eq!(x - y, f.element(0, 2));
        assert_eq!(x * y, f.integer(6));
        assert_eq!(&x * &x, f.element(-4, 2));
        assert_eq!(-x, f.element(-1, -1));
        assert_eq!(x + 2, f.element(3, 1));
        assert_eq!(x - 1, f.omega());
        assert_eq!(x * 3, f.element(3, 3));
        assert_eq!(f.omega() * f.omega(), f.integer(-5));

        // golden ratio ring
        let g = QuadraticField::new(5i64).unwrap();
        let phi = g.omega();
        assert_eq!(phi * phi, g.element(1, 1)); // φ² = φ + 1
        assert_eq!(g.element(2, 3) * g.element(-1, 4), g.element(10, 17));

        // Eisenstein integers, ω = (1+√-3)/2
        let e = QuadraticField::new(-3i64).unwrap();
        assert_eq!(e.omega() * e.omega(), e.element(-1, 1));
    }

    #[test]
    fn property_test() {
        let f = z_sqrt_m5();
        assert_eq!(f.element(1, 1).norm(), 6);
        assert_eq!(f.element(3, 2).norm(), 29);
        assert_eq!(f.element(3, 2).trace(), 6);
        assert_eq!(f.element(3, 2).conj(), f.element(3, -2));

        let g = QuadraticField::new(5i64).unwrap();
        assert_eq!(g.omega().conj(), g.element(1, -1));
        assert_eq!(g.omega().norm(), -1);
        assert_eq!(g.omega().trace(), 1);
        assert!(g.omega().is_unit());
        assert!(!f.omega().is_unit());
        assert!(f.integer(-1).is_unit());

        assert!(f.integer(7).is_integer());
        assert!(!f.omega().is_integer());
        assert!(f.zero().is_zero());
        assert!(!f.one().is_zero());
    }

    #[test]
    fn norm_multiplicative_test() {
        let mut rng = oorandom::Rand64::new(1);
        for d in [-5i64, -1, -3, 2, 5, -7, 13] {
            let f = QuadraticField::new(d).unwrap();
            for _ in 0..200 {
                let x = random_element(&f, &mut rng, 1000);
                let y = random_element(&f, &mut rng, 1000);
                assert_eq!((x * y).norm(), x.norm() * y.norm());
                assert_eq!(x.conj().conj(), x);
                assert_eq!(x.conj().norm(), x.norm());
                assert_eq!(x * y, y * x);
            }
        }
    }

    #[test]
    fn divisibility_test() {
        let f = z_sqrt_m5();
        let x = f.element(1, 1);
        assert!(f.integer(6).is_divided_by(&x));
        assert!(x.is_divisor_of(&f.integer(6)));
        assert!(!f.integer(2).is_divided_by(&x));
        assert!(!f.integer(3).is_divided_by(&x));
        assert_eq!(f.integer(6).checked_div(&x), Some(f.element(1, -1)));
        assert_eq!(f.integer(3).checked_div(&x), None);
        assert_eq!(
            f.integer(3).field_quotient(&x),
            (Ratio::new(1, 2), Ratio::new(-1, 2))
        );

        let g = QuadraticField::new(-3i64).unwrap();
        // 3 = -(√-3)² and √-3 = 2ω - 1
        let r = g.element(-1, 2);
        assert_eq!(g.integer(3).checked_div(&r), Some(g.element(1, -2)));

        let mut rng = oorandom::Rand64::new(2);
        for _ in 0..200 {
            let x = random_element(&f, &mut rng, 50);
            let y = random_element(&f, &mut rng, 50);
            if y.is_zero() {
                continue;
            }
            assert_eq!((x * y).checked_div(&y), Some(x));
        }
    }

    #[test]
    #[should_panic]
    fn divide_by_zero_test() {
        let f = z_sqrt_m5();
        f.integer(3).is_divided_by(&f.zero());
    }

    #[test]
    #[should_panic]
    fn mixed_fields_test() {
        let f = z_sqrt_m5();
        let g = QuadraticField::new(2i64).unwrap();
        let _ = f.omega() * g.omega();
    }
}
