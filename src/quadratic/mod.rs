//! Data structures and algorithms implementations related to
//! rings of integers of quadratic fields and their ideals.

pub mod factor;
pub mod ideal;
pub mod integer;
pub mod residue;

use core::fmt;
use num_integer::{Integer, Roots};
use num_traits::{Signed, ToPrimitive};

use integer::QuadraticInt;

/// A helper trait to define valid type that can be used for coefficients of [QuadraticInt]
pub trait QuadraticBase: Integer + Signed + Clone + ToPrimitive + Roots {}
impl<T: Integer + Signed + Clone + ToPrimitive + Roots> QuadraticBase for T {}

/// Reasons for rejecting a discriminant parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscriminantError {
    /// `d = 0` does not define a quadratic field
    Zero,
    /// `d = 1` does not define a quadratic field
    One,
    /// `d` has a square factor, so the order `Z[ω]` is not the ring of integers
    NotSquarefree,
}

impl fmt::Display for DiscriminantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscriminantError::Zero => write!(f, "discriminant parameter must not be zero"),
            DiscriminantError::One => write!(f, "discriminant parameter must not be one"),
            DiscriminantError::NotSquarefree => {
                write!(f, "discriminant parameter must be squarefree")
            }
        }
    }
}

impl std::error::Error for DiscriminantError {}

/// The quadratic field `Q(√d)` together with its ring of integers `Z[ω]`, where
/// `ω = (1+√d)/2` if `d ≡ 1 (mod 4)` and `ω = √d` otherwise.
///
/// This is an immutable configuration value. Every [QuadraticInt] carries the
/// field it belongs to, so elements of several fields can be used side by side.
///
/// Only `d` is serialized. Deserialization goes through [QuadraticField::new], so an
/// invalid discriminant is rejected.
#[derive(Hash, Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "FieldRepr<T>",
        into = "FieldRepr<T>",
        bound(
            serialize = "T: Clone + serde::Serialize",
            deserialize = "T: QuadraticBase + serde::Deserialize<'de>"
        )
    )
)]
pub struct QuadraticField<T> {
    d: T,
    one_mod_four: bool,
    weight: T, // (d-1)/4 if d ≡ 1 (mod 4), d otherwise
}

impl<T: QuadraticBase> QuadraticField<T> {
    /// Create the field for a squarefree `d` other than 0 and 1.
    pub fn new(d: T) -> Result<Self, DiscriminantError> {
        if d.is_zero() {
            return Err(DiscriminantError::Zero);
        }
        if d.is_one() {
            return Err(DiscriminantError::One);
        }

        let n = d.abs();
        let two = T::one() + T::one();
        let mut p = two;
        while p.clone() * p.clone() <= n {
            if n.is_multiple_of(&(p.clone() * p.clone())) {
                return Err(DiscriminantError::NotSquarefree);
            }
            p = p + T::one();
        }

        Ok(Self::new_raw(d))
    }

    // Skip the squarefree check, only used when `d` is already known to be valid
    pub(crate) fn new_raw(d: T) -> Self {
        let four = T::one() + T::one() + T::one() + T::one();
        let one_mod_four = d.mod_floor(&four).is_one();
        let weight = if one_mod_four {
            (d.clone() - T::one()) / four
        } else {
            d.clone()
        };
        QuadraticField { d, one_mod_four, weight }
    }

    /// The discriminant parameter `d`
    #[inline]
    pub fn discr(&self) -> &T {
        &self.d
    }

    /// Whether `d ≡ 1 (mod 4)`, i.e. whether `ω = (1+√d)/2`
    #[inline]
    pub fn is_one_mod_four(&self) -> bool {
        self.one_mod_four
    }

    /// The rational part of `ω²` when `d ≡ 1 (mod 4)` (namely `(d-1)/4`), or `d` otherwise.
    ///
    /// `ω · (s + tω)` has rational part `t * weight`.
    #[inline]
    pub fn omega_weight(&self) -> &T {
        &self.weight
    }

    /// The element `a + bω`
    #[inline]
    pub fn element(&self, a: T, b: T) -> QuadraticInt<T> {
        QuadraticInt::new(a, b, self.clone())
    }

    /// The rational integer `a` as an element of the ring
    #[inline]
    pub fn integer(&self, a: T) -> QuadraticInt<T> {
        self.element(a, T::zero())
    }

    #[inline]
    pub fn zero(&self) -> QuadraticInt<T> {
        self.element(T::zero(), T::zero())
    }

    #[inline]
    pub fn one(&self) -> QuadraticInt<T> {
        self.element(T::one(), T::zero())
    }

    /// The distinguished generator `ω` of the ring
    #[inline]
    pub fn omega(&self) -> QuadraticInt<T> {
        self.element(T::zero(), T::one())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FieldRepr<T> {
    d: T,
}

#[cfg(feature = "serde")]
impl<T> From<QuadraticField<T>> for FieldRepr<T> {
    #[inline]
    fn from(field: QuadraticField<T>) -> Self {
        FieldRepr { d: field.d }
    }
}

#[cfg(feature = "serde")]
impl<T: QuadraticBase> TryFrom<FieldRepr<T>> for QuadraticField<T> {
    type Error = DiscriminantError;
    #[inline]
    fn try_from(repr: FieldRepr<T>) -> Result<Self, Self::Error> {
        QuadraticField::new(repr.d)
    }
}
