//! Exact arithmetic in the ring of integers of a quadratic field `Q(√d)`,
//! together with ideal arithmetic and factorization of ideals into prime ideals.
//!
//! ```
//! use quadratic_ideals::{Ideal, QuadraticField, Splitting};
//!
//! let field = QuadraticField::new(-5i64).unwrap();
//! let two = Ideal::principal(field.integer(2));
//! let factors = two.prime_factors();
//! assert_eq!(factors.len(), 1);
//! assert_eq!(factors[0].1, 2);
//! assert_eq!(field.splitting(11), Some(Splitting::Inert));
//! ```
//!
//! Coefficients are not checked against overflow. For large discriminants or
//! ideals, use `BigInt` coefficients (feature `num-bigint`).

pub mod arith;
pub mod quadratic;

pub use quadratic::factor::Splitting;
pub use quadratic::ideal::{Ideal, IdealError};
pub use quadratic::integer::QuadraticInt;
pub use quadratic::residue::ResidueSystem;
pub use quadratic::{DiscriminantError, QuadraticBase, QuadraticField};
