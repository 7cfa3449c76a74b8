//! Twisted Edwards points in the coordinate representation selected at build
//! time.
//!
//! With the `extended` feature points are kept in extended homogeneous
//! coordinates `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z` and `T·Z = X·Y`.
//! Otherwise they are kept in projective coordinates `(X : Y : Z)`.
//!
//! Both representations use the unified formulas of Hisil, Wong, Carter and
//! Dawson (Asiacrypt 2008) or Bernstein, Birkner, Joye, Lange and Peters
//! (Africacrypt 2008) for `a·x² + y² = 1 + d·x²·y²`, which are complete when
//! `a` is a square and `d` is not.

#[cfg(feature = "extended")]
mod extended;
#[cfg(not(feature = "extended"))]
mod projective;

#[cfg(feature = "extended")]
pub use self::extended::EdwardsPoint;
#[cfg(not(feature = "extended"))]
pub use self::projective::EdwardsPoint;
