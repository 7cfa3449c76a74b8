use crate::field::{FieldElement, FieldParams};
use core::{
    fmt::{Display, Formatter, Result as FmtResult, UpperHex},
    ops::Neg,
};
use subtle::{Choice, ConstantTimeEq};

/// Point on a twisted Edwards curve in extended homogeneous coordinates
/// `(x, y) -> (X : Y : Z : T)` with `T·Z = X·Y`.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0 : 1 : 1 : 0)`.
    pub fn identity(params: FieldParams) -> Self {
        Self {
            X: FieldElement::zero(params),
            Y: FieldElement::one(params),
            Z: FieldElement::one(params),
            T: FieldElement::zero(params),
        }
    }

    /// Lift affine coordinates: `Z = 1`, `T = x·y`.
    pub fn from_affine(x: FieldElement, y: FieldElement, params: FieldParams) -> Self {
        Self {
            X: x,
            Y: y,
            Z: FieldElement::one(params),
            T: x * y,
        }
    }

    /// `X` coordinate.
    pub fn x(&self) -> FieldElement {
        self.X
    }

    /// `Y` coordinate.
    pub fn y(&self) -> FieldElement {
        self.Y
    }

    /// `Z` coordinate.
    pub fn z(&self) -> FieldElement {
        self.Z
    }

    /// `T` coordinate.
    pub fn t(&self) -> FieldElement {
        self.T
    }

    /// Is this the neutral element?
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Check `(a·X² + Y²)·Z² = Z⁴ + d·X²·Y²` and `T·Z = X·Y`.
    pub fn is_on_curve(&self, a: &FieldElement, d: &FieldElement) -> Choice {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = (*a * XX + YY) * ZZ;
        let rhs = ZZ.square() + *d * XX * YY;

        lhs.ct_eq(&rhs) & (self.T * self.Z).ct_eq(&(self.X * self.Y))
    }

    /// Unified addition, `add-2008-hwcd`.
    pub fn add(&self, other: &Self, a: &FieldElement, d: &FieldElement) -> Self {
        let A = self.X * other.X;
        let B = self.Y * other.Y;
        let C = self.T * *d * other.T;
        let D = self.Z * other.Z;
        let E = (self.X + self.Y) * (other.X + other.Y) - A - B;
        let F = D - C;
        let G = D + C;
        let H = B - *a * A;

        Self {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Doubling, `dbl-2008-hwcd`.
    pub fn double(&self, a: &FieldElement) -> Self {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().double();
        let D = *a * A;
        let E = (self.X + self.Y).square() - A - B;
        let G = D + B;
        let F = G - C;
        let H = D - B;

        Self {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

impl Neg for EdwardsPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {}, Y: {}, Z: {}, T: {} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl UpperHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:X}, Y: {:X}, Z: {:X}, T: {:X} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}
