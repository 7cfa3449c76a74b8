use crate::field::{FieldElement, FieldParams};
use core::{
    fmt::{Display, Formatter, Result as FmtResult, UpperHex},
    ops::Neg,
};
use subtle::{Choice, ConstantTimeEq};

/// Point on a twisted Edwards curve in projective coordinates
/// `(x, y) -> (X : Y : Z)`.
#[derive(Clone, Copy, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

impl EdwardsPoint {
    /// The neutral element `(0 : 1 : 1)`.
    pub fn identity(params: FieldParams) -> Self {
        Self {
            X: FieldElement::zero(params),
            Y: FieldElement::one(params),
            Z: FieldElement::one(params),
        }
    }

    /// Lift affine coordinates: `Z = 1`.
    pub fn from_affine(x: FieldElement, y: FieldElement, params: FieldParams) -> Self {
        Self {
            X: x,
            Y: y,
            Z: FieldElement::one(params),
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

    /// Is this the neutral element?
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Check `(a·X² + Y²)·Z² = Z⁴ + d·X²·Y²`.
    pub fn is_on_curve(&self, a: &FieldElement, d: &FieldElement) -> Choice {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = (*a * XX + YY) * ZZ;
        let rhs = ZZ.square() + *d * XX * YY;

        lhs.ct_eq(&rhs)
    }

    /// Unified addition, `add-2008-bbjlp`.
    pub fn add(&self, other: &Self, a: &FieldElement, d: &FieldElement) -> Self {
        let A = self.Z * other.Z;
        let B = A.square();
        let C = self.X * other.X;
        let D = self.Y * other.Y;
        let E = *d * C * D;
        let F = B - E;
        let G = B + E;

        Self {
            X: A * F * ((self.X + self.Y) * (other.X + other.Y) - C - D),
            Y: A * G * (D - *a * C),
            Z: F * G,
        }
    }

    /// Doubling, `dbl-2008-bbjlp`.
    pub fn double(&self, a: &FieldElement) -> Self {
        let B = (self.X + self.Y).square();
        let C = self.X.square();
        let D = self.Y.square();
        let E = *a * C;
        let F = E + D;
        let H = self.Z.square();
        let J = F - H.double();

        Self {
            X: (B - C - D) * J,
            Y: F * (E - D),
            Z: F * J,
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
        }
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{ X: {}, Y: {}, Z: {} }}", self.X, self.Y, self.Z)
    }
}

impl UpperHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{ X: {:X}, Y: {:X}, Z: {:X} }}", self.X, self.Y, self.Z)
    }
}
