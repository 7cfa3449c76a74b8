//! Prime field families and their elements.
//!
//! The modulus is selected at runtime through a [`FieldId`], so a single
//! [`FieldElement`] type serves every curve in the registry. Arithmetic is
//! delegated to `crypto-bigint`'s runtime Montgomery form.

use bigint::{
    Odd, U256,
    modular::{MontyForm, MontyParams},
};
use core::{
    fmt::{self, Display, Formatter, LowerHex, UpperHex},
    ops::{Add, Mul, Neg, Sub},
};
use subtle::{Choice, ConstantTimeEq};

/// Number of limbs in a field element.
const LIMBS: usize = U256::LIMBS;

/// Montgomery parameters for a field modulus.
pub type FieldParams = MontyParams<LIMBS>;

/// p = 2^255 - 19
const MODULUS_P25519: Odd<U256> =
    Odd::<U256>::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");

/// Prime modulus family a curve is defined over.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FieldId {
    /// p = 2^255 - 19
    P25519,
}

/// Field family compiled into this build, if any.
pub const COMPILED_FIELD: Option<FieldId> = if cfg!(feature = "fp255") {
    Some(FieldId::P25519)
} else {
    None
};

impl FieldId {
    /// Field modulus.
    pub const fn modulus(self) -> Odd<U256> {
        match self {
            FieldId::P25519 => MODULUS_P25519,
        }
    }

    /// Size of the modulus in bits.
    pub const fn bits(self) -> u32 {
        match self {
            FieldId::P25519 => 255,
        }
    }

    /// Montgomery parameters used to build elements of this field.
    pub fn params(self) -> FieldParams {
        MontyParams::new(self.modulus())
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::P25519 => f.write_str("2^255 - 19"),
        }
    }
}

/// Element of the prime field selected by a [`FieldId`].
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(MontyForm<LIMBS>);

impl FieldElement {
    /// Additive identity.
    pub fn zero(params: FieldParams) -> Self {
        Self(MontyForm::zero(params))
    }

    /// Multiplicative identity.
    pub fn one(params: FieldParams) -> Self {
        Self(MontyForm::one(params))
    }

    /// Reduce an integer into the field.
    pub fn from_uint(uint: &U256, params: FieldParams) -> Self {
        Self(MontyForm::new(uint, params))
    }

    /// Parse a big endian hexadecimal constant into the field.
    ///
    /// # Panics
    /// - if the string is not exactly 64 hexadecimal digits.
    pub fn from_be_hex(hex: &str, params: FieldParams) -> Self {
        Self::from_uint(&U256::from_be_hex(hex), params)
    }

    /// Canonical integer value in `[0, p)`.
    pub fn to_uint(&self) -> U256 {
        self.0.retrieve()
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.to_uint().ct_eq(&U256::ZERO)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_uint().ct_eq(&other.to_uint())
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.to_uint())
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.to_uint())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.to_uint())
    }
}
