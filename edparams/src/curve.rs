//! Curve identifiers and the compiled-in table of domain parameters.

use crate::field::FieldId;
use const_oid::ObjectIdentifier;
use core::fmt::{self, Display, Formatter};

/// Identifier of a named curve: its ASN.1 object identifier.
///
/// Any OID is a valid `CurveId`. Only those with an entry in [`CURVES`] can be
/// loaded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CurveId(ObjectIdentifier);

impl CurveId {
    /// Ed25519 (`id-Ed25519`, RFC 8410).
    pub const ED25519: Self = Self(ObjectIdentifier::new_unwrap("1.3.101.112"));

    /// Wrap an object identifier.
    pub const fn new(oid: ObjectIdentifier) -> Self {
        Self(oid)
    }

    /// Object identifier naming this curve.
    pub const fn oid(&self) -> ObjectIdentifier {
        self.0
    }

    /// Compiled-in parameter set for this curve, if any.
    pub fn constants(&self) -> Option<&'static CurveConstants> {
        CURVES.iter().find(|curve| curve.id == *self)
    }

    /// Human readable name, e.g. `"ED25519"`.
    pub fn name(&self) -> Option<&'static str> {
        self.constants().map(|curve| curve.name)
    }

    /// Approximate security level in bits, or 0 if the curve is unknown.
    pub fn security_level(&self) -> u32 {
        self.constants().map_or(0, |curve| curve.security_bits)
    }
}

impl From<ObjectIdentifier> for CurveId {
    fn from(oid: ObjectIdentifier) -> Self {
        Self(oid)
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Domain parameters of a twisted Edwards curve `a·x² + y² = 1 + d·x²·y²`,
/// as big endian hexadecimal strings of the field width.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveConstants {
    /// Curve identifier.
    pub id: CurveId,

    /// Human readable name.
    pub name: &'static str,

    /// Field the curve is defined over.
    pub field: FieldId,

    /// Approximate security level in bits.
    pub security_bits: u32,

    /// Coefficient `a`.
    pub a: &'static str,

    /// Coefficient `d`.
    pub d: &'static str,

    /// Affine `x` coordinate of the generator.
    pub x: &'static str,

    /// Affine `y` coordinate of the generator.
    pub y: &'static str,

    /// Order of the subgroup generated by the generator.
    pub order: &'static str,

    /// Cofactor.
    pub cofactor: &'static str,
}

/// Ed25519: `-x² + y² = 1 - (121665/121666)·x²·y²` over `2^255 - 19`.
#[cfg(feature = "fp255")]
const ED25519: CurveConstants = CurveConstants {
    id: CurveId::ED25519,
    name: "ED25519",
    field: FieldId::P25519,
    security_bits: 128,
    a: "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEC",
    d: "52036CEE2B6FFE738CC740797779E89800700A4D4141D8AB75EB4DCA135978A3",
    x: "216936D3CD6E53FEC0A4E231FDD6DC5C692CC7609525A7B2C9562D608F25D51A",
    y: "6666666666666666666666666666666666666666666666666666666666666658",
    order: "1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED",
    cofactor: "0000000000000000000000000000000000000000000000000000000000000008",
};

/// Every curve compiled into this build.
pub static CURVES: &[CurveConstants] = &[
    #[cfg(feature = "fp255")]
    ED25519,
];

/// Default curve for a field family: the first registered curve over it.
pub fn default_curve(field: FieldId) -> Option<CurveId> {
    CURVES
        .iter()
        .find(|curve| curve.field == field)
        .map(|curve| curve.id)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{CURVES, CurveId, default_curve};
    use crate::field::FieldId;
    use const_oid::ObjectIdentifier;
    use std::string::ToString;

    /// id-Ed448, RFC 8410.
    const ED448_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.113");

    #[test]
    fn ids_are_unique() {
        for (i, curve) in CURVES.iter().enumerate() {
            assert!(CURVES[i + 1..].iter().all(|other| other.id != curve.id));
        }
    }

    #[test]
    fn constants_have_field_width() {
        for curve in CURVES {
            let width = 2 * (curve.field.bits() as usize).div_ceil(8);
            for hex in [curve.a, curve.d, curve.x, curve.y, curve.order, curve.cofactor] {
                assert_eq!(hex.len(), width, "{}", curve.name);
                assert!(hex.bytes().all(|b| b.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn unknown_curve() {
        let id = CurveId::from(ED448_OID);
        assert!(id.constants().is_none());
        assert_eq!(id.name(), None);
        assert_eq!(id.security_level(), 0);
        assert_eq!(id.to_string(), "1.3.101.113");
    }

    #[cfg(feature = "fp255")]
    #[test]
    fn ed25519_lookup() {
        let id = CurveId::ED25519;
        assert_eq!(id.name(), Some("ED25519"));
        assert_eq!(id.security_level(), 128);
        assert_eq!(id.to_string(), "ED25519");
        assert_eq!(default_curve(FieldId::P25519), Some(id));
    }

    #[cfg(not(feature = "fp255"))]
    #[test]
    fn no_curves_without_field() {
        assert!(CURVES.is_empty());
        assert_eq!(default_curve(FieldId::P25519), None);
        assert_eq!(CurveId::ED25519.security_level(), 0);
    }
}
