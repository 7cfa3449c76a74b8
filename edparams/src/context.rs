//! Loading curve parameters into a context and querying the active curve.

use crate::{
    curve::{CurveConstants, CurveId, default_curve},
    error::{Error, Result},
    field::{COMPILED_FIELD, FieldElement, FieldId},
    point::EdwardsPoint,
};
use bigint::U256;
use core::fmt;

#[cfg(feature = "basepoint-table")]
use crate::table::BasepointTable;

/// Domain parameters of the active curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainParameters {
    curve: CurveId,
    field: FieldId,
    a: FieldElement,
    d: FieldElement,
    generator: EdwardsPoint,
    order: U256,
    cofactor: U256,
    #[cfg(feature = "basepoint-table")]
    table: BasepointTable,
}

impl DomainParameters {
    /// Identifier of the curve these parameters belong to.
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Field the curve is defined over.
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// Curve equation coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Curve equation coefficient `d`.
    pub fn d(&self) -> &FieldElement {
        &self.d
    }

    /// Generator of the prime order subgroup.
    pub fn generator(&self) -> &EdwardsPoint {
        &self.generator
    }

    /// Order of the subgroup generated by [`Self::generator`].
    pub fn order(&self) -> &U256 {
        &self.order
    }

    /// Cofactor.
    pub fn cofactor(&self) -> &U256 {
        &self.cofactor
    }

    /// Precomputed multiples of the generator.
    #[cfg(feature = "basepoint-table")]
    pub fn basepoint_table(&self) -> &BasepointTable {
        &self.table
    }

    /// Compute `[k] G` using the precomputed table.
    #[cfg(feature = "basepoint-table")]
    pub fn mul_base_vartime(&self, k: &U256) -> EdwardsPoint {
        self.table.mul_vartime(k)
    }
}

/// Values parsed during a single load. Dropped when the load returns.
struct WorkingSet {
    a: FieldElement,
    d: FieldElement,
    generator: EdwardsPoint,
    order: U256,
    cofactor: U256,
}

impl WorkingSet {
    /// Parse a row of the curve table.
    ///
    /// # Panics
    /// - if any constant is not a hexadecimal string of the field width.
    fn parse(curve: &CurveConstants) -> Self {
        let params = curve.field.params();

        let a = FieldElement::from_be_hex(curve.a, params);
        let d = FieldElement::from_be_hex(curve.d, params);
        let x = FieldElement::from_be_hex(curve.x, params);
        let y = FieldElement::from_be_hex(curve.y, params);

        Self {
            a,
            d,
            generator: EdwardsPoint::from_affine(x, y, params),
            order: U256::from_be_hex(curve.order),
            cofactor: U256::from_be_hex(curve.cofactor),
        }
    }
}

/// Elliptic curve context holding at most one active set of domain
/// parameters.
#[derive(Clone, Debug, Default)]
pub struct EdContext {
    params: Option<DomainParameters>,
}

impl EdContext {
    /// Create a context with no active curve.
    pub const fn new() -> Self {
        Self { params: None }
    }

    /// Load the domain parameters of `id`, replacing the active curve.
    ///
    /// On error the context is left exactly as it was.
    ///
    /// # Panics
    /// - if the compiled-in constants for `id` are malformed.
    pub fn load_curve(&mut self, id: CurveId) -> Result<()> {
        let curve = id.constants().ok_or(Error::Configuration)?;
        let ws = WorkingSet::parse(curve);

        debug_assert!(bool::from(ws.generator.is_on_curve(&ws.a, &ws.d)));

        #[cfg(feature = "basepoint-table")]
        let table = BasepointTable::new(&ws.generator, &ws.a, &ws.d);

        self.params = Some(DomainParameters {
            curve: curve.id,
            field: curve.field,
            a: ws.a,
            d: ws.d,
            generator: ws.generator,
            order: ws.order,
            cofactor: ws.cofactor,
            #[cfg(feature = "basepoint-table")]
            table,
        });

        Ok(())
    }

    /// Load the default curve for the field compiled into this build.
    pub fn load_any_curve(&mut self) -> Result<()> {
        let id = COMPILED_FIELD
            .and_then(default_curve)
            .ok_or(Error::Unsupported)?;

        self.load_curve(id).map_err(|_| Error::Unsupported)
    }

    /// Identifier of the active curve, if any.
    pub fn active_curve(&self) -> Option<CurveId> {
        self.params.as_ref().map(DomainParameters::curve)
    }

    /// Approximate security level of the active curve in bits, or 0 if no
    /// curve is loaded.
    pub fn security_level(&self) -> u32 {
        self.active_curve().map_or(0, |id| id.security_level())
    }

    /// Write a banner naming the active curve. Writes nothing if no curve is
    /// loaded.
    pub fn describe_curve<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self.active_curve().and_then(|id| id.name()) {
            Some(name) => writeln!(out, "Curve {name}:"),
            None => Ok(()),
        }
    }

    /// Domain parameters of the active curve, if any.
    pub fn params(&self) -> Option<&DomainParameters> {
        self.params.as_ref()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::EdContext;
    use crate::{Error, curve::CurveId};
    use const_oid::ObjectIdentifier;
    use std::string::String;

    #[test]
    fn new_context_is_unset() {
        let ctx = EdContext::new();
        assert_eq!(ctx.active_curve(), None);
        assert_eq!(ctx.security_level(), 0);
        assert!(ctx.params().is_none());

        let mut out = String::new();
        ctx.describe_curve(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_curve_on_empty_context() {
        let mut ctx = EdContext::new();
        let p256 = CurveId::new(ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7"));
        assert_eq!(ctx.load_curve(p256), Err(Error::Configuration));
        assert_eq!(ctx.active_curve(), None);
    }

    #[cfg(feature = "fp255")]
    #[test]
    fn describe_ed25519() {
        let mut ctx = EdContext::new();
        ctx.load_curve(CurveId::ED25519).unwrap();

        let mut out = String::new();
        ctx.describe_curve(&mut out).unwrap();
        assert_eq!(out, "Curve ED25519:\n");
    }
}
