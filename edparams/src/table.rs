//! Precomputed multiples of the generator.

use crate::{field::FieldElement, point::EdwardsPoint};
use alloc::vec::Vec;
use bigint::U256;
use core::fmt;

/// Number of entries in a [`BasepointTable`]: one per bit of a [`U256`]
/// scalar.
pub const TABLE_SIZE: usize = U256::BITS as usize;

/// Binary fixed-base table `[G, 2G, 4G, ..., 2^(TABLE_SIZE - 1) G]`.
#[derive(Clone, Eq, PartialEq)]
pub struct BasepointTable {
    points: Vec<EdwardsPoint>,
    identity: EdwardsPoint,
    a: FieldElement,
    d: FieldElement,
}

impl BasepointTable {
    /// Precompute the table for `generator` on the curve with coefficients
    /// `a` and `d`.
    pub fn new(generator: &EdwardsPoint, a: &FieldElement, d: &FieldElement) -> Self {
        let identity = generator.add(&-*generator, a, d);
        let mut points = Vec::with_capacity(TABLE_SIZE);
        let mut p = *generator;

        for _ in 0..TABLE_SIZE {
            points.push(p);
            p = p.double(a);
        }

        Self {
            points,
            identity,
            a: *a,
            d: *d,
        }
    }

    /// Precomputed entries, `self.points()[i] == 2^i G`.
    pub fn points(&self) -> &[EdwardsPoint] {
        &self.points
    }

    /// Compute `[k] G` by adding the entries selected by the set bits of `k`.
    ///
    /// Runs in variable time with respect to `k`.
    pub fn mul_vartime(&self, k: &U256) -> EdwardsPoint {
        let mut acc = self.identity;

        for (i, point) in self.points.iter().enumerate() {
            if k.bit_vartime(i as u32) {
                acc = acc.add(point, &self.a, &self.d);
            }
        }

        acc
    }
}

impl fmt::Debug for BasepointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasepointTable")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "fp255"))]
mod tests {
    use super::{BasepointTable, TABLE_SIZE};
    use crate::{
        curve::CurveId,
        field::{FieldElement, FieldId},
        point::EdwardsPoint,
    };
    use bigint::U256;

    fn ed25519_table() -> (BasepointTable, EdwardsPoint) {
        let constants = CurveId::ED25519.constants().expect("Ed25519 is compiled in");
        let params = FieldId::P25519.params();
        let g = EdwardsPoint::from_affine(
            FieldElement::from_be_hex(constants.x, params),
            FieldElement::from_be_hex(constants.y, params),
            params,
        );
        let a = FieldElement::from_be_hex(constants.a, params);
        let d = FieldElement::from_be_hex(constants.d, params);
        (BasepointTable::new(&g, &a, &d), g)
    }

    #[test]
    fn entries_are_successive_doublings() {
        let (table, g) = ed25519_table();
        assert_eq!(table.points().len(), TABLE_SIZE);
        assert_eq!(table.points()[0], g);
        for pair in table.points().windows(2) {
            assert_eq!(pair[1], pair[0].double(&table.a));
        }
    }

    #[test]
    fn small_multiples() {
        let (table, g) = ed25519_table();
        assert!(bool::from(table.mul_vartime(&U256::ZERO).is_identity()));
        assert_eq!(table.mul_vartime(&U256::ONE), g);
        assert_eq!(
            table.mul_vartime(&U256::from_u8(3)),
            g.double(&table.a).add(&g, &table.a, &table.d)
        );
    }
}
