//! Base point table tests.

#![cfg(all(feature = "basepoint-table", feature = "fp255"))]

use edparams::{CurveId, DomainParameters, EdContext, EdwardsPoint, TABLE_SIZE, U256};
use proptest::prelude::*;

fn ed25519() -> DomainParameters {
    let mut ctx = EdContext::new();
    ctx.load_curve(CurveId::ED25519).unwrap();
    ctx.params().unwrap().clone()
}

/// Left-to-right double-and-add without the table.
fn double_and_add(params: &DomainParameters, k: &U256) -> EdwardsPoint {
    let g = params.generator();
    let mut acc = g.add(&-*g, params.a(), params.d());

    for i in (0..TABLE_SIZE as u32).rev() {
        acc = acc.double(params.a());
        if k.bit_vartime(i) {
            acc = acc.add(g, params.a(), params.d());
        }
    }

    acc
}

#[test]
fn table_has_one_entry_per_bit() {
    let params = ed25519();
    let table = params.basepoint_table();
    assert_eq!(table.points().len(), TABLE_SIZE);
    assert_eq!(table.points()[0], *params.generator());
}

#[test]
fn generator_has_the_right_order() {
    let params = ed25519();
    assert!(bool::from(params.mul_base_vartime(params.order()).is_identity()));
}

#[test]
fn fixed_base_edge_cases() {
    let params = ed25519();
    assert!(bool::from(params.mul_base_vartime(&U256::ZERO).is_identity()));
    assert_eq!(params.mul_base_vartime(&U256::ONE), *params.generator());

    let order_minus_one = params.order().wrapping_sub(&U256::ONE);
    assert_eq!(
        params.mul_base_vartime(&order_minus_one),
        -*params.generator()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn fixed_base_matches_double_and_add(k in any::<u64>()) {
        let params = ed25519();
        let k = U256::from_u64(k);
        prop_assert_eq!(params.mul_base_vartime(&k), double_and_add(&params, &k));
    }

    #[test]
    fn fixed_base_is_additive(a in any::<u32>(), b in any::<u32>()) {
        let params = ed25519();
        let (a, b) = (U256::from_u32(a), U256::from_u32(b));
        let sum = params
            .mul_base_vartime(&a)
            .add(&params.mul_base_vartime(&b), params.a(), params.d());
        prop_assert_eq!(params.mul_base_vartime(&a.wrapping_add(&b)), sum);
    }

    #[test]
    fn multiples_stay_on_curve(k in any::<u64>()) {
        let params = ed25519();
        let p = params.mul_base_vartime(&U256::from_u64(k));
        prop_assert!(bool::from(p.is_on_curve(params.a(), params.d())));
    }
}
