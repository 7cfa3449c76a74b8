#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Features
//!
//! - `fp255` (default): compile in the 2^255 - 19 prime field and the curves
//!   defined over it (Ed25519).
//! - `extended` (default): represent points in extended `(X : Y : Z : T)`
//!   coordinates. Without it, points are projective `(X : Y : Z)`.
//! - `basepoint-table` (default): precompute a table of multiples of the
//!   generator when a curve is loaded.
//!
//! ## Usage
//!
//! ```
//! use edparams::{CurveId, EdContext};
//!
//! let mut ctx = EdContext::new();
//! assert_eq!(ctx.active_curve(), None);
//!
//! # #[cfg(feature = "fp255")]
//! # {
//! ctx.load_curve(CurveId::ED25519)?;
//! assert_eq!(ctx.active_curve(), Some(CurveId::ED25519));
//! assert_eq!(ctx.security_level(), 128);
//! # }
//! # Ok::<(), edparams::Error>(())
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod context;
mod curve;
mod error;
mod field;
mod point;

#[cfg(feature = "basepoint-table")]
mod table;

pub use crate::{
    context::{DomainParameters, EdContext},
    curve::{CURVES, CurveConstants, CurveId, default_curve},
    error::{Error, Result},
    field::{COMPILED_FIELD, FieldElement, FieldId, FieldParams},
    point::EdwardsPoint,
};
pub use bigint::{self, U256};
pub use const_oid::{self, ObjectIdentifier};
pub use subtle;

#[cfg(feature = "basepoint-table")]
pub use crate::table::{BasepointTable, TABLE_SIZE};
