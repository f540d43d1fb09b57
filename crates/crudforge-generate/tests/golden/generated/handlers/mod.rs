// @generated by crudforge. Do not edit by hand.
//! Generated handlers modules.

pub mod lead;
pub mod tag;

pub use lead::*;
pub use tag::*;
