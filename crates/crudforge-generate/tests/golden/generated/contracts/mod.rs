// @generated by crudforge. Do not edit by hand.
//! Generated contracts modules.

pub mod clase_recurrente;
pub mod lead;
pub mod tag;

pub use clase_recurrente::*;
pub use lead::*;
pub use tag::*;
