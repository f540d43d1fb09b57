// @generated by crudforge. Do not edit by hand.
//! Generated repositories modules.

pub mod clase_recurrente;
pub mod tag;

pub use clase_recurrente::*;
pub use lead::*;
pub use tag::*;
