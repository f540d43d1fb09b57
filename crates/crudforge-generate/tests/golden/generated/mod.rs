// @generated by crudforge. Do not edit by hand.
//! Generated data-access layer.

pub mod contracts;
pub mod repositories;
pub mod handlers;
