//! Core library components.
//!
//! This module contains the resolution engine: key lookup, value
//! encryption, typed field binding, and the layered resolver.

pub mod cipher;
pub mod constants;
pub mod env;
pub mod key;
pub mod record;
pub mod resolver;
