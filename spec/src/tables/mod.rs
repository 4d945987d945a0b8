//! Static root tables.

pub mod identity;
pub mod reference;
pub mod symbols;
pub mod wheel;
