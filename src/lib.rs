pub mod comp_option;
pub mod error;
pub mod marker;
pub mod optional;
mod serde_impls;

#[cfg(test)]
mod probe;

pub use error::BadOptionalAccess;
pub use marker::{IN_PLACE, InPlace, NO_VALUE, NoValue};
pub use optional::{Optional, make_optional, make_optional_from_iter, make_optional_with, swap};
