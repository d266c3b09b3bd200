use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad optional access")]
pub struct BadOptionalAccess;
