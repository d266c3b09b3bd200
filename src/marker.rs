/// Absence marker
///
/// Requests an empty [`Optional`](crate::Optional) and compares as the smallest value against any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoValue {
    _private: (),
}

pub const NO_VALUE: NoValue = NoValue { _private: () };

/// Tag selecting the in-place constructors of [`Optional`](crate::Optional)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InPlace {
    _private: (),
}

pub const IN_PLACE: InPlace = InPlace { _private: () };
