use thiserror::Error;

// ---------------------------------------------------------------------------
// HeadError
// ---------------------------------------------------------------------------

/// Errors raised by the head accessor.
///
/// Both variants are programmer errors detected at component setup time and
/// are meant to fail loudly during development. There are no runtime error
/// paths beyond these: malformed field values are not validated here and
/// surface later in the tag renderer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeadError {
    #[error("use_head must be called during component setup")]
    OutsideSetup,

    #[error(
        "component has no head slot; declare an empty head slot \
         when defining the component (see ComponentScope::declare_head)"
    )]
    UndeclaredHeadSlot,
}

/// Convenience alias — the default error type is `HeadError`.
pub type Result<T, E = HeadError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
