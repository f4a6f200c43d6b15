//! Domain primitives, ports and the registry service.
//!
//! Purpose: hold the user model, its validation rules and the
//! [`UserRegistry`] that owns the collection. Nothing here knows about HTTP
//! or the filesystem; adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - User, NewUser, UserId, Age: the stored record and its parts.
//! - UserRegistry: in-memory collection mirrored to a snapshot repository.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_collection;
pub mod user_registry;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Age, NewUser, User, UserId, UserIdError, is_blank_value};
pub use self::user_collection::UserCollection;
pub use self::user_registry::UserRegistry;
pub use self::validation::{Violation, validate_user_data};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use user_registry::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u64> {
///     Err(Error::not_found("user not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
