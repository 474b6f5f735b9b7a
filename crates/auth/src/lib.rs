//! Authentication for the Jokebox API
//!
//! Provides the access-token maker (HS256 JWT), the auth gate middleware
//! that protects routes, and the extractor handlers use to read the
//! verified identity.

mod claims;
mod error;
mod extractors;
mod gate;
mod jwt;
mod maker;

pub use claims::Payload;
pub use error::{AuthError, TokenError};
pub use extractors::AuthPayload;
pub use gate::{authorize, require_auth, AUTH_TYPE_BEARER};
pub use jwt::{JwtMaker, MIN_SECRET_KEY_SIZE};
pub use maker::{Clock, FixedClock, SharedTokenMaker, SystemClock, TokenMaker};
