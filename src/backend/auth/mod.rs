//! Authentication Module
//!
//! Credential storage, password checking, token issuance and the HTTP
//! handlers that expose them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── users.rs         - Credential Store (User model, UserRepository)
//! ├── sessions.rs      - Session Issuer (bcrypt + HS256 JWT)
//! ├── registration.rs  - Account creation rules
//! ├── errors.rs        - AuthError
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → validated, hashed, stored → token returned
//! 2. **Login**: username + password → `SessionIssuer::authenticate` → token returned
//! 3. **Me**: bearer token → `auth_middleware` verifies → user info returned
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes only
//! - Tokens are HS256 JWTs with `sub`, `iat` and `exp`; expiry is enforced with no leeway
//! - Unknown user and wrong password both yield `AuthError::InvalidCredentials`

/// User data model and the credential store
pub mod users;

/// Password verification and JWT issuance
pub mod sessions;

/// Account registration
pub mod registration;

/// Authentication error type
pub mod errors;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use errors::AuthError;
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, IssuedToken, SessionIssuer};
pub use users::{CredentialStore, StoreError, User, UserRepository};
