/// Authentication primitives
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
///
/// Passwords are the only credential Cropcast manages; there is no session
/// or token layer. Handlers hash at registration and on profile updates that
/// supply a new password, and verify at login.

pub mod password;
