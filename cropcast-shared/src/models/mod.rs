/// Database models
///
/// # Models
///
/// - `user`: user accounts — creation, lookup, and the sparse profile
///   update used by the `/update-profile` endpoint

pub mod user;
