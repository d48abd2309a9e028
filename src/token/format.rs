use crate::utils::base64url;

/// Cheap structural check for JWT compact serialization
///
/// Splits on `.` into at most three parts and answers `true` only when there
/// are exactly three and every part decodes as Base64URL. JSON is never
/// parsed. An empty part decodes to zero bytes and therefore counts as valid,
/// so `".."` is compatible even though it can never become a [`Token`].
///
/// [`Token`]: crate::Token
pub fn is_compatible_format(candidate: &str) -> bool {
    let parts: Vec<&str> = candidate.splitn(3, '.').collect();
    parts.len() == 3 && parts.iter().all(|part| base64url::is_valid(part))
}
