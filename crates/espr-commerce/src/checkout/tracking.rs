//! Tracking code generation and lookup input handling.

use rand::Rng;

use crate::ids::OrderId;

/// Prefix every tracking code starts with.
pub const DEFAULT_PREFIX: &str = "ESPR-";

/// Number of random characters after the prefix.
pub const DEFAULT_LENGTH: usize = 6;

/// Characters the random part is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a tracking code: `prefix` followed by `length` characters from
/// [`ALPHABET`].
///
/// Codes are not checked against existing orders.
pub fn generate_tracking_code(prefix: &str, length: usize) -> OrderId {
    let mut rng = rand::thread_rng();
    let mut code = String::with_capacity(prefix.len() + length);
    code.push_str(prefix);
    for _ in 0..length {
        let idx = rng.gen_range(0..ALPHABET.len());
        code.push(char::from(ALPHABET[idx]));
    }
    OrderId::new(code)
}

/// Clean up a code typed by a customer.
///
/// Surrounding whitespace and every character other than ASCII
/// alphanumerics, `_` and `-` are dropped.
pub fn sanitize_tracking_code(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Check that `code` starts with `prefix` and has at least `length`
/// characters after it.
pub fn is_well_formed(code: &str, prefix: &str, length: usize) -> bool {
    code.strip_prefix(prefix)
        .is_some_and(|rest| rest.chars().count() >= length)
}
