//! One-time code generation

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::otp_record::CODE_LENGTH;

/// Generate a 6-digit code, uniform over 100000..=999999
///
/// Drawn from the operating system CSPRNG so codes cannot be predicted from
/// earlier ones.
pub fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(100_000..=999_999);
    code.to_string()
}

/// Check that a candidate has the shape of a generated code
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
