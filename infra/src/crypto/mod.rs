//! Crypto module - password hashing

mod bcrypt_hasher;

pub use bcrypt_hasher::BcryptHasher;
