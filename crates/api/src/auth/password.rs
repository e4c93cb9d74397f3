//! Server-side password hashing.
//!
//! Browsers never send the plaintext password. The sign-in and registration
//! forms submit `sha1(email + ":" + password)` as 40 hex characters, and the
//! server stores an Argon2id hash of `userId:digest`. Binding the user id into
//! the hashed input means two accounts with the same digest never share a
//! stored value, and the random salt is embedded in the PHC string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

fn hash_input(user_id: &str, digest: &str) -> String {
    format!("{user_id}:{digest}")
}

/// Hash a client digest for storage using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(user_id: &str, digest: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(hash_input(user_id, digest).as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a client digest against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the digest matches, `Ok(false)` if it does not.
pub fn verify_password(
    user_id: &str,
    digest: &str,
    hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(hash_input(user_id, digest).as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "3da541559918a808c2402bba5012f6c60b27661c";

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("user-a", DIGEST).expect("hashing should succeed");

        assert!(
            hash.starts_with("$argon2id$"),
            "expected argon2id PHC prefix"
        );

        let verified = verify_password("user-a", DIGEST, &hash).expect("verify should succeed");
        assert!(verified, "correct digest should verify as true");
    }

    #[test]
    fn test_wrong_digest_fails() {
        let hash = hash_password("user-a", DIGEST).expect("hashing should succeed");
        let other = "0000000000000000000000000000000000000000";
        let verified = verify_password("user-a", other, &hash).expect("verify should succeed");
        assert!(!verified, "wrong digest should verify as false");
    }

    #[test]
    fn test_hash_is_bound_to_user_id() {
        let hash = hash_password("user-a", DIGEST).expect("hashing should succeed");
        let verified = verify_password("user-b", DIGEST, &hash).expect("verify should succeed");
        assert!(!verified, "same digest under another id must not verify");
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("user-a", DIGEST, "not-a-phc-string").is_err());
    }
}
