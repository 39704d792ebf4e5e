//! Hash-password command - prints an Argon2 PHC string

use clap::Args;

use crate::infrastructure::auth::{Argon2Hasher, PasswordHasher};

#[derive(Args, Clone)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,
}

/// Print the hash on stdout so it can be piped into an env file
pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = hash(&args.password)?;
    println!("{}", hash);
    Ok(())
}

fn hash(password: &str) -> anyhow::Result<String> {
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    Ok(Argon2Hasher::new().hash(password)?)
}
