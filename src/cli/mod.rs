//! CLI module for the studio site API
//!
//! Provides subcommands:
//! - `serve`: run the HTTP server (default)
//! - `hash-password`: print an Argon2 hash for the admin password

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// Studio site API - portfolio projects and contact inquiries
#[derive(Parser)]
#[command(name = "studio-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve,

    /// Hash a password for ADMIN_PASSWORD_HASH
    HashPassword(hash_password::HashPasswordArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["studio-api"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_hash_password_subcommand() {
        let cli = Cli::try_parse_from(["studio-api", "hash-password", "s3cret"]).unwrap();

        match cli.command {
            Some(Command::HashPassword(args)) => assert_eq!(args.password, "s3cret"),
            _ => panic!("expected hash-password"),
        }
    }
}
