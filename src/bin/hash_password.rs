//! Generate the bcrypt hash for the ADMIN_PASSWORD_HASH environment variable.
//!
//! Usage: `cargo run --bin hash_password -- <password>`

use bcrypt::{DEFAULT_COST, hash};

fn main() {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            eprintln!("usage: hash_password <password>");
            std::process::exit(1);
        }
    };

    match hash(password, DEFAULT_COST) {
        Ok(hashed) => println!("{}", hashed),
        Err(e) => {
            eprintln!("failed to hash password: {}", e);
            std::process::exit(1);
        }
    }
}
