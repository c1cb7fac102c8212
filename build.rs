use std::env;
use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    // Forward KEY=VALUE pairs from .env (if present) as compile-time env
    // vars, picked up in src/config.rs via option_env!.
    match fs::read_to_string(".env") {
        Ok(contents) => {
            for (key, value) in dotenv_pairs(&contents) {
                // Already-exported variables win over .env entries
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
        Err(_) => {
            println!("cargo:warning=No .env file found, using built-in defaults.");
        }
    }
}

fn dotenv_pairs(contents: &str) -> impl Iterator<Item = (&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}
