//! One-shot credential file initializer.
//!
//! Hashes the demo accounts' plaintext passwords with bcrypt and writes
//! the JSON credential file the auth server reads. Safe to re-run; the
//! file is replaced wholesale.

use std::path::PathBuf;

use clap::Parser;

/// CLI arguments for the initializer.
#[derive(Parser, Debug)]
#[command(version, about = "Write the CorpSync credential file")]
struct Args {
    /// Where to write the credential file.
    #[arg(short, long, default_value = "db.json")]
    out: PathBuf,

    /// bcrypt cost factor (the original deployment used 10).
    #[arg(long, default_value_t = 10)]
    cost: u32,
}

fn main() {
    let args = Args::parse();
    match corpsync_server::init::write_credentials(&args.out, args.cost) {
        Ok(count) => {
            println!("Database initialized successfully: {count} accounts -> {}", args.out.display());
        }
        Err(e) => {
            eprintln!("Error initializing credential file: {e}");
            std::process::exit(1);
        }
    }
}
