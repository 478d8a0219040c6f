//! Change a control's state by name from the command line.
//!
//! Usage:
//!   cargo run --example change_by_name -- <host> <user> <password> <name> <state>

use loxs_sdk::{ChangeRequest, LoxoneConfig, LoxoneSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (host, user, password, name, state) = match (
        args.next(),
        args.next(),
        args.next(),
        args.next(),
        args.next(),
    ) {
        (Some(h), Some(u), Some(p), Some(n), Some(s)) => (h, u, p, n, s),
        _ => {
            eprintln!("usage: change_by_name <host> <user> <password> <name> <state>");
            std::process::exit(2);
        }
    };

    let mut system = LoxoneSystem::new(LoxoneConfig {
        host,
        user,
        password,
        structure: None,
    })?;

    let outcome = system.handle(ChangeRequest {
        name: Some(name),
        new_state: Some(state),
        ..ChangeRequest::default()
    });

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
