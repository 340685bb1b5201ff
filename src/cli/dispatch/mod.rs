use crate::{
    account::HashCost,
    cli::{
        actions::{
            server::{self, Storage},
            Action,
        },
        commands::{
            ARG_ARGON2_ITERATIONS, ARG_ARGON2_MEMORY_KIB, ARG_ARGON2_PARALLELISM,
            ARG_CORS_ORIGIN, ARG_DSN, ARG_MAX_CONNECTIONS, ARG_PORT, ARG_SKIP_SCHEMA,
        },
    },
};
use anyhow::{Context, Result};

/// Map parsed arguments to the action to run.
///
/// # Errors
/// Returns an error if a required argument is missing or the DSN is unusable.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let dsn = matches
        .get_one::<String>(ARG_DSN)
        .context("missing required argument: --dsn")?;
    let max_connections = matches
        .get_one::<u32>(ARG_MAX_CONNECTIONS)
        .copied()
        .unwrap_or(5);

    let defaults = HashCost::default();
    let hash_cost = HashCost {
        memory_kib: matches
            .get_one::<u32>(ARG_ARGON2_MEMORY_KIB)
            .copied()
            .unwrap_or(defaults.memory_kib),
        iterations: matches
            .get_one::<u32>(ARG_ARGON2_ITERATIONS)
            .copied()
            .unwrap_or(defaults.iterations),
        parallelism: matches
            .get_one::<u32>(ARG_ARGON2_PARALLELISM)
            .copied()
            .unwrap_or(defaults.parallelism),
    };

    Ok(Action::Server(server::Args {
        port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080),
        storage: Storage::from_dsn(dsn, max_connections)?,
        apply_schema: !matches.get_flag(ARG_SKIP_SCHEMA),
        cors_origins: matches
            .get_many::<String>(ARG_CORS_ORIGIN)
            .map(|origins| origins.cloned().collect())
            .unwrap_or_default(),
        hash_cost,
    }))
}
