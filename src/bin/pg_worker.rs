//! Runs embedded `PostgreSQL` lifecycle steps for a privileged test runner.
//!
//! `PostgreSQL` refuses to initialise or start a cluster as root. When the
//! test suite runs as root, `pg-embed-setup-unpriv` delegates each lifecycle
//! step to this binary, which reads the JSON worker payload, drops to the
//! `nobody` account and then performs the step.
//!
//! ```text
//! pg_worker <setup|start|stop> <config-path>
//! ```

#[cfg(unix)]
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use clap::{Parser, ValueEnum};
#[cfg(unix)]
use nix::unistd::{Uid, User, initgroups, setgid, setuid};
#[cfg(unix)]
use pg_embedded_setup_unpriv::ambient_dir_and_path;
#[cfg(unix)]
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
#[cfg(unix)]
use postgresql_embedded::{PostgreSQL, Status};
#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::fmt::Display;
#[cfg(unix)]
use thiserror::Error;
#[cfg(unix)]
use tokio::runtime::Builder;
#[cfg(unix)]
use tracing::info;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
const UNPRIVILEGED_USER: &str = "nobody";

#[cfg(unix)]
#[derive(Debug, Parser)]
#[command(name = "pg_worker", about = "Embedded PostgreSQL lifecycle worker")]
struct Cli {
    /// Lifecycle step to perform.
    #[arg(value_enum)]
    operation: Operation,

    /// Path of the JSON worker payload.
    config: Utf8PathBuf,
}

#[cfg(unix)]
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Setup,
    Start,
    Stop,
}

#[cfg(unix)]
#[derive(Debug, Error)]
enum WorkerError {
    #[error("failed to read worker payload: {0}")]
    PayloadRead(#[source] BoxError),
    #[error("failed to parse worker payload: {0}")]
    PayloadParse(#[source] serde_json::Error),
    #[error("invalid worker settings: {0}")]
    Settings(String),
    #[error("failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to drop privileges: {0}")]
    PrivilegeDrop(String),
    #[error("postgres {operation:?} failed: {message}")]
    Postgres {
        operation: Operation,
        message: String,
    },
}

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    todo_backend::telemetry::init_tracing(false)?;

    let payload = load_payload(&cli.config)?;
    drop_privileges(UNPRIVILEGED_USER)?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| WorkerError::Settings(err.to_string()))?;
    apply_environment(&payload.environment);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WorkerError::Runtime)?;
    runtime.block_on(run(cli.operation, PostgreSQL::new(settings)))?;
    info!(operation = ?cli.operation, "worker step finished");
    Ok(())
}

#[cfg(unix)]
async fn run(operation: Operation, mut postgres: PostgreSQL) -> Result<(), WorkerError> {
    match operation {
        Operation::Setup => postgres
            .setup()
            .await
            .map_err(|err| failure(operation, &err)),
        Operation::Start => {
            if !matches!(postgres.status(), Status::Started) {
                postgres
                    .start()
                    .await
                    .map_err(|err| failure(operation, &err))?;
            }
            // Dropping the handle would stop the server this step just started.
            std::mem::forget(postgres);
            Ok(())
        }
        Operation::Stop => postgres
            .stop()
            .await
            .map_err(|err| failure(operation, &err)),
    }
}

#[cfg(unix)]
fn failure(operation: Operation, err: &impl Display) -> WorkerError {
    WorkerError::Postgres {
        operation,
        message: err.to_string(),
    }
}

#[cfg(unix)]
fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
    let (dir, relative) =
        ambient_dir_and_path(path).map_err(|err| WorkerError::PayloadRead(err.into()))?;
    let bytes = dir
        .read(relative.as_std_path())
        .map_err(|err| WorkerError::PayloadRead(Box::new(err)))?;
    serde_json::from_slice(&bytes).map_err(WorkerError::PayloadParse)
}

#[cfg(unix)]
fn drop_privileges(username: &str) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() {
        return Ok(());
    }

    let user = User::from_name(username)
        .map_err(privilege_error)?
        .ok_or_else(|| WorkerError::PrivilegeDrop(format!("user {username} not found")))?;
    let name = CString::new(user.name.as_str()).map_err(privilege_error)?;
    initgroups(&name, user.gid).map_err(privilege_error)?;
    setgid(user.gid).map_err(privilege_error)?;
    setuid(user.uid).map_err(privilege_error)?;

    // SAFETY: no other threads exist until the runtime is built.
    unsafe {
        std::env::set_var("HOME", &user.dir);
        std::env::set_var("USER", &user.name);
        std::env::set_var("LOGNAME", &user.name);
    }
    info!(user = username, "dropped root privileges");
    Ok(())
}

#[cfg(unix)]
fn privilege_error(err: impl Display) -> WorkerError {
    WorkerError::PrivilegeDrop(err.to_string())
}

#[cfg(unix)]
fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: no other threads exist until the runtime is built.
        unsafe {
            match value {
                Some(secret) => std::env::set_var(key, secret.expose()),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is only supported on Unix platforms".into())
}
