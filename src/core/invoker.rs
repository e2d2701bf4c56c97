//! Run the built mysqldump command as a child process.
//!
//! The password is written to the child's stdin in addition to
//! `--password=`, for builds that prompt for it. Each call owns its child
//! process; there is no retry and no timeout.

use crate::core::args::{build_command, Invocation};
use crate::error::DumpError;
use crate::models::dump_request::DumpRequest;
use std::io::{self, Write};
use std::process::{Output, Stdio};
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Run `request`, sending dry-run and log output to this process's stdout
/// and stderr.
pub async fn dump(request: &DumpRequest) -> Result<(), DumpError> {
    let mut out = io::stdout();
    let mut err = io::stderr();
    dump_with_output(request, &mut out, &mut err).await
}

/// Run `request`, sending dry-run and log output to the given sinks.
///
/// With `run_dry` the redacted command line is written to `out` and nothing
/// is spawned. With `log`, captured stdout goes to `out` on success and
/// captured stderr goes to `err` before a failure is returned.
pub async fn dump_with_output<O, E>(
    request: &DumpRequest,
    out: &mut O,
    err: &mut E,
) -> Result<(), DumpError>
where
    O: Write,
    E: Write,
{
    let command = build_command(request);

    if request.run_dry {
        writeln!(out, "{}", command.render_redacted())?;
        out.flush()?;
        return Ok(());
    }

    let started = Instant::now();
    let step = command.dump();
    let output = execute(step, Some(request.password.as_str()))
        .await
        .map_err(|source| spawn_error(step, source))?;
    check(step, output, request.log, out, err)?;

    if let Some(gzip) = command.compress_step() {
        let compressed = match execute(gzip, None).await {
            Ok(output) => check(gzip, output, request.log, out, err),
            Err(source) => Err(spawn_error(gzip, source)),
        };
        compressed.map_err(|source| DumpError::Compress {
            path: request.result_file.clone(),
            source: Box::new(source),
        })?;
    }

    info!(
        database = %request.database,
        output = %request.output_path().display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dump completed"
    );
    Ok(())
}

async fn execute(step: &Invocation, input: Option<&str>) -> io::Result<Output> {
    debug!(
        program = %step.program.to_string_lossy(),
        args = step.args.len(),
        "spawning"
    );

    let mut child = Command::new(&step.program)
        .args(&step.args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let (Some(input), Some(mut stdin)) = (input, child.stdin.take()) {
        // The child may exit without ever reading its input.
        if let Err(e) = stdin.write_all(input.as_bytes()).await {
            debug!(error = %e, "stdin closed early");
        }
        drop(stdin);
    }

    child.wait_with_output().await
}

fn spawn_error(step: &Invocation, source: io::Error) -> DumpError {
    warn!(
        program = %step.program.to_string_lossy(),
        error = %source,
        "command could not be started"
    );
    DumpError::Spawn {
        program: step.program_name(),
        source,
    }
}

fn check<O, E>(
    step: &Invocation,
    output: Output,
    log: bool,
    out: &mut O,
    err: &mut E,
) -> Result<(), DumpError>
where
    O: Write,
    E: Write,
{
    if output.status.success() {
        if log && !output.stdout.is_empty() {
            out.write_all(&output.stdout)?;
            out.flush()?;
        }
        return Ok(());
    }

    warn!(program = %step.program.to_string_lossy(), status = %output.status, "command failed");
    let logged = log && !output.stderr.is_empty();
    if logged {
        err.write_all(&output.stderr)?;
        err.flush()?;
    }
    Err(DumpError::Exit {
        program: step.program_name(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        logged,
    })
}
