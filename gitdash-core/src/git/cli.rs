use super::runner::{CommandOutput, CommandRunner, Program};
use std::{
    io::{self, Read},
    process::{Child, Command, Stdio},
};

pub struct CliCommandRunner;

impl CommandRunner for CliCommandRunner {
    fn run(&self, program: Program, args: &[&str]) -> CommandOutput {
        log::debug!("running {program} {}", args.join(" "));
        match run_combined(program, args) {
            Ok(out) => {
                if !out.success {
                    log::info!("{program} {} exited unsuccessfully", args.join(" "));
                }
                out
            }
            Err(e) => {
                log::warn!("failed to start {program}: {e}");
                CommandOutput::new(format!("failed to run {program}: {e}"), false)
            }
        }
    }
}

/// Run a process with stdout and stderr sharing one pipe, so the text keeps the
/// order the tool printed it in.
fn run_combined(program: Program, args: &[&str]) -> io::Result<CommandOutput> {
    let (mut reader, writer) = io::pipe()?;
    // The builder holds copies of the write end; it must be gone before reading
    // or the read never sees EOF.
    let mut child = Command::new(program.as_str())
        .args(args)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .spawn()?;

    collect_output(&mut child, &mut reader)
}

/// Read everything the child prints, then reap it. The child is waited on
/// even when reading fails.
fn collect_output(child: &mut Child, reader: &mut impl Read) -> io::Result<CommandOutput> {
    let mut buf = Vec::new();
    let read = reader.read_to_end(&mut buf);
    let status = child.wait()?;
    read?;

    Ok(CommandOutput::new(
        String::from_utf8_lossy(&buf).into_owned(),
        status.success(),
    ))
}
