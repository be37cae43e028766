//! Streaming the bundle to the server
//!
//! Locally `tar -c -h` archives the bundle (following the input links) and
//! its stdout feeds the stdin of `ssh`. On the server the command extracts
//! the archive into a fresh temporary directory, runs `setup.sh` there and
//! removes the directory again.
//!
//! Neither exit status is acted upon. They are returned wrapped in
//! [`Unchecked`] so callers can report them without turning them into
//! errors.

use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::deploy::bundle::SETUP_SCRIPT;
use crate::error::{self, Result};
use crate::temp::BUNDLE_PREFIX;
use crate::ui::Reporter;

/// A result the deployer deliberately does not verify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unchecked<T>(T);

impl<T> Unchecked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Look at the value, e.g. to mention it in verbose output
    pub fn peek(&self) -> &T {
        &self.0
    }
}

/// What came back from one transfer
#[derive(Debug, Clone, Copy)]
pub struct TransferOutcome {
    /// Local `tar` status
    pub archive: Unchecked<ExitStatus>,
    /// `ssh` status, i.e. the remote command's status
    pub remote: Unchecked<ExitStatus>,
}

/// How to reach the server
#[derive(Debug, Clone)]
pub struct Transport<'a> {
    pub ssh: &'a str,
    pub ssh_options: &'a [String],
    pub server: &'a str,
    pub tar: &'a str,
}

/// Command run by the remote login shell
///
/// Kept as one string so every `$` in it is expanded on the server.
pub fn remote_command() -> String {
    format!(
        "dir=$(mktemp -d \"${{TMPDIR:-/tmp}}/{BUNDLE_PREFIX}XXXXXX\") || exit 1; \
         cd \"$dir\" && tar -x -f - && sh ./{SETUP_SCRIPT}; status=$?; \
         cd / && rm -rf \"$dir\"; exit $status"
    )
}

/// Archive `bundle_root` and pipe it through ssh to the server
///
/// Only failing to start `tar` or `ssh` is an error. Lines the remote side
/// prints are relayed through the reporter.
pub fn send(
    bundle_root: &Path,
    transport: &Transport<'_>,
    reporter: &mut dyn Reporter,
) -> Result<TransferOutcome> {
    reporter.detail(&format!(
        "{} -c -h -f - -C {} . | {} {} {}",
        transport.tar,
        bundle_root.display(),
        transport.ssh,
        transport.ssh_options.join(" "),
        transport.server
    ));

    let mut tar = Command::new(transport.tar)
        .args(["-c", "-h", "-f", "-", "-C"])
        .arg(bundle_root)
        .arg(".")
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| error::process::spawn_failed(transport.tar, e.to_string()))?;

    let Some(archive) = tar.stdout.take() else {
        reap(&mut tar);
        return Err(error::process::spawn_failed(
            transport.tar,
            "stdout was not captured",
        ));
    };

    let ssh = Command::new(transport.ssh)
        .args(transport.ssh_options)
        .arg(transport.server)
        .arg(remote_command())
        .stdin(Stdio::from(archive))
        .stdout(Stdio::piped())
        .spawn();
    let mut ssh = match ssh {
        Ok(child) => child,
        Err(e) => {
            reap(&mut tar);
            return Err(error::process::spawn_failed(transport.ssh, e.to_string()));
        }
    };

    reporter.begin_wait(&format!("Transferring bundle to {}", transport.server));
    if let Some(stdout) = ssh.stdout.take() {
        relay_lines(stdout, reporter);
    }
    let remote = ssh.wait();
    let archive = tar.wait();
    reporter.end_wait();

    Ok(TransferOutcome {
        archive: Unchecked::new(archive?),
        remote: Unchecked::new(remote?),
    })
}

/// Pass every line of `output` to the reporter until EOF
///
/// Lines are decoded lossily. The pipe stays open until the remote side is
/// done, otherwise its next write would kill ssh with SIGPIPE.
fn relay_lines(output: impl Read, reporter: &mut dyn Reporter) {
    let mut reader = BufReader::new(output);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                reporter.remote_output(line.trim_end_matches(['\n', '\r']));
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(_) => {
                // Unreadable output still has to be drained
                let _ = std::io::copy(&mut reader, &mut std::io::sink());
                break;
            }
        }
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
