use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::core::params::AutomatorParams;
use crate::error::{Error, Result};
use crate::types::{ConversionResult, ConversionTask, ProcessOutput};

/// Handle on the external converter. The artifact is checked once, here;
/// every later invocation trusts it.
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: PathBuf,
    leading_args: Vec<OsString>,
    artifact: PathBuf,
}

impl ExternalConverter {
    pub fn new(params: &AutomatorParams) -> Result<Self> {
        if !params.artifact.exists() {
            return Err(Error::ArtifactNotFound {
                path: params.artifact.clone(),
            });
        }

        let is_jar = params
            .artifact
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"));

        let (program, leading_args) = if is_jar {
            (
                params.java.clone(),
                vec![OsString::from("-jar"), params.artifact.clone().into_os_string()],
            )
        } else if let Some(launcher) = &params.launcher {
            (launcher.clone(), vec![params.artifact.clone().into_os_string()])
        } else {
            (params.artifact.clone(), Vec::new())
        };

        Ok(Self {
            program,
            leading_args,
            artifact: params.artifact.clone(),
        })
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument vector (after the program) for one conversion.
    pub fn args_for(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args = self.leading_args.clone();
        args.push(input.as_os_str().to_os_string());
        args.push(output.as_os_str().to_os_string());
        args
    }

    /// Run the converter for `task` and wait for it. Never returns an error:
    /// anything that goes wrong is a failed `ConversionResult`.
    pub fn invoke(&self, task: &ConversionTask) -> ConversionResult {
        let args = self.args_for(task.input(), task.output());
        debug!("Running {:?} {:?}", self.program, args);

        match Command::new(&self.program).args(&args).output() {
            Ok(output) => classify(output),
            Err(e) => ConversionResult::SpawnFailed {
                reason: format!("failed to run {}: {}", self.program.display(), e),
            },
        }
    }
}

fn classify(output: Output) -> ConversionResult {
    let captured = ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if output.status.success() {
        ConversionResult::Converted(captured)
    } else {
        ConversionResult::NonZeroExit(captured)
    }
}
