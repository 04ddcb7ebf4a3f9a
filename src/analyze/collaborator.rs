use crate::instructions::InstructionText;
use crate::types::campaign::CampaignInput;
use crate::types::goals::Objective;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Everything the collaborator gets for one batch; all campaigns travel together.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub requested_at: DateTime<Utc>,
    pub objective: Option<Objective>,
    pub campaigns: Vec<CampaignInput>,
    pub keywords: Vec<String>,
    pub instructions: InstructionText,
    pub prompt: String,
}

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("failed to read response file {path}: {source}")]
    ReadResponse {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed to exchange data with {program}: {reason}")]
    Pipe { program: String, reason: String },

    #[error("{program} exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The generative analysis step. Implementations return the raw JSON payload.
pub trait AnalysisCollaborator {
    fn name(&self) -> String;
    fn analyze(&self, request: &AnalysisRequest) -> Result<String, CollaboratorError>;
}

/// A payload captured earlier, e.g. saved from a model console.
#[derive(Debug, Clone)]
pub struct ResponseFile {
    path: PathBuf,
}

impl ResponseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AnalysisCollaborator for ResponseFile {
    fn name(&self) -> String {
        format!("response file {}", self.path.display())
    }

    fn analyze(&self, _request: &AnalysisRequest) -> Result<String, CollaboratorError> {
        std::fs::read_to_string(&self.path).map_err(|source| CollaboratorError::ReadResponse {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Runs a bridge program: request JSON on stdin, payload JSON on stdout.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// Splits on whitespace; the first word is the program.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

impl AnalysisCollaborator for ExternalCommand {
    fn name(&self) -> String {
        format!("command {}", self.program)
    }

    fn analyze(&self, request: &AnalysisRequest) -> Result<String, CollaboratorError> {
        let body = serde_json::to_vec(request)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CollaboratorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let pipe_error = |reason: String| CollaboratorError::Pipe {
            program: self.program.clone(),
            reason,
        };

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| pipe_error("stdin unavailable".to_string()))?;
        // Fed from a separate thread so a chatty child cannot block on a full stdout pipe.
        let writer = std::thread::spawn(move || stdin.write_all(&body));

        let output = child
            .wait_with_output()
            .map_err(|e| pipe_error(e.to_string()))?;
        match writer.join() {
            Ok(Ok(())) => {}
            // The child may legitimately stop reading once it has what it needs.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(pipe_error(e.to_string())),
            Err(_) => return Err(pipe_error("stdin writer panicked".to_string())),
        }

        if !output.status.success() {
            return Err(CollaboratorError::Exit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| pipe_error(e.to_string()))
    }
}
