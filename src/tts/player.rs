use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Local playback of a synthesized file
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, path: &Path) -> Result<()>;
}

/// Plays audio by launching an external program with the file as last argument
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `cmd /C start` on Windows, `mpg123` elsewhere
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::new("cmd", vec!["/C".to_string(), "start".to_string(), String::new()])
        } else {
            Self::new("mpg123", Vec::new())
        }
    }

    /// Builds a player from `[program, args...]`, falling back to the platform default
    pub fn from_command_line(command: Option<&[String]>) -> Self {
        match command {
            Some([program, args @ ..]) if !program.is_empty() => Self::new(program.clone(), args.to_vec()),
            _ => Self::platform_default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    async fn play(&self, path: &Path) -> Result<()> {
        debug!("Launching player: {} {:?} {}", self.program, self.args, path.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .await?;

        if !status.success() {
            anyhow::bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}
