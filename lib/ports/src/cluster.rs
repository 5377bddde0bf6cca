use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Raw result of an external command, rendered verbatim by the front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PodSummary {
    pub running: usize,
    pub total: usize,
}

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("Script not found at: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ClusterResult<T> = Result<T, ClusterError>;

/// Process-control surface over the cluster hosting both cores.
#[async_trait]
pub trait ClusterPort: Send + Sync {
    /// Wide pod listing of the managed namespace.
    async fn list_pods(&self) -> ClusterResult<CommandOutput>;

    async fn pod_summary(&self) -> ClusterResult<PodSummary>;

    async fn migrate(&self) -> ClusterResult<CommandOutput>;

    async fn rollback(&self) -> ClusterResult<CommandOutput>;

    /// Deletes every resource in the managed namespace.
    async fn purge(&self) -> ClusterResult<CommandOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_zero_exit_code() {
        let mut output = CommandOutput {
            command: "kubectl get pods".into(),
            stdout: String::new(),
            stderr: "connection refused".into(),
            exit_code: Some(1),
        };
        assert!(!output.success());
        output.exit_code = None;
        assert!(!output.success());
        output.exit_code = Some(0);
        assert!(output.success());
    }
}
