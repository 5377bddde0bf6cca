use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use cutover_domain::ClusterConfig;
use cutover_ports::{ClusterError, ClusterPort, ClusterResult, CommandOutput, PodSummary};

use crate::pods::parse_pod_summary;

/// Drives kubectl and the migration scripts for one namespace.
#[derive(Debug, Clone)]
pub struct ClusterController {
    config: ClusterConfig,
}

impl ClusterController {
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn script_path(&self, script: &str) -> PathBuf {
        self.config.scripts_dir.join(script)
    }

    async fn kubectl(&self, args: &[&str]) -> ClusterResult<CommandOutput> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        run_capture(&self.config.kubectl, &args).await
    }

    async fn run_script(&self, script: &str) -> ClusterResult<CommandOutput> {
        let path = self.script_path(script);
        if !path.exists() {
            return Err(ClusterError::ScriptNotFound(path));
        }
        let script_arg = path.display().to_string();
        info!(script = %script_arg, "running cluster script");
        match self.config.script_runner.split_first() {
            Some((program, leading)) => {
                let mut args = leading.to_vec();
                args.push(script_arg);
                run_capture(program, &args).await
            }
            None => run_capture(&script_arg, &[]).await,
        }
    }
}

#[async_trait]
impl ClusterPort for ClusterController {
    async fn list_pods(&self) -> ClusterResult<CommandOutput> {
        self.kubectl(&["get", "pods", "-n", self.namespace(), "-o", "wide"])
            .await
    }

    async fn pod_summary(&self) -> ClusterResult<PodSummary> {
        let output = self
            .kubectl(&["get", "pods", "-n", self.namespace(), "--no-headers"])
            .await?;
        if !output.success() {
            return Ok(PodSummary::default());
        }
        Ok(parse_pod_summary(&output.stdout))
    }

    async fn migrate(&self) -> ClusterResult<CommandOutput> {
        self.run_script(&self.config.migrate_script).await
    }

    async fn rollback(&self) -> ClusterResult<CommandOutput> {
        self.run_script(&self.config.rollback_script).await
    }

    async fn purge(&self) -> ClusterResult<CommandOutput> {
        info!(namespace = self.namespace(), "purging all resources");
        self.kubectl(&["delete", "all", "--all", "-n", self.namespace()])
            .await
    }
}

/// Run to completion and capture both streams. A non-zero exit is not an error.
async fn run_capture(program: &str, args: &[String]) -> ClusterResult<CommandOutput> {
    let command = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| ClusterError::Spawn {
            command: command.clone(),
            source,
        })?;
    tracing::debug!(%command, status = ?output.status.code(), "command finished");
    Ok(CommandOutput {
        command,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(config: ClusterConfig) -> ClusterController {
        ClusterController::new(config)
    }

    #[tokio::test]
    async fn missing_script_is_reported_before_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClusterConfig {
            scripts_dir: dir.path().to_path_buf(),
            // Would fail to spawn if it were ever reached.
            script_runner: vec!["definitely-not-a-real-runner".to_string()],
            ..ClusterConfig::default()
        };
        let err = controller(config).migrate().await.unwrap_err();
        match err {
            ClusterError::ScriptNotFound(path) => assert!(path.ends_with("migrate.ps1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let config = ClusterConfig {
            kubectl: "definitely-not-kubectl".to_string(),
            ..ClusterConfig::default()
        };
        let err = controller(config).list_pods().await.unwrap_err();
        assert!(matches!(err, ClusterError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-kubectl get pods"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn kubectl_arguments_follow_the_namespace() {
        let config = ClusterConfig {
            kubectl: "echo".to_string(),
            namespace: "core-lab".to_string(),
            ..ClusterConfig::default()
        };
        let controller = controller(config);
        let listing = controller.list_pods().await.unwrap();
        assert!(listing.success());
        assert_eq!(listing.stdout.trim(), "get pods -n core-lab -o wide");
        let purge = controller.purge().await.unwrap();
        assert_eq!(purge.stdout.trim(), "delete all --all -n core-lab");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn script_runner_receives_script_path_last() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rollback_4g.ps1"), "").unwrap();
        let config = ClusterConfig {
            scripts_dir: dir.path().to_path_buf(),
            script_runner: vec!["echo".to_string(), "-File".to_string()],
            ..ClusterConfig::default()
        };
        let output = controller(config).rollback().await.unwrap();
        assert!(output.stdout.starts_with("-File "));
        assert!(output.stdout.trim_end().ends_with("rollback_4g.ps1"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_returned_verbatim() {
        let config = ClusterConfig {
            kubectl: "false".to_string(),
            ..ClusterConfig::default()
        };
        let controller = controller(config);
        let output = controller.purge().await.unwrap();
        assert!(!output.success());
        assert_eq!(output.exit_code, Some(1));
        assert_eq!(controller.pod_summary().await.unwrap(), PodSummary::default());
    }
}
