use std::path::Path;
use std::process::{Command, Output};

use wiremock::MockServer;

/// Base URL of a mock server, without a trailing slash.
pub fn base_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Environment for a run against mock ECR and Port servers.
pub fn sync_env(ecr: &MockServer, port: &MockServer) -> Vec<(&'static str, String)> {
    vec![
        ("AWS_REGISTRY_ID", "123456789012".to_string()),
        ("AWS_DEFAULT_REGION", "us-east-1".to_string()),
        ("ECR_ENDPOINT_URL", base_url(ecr)),
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE".to_string()),
        (
            "AWS_SECRET_ACCESS_KEY",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        ),
        ("PORT_API_URL", format!("{}/v1", base_url(port))),
        ("PORT_CLIENT_ID", "client-id".to_string()),
        ("PORT_CLIENT_SECRET", "client-secret".to_string()),
    ]
}

/// Run the CLI binary in `dir` with only the given environment.
///
/// The working directory keeps a stray `.env` out of the run.
pub fn run_cli(args: &[&str], env: &[(&str, String)], dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ecrsync"));
    cmd.args(args);
    cmd.env_clear();
    cmd.current_dir(dir);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so the mock servers keep serving.
pub async fn run_cli_async(
    args: &'static [&'static str],
    env: Vec<(&'static str, String)>,
    dir: &Path,
) -> Output {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || run_cli(args, &env, &dir))
        .await
        .expect("CLI task panicked")
}
