//! The `sync` command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use ecrsync_core::{Blueprint, Synchronizer, Upserter};
use ecrsync_ecr::{EcrClient, EcrRegistry};
use ecrsync_port::{DEFAULT_API_URL, PortCatalog, PortClient};

use crate::config::SyncConfig;
use crate::output;

#[derive(Args)]
pub struct SyncArgs {
    /// Registry (AWS account) id; defaults to the caller's account
    #[arg(long, env = "AWS_REGISTRY_ID")]
    pub registry_id: Option<String>,

    /// AWS region of the registry
    #[arg(long, env = "AWS_DEFAULT_REGION")]
    pub region: String,

    /// Override the ECR API endpoint
    #[arg(long, env = "ECR_ENDPOINT_URL")]
    pub ecr_endpoint: Option<String>,

    /// AWS access key id
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub aws_access_key_id: String,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub aws_secret_access_key: String,

    /// AWS session token for temporary credentials
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// Port API base URL
    #[arg(long, env = "PORT_API_URL", default_value = DEFAULT_API_URL)]
    pub port_api_url: String,

    /// Port client id
    #[arg(long, env = "PORT_CLIENT_ID")]
    pub port_client_id: String,

    /// Port client secret
    #[arg(long, env = "PORT_CLIENT_SECRET", hide_env_values = true)]
    pub port_client_secret: String,

    /// Blueprint for repository entities
    #[arg(long, env = "ECR_REPOSITORY_BLUEPRINT", default_value = Blueprint::REPOSITORY)]
    pub repository_blueprint: String,

    /// Blueprint for image entities
    #[arg(long, env = "ECR_IMAGE_BLUEPRINT", default_value = Blueprint::IMAGE)]
    pub image_blueprint: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "ECRSYNC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for SyncArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncArgs")
            .field("registry_id", &self.registry_id)
            .field("region", &self.region)
            .field("ecr_endpoint", &self.ecr_endpoint)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("port_api_url", &self.port_api_url)
            .field("port_client_id", &self.port_client_id)
            .field("repository_blueprint", &self.repository_blueprint)
            .field("image_blueprint", &self.image_blueprint)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

pub async fn run(args: SyncArgs) -> Result<()> {
    let config = SyncConfig::from_args(args)?;

    let ecr = EcrClient::new(
        &config.region,
        config.ecr_endpoint.clone(),
        config.aws_credentials.clone(),
        config.timeout,
    )
    .context("Failed to create registry client")?;
    info!(endpoint = %ecr.endpoint(), region = %config.region, "Using registry endpoint");
    let registry = EcrRegistry::new(ecr, config.registry_id.clone());

    let port = PortClient::new(config.port_api.clone(), config.timeout)
        .context("Failed to create catalog client")?;
    let catalog = PortCatalog::login(port, &config.port_credentials)
        .await
        .context("Failed to authenticate with the catalog")?;

    let upserter = Upserter::new(catalog);
    Synchronizer::new(&registry, &upserter, config.blueprints.clone())
        .run()
        .await
        .context("Sync aborted")?;

    output::success("Sync complete");
    output::field(
        "Registry",
        config
            .registry_id
            .as_ref()
            .map(|id| id.as_str())
            .unwrap_or("default"),
    );
    output::field("Catalog", config.port_api.as_str());

    Ok(())
}
