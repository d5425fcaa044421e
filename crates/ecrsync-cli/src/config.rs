//! Validated settings for a sync run.

use std::time::Duration;

use anyhow::{Context, Result, bail};

use ecrsync_core::{Blueprint, Blueprints, RegistryId, ServiceUrl};
use ecrsync_ecr::AwsCredentials;
use ecrsync_port::PortCredentials;

use crate::commands::sync::SyncArgs;

/// Everything a sync run needs, parsed into typed values.
pub struct SyncConfig {
    pub registry_id: Option<RegistryId>,
    pub region: String,
    pub ecr_endpoint: Option<ServiceUrl>,
    pub aws_credentials: AwsCredentials,
    pub port_api: ServiceUrl,
    pub port_credentials: PortCredentials,
    pub blueprints: Blueprints,
    pub timeout: Option<Duration>,
}

impl SyncConfig {
    pub fn from_args(args: SyncArgs) -> Result<Self> {
        let registry_id = non_empty(args.registry_id)
            .map(RegistryId::new)
            .transpose()
            .context("Invalid registry id")?;

        let ecr_endpoint = non_empty(args.ecr_endpoint)
            .map(ServiceUrl::new)
            .transpose()
            .context("Invalid ECR endpoint")?;

        let port_api = ServiceUrl::new(&args.port_api_url).context("Invalid Port API URL")?;

        let blueprints = Blueprints {
            repository: Blueprint::new(args.repository_blueprint)
                .context("Invalid repository blueprint")?,
            image: Blueprint::new(args.image_blueprint).context("Invalid image blueprint")?,
        };

        let timeout = match args.timeout_secs {
            Some(0) => bail!("Timeout must be at least one second"),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            registry_id,
            region: args.region,
            ecr_endpoint,
            aws_credentials: AwsCredentials::new(
                args.aws_access_key_id,
                args.aws_secret_access_key,
                non_empty(args.aws_session_token),
            ),
            port_api,
            port_credentials: PortCredentials::new(args.port_client_id, args.port_client_secret),
            blueprints,
            timeout,
        })
    }
}

// An exported-but-empty variable counts as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    const REQUIRED: &[&str] = &[
        "ecrsync",
        "sync",
        "--region",
        "eu-west-1",
        "--aws-access-key-id",
        "AKIDEXAMPLE",
        "--aws-secret-access-key",
        "secret",
        "--port-client-id",
        "client-id",
        "--port-client-secret",
        "client-secret",
    ];

    fn parse(extra: &[&str]) -> Result<SyncConfig> {
        let argv: Vec<&str> = REQUIRED.iter().chain(extra).copied().collect();
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Sync(args) => SyncConfig::from_args(*args),
        }
    }

    #[test]
    fn explicit_flags_are_validated() {
        let config = parse(&[
            "--registry-id",
            "123456789012",
            "--ecr-endpoint",
            "http://localhost:4566",
            "--port-api-url",
            "https://api.us.getport.io/v1",
            "--repository-blueprint",
            "containerRepository",
            "--image-blueprint",
            "containerImage",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(config.registry_id.unwrap().as_str(), "123456789012");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(
            config.ecr_endpoint.unwrap().as_str(),
            "http://localhost:4566/"
        );
        assert_eq!(config.port_api.as_str(), "https://api.us.getport.io/v1");
        assert_eq!(config.blueprints.repository.as_str(), "containerRepository");
        assert_eq!(config.blueprints.image.as_str(), "containerImage");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.aws_credentials.access_key_id(), "AKIDEXAMPLE");
        assert_eq!(config.port_credentials.client_id(), "client-id");
    }

    #[test]
    fn empty_registry_id_means_caller_account() {
        let config = parse(&["--registry-id", ""]).unwrap();
        assert!(config.registry_id.is_none());
    }

    #[test]
    fn malformed_registry_id_is_rejected() {
        let err = parse(&["--registry-id", "not-an-account"]).err().unwrap();
        assert!(err.to_string().contains("Invalid registry id"));
    }

    #[test]
    fn plain_http_catalog_is_rejected() {
        let err = parse(&["--port-api-url", "http://api.getport.io/v1"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid Port API URL"));
    }

    #[test]
    fn blueprint_with_slash_is_rejected() {
        let err = parse(&["--image-blueprint", "ecr/image"]).err().unwrap();
        assert!(err.to_string().contains("Invalid image blueprint"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(parse(&["--timeout-secs", "0"]).is_err());
    }
}
