//! ecrsync-ecr - AWS ECR registry lister.
//!
//! Talks to the ECR control plane over the AWS JSON 1.1 protocol and signs
//! every request with SigV4. Only the two read-only listing operations the
//! sync needs are implemented.

mod client;
mod credentials;
mod endpoints;
mod registry;
mod sigv4;

pub use client::EcrClient;
pub use credentials::AwsCredentials;
pub use registry::EcrRegistry;
