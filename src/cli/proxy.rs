//
//  apigee-client
//  cli/proxy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! API proxy commands
//!
//! Covers the proxy lifecycle: creation, revisions, deployments, policies,
//! debug sessions, metrics and organisation-scoped API products. Each
//! operation is a subcommand of its own; `proxy action <NAME>` runs one by
//! its snake_case operation name with a shared set of optional flags.
//!
//! ## Examples
//!
//! ```bash
//! # Create a proxy
//! apigee-client proxy create-api-proxy --base-url ... --token ... --org acme --payload '{"name": "orders"}'
//!
//! # Deploy revision 3 to test
//! apigee-client proxy deploy-proxy-revision --base-url ... --token ... \
//!     --org acme --env test --api orders --revision 3
//!
//! # List revisions by operation name
//! apigee-client proxy action list_proxy_revisions --base-url ... --token ... --org acme --api orders
//! ```

use std::fmt;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde_json::Value;

use crate::api::management::Proxies;

use super::{parse_payload, required, ConnectionArgs, GlobalOptions, UsageError};

/// Manage API proxies, revisions and deployments
#[derive(Args, Debug)]
pub struct ProxyCommand {
    #[command(subcommand)]
    pub command: ProxySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProxySubcommand {
    /// Perform a proxy operation by name
    #[command(visible_alias = "proxy-action")]
    Action(ProxyActionArgs),

    /// Create a new API proxy
    CreateApiProxy(OrgPayloadArgs),

    /// Upload a new revision of an API proxy
    UploadProxyRevision(ApiPayloadArgs),

    /// List all revisions of an API proxy
    ListProxyRevisions(ApiArgs),

    /// Deploy a revision to an environment
    DeployProxyRevision(DeploymentArgs),

    /// Show the deployment status of an API proxy in an environment
    GetDeploymentStatus(EnvApiArgs),

    /// Undeploy a revision from an environment
    DeleteDeployment(DeploymentArgs),

    /// Replace the policies of a revision
    UpdateProxyPolicies(RevisionPayloadArgs),

    /// Fetch details of a specific revision
    GetProxyRevisionDetails(RevisionArgs),

    /// List all API proxies in an organization
    ListApis(OrgArgs),

    /// Delete an API proxy and all its revisions
    DeleteApi(ApiArgs),

    /// Start a debug session on a deployed revision
    StartDebugSession(DeploymentArgs),

    /// Fetch API traffic metrics for an environment
    GetApiMetrics(EnvArgs),

    /// Create an API product in an organization
    CreateApiProduct(OrgPayloadArgs),

    /// Update an API product in an organization
    UpdateApiProduct(ProductPayloadArgs),

    /// Deploy a revision to the prod environment
    PromoteRevisionToProduction(RevisionArgs),

    /// Delete a single revision of an API proxy
    DeleteProxyRevision(RevisionArgs),
}

/// Proxy operations reachable through `proxy action`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum ProxyAction {
    CreateApiProxy,
    UploadProxyRevision,
    ListProxyRevisions,
    DeployProxyRevision,
    GetDeploymentStatus,
    DeleteDeployment,
    UpdateProxyPolicies,
    GetProxyRevisionDetails,
    ListApis,
    DeleteApi,
    StartDebugSession,
    GetApiMetrics,
    CreateApiProduct,
    UpdateApiProduct,
    PromoteRevisionToProduction,
    DeleteProxyRevision,
}

impl fmt::Display for ProxyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[derive(Args, Debug)]
pub struct ProxyActionArgs {
    /// Operation to perform
    #[arg(value_enum)]
    pub action: ProxyAction,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name (if applicable)
    #[arg(long)]
    pub org: Option<String>,

    /// API proxy name (if applicable)
    #[arg(long)]
    pub api: Option<String>,

    /// Revision number (if applicable)
    #[arg(long)]
    pub revision: Option<String>,

    /// Environment (if applicable)
    #[arg(long)]
    pub env: Option<String>,

    /// API product name (if applicable)
    #[arg(long)]
    pub product: Option<String>,

    /// Payload in JSON format (if applicable)
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Option<Value>,
}

#[derive(Args, Debug)]
pub struct OrgArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,
}

#[derive(Args, Debug)]
pub struct OrgPayloadArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

#[derive(Args, Debug)]
pub struct ApiArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,
}

#[derive(Args, Debug)]
pub struct ApiPayloadArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

#[derive(Args, Debug)]
pub struct RevisionArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,

    /// Revision number
    #[arg(long)]
    pub revision: String,
}

#[derive(Args, Debug)]
pub struct RevisionPayloadArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,

    /// Revision number
    #[arg(long)]
    pub revision: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// Environment
    #[arg(long)]
    pub env: String,
}

#[derive(Args, Debug)]
pub struct EnvApiArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// Environment
    #[arg(long)]
    pub env: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,
}

#[derive(Args, Debug)]
pub struct DeploymentArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// Environment
    #[arg(long)]
    pub env: String,

    /// API proxy name
    #[arg(long)]
    pub api: String,

    /// Revision number
    #[arg(long)]
    pub revision: String,
}

#[derive(Args, Debug)]
pub struct ProductPayloadArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Apigee organization name
    #[arg(long)]
    pub org: String,

    /// API product name
    #[arg(long)]
    pub product: String,

    /// Payload in JSON format
    #[arg(long, value_name = "JSON", value_parser = parse_payload)]
    pub payload: Value,
}

impl ProxyActionArgs {
    fn org(&self) -> Result<&str, UsageError> {
        required(self.org.as_deref(), &self.action, "--org")
    }

    fn api(&self) -> Result<&str, UsageError> {
        required(self.api.as_deref(), &self.action, "--api")
    }

    fn revision(&self) -> Result<&str, UsageError> {
        required(self.revision.as_deref(), &self.action, "--revision")
    }

    fn env(&self) -> Result<&str, UsageError> {
        required(self.env.as_deref(), &self.action, "--env")
    }

    fn product(&self) -> Result<&str, UsageError> {
        required(self.product.as_deref(), &self.action, "--product")
    }

    fn payload(&self) -> Result<&Value, UsageError> {
        required(self.payload.as_ref(), &self.action, "--payload")
    }

    /// Runs the selected action. Flags are checked in path order and before
    /// any request is made.
    async fn execute(&self, proxies: Proxies<'_>) -> Result<Value> {
        let result = match self.action {
            ProxyAction::CreateApiProxy => {
                proxies.create_api_proxy(self.org()?, self.payload()?).await
            }
            ProxyAction::UploadProxyRevision => {
                proxies
                    .upload_proxy_revision(self.org()?, self.api()?, self.payload()?)
                    .await
            }
            ProxyAction::ListProxyRevisions => {
                proxies.list_proxy_revisions(self.org()?, self.api()?).await
            }
            ProxyAction::DeployProxyRevision => {
                proxies
                    .deploy_proxy_revision(self.org()?, self.env()?, self.api()?, self.revision()?)
                    .await
            }
            ProxyAction::GetDeploymentStatus => {
                proxies
                    .get_deployment_status(self.org()?, self.env()?, self.api()?)
                    .await
            }
            ProxyAction::DeleteDeployment => {
                proxies
                    .delete_deployment(self.org()?, self.env()?, self.api()?, self.revision()?)
                    .await
            }
            ProxyAction::UpdateProxyPolicies => {
                proxies
                    .update_proxy_policies(
                        self.org()?,
                        self.api()?,
                        self.revision()?,
                        self.payload()?,
                    )
                    .await
            }
            ProxyAction::GetProxyRevisionDetails => {
                proxies
                    .get_proxy_revision_details(self.org()?, self.api()?, self.revision()?)
                    .await
            }
            ProxyAction::ListApis => proxies.list_apis(self.org()?).await,
            ProxyAction::DeleteApi => proxies.delete_api(self.org()?, self.api()?).await,
            ProxyAction::StartDebugSession => {
                proxies
                    .start_debug_session(self.org()?, self.env()?, self.api()?, self.revision()?)
                    .await
            }
            ProxyAction::GetApiMetrics => {
                proxies.get_api_metrics(self.org()?, self.env()?).await
            }
            ProxyAction::CreateApiProduct => {
                proxies.create_api_product(self.org()?, self.payload()?).await
            }
            ProxyAction::UpdateApiProduct => {
                proxies
                    .update_api_product(self.org()?, self.product()?, self.payload()?)
                    .await
            }
            ProxyAction::PromoteRevisionToProduction => {
                proxies
                    .promote_revision_to_production(self.org()?, self.api()?, self.revision()?)
                    .await
            }
            ProxyAction::DeleteProxyRevision => {
                proxies
                    .delete_proxy_revision(self.org()?, self.api()?, self.revision()?)
                    .await
            }
        };

        result.with_context(|| format!("Failed to execute action '{}'", self.action))
    }
}

impl ProxyCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let value = match &self.command {
            ProxySubcommand::Action(args) => {
                let client = args.connection.connect()?;
                args.execute(client.proxies()).await?
            }
            ProxySubcommand::CreateApiProxy(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .create_api_proxy(&args.org, &args.payload)
                    .await
                    .context("Failed to create API proxy")?
            }
            ProxySubcommand::UploadProxyRevision(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .upload_proxy_revision(&args.org, &args.api, &args.payload)
                    .await
                    .with_context(|| format!("Failed to upload revision of '{}'", args.api))?
            }
            ProxySubcommand::ListProxyRevisions(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .list_proxy_revisions(&args.org, &args.api)
                    .await
                    .with_context(|| format!("Failed to list revisions of '{}'", args.api))?
            }
            ProxySubcommand::DeployProxyRevision(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .deploy_proxy_revision(&args.org, &args.env, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to deploy revision {} of '{}' to {}",
                            args.revision, args.api, args.env
                        )
                    })?
            }
            ProxySubcommand::GetDeploymentStatus(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .get_deployment_status(&args.org, &args.env, &args.api)
                    .await
                    .with_context(|| format!("Failed to get deployment status of '{}'", args.api))?
            }
            ProxySubcommand::DeleteDeployment(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .delete_deployment(&args.org, &args.env, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to undeploy revision {} of '{}' from {}",
                            args.revision, args.api, args.env
                        )
                    })?
            }
            ProxySubcommand::UpdateProxyPolicies(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .update_proxy_policies(&args.org, &args.api, &args.revision, &args.payload)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to update policies of revision {} of '{}'",
                            args.revision, args.api
                        )
                    })?
            }
            ProxySubcommand::GetProxyRevisionDetails(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .get_proxy_revision_details(&args.org, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!("Failed to fetch revision {} of '{}'", args.revision, args.api)
                    })?
            }
            ProxySubcommand::ListApis(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .list_apis(&args.org)
                    .await
                    .with_context(|| format!("Failed to list API proxies in '{}'", args.org))?
            }
            ProxySubcommand::DeleteApi(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .delete_api(&args.org, &args.api)
                    .await
                    .with_context(|| format!("Failed to delete API proxy '{}'", args.api))?
            }
            ProxySubcommand::StartDebugSession(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .start_debug_session(&args.org, &args.env, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!("Failed to start debug session on '{}'", args.api)
                    })?
            }
            ProxySubcommand::GetApiMetrics(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .get_api_metrics(&args.org, &args.env)
                    .await
                    .with_context(|| format!("Failed to fetch API metrics for {}", args.env))?
            }
            ProxySubcommand::CreateApiProduct(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .create_api_product(&args.org, &args.payload)
                    .await
                    .context("Failed to create API product")?
            }
            ProxySubcommand::UpdateApiProduct(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .update_api_product(&args.org, &args.product, &args.payload)
                    .await
                    .with_context(|| format!("Failed to update API product '{}'", args.product))?
            }
            ProxySubcommand::PromoteRevisionToProduction(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .promote_revision_to_production(&args.org, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!(
                            "Failed to promote revision {} of '{}' to production",
                            args.revision, args.api
                        )
                    })?
            }
            ProxySubcommand::DeleteProxyRevision(args) => {
                let client = args.connection.connect()?;
                client
                    .proxies()
                    .delete_proxy_revision(&args.org, &args.api, &args.revision)
                    .await
                    .with_context(|| {
                        format!("Failed to delete revision {} of '{}'", args.revision, args.api)
                    })?
            }
        };

        global.writer().write(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApigeeClient;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn action_args(argv: &[&str]) -> ProxyActionArgs {
        let mut full = vec!["apigee-client", "proxy", "action"];
        full.extend_from_slice(argv);
        full.extend_from_slice(&["--base-url", "http://127.0.0.1:9", "--token", "t"]);

        match Cli::try_parse_from(full).unwrap().command {
            Commands::Proxy(ProxyCommand {
                command: ProxySubcommand::Action(args),
            }) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_every_action_has_a_subcommand() {
        use clap::CommandFactory;

        let cli = Cli::command();
        let proxy = cli.find_subcommand("proxy").unwrap();

        for action in ProxyAction::value_variants() {
            let name = action.to_string().replace('_', "-");
            assert!(
                proxy.find_subcommand(&name).is_some(),
                "missing subcommand {}",
                name
            );
        }
    }

    #[test]
    fn test_action_parses_optional_flags() {
        let args = action_args(&[
            "update_api_product",
            "--org",
            "acme",
            "--product",
            "gold",
            "--payload",
            r#"{"quota": "1000"}"#,
        ]);

        assert_eq!(args.action, ProxyAction::UpdateApiProduct);
        assert_eq!(args.org.as_deref(), Some("acme"));
        assert_eq!(args.product.as_deref(), Some("gold"));
        assert_eq!(args.payload, Some(serde_json::json!({"quota": "1000"})));
        assert_eq!(args.api, None);
    }

    #[tokio::test]
    async fn test_missing_org_is_reported_first() {
        let args = action_args(&["deploy_proxy_revision", "--env", "test"]);
        let client = ApigeeClient::new("http://127.0.0.1:9").unwrap();

        let err = args.execute(client.proxies()).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<UsageError>(),
            Some(&UsageError::MissingFlag {
                action: "deploy_proxy_revision".to_string(),
                flag: "--org",
            })
        );
    }

    #[tokio::test]
    async fn test_missing_payload_is_usage_error() {
        let args = action_args(&["create_api_proxy", "--org", "acme"]);
        let client = ApigeeClient::new("http://127.0.0.1:9").unwrap();

        let err = args.execute(client.proxies()).await.unwrap_err();

        assert_eq!(err.to_string(), "action 'create_api_proxy' requires --payload");
    }
}
