//! `list` command: deployment rollout status

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;
use crate::rollout::RolloutLister;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Deployment to list
    #[arg(value_name = "DEPLOYMENT_NAME")]
    pub deployment: String,

    /// Namespace to operate in
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Path to kubeconfig file (default: $KUBECONFIG or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
}

pub async fn run_list(args: ListArgs, settings: &Settings) -> Result<()> {
    let namespace = args
        .namespace
        .unwrap_or_else(|| settings.default_namespace.clone());
    let kubeconfig = args.kubeconfig.or_else(|| settings.kubeconfig.clone());

    let client = crate::kube::create_client(kubeconfig.as_deref())
        .await
        .context("failed to create kubernetes client")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    RolloutLister::new(client)
        .list(&namespace, &args.deployment, &mut out)
        .await
        .context("failed to list rollout")?;
    Ok(())
}
