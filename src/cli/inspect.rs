//! `inspect` command

use anyhow::{Context, Result};
use clap::Args;
use crossterm::tty::IsTty;
use std::path::PathBuf;
use std::time::Duration;

use crate::collector::{self, Collector, CollectorEntry};
use crate::config::Settings;
use crate::error::Error;
use crate::graph::ResourceGraph;
use crate::output::{OutputFormat, create_formatter};

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Resource type to inspect (supported: dataset)
    pub resource_type: String,

    /// Resource name
    pub name: String,

    /// Namespace of the resource
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output format: table, tree or json
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to kubeconfig file (default: $KUBECONFIG or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Seconds to wait for the cluster before giving up
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Flags merged with settings, validated before any cluster access
#[derive(Debug)]
pub struct InspectPlan {
    pub collector: &'static CollectorEntry,
    pub name: String,
    pub namespace: String,
    pub format: OutputFormat,
    pub kubeconfig: Option<PathBuf>,
    pub timeout: Duration,
    pub color: bool,
}

fn parse_format(output: &str) -> Result<OutputFormat> {
    output
        .parse::<OutputFormat>()
        .context("invalid output format")
}

fn lookup_collector(resource_type: &str) -> Result<&'static CollectorEntry> {
    collector::lookup(resource_type).with_context(|| {
        format!(
            "unsupported resource type (supported: {})",
            collector::supported_types().join(", ")
        )
    })
}

impl InspectArgs {
    /// Checks that need no settings: an explicit `-o`, then the resource type
    pub fn check_usage(&self) -> Result<()> {
        if let Some(output) = &self.output {
            parse_format(output)?;
        }
        lookup_collector(&self.resource_type)?;
        Ok(())
    }

    /// Validate flags in order: output format, then resource type
    ///
    /// Color is only kept when stdout is a terminal.
    pub fn plan(self, settings: &Settings, terminal: bool) -> Result<InspectPlan> {
        let format = parse_format(self.output.as_deref().unwrap_or(&settings.output))?;
        let collector = lookup_collector(&self.resource_type)?;

        Ok(InspectPlan {
            collector,
            name: self.name,
            namespace: self
                .namespace
                .unwrap_or_else(|| settings.default_namespace.clone()),
            format,
            kubeconfig: self.kubeconfig.or_else(|| settings.kubeconfig.clone()),
            timeout: Duration::from_secs(self.timeout.unwrap_or(settings.timeout_seconds)),
            color: settings.color && !self.no_color && terminal,
        })
    }
}

/// Run a collection under one overall deadline
pub async fn collect_with_deadline(
    collector: &dyn Collector,
    namespace: &str,
    name: &str,
    deadline: Duration,
) -> Result<ResourceGraph> {
    tokio::time::timeout(deadline, collector.collect(namespace, name))
        .await
        .map_err(|_| Error::Timeout(deadline))
        .and_then(|result| result)
        .context("failed to collect resources")
}

/// Collect the graph and print it to stdout
pub async fn run_inspect(args: InspectArgs, settings: &Settings) -> Result<()> {
    let stdout = std::io::stdout();
    let plan = args.plan(settings, stdout.is_tty())?;
    tracing::debug!(?plan, "Inspecting");

    let client = crate::kube::create_client(plan.kubeconfig.as_deref())
        .await
        .context("failed to create kubernetes client")?;
    let collector = (plan.collector.build)(client);

    tracing::debug!(
        "Collecting {} {}/{}",
        collector.root_type(),
        plan.namespace,
        plan.name
    );
    let graph =
        collect_with_deadline(collector.as_ref(), &plan.namespace, &plan.name, plan.timeout)
            .await?;

    let formatter = create_formatter(plan.format, plan.color);
    let mut out = stdout.lock();
    formatter
        .format(&graph, &mut out)
        .context("failed to format results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(resource_type: &str, output: Option<&str>) -> InspectArgs {
        InspectArgs {
            resource_type: resource_type.to_string(),
            name: "mydata".to_string(),
            namespace: None,
            output: output.map(str::to_string),
            kubeconfig: None,
            timeout: None,
            no_color: false,
        }
    }

    #[test]
    fn test_plan_uses_settings_defaults() {
        let settings = Settings {
            default_namespace: "ml".to_string(),
            output: "json".to_string(),
            timeout_seconds: 5,
            ..Default::default()
        };
        let plan = args("dataset", None).plan(&settings, true).unwrap();
        assert_eq!(plan.collector.name, "dataset");
        assert_eq!(plan.namespace, "ml");
        assert_eq!(plan.format, OutputFormat::Json);
        assert_eq!(plan.timeout, Duration::from_secs(5));
        assert!(plan.color);
    }

    #[test]
    fn test_flags_override_settings() {
        let mut a = args("dataset", Some("tree"));
        a.namespace = Some("prod".to_string());
        a.kubeconfig = Some(PathBuf::from("/tmp/kc"));
        a.timeout = Some(3);
        a.no_color = true;

        let settings = Settings {
            kubeconfig: Some(PathBuf::from("/etc/kc")),
            ..Default::default()
        };
        let plan = a.plan(&settings, true).unwrap();
        assert_eq!(plan.namespace, "prod");
        assert_eq!(plan.format, OutputFormat::Tree);
        assert_eq!(plan.kubeconfig, Some(PathBuf::from("/tmp/kc")));
        assert_eq!(plan.timeout, Duration::from_secs(3));
        assert!(!plan.color);
    }

    #[test]
    fn test_output_format_checked_first() {
        let err = args("widget", Some("yaml"))
            .plan(&Settings::default(), true)
            .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid output format: must be one of: table, tree, json"
        );
    }

    #[test]
    fn test_unsupported_type() {
        let err = args("widget", None)
            .plan(&Settings::default(), true)
            .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "unsupported resource type (supported: dataset): type 'widget' not supported yet"
        );
    }

    #[test]
    fn test_no_color_when_stdout_is_not_a_terminal() {
        let plan = args("dataset", None)
            .plan(&Settings::default(), false)
            .unwrap();
        assert!(!plan.color);

        let graph = ResourceGraph::new(
            crate::graph::Resource::new(crate::models::ResourceType::Dataset, "d", "ml")
                .with_status("Bound"),
        );
        let mut out = Vec::new();
        create_formatter(plan.format, plan.color)
            .format(&graph, &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\u{1b}'), "escape codes in {text:?}");
        assert!(text.contains("Status: Bound"));
    }

    #[test]
    fn test_check_usage_without_settings() {
        assert!(args("Datasets", Some("json")).check_usage().is_ok());
        assert!(args("dataset", None).check_usage().is_ok());

        let err = args("widget", Some("yaml")).check_usage().unwrap_err();
        assert!(format!("{err:#}").starts_with("invalid output format"));

        let err = args("widget", None).check_usage().unwrap_err();
        assert!(format!("{err:#}").ends_with("type 'widget' not supported yet"));
    }

    /// Collector that answers after a fixed delay
    struct SlowCollector {
        delay: Duration,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Collector for SlowCollector {
        fn root_type(&self) -> crate::models::ResourceType {
            crate::models::ResourceType::Dataset
        }

        async fn collect(&self, namespace: &str, name: &str) -> crate::Result<ResourceGraph> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(Error::not_found("Dataset", namespace, name));
            }
            Ok(ResourceGraph::new(crate::graph::Resource::new(
                crate::models::ResourceType::Dataset,
                name,
                namespace,
            )))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_collection_times_out() {
        let slow = SlowCollector {
            delay: Duration::from_secs(60),
            fail: false,
        };
        let err = collect_with_deadline(&slow, "ml", "mydata", Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Timeout(d)) if *d == Duration::from_secs(5)
        ));
        assert_eq!(
            format!("{err:#}"),
            "failed to collect resources: timed out after 5s"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_collection_within_deadline() {
        let quick = SlowCollector {
            delay: Duration::from_secs(1),
            fail: false,
        };
        let graph = collect_with_deadline(&quick, "ml", "mydata", Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(graph.root().name, "mydata");
    }

    #[tokio::test(start_paused = true)]
    async fn test_collection_error_is_kept() {
        let failing = SlowCollector {
            delay: Duration::ZERO,
            fail: true,
        };
        let err = collect_with_deadline(&failing, "ml", "mydata", Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to collect resources: Dataset ml/mydata not found"
        );
    }
}
