mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use export_namer::config::{config_stub, load_config_or_default};
use export_namer::placeholder::placeholder_text;
use export_namer::{
    evaluate, MarkerRootLocator, PatternResolver, Placeholder, ProjectRootLocator, Resolution,
    ResolutionContext, ResolverConfig, TokioFs, TracingNotifier, WorkspaceFolders,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cli::{Command, EvaluateArgs, FileArgs, ResolveArgs, RootArgs};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "EXNAME_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Resolve(resolve) => {
            let config = load_config_or_default(args.config.as_deref())?;
            cmd_resolve(&config, resolve).await
        }
        Command::Evaluate(eval) => {
            let config = load_config_or_default(args.config.as_deref())?;
            cmd_evaluate(&config, eval)
        }
        Command::Placeholders => {
            cmd_placeholders();
            Ok(())
        }
        Command::Config => {
            println!("{}", config_stub());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    file: &'a Path,
    root: Option<&'a Path>,
    export_extension: Option<&'a str>,
    #[serde(flatten)]
    resolution: Resolution,
}

async fn cmd_resolve(config: &ResolverConfig, args: ResolveArgs) -> Result<()> {
    let resolver = PatternResolver::new(config, TokioFs, TracingNotifier);
    let ctx = build_context(config, &args.file)?;
    let resolution = resolver
        .resolve_detailed(args.pattern.as_deref(), &ctx)
        .await;

    if args.json {
        let report = ResolveReport {
            file: ctx.file(),
            root: ctx.root(),
            export_extension: ctx.export_extension(),
            resolution,
        };
        let text = serde_json::to_string_pretty(&report).context("serialize resolve report")?;
        println!("{text}");
    } else {
        println!("{}", resolution.resolved);
    }
    Ok(())
}

fn cmd_evaluate(config: &ResolverConfig, args: EvaluateArgs) -> Result<()> {
    let ctx = build_context(config, &args.file)?;
    println!("{}", evaluate(&args.name, &ctx));
    Ok(())
}

fn cmd_placeholders() {
    for placeholder in Placeholder::ALL {
        let token = placeholder_text(placeholder.name());
        println!("{token:<28} {}", placeholder.describe());
    }
}

fn build_context(config: &ResolverConfig, args: &FileArgs) -> Result<ResolutionContext> {
    let file = absolute(&args.file)?;
    let locator: Box<dyn ProjectRootLocator> = if args.roots.is_empty() {
        Box::new(MarkerRootLocator::new(config.root_markers.clone()))
    } else {
        let roots = args
            .roots
            .iter()
            .map(|root| absolute(root.as_path()))
            .collect::<Result<Vec<_>>>()?;
        Box::new(WorkspaceFolders::new(roots))
    };
    let ctx = ResolutionContext::located(file, &*locator)
        .with_export_extension(args.export_extension.clone())
        .with_default_export_extension(config.default_export_extension.as_deref());
    tracing::debug!(
        file = %ctx.file().display(),
        root = ?ctx.root(),
        "resolution context ready"
    );
    Ok(ctx)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("read current directory")?;
    Ok(cwd.join(path))
}
