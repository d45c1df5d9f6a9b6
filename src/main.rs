// SPDX-License-Identifier: MIT
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use copigen::config::GeneratorConfig;
use copigen::registry::ComponentRegistry;
use copigen::store::{self, FragmentKind};
use copigen::{assemble, prompt, select, writer};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "copigen",
    about = "Copilot instructions generator — compose copilot-instructions.md from fragments",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Root directory of the fragment store (core/ and components/ beneath it)
    #[arg(long, value_name = "DIR", global = true)]
    fragments_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log: String,

    /// Suppress progress and informational output.
    ///
    /// Errors are still printed to stderr.
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate copilot-instructions.md (default when no subcommand given).
    ///
    /// Prompts interactively for a component selection unless --components
    /// or --no-components is passed.
    ///
    /// Examples:
    ///   copigen
    ///   copigen generate --components numpy,pandas
    ///   copigen generate --no-components --force
    Generate {
        /// Output path for the assembled document
        #[arg(long, short = 'o', env = "COPIGEN_OUTPUT", value_name = "PATH")]
        output: Option<PathBuf>,
        /// Comma-separated component keys; skips the interactive prompt
        #[arg(
            long,
            value_name = "KEYS",
            value_delimiter = ',',
            conflicts_with = "no_components"
        )]
        components: Option<Vec<String>>,
        /// Include no optional components (core content only)
        #[arg(long)]
        no_components: bool,
        /// Overwrite an existing output file
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// List available components.
    ///
    /// Examples:
    ///   copigen list
    ///   copigen list --json
    List {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    // Init once — must happen before any tracing calls.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::List { json }) => run_list(args.fragments_dir, json),
        Some(Command::Generate {
            output,
            components,
            no_components,
            force,
        }) => run_generate(
            args.fragments_dir,
            output,
            components,
            no_components,
            force,
            args.quiet,
        ),
        None => run_generate(args.fragments_dir, None, None, false, false, args.quiet),
    }
}

fn run_list(fragments_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let config = GeneratorConfig::resolve(fragments_dir, None, false);
    let components = store::load_fragments(&config.components_dir(), FragmentKind::Component)
        .context("loading component fragments")?;
    let registry = ComponentRegistry::new(components);

    if json {
        println!("{}", serde_json::to_string_pretty(registry.entries())?);
    } else if registry.is_empty() {
        println!(
            "no components found under {}",
            config.components_dir().display()
        );
    } else {
        for entry in registry.entries() {
            if entry.description.is_empty() {
                println!("{}", entry.key);
            } else {
                println!("{} — {}", entry.key, entry.description);
            }
        }
    }
    Ok(())
}

fn run_generate(
    fragments_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    components: Option<Vec<String>>,
    no_components: bool,
    force: bool,
    quiet: bool,
) -> Result<()> {
    let config = GeneratorConfig::resolve(fragments_dir, output, force);

    let core = store::load_fragments(&config.core_dir(), FragmentKind::Core)
        .context("loading core fragments")?;
    let registry = ComponentRegistry::new(
        store::load_fragments(&config.components_dir(), FragmentKind::Component)
            .context("loading component fragments")?,
    );

    let selection: BTreeSet<String> = if no_components {
        BTreeSet::new()
    } else if let Some(keys) = components {
        keys.into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect()
    } else {
        if !quiet {
            prompt::print_header();
        }
        prompt::select_components(&registry).context("reading selection")?
    };

    let selected = select::resolve(&registry, &selection).context("resolving selection")?;

    if !quiet {
        println!();
        if selected.is_empty() {
            println!("Generating instructions with core content only.");
        } else {
            let names: Vec<&str> = selected.iter().map(|f| f.key.as_str()).collect();
            println!("Generating instructions with: {}", names.join(", "));
        }
    }

    let text = assemble::assemble(&core, &selected);
    writer::write_document(&config.output, &text, config.overwrite).context("writing output")?;

    info!(
        path = %config.output.display(),
        sections = core.len() + selected.len(),
        "document written"
    );
    if !quiet {
        println!("Wrote {}.", config.output.display());
        println!("Copy its contents into your project, or point your editor at it directly.");
    }
    Ok(())
}
