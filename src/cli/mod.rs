use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;

use crate::core::{ModuleGraph, ModuleId};
use crate::error::{ChunkgraphError, Result};
use crate::graph::ops::{
    children_of, cross_bundle_children_of, dependants_of, dependencies_of,
};
use crate::graph::{enrich_graph, IdAllocator};
use crate::stats::load_module_graph;
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "chunkgraph")]
#[command(about = "Bundle module graph enrichment", long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate a module graph with ids, children and same-bundle edges
    Enrich(EnrichArgs),
    /// Print the direct relationships of one module
    Show(ShowArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// Path to a module graph or bundle stats JSON file
    pub input: PathBuf,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to a module graph or bundle stats JSON file
    pub input: PathBuf,
    /// Module identifier to inspect
    pub module: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    pub shell: Shell,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Enrich(args) => handle_enrich(args, cli.quiet),
        Commands::Show(args) => handle_show(args, cli.quiet),
        Commands::Completions(args) => handle_completions(args),
    }
}

fn handle_enrich(args: EnrichArgs, quiet: bool) -> Result<()> {
    let graph = load_module_graph(&args.input)?;
    let enriched = enrich_graph(&graph, &IdAllocator::new());
    if !quiet {
        warn_dangling_parents(&graph);
    }

    let rendered = if args.compact {
        serde_json::to_string(&enriched)
    } else {
        serde_json::to_string_pretty(&enriched)
    }
    .map_err(|err| ChunkgraphError::Other(anyhow::Error::new(err)))?;

    match args.output {
        Some(path) => std::fs::write(&path, rendered + "\n")?,
        None => println!("{rendered}"),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ModuleReport {
    id: u64,
    children: Vec<ModuleId>,
    dependants: Vec<ModuleId>,
    dependencies: Vec<ModuleId>,
    cross_bundle_children: Vec<ModuleId>,
}

fn handle_show(args: ShowArgs, quiet: bool) -> Result<()> {
    let graph = load_module_graph(&args.input)?;
    let enriched = enrich_graph(&graph, &IdAllocator::new());
    if !quiet {
        warn_dangling_parents(&graph);
    }

    let module = ModuleId::new(args.module.as_str());
    let Some(entry) = enriched.get(&module) else {
        return Err(ChunkgraphError::Other(anyhow::anyhow!(
            "module not found in graph: {}",
            args.module
        )));
    };

    let report = ModuleReport {
        id: entry.id,
        children: children_of(&enriched, &module),
        dependants: dependants_of(&enriched, &module),
        dependencies: dependencies_of(&enriched, &module),
        cross_bundle_children: cross_bundle_children_of(&enriched, &module),
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|err| ChunkgraphError::Other(anyhow::Error::new(err)))?
        );
        return Ok(());
    }

    println!("{} (id {})", module, report.id);
    print_section("children", &report.children);
    print_section("dependants (same-bundle parents)", &report.dependants);
    print_section("dependencies (same-bundle children)", &report.dependencies);
    print_section("cross-bundle children", &report.cross_bundle_children);
    Ok(())
}

fn print_section(title: &str, modules: &[ModuleId]) {
    println!("  {title}:");
    if modules.is_empty() {
        println!("    (none)");
        return;
    }
    for module in modules {
        println!("    {module}");
    }
}

fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "chunkgraph", &mut io::stdout());
    Ok(())
}

// The enricher itself skips dangling parent references silently; surfacing
// them is the caller's job.
fn warn_dangling_parents(graph: &ModuleGraph) {
    let mut dangling: BTreeMap<&ModuleId, usize> = BTreeMap::new();
    for node in graph.modules.values() {
        for parent in &node.parents {
            if graph.get(parent).is_none() {
                *dangling.entry(parent).or_insert(0) += 1;
            }
        }
    }
    for (parent, count) in dangling {
        output::warn(&format!(
            "dangling parent reference: {parent} ({count} edge{})",
            if count == 1 { "" } else { "s" }
        ));
    }
}
