// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

mod inspect;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rmw_metastring::{mangle_type_name, CompilerOptions, EnvConfig, MessageSpec, MetastringCompiler};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "metastring-dump")]
#[command(about = "Compile message descriptor files (YAML/JSON) into dynamic-type metastrings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile descriptor files and print their metastrings
    Compile {
        /// Descriptor files (.yaml, .yml or .json)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Maximum emitted for unbounded sequences
        #[arg(long, value_name = "N")]
        unbounded_max: Option<usize>,
    },

    /// Print the mangled DDS type name
    Mangle {
        /// rosidl namespace (e.g. geometry_msgs__msg)
        namespace: String,

        /// Bare type name (e.g. Point)
        name: String,
    },

    /// Show the member tree of a descriptor file
    Inspect {
        /// Descriptor file (.yaml, .yml or .json)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let env = EnvConfig::from_env();
    env.apply_log_level();
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            inputs,
            unbounded_max,
        } => {
            let mut options = env.compiler_options();
            if let Some(max) = unbounded_max {
                anyhow::ensure!(max > 0, "--unbounded-max must be positive");
                options.unbounded_sequence_maximum = max;
            }
            cmd_compile(&inputs, options)?;
        }
        Commands::Mangle { namespace, name } => {
            println!("{}", mangle_type_name(&namespace, &name));
        }
        Commands::Inspect { input } => {
            cmd_inspect(&input)?;
        }
    }

    Ok(())
}

fn cmd_compile(inputs: &[PathBuf], options: CompilerOptions) -> anyhow::Result<()> {
    let compiler = MetastringCompiler::new(options);
    let mut failures = 0usize;

    for input in inputs {
        match compile_file(&compiler, input) {
            Ok(metastring) => println!("{}: {}", input.display(), metastring),
            Err(e) => {
                eprintln!("[ERROR] {}: {e:#}", input.display());
                failures += 1;
            }
        }
    }

    anyhow::ensure!(failures == 0, "{failures} of {} files failed", inputs.len());
    Ok(())
}

fn compile_file(compiler: &MetastringCompiler, input: &Path) -> anyhow::Result<String> {
    let spec = MessageSpec::from_path(input)?;
    log::debug!("loaded {} ({} members)", spec.name, spec.members.len());
    compiler
        .try_compile(&spec)
        .with_context(|| format!("compiling {}", spec.name))
}

fn cmd_inspect(input: &Path) -> anyhow::Result<()> {
    let spec = MessageSpec::from_path(input)?;
    print!("{}", inspect::render_tree(&spec.descriptor())?);
    Ok(())
}
