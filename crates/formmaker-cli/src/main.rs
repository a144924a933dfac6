//! formmaker CLI
//!
//! Command-line tool for rendering forms and scaffolding form types.

mod preview;
mod render;
mod stub;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use formmaker_router::{Method, RouteTable};

use crate::render::{Mode, RenderArgs};
use crate::stub::FormStub;

/// Declarative HTML forms from the command line.
#[derive(Parser)]
#[command(name = "formmaker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a model form from a JSON definition.
    Render {
        /// Form definition file.
        #[arg(short, long)]
        definition: PathBuf,

        /// Form to render.
        #[arg(short, long, value_enum, default_value_t = Mode::Create)]
        mode: Mode,

        /// JSON object bound to the form (edit and delete).
        #[arg(short, long)]
        object: Option<PathBuf>,

        /// Scheme and host of generated URLs.
        #[arg(long, env = "FORMMAKER_BASE_URL", default_value = "http://localhost")]
        base_url: String,

        /// Path of the resource routes (derived from the route prefix if not specified).
        #[arg(long)]
        resource_path: Option<String>,

        /// Use the horizontal layout.
        #[arg(long)]
        horizontal: bool,

        /// Class name configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// CSRF token placed in the form.
        #[arg(long, env = "FORMMAKER_TOKEN")]
        token: Option<String>,

        /// JSON object of previously submitted input.
        #[arg(long)]
        old: Option<PathBuf>,

        /// JSON object of validation messages by field.
        #[arg(long)]
        errors: Option<PathBuf>,

        /// Wrap the form in a complete HTML page.
        #[arg(long)]
        page: bool,
    },

    /// Generate a new form type.
    MakeForm {
        /// Form type name.
        name: String,

        /// Model the form edits.
        #[arg(short, long)]
        model: String,

        /// Route name prefix (plural of the model if not specified).
        #[arg(short, long)]
        prefix: Option<String>,

        /// Output directory.
        #[arg(short, long, default_value = "src/forms")]
        dir: PathBuf,

        /// Write a JSON definition instead of Rust code.
        #[arg(long)]
        json: bool,

        /// Print the stub without writing files (dry run).
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the resource routes of a prefix.
    Routes {
        /// Route name prefix.
        #[arg(short, long)]
        prefix: String,

        /// Resource path.
        #[arg(long)]
        path: Option<String>,

        /// Scheme and host of generated URLs.
        #[arg(long, env = "FORMMAKER_BASE_URL", default_value = "http://localhost")]
        base_url: String,

        /// Path to recognize.
        #[arg(long = "match")]
        match_path: Option<String>,

        /// Method used with --match.
        #[arg(long, default_value = "GET")]
        method: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            definition,
            mode,
            object,
            base_url,
            resource_path,
            horizontal,
            config,
            token,
            old,
            errors,
            page,
        } => {
            let markup = render::run(&RenderArgs {
                definition,
                mode,
                object,
                base_url,
                resource_path,
                horizontal,
                config,
                token,
                old,
                errors,
                page,
            })?;
            println!("{markup}");
        }

        Commands::MakeForm {
            name,
            model,
            prefix,
            dir,
            json,
            dry_run,
        } => {
            let stub = FormStub::new(&name, &model, prefix.as_deref())?;

            if dry_run {
                let (file_name, code) = stub.render(json)?;
                println!("Would create form: {}", dir.join(file_name).display());
                println!("\n{code}");
            } else {
                let file_path = stub.write(&dir, json)?;
                info!("Created form: {}", file_path.display());
            }
        }

        Commands::Routes {
            prefix,
            path,
            base_url,
            match_path,
            method,
        } => {
            let path = path.unwrap_or_else(|| format!("/{}", prefix.replace('.', "/")));
            let routes = RouteTable::new(base_url).resource(&prefix, &path)?;

            println!("{:<8} {:<24} {}", "METHOD", "NAME", "PATH");
            println!("{:-<60}", "");
            for route in routes.routes() {
                println!(
                    "{:<8} {:<24} {}",
                    route.method.as_str(),
                    route.name,
                    route.pattern.pattern()
                );
            }

            if let Some(match_path) = match_path {
                let method: Method = method.parse()?;
                let route = routes.recognize(method, &match_path)?;
                println!();
                println!("{method} {match_path} -> {}", route.name);
            }
        }
    }

    Ok(())
}
