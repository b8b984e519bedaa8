// SPDX-License-Identifier: MPL-2.0
//! Command line front end.
//!
//! ```text
//! gallery_lens [--config-dir DIR] [--root DIR] [--verbose] <command>
//!
//!   tree   [--folder NAME]                  print the category tree as JSON
//!   thumbs [--folder NAME] [--disk]         print one tile image per category
//!   fetch  [--folder NAME] [--endpoint URL] fetch the tree from the endpoint
//!   browse [--folder NAME]                  drive the viewer from stdin
//! ```

pub mod browse;

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::gallery::{Category, GalleryBuilder, ThumbnailResolver};
use crate::remote::GalleryClient;
use std::path::PathBuf;
use std::process::ExitCode;

pub const USAGE: &str = "\
Usage: gallery_lens [--config-dir DIR] [--root DIR] [--verbose] <command>

Commands:
  tree   [--folder NAME]                   print the category tree as JSON
  thumbs [--folder NAME] [--disk]          print one tile image per category
  fetch  [--folder NAME] [--endpoint URL]  fetch the tree from the gallery endpoint
  browse [--folder NAME]                   drive the viewer with commands read from stdin
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tree {
        folder: Option<String>,
    },
    Thumbs {
        folder: Option<String>,
        disk: bool,
    },
    Fetch {
        folder: Option<String>,
        endpoint: Option<String>,
    },
    Browse {
        folder: Option<String>,
    },
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub config_dir: Option<String>,
    pub root: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

/// Parses the command line.
///
/// # Errors
///
/// Returns [`Error::Config`] for a missing or unknown command, malformed
/// option values, and leftover arguments.
pub fn parse(mut args: pico_args::Arguments) -> Result<Flags> {
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let root = args.opt_value_from_str("--root")?;
    let verbose = args.contains(["-v", "--verbose"]);

    let name: Option<String> = args.subcommand()?;
    let folder = args.opt_value_from_str("--folder")?;
    let command = match name.as_deref() {
        Some("tree") => Command::Tree { folder },
        Some("thumbs") => Command::Thumbs {
            folder,
            disk: args.contains("--disk"),
        },
        Some("fetch") => Command::Fetch {
            folder,
            endpoint: args.opt_value_from_str("--endpoint")?,
        },
        Some("browse") => Command::Browse { folder },
        Some(other) => return Err(Error::Config(format!("unknown command: {other}"))),
        None => return Err(Error::Config("missing command".to_string())),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
    }

    Ok(Flags {
        config_dir,
        root,
        verbose,
        command,
    })
}

/// Loads the settings file, applying the command line overrides.
fn load_config(flags: &Flags) -> Config {
    config::paths::init_cli_override(flags.config_dir.clone());
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    if let Some(root) = &flags.root {
        config.gallery.media_root.clone_from(root);
    }
    config
}

/// Runs the parsed command and returns the process exit code.
pub fn run(flags: Flags) -> ExitCode {
    let config = load_config(&flags);
    let outcome = match &flags.command {
        Command::Tree { folder } => tree(&config, folder.as_deref()),
        Command::Thumbs { folder, disk } => thumbs(&config, folder.as_deref(), *disk),
        Command::Fetch { folder, endpoint } => {
            fetch(&config, folder.as_deref(), endpoint.as_deref())
        }
        Command::Browse { folder } => browse::run_stdio(&config, folder.as_deref()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn build(config: &Config, folder: Option<&str>) -> Result<Vec<Category>> {
    GalleryBuilder::from_config(&config.gallery).build(folder)
}

/// Prints `categories` as JSON; a failed build still prints an empty array.
fn print_tree(result: Result<Vec<Category>>) -> Result<()> {
    match result {
        Ok(categories) => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
            Ok(())
        }
        Err(err) => {
            println!("[]");
            Err(err)
        }
    }
}

fn tree(config: &Config, folder: Option<&str>) -> Result<()> {
    print_tree(build(config, folder))
}

fn thumbs(config: &Config, folder: Option<&str>, disk: bool) -> Result<()> {
    let categories = build(config, folder)?;
    let resolver = ThumbnailResolver::from_config(&config.gallery);
    let public_root = config.gallery.public_root();
    for category in &categories {
        let thumbnail = if disk {
            resolver.resolve_on_disk(&public_root, &category.path)
        } else {
            resolver.resolve(category)
        };
        println!("{}\t{}", category.name, thumbnail);
    }
    Ok(())
}

fn fetch(config: &Config, folder: Option<&str>, endpoint: Option<&str>) -> Result<()> {
    let endpoint = endpoint.unwrap_or(&config.remote.endpoint);
    let client = GalleryClient::new(endpoint)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    print_tree(runtime.block_on(client.fetch(folder)))
}
