//! Icon Exporter CLI
//!
//! Usage:
//!   icon-exporter [OPTIONS]
//!
//! With no options, runs the fixed export plan: renders the "file" and
//! "file-directory-fill" icons and writes them to static/file.svg and
//! static/file_directory.svg under the current directory.

use std::path::PathBuf;

use clap::Parser;

use icon_exporter::{
    default_plan, render_data_uri, render_icon, run_plan, IconPack, IconRegistry, SvgConfig,
};

#[derive(Parser)]
#[command(name = "icon-exporter")]
#[command(about = "Export built-in vector icons to static SVG assets")]
struct Cli {
    /// Directory against which destination paths are resolved
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Render a single icon to stdout instead of running the export plan
    #[arg(short, long)]
    name: Option<String>,

    /// With --name, emit a base64 data URI instead of raw SVG
    #[arg(long)]
    data_uri: bool,

    /// Icon pack (TOML) merged over the built-in set
    #[arg(short, long)]
    pack: Option<PathBuf>,

    /// List the names of all registered icons
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut registry = IconRegistry::builtin();
    if let Some(path) = &cli.pack {
        match IconPack::from_file(path) {
            Ok(pack) => registry.merge_pack(pack),
            Err(e) => {
                eprintln!("Error loading icon pack '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return;
    }

    // Single-icon mode writes to stdout and touches no files
    if let Some(name) = &cli.name {
        let Some(icon) = registry.get(name) else {
            eprintln!("Error: icon not found in registry: {}", name);
            std::process::exit(1);
        };
        let config = SvgConfig::default();
        if cli.data_uri {
            println!("{}", render_data_uri(icon, &config));
        } else {
            println!("{}", render_icon(icon, &config));
        }
        return;
    }

    match run_plan(&registry, &SvgConfig::default(), &cli.root, &default_plan()) {
        Ok(written) => {
            for path in &written {
                println!("wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
