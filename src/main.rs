use clap::{Parser, Subcommand};
use mdsite::{config, generate, output, package};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build-step documentation generator: markdown in, HTML site + zip artifact out")]
#[command(long_about = "\
Build-step documentation generator: markdown in, HTML site + zip artifact out

Walks the sources directory, converts every markdown file to a templated
HTML page (title, stylesheet link, content), copies every other file
unchanged, then zips the site and registers it as a build artifact.

Source structure:

  docs/
  ├── index.md                 # → dist/site/index.html
  ├── guide/
  │   ├── intro.md             # → dist/site/guide/intro.html
  │   └── diagram.png          # copied byte-for-byte
  └── logo.svg                 # copied byte-for-byte

The generated site additionally carries one stylesheet at its root
(bundled base.css, or the configured replacement), linked from every page
by relative path.

A missing sources directory is a successful no-op, so projects without
documentation don't fail their build.

Run 'mdsite gen-config' to print a documented mdsite.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Markdown sources directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Generated site output directory
    #[arg(long, default_value = "dist/site", global = true)]
    output: PathBuf,

    /// Scratch directory used while packaging
    #[arg(long, default_value = "dist/work", global = true)]
    work_dir: PathBuf,

    /// Directory the archive and artifact manifest are written to
    #[arg(long, default_value = "dist/artifacts", global = true)]
    artifact_dir: PathBuf,

    /// Configuration file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: generate → package
    Build,
    /// Generate the HTML site from the markdown sources
    Generate,
    /// Zip the generated site and register it as a build artifact
    Package,
    /// Report what a build would process without writing anything
    Check,
    /// Print a stock mdsite.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let site_config = config::load_config(&cli.config)?;

    match cli.command {
        Command::Build => {
            println!("==> Stage 1: Generating {}", cli.output.display());
            let report = generate::generate(&cli.source, &cli.output, &site_config)?;
            output::print_generate_output(&report);
            if report.source_missing {
                return Ok(());
            }

            println!("==> Stage 2: Packaging");
            let packaged = package::package(
                &cli.output,
                &cli.work_dir,
                &cli.artifact_dir,
                &site_config.archive,
            )?;
            output::print_package_output(&packaged, &cli.artifact_dir);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Generate => {
            let report = generate::generate(&cli.source, &cli.output, &site_config)?;
            output::print_generate_output(&report);
        }
        Command::Package => {
            let packaged = package::package(
                &cli.output,
                &cli.work_dir,
                &cli.artifact_dir,
                &site_config.archive,
            )?;
            output::print_package_output(&packaged, &cli.artifact_dir);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            match generate::plan(&cli.source, &site_config)? {
                Some(files) => {
                    for line in output::format_file_list(&files) {
                        println!("{line}");
                    }
                    println!("==> {} files would be processed", files.len());
                }
                None => println!("Sources directory missing — nothing to build"),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
