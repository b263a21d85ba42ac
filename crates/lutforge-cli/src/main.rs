use clap::{Parser, Subcommand};
use lutforge_cli::commands::{
    run_analyze, run_generate, run_presets, run_validate, GenerateOptions,
};
use lutforge_core::config::{set_verbose, DEFAULT_LUT_SIZE};
use lutforge_core::lut::LutFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lutforge")]
#[command(version, about = "Color analysis and 3D LUT generator", long_about = None)]
struct Cli {
    /// Print debug messages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an image's color profile
    Analyze {
        /// Input image file
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// Print the analysis as YAML instead of a text report
        #[arg(long)]
        yaml: bool,
    },

    /// Generate LUT file(s) from a reference image
    Generate {
        /// Reference image whose look is the starting point
        #[arg(short, long, value_name = "IMAGE")]
        reference: PathBuf,

        /// Target image whose look to move toward
        #[arg(short, long, value_name = "IMAGE")]
        target: Option<PathBuf>,

        /// Target color (#RRGGBB) to pull the palette toward
        #[arg(long, value_name = "COLOR")]
        target_color: Option<String>,

        /// LUT title and output file stem
        #[arg(short, long, value_name = "NAME", default_value = "Generated LUT")]
        name: String,

        /// Cubic grid dimension
        #[arg(short, long, value_name = "N", default_value_t = DEFAULT_LUT_SIZE)]
        size: usize,

        /// Output format: "cube", "3dl", or "both"
        #[arg(short, long, value_name = "FORMAT", default_value = "cube")]
        format: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },

    /// Validate an existing LUT file
    Validate {
        /// LUT file (.cube or .3dl)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Expected grid size (read from the file's headers if omitted)
        #[arg(short, long, value_name = "N")]
        size: Option<usize>,
    },

    /// List or export the cinematic preset catalog
    Presets {
        /// List presets from a YAML catalog file instead of the built-ins
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Save the built-in catalog as NAME.yml in the presets directory
        #[arg(long, value_name = "NAME")]
        export: Option<String>,

        /// Directory for --export (defaults to ~/lutforge/presets)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn parse_formats(value: &str) -> Result<Vec<LutFormat>, String> {
    match value.to_lowercase().as_str() {
        "both" => Ok(vec![LutFormat::Cube, LutFormat::ThreeDl]),
        other => Ok(vec![LutFormat::parse(other)?]),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Analyze { input, yaml } => run_analyze(&input, yaml),
        Commands::Generate {
            reference,
            target,
            target_color,
            name,
            size,
            format,
            out,
        } => {
            let options = GenerateOptions {
                reference: &reference,
                target_image: target.as_deref(),
                target_color: target_color.as_deref(),
                name,
                size,
                formats: parse_formats(&format)?,
                out_dir: &out,
            };
            run_generate(&options)
        }
        Commands::Validate { input, size } => run_validate(&input, size),
        Commands::Presets {
            catalog,
            export,
            dir,
        } => run_presets(catalog.as_deref(), export.as_deref(), dir.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
