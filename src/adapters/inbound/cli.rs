use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;

use crate::sbom_generation::domain::{DocumentFormat, PackageManager, SbomSchema, ScanOutputFormat};

/// Default SBOM destination for both binaries
pub const DEFAULT_OUTPUT_FILE: &str = "sbom.json";

/// Generate an SBOM from the host's installed package inventory
#[derive(Parser, Debug)]
#[command(name = "distro-sbom")]
#[command(version)]
#[command(
    about = "Generate an SBOM from the installed package inventory using distro2sbom",
    long_about = None
)]
pub struct InventoryArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// SBOM schema: cyclonedx or spdx
    #[arg(short, long, default_value = "cyclonedx")]
    pub sbom: SbomSchema,

    /// Document format: json, tag or yaml
    #[arg(short, long, default_value = "json")]
    pub format: DocumentFormat,

    /// Package manager to use instead of probing the search path: apt, dnf or yum
    #[arg(short = 'm', long, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,
}

impl InventoryArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Generate a rich SBOM by scanning the filesystem with syft
#[derive(Parser, Debug)]
#[command(name = "distro-sbom-scan")]
#[command(version)]
#[command(
    about = "Generate a rich SBOM by scanning the filesystem with syft",
    long_about = None
)]
pub struct ScanArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// syft output format (cyclonedx-json, cyclonedx-xml, spdx-json, spdx-tag-value, syft-json, table)
    #[arg(short, long, default_value = "cyclonedx-json")]
    pub format: ScanOutputFormat,

    /// Directory to scan
    #[arg(short, long, default_value = "/")]
    pub target: PathBuf,
}

impl ScanArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Prints an error and its cause chain to stderr
pub fn report_failure(error: &anyhow::Error) {
    eprintln!(
        "\n{}\n",
        "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
    );
    eprintln!("{}", error);

    for cause in error.chain().skip(1) {
        eprintln!(
            "\n{} {}",
            "Caused by:".if_supports_color(Stream::Stderr, |text| text.yellow()),
            cause
        );
    }

    eprintln!();
}
