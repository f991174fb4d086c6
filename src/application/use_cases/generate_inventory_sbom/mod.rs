use crate::application::dto::{InventorySbomRequest, SbomResponse};
use crate::application::services::{EnvironmentProber, InventorySbomGenerator, PackageLister};
use crate::ports::outbound::{CommandRunner, ExecutableLocator, ProgressReporter};
use crate::sbom_generation::domain::{PackageList, PackageManager};
use crate::sbom_generation::services::CommandBuilder;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use std::path::PathBuf;

/// GenerateInventorySbomUseCase - SBOM from the installed package inventory
///
/// Probes the package manager, lists installed packages, and converts the
/// list with distro2sbom. Nothing is listed or generated when probing fails.
///
/// # Type Parameters
/// * `L` - ExecutableLocator implementation
/// * `R` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateInventorySbomUseCase<L, R, PR> {
    locator: L,
    runner: R,
    progress_reporter: PR,
    temp_dir: Option<PathBuf>,
}

impl<L, R, PR> GenerateInventorySbomUseCase<L, R, PR>
where
    L: ExecutableLocator,
    R: CommandRunner,
    PR: ProgressReporter,
{
    /// Creates a new GenerateInventorySbomUseCase with injected dependencies
    pub fn new(locator: L, runner: R, progress_reporter: PR) -> Self {
        Self {
            locator,
            runner,
            progress_reporter,
            temp_dir: None,
        }
    }

    /// Stages the temporary inventory file in `temp_dir`
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = Some(temp_dir);
        self
    }

    /// Executes the inventory-based SBOM generation
    ///
    /// # Arguments
    /// * `request` - output path, schema, format and optional manager override
    ///
    /// # Returns
    /// SbomResponse naming the written file and the package manager used
    pub fn execute(&self, request: InventorySbomRequest) -> Result<SbomResponse> {
        // Step 1: Determine the package manager
        let package_manager = self.resolve_package_manager(&request)?;

        // Step 2: Validate the destination before doing any work
        validate_output_path(&request.output_path)?;

        // Step 3: Capture the installed package inventory
        let package_list = self.list_packages(package_manager)?;

        // Step 4: Convert the inventory into an SBOM
        self.convert(&package_list, &request)?;

        self.progress_reporter.report_completion(&format!(
            "✅ SBOM generated successfully and saved to {}",
            request.output_path.display()
        ));

        Ok(SbomResponse::new(request.output_path, package_manager))
    }

    fn resolve_package_manager(&self, request: &InventorySbomRequest) -> Result<PackageManager> {
        match request.package_manager {
            Some(package_manager) => {
                self.progress_reporter
                    .report(&format!("🔧 Using package manager: {}", package_manager));
                Ok(package_manager)
            }
            None => {
                let package_manager = EnvironmentProber::new(&self.locator).require()?;
                self.progress_reporter.report(&format!(
                    "🔍 Detected package manager: {}",
                    package_manager
                ));
                Ok(package_manager)
            }
        }
    }

    fn list_packages(&self, package_manager: PackageManager) -> Result<PackageList> {
        let command = CommandBuilder::listing(package_manager)?;
        self.progress_reporter.report(&format!(
            "📦 Listing installed packages with: {}",
            command
        ));

        let package_list = PackageLister::new(&self.runner).list(package_manager)?;

        self.progress_reporter.report(&format!(
            "✅ Collected package inventory ({} bytes)",
            package_list.as_bytes().len()
        ));

        Ok(package_list)
    }

    fn convert(&self, package_list: &PackageList, request: &InventorySbomRequest) -> Result<()> {
        let generator =
            InventorySbomGenerator::new(&self.runner).with_temp_dir(self.temp_dir.clone());

        let result = generator.generate_with(
            package_list,
            &request.output_path,
            request.schema,
            request.format,
            |command| {
                self.progress_reporter
                    .begin_step(&format!("⚙️  Running: {}", command))
            },
        );
        self.progress_reporter.end_step();

        result
    }
}
