use crate::application::dto::{SbomResponse, ScanSbomRequest};
use crate::application::services::{EnvironmentProber, ScanSbomGenerator};
use crate::ports::outbound::{CommandRunner, ExecutableLocator, ProgressReporter};
use crate::shared::security::{validate_output_path, validate_scan_target};
use crate::shared::Result;

/// GenerateScanSbomUseCase - rich SBOM from a filesystem scan
///
/// Fails fast when the scanner is not installed. The detected package
/// manager is informational only; `unknown` does not stop the scan.
///
/// # Type Parameters
/// * `L` - ExecutableLocator implementation
/// * `R` - CommandRunner implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateScanSbomUseCase<L, R, PR> {
    locator: L,
    runner: R,
    progress_reporter: PR,
}

impl<L, R, PR> GenerateScanSbomUseCase<L, R, PR>
where
    L: ExecutableLocator,
    R: CommandRunner,
    PR: ProgressReporter,
{
    /// Creates a new GenerateScanSbomUseCase with injected dependencies
    pub fn new(locator: L, runner: R, progress_reporter: PR) -> Self {
        Self {
            locator,
            runner,
            progress_reporter,
        }
    }

    /// Executes the filesystem-scan SBOM generation
    ///
    /// # Arguments
    /// * `request` - output path, scanner format and scan target
    ///
    /// # Returns
    /// SbomResponse naming the written file and the detected package manager
    pub fn execute(&self, request: ScanSbomRequest) -> Result<SbomResponse> {
        let generator = ScanSbomGenerator::new(&self.locator, &self.runner);

        // Step 1: The scanner must be installed
        generator.ensure_available()?;

        // Step 2: Detect the package manager (informational)
        let package_manager = EnvironmentProber::new(&self.locator).detect();
        self.progress_reporter.report(&format!(
            "🔍 Detected package manager: {}",
            package_manager
        ));

        // Step 3: Validate inputs before the scanner touches anything
        validate_scan_target(&request.target_path)?;
        validate_output_path(&request.output_path)?;

        // Step 4: Scan
        let result = generator.generate_with(
            &request.target_path,
            &request.output_path,
            request.format,
            |command| {
                self.progress_reporter
                    .begin_step(&format!("⚙️  Running: {}", command))
            },
        );
        self.progress_reporter.end_step();
        result?;

        self.progress_reporter.report_completion(&format!(
            "✅ Rich SBOM generated: {}",
            request.output_path.display()
        ));

        Ok(SbomResponse::new(request.output_path, package_manager))
    }
}
