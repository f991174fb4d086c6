/// Integration tests for the application layer
mod test_utilities;

use distro_sbom::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use test_utilities::mocks::*;

const CYCLONEDX_STUB: &str = r#"{"bomFormat":"CycloneDX"}"#;

fn inventory_use_case(
    locator: MockExecutableLocator,
    runner: &MockCommandRunner,
    reporter: &MockProgressReporter,
    temp_dir: &TempDir,
) -> GenerateInventorySbomUseCase<MockExecutableLocator, MockCommandRunner, MockProgressReporter> {
    GenerateInventorySbomUseCase::new(locator, runner.clone(), reporter.clone())
        .with_temp_dir(temp_dir.path().join("tmp"))
}

fn workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("tmp")).unwrap();
    temp_dir
}

fn staging_is_empty(temp_dir: &TempDir) -> bool {
    fs::read_dir(temp_dir.path().join("tmp")).unwrap().count() == 0
}

#[test]
fn test_lister_runs_documented_command_per_manager() {
    let cases = [
        (PackageManager::Apt, "dpkg-query", vec!["-W", "-f=${Package} ${Version}\n"]),
        (PackageManager::Dnf, "dnf", vec!["list", "installed"]),
        (PackageManager::Yum, "yum", vec!["list", "installed"]),
    ];

    for (manager, program, args) in cases {
        let stdout = format!("raw {} output\n  with   odd spacing\n", program);
        let runner = MockCommandRunner::new().with_response(program, 0, &stdout, "");

        let list = PackageLister::new(&runner).list(manager).unwrap();

        assert_eq!(list.as_bytes(), stdout.as_bytes());
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program(), program);
        assert_eq!(calls[0].args(), args.as_slice());
    }
}

#[test]
fn test_lister_failure_contains_stderr() {
    let runner = MockCommandRunner::new().with_response(
        "yum",
        1,
        "",
        "Error: Cannot retrieve repository metadata",
    );

    let error = PackageLister::new(&runner)
        .list(PackageManager::Yum)
        .unwrap_err();

    assert!(error
        .to_string()
        .contains("Error: Cannot retrieve repository metadata"));
    assert_eq!(ExitCode::for_error(&error), ExitCode::SubprocessFailed);
}

#[test]
fn test_generator_removes_inventory_after_success() {
    let temp_dir = workspace();
    let output = temp_dir.path().join("sbom.json");
    let runner = MockCommandRunner::new()
        .with_response("distro2sbom", 0, "", "")
        .writing_sbom(CYCLONEDX_STUB);

    InventorySbomGenerator::new(&runner)
        .with_temp_dir(Some(temp_dir.path().join("tmp")))
        .generate(
            &PackageList::new("foo 1.0\n".to_string()),
            &output,
            SbomSchema::CycloneDx,
            DocumentFormat::Json,
        )
        .unwrap();

    let staged = runner.staged_inventories();
    assert_eq!(staged.len(), 1);
    assert_eq!(staged[0].content.as_deref(), Some("foo 1.0\n"));
    assert!(!staged[0].path.exists());
    assert!(staging_is_empty(&temp_dir));
    assert_eq!(fs::read_to_string(&output).unwrap(), CYCLONEDX_STUB);
}

#[test]
fn test_generator_removes_inventory_after_failure() {
    let temp_dir = workspace();
    let runner = MockCommandRunner::new().with_response(
        "distro2sbom",
        1,
        "",
        "Traceback: unable to determine distribution",
    );

    let error = InventorySbomGenerator::new(&runner)
        .with_temp_dir(Some(temp_dir.path().join("tmp")))
        .generate(
            &PackageList::new("foo 1.0\n".to_string()),
            &temp_dir.path().join("sbom.json"),
            SbomSchema::CycloneDx,
            DocumentFormat::Json,
        )
        .unwrap_err();

    assert!(error
        .to_string()
        .contains("Traceback: unable to determine distribution"));
    let staged = runner.staged_inventories();
    assert_eq!(staged.len(), 1);
    assert!(staged[0].content.is_some());
    assert!(!staged[0].path.exists());
    assert!(staging_is_empty(&temp_dir));
}

#[test]
fn test_inventory_flow_without_package_manager() {
    let temp_dir = workspace();
    let runner = MockCommandRunner::new();
    let reporter = MockProgressReporter::new();
    let locator = MockExecutableLocator::with(&["pacman"]);
    let use_case = inventory_use_case(locator.clone(), &runner, &reporter, &temp_dir);

    let error = use_case
        .execute(InventorySbomRequest::new(temp_dir.path().join("sbom.json")))
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&error), ExitCode::EnvironmentUnsupported);
    assert_eq!(locator.probed(), vec!["apt", "dnf", "yum"]);
    assert!(runner.calls().is_empty());
    assert!(!temp_dir.path().join("sbom.json").exists());
}

#[test]
fn test_inventory_flow_end_to_end_with_mocks() {
    let temp_dir = workspace();
    let output = temp_dir.path().join("sbom.json");
    let runner = MockCommandRunner::new()
        .with_response("dpkg-query", 0, "foo 1.0\nbar 2.3\n", "")
        .with_response("distro2sbom", 0, "", "")
        .writing_sbom(CYCLONEDX_STUB);
    let reporter = MockProgressReporter::new();
    let use_case = inventory_use_case(
        MockExecutableLocator::with(&["apt", "yum"]),
        &runner,
        &reporter,
        &temp_dir,
    );

    let response = use_case
        .execute(InventorySbomRequest::new(output.clone()))
        .unwrap();

    assert_eq!(response.package_manager, PackageManager::Apt);
    assert_eq!(fs::read_to_string(&output).unwrap(), CYCLONEDX_STUB);
    assert_eq!(runner.programs(), vec!["dpkg-query", "distro2sbom"]);
    assert_eq!(
        runner.staged_inventories()[0].content.as_deref(),
        Some("foo 1.0\nbar 2.3\n")
    );
    assert!(staging_is_empty(&temp_dir));
    assert!(reporter.contains("Detected package manager: apt"));
    assert!(reporter.contains("SBOM generated successfully and saved to"));
}

#[test]
fn test_scan_flow_without_scanner() {
    let temp_dir = TempDir::new().unwrap();
    let runner = MockCommandRunner::new().with_response("syft", 0, CYCLONEDX_STUB, "");
    let reporter = MockProgressReporter::new();
    let use_case = GenerateScanSbomUseCase::new(
        MockExecutableLocator::with(&["apt"]),
        runner.clone(),
        reporter.clone(),
    );

    let error = use_case
        .execute(ScanSbomRequest::new(temp_dir.path().join("sbom.json")))
        .unwrap_err();

    assert_eq!(ExitCode::for_error(&error), ExitCode::DependencyMissing);
    assert!(error
        .to_string()
        .contains("Please install syft from https://github.com/anchore/syft"));
    assert!(runner.calls().is_empty());
    assert!(reporter.get_messages().is_empty());
}

#[test]
fn test_scan_flow_writes_scanner_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("sbom.json");
    let runner = MockCommandRunner::new().with_response("syft", 0, CYCLONEDX_STUB, "");
    let reporter = MockProgressReporter::new();
    let use_case = GenerateScanSbomUseCase::new(
        MockExecutableLocator::with(&["syft"]),
        runner.clone(),
        reporter.clone(),
    );

    let request = ScanSbomRequest::new(output.clone())
        .with_target(temp_dir.path().to_path_buf())
        .with_format(ScanOutputFormat::SpdxJson);
    let response = use_case.execute(request).unwrap();

    assert_eq!(response.package_manager, PackageManager::Unknown);
    assert_eq!(fs::read_to_string(&output).unwrap(), CYCLONEDX_STUB);
    let calls = runner.calls();
    assert_eq!(
        calls[0].to_string(),
        format!("syft dir:{} --output spdx-json", temp_dir.path().display())
    );
    assert!(reporter.contains("Detected package manager: unknown"));
    assert!(reporter.contains("Rich SBOM generated"));
}

#[test]
fn test_scan_flow_failure_maps_to_subprocess_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let runner = MockCommandRunner::new().with_response("syft", 1, "", "could not catalog /proc");
    let use_case = GenerateScanSbomUseCase::new(
        MockExecutableLocator::with(&["syft"]),
        runner,
        MockProgressReporter::new(),
    );

    let request = ScanSbomRequest::new(temp_dir.path().join("sbom.json"))
        .with_target(PathBuf::from(temp_dir.path()));
    let error = use_case.execute(request).unwrap_err();

    assert_eq!(ExitCode::for_error(&error), ExitCode::SubprocessFailed);
    assert!(error.to_string().contains("could not catalog /proc"));
}
