use distro_sbom::adapters::inbound::cli::{report_failure, InventoryArgs};
use distro_sbom::prelude::*;
use std::process;

fn main() {
    let args = InventoryArgs::parse_args();

    let exit_code = match run(args) {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            report_failure(&e);
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: InventoryArgs) -> Result<SbomResponse> {
    // Create adapters (Dependency Injection)
    let use_case = GenerateInventorySbomUseCase::new(
        SearchPathLocator::new(),
        ProcessRunner::new(),
        StderrProgressReporter::new(),
    );

    let request = InventorySbomRequest::new(args.output)
        .with_schema(args.sbom)
        .with_format(args.format)
        .with_package_manager(args.package_manager);

    use_case.execute(request)
}
