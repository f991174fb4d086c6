use distro_sbom::adapters::inbound::cli::{report_failure, ScanArgs};
use distro_sbom::prelude::*;
use std::process;

fn main() {
    let args = ScanArgs::parse_args();

    let exit_code = match run(args) {
        Ok(_) => ExitCode::Success,
        Err(e) => {
            report_failure(&e);
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: ScanArgs) -> Result<SbomResponse> {
    // Create adapters (Dependency Injection)
    let use_case = GenerateScanSbomUseCase::new(
        SearchPathLocator::new(),
        ProcessRunner::new(),
        StderrProgressReporter::new(),
    );

    let request = ScanSbomRequest::new(args.output)
        .with_format(args.format)
        .with_target(args.target);

    use_case.execute(request)
}
