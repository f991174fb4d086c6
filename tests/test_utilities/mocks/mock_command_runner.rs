use distro_sbom::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Inventory file seen by the conversion tool at the moment it ran
#[derive(Debug, Clone)]
pub struct StagedInventory {
    pub path: PathBuf,
    pub content: Option<String>,
}

/// Mock CommandRunner with scripted per-program results
///
/// Unscripted programs behave like a missing command (exit 127).
/// A scripted conversion tool that succeeds writes `sbom_content` to its
/// `--output-file`; `run_to_file` writes the scripted stdout to the destination.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    responses: HashMap<String, CommandOutput>,
    sbom_content: Option<String>,
    pub calls: Arc<Mutex<Vec<CommandSpec>>>,
    pub staged_inventories: Arc<Mutex<Vec<StagedInventory>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(
        mut self,
        program: &str,
        exit_code: i32,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.responses.insert(
            program.to_string(),
            CommandOutput::new(Some(exit_code), stdout.to_string(), stderr.to_string()),
        );
        self
    }

    pub fn writing_sbom(mut self, content: &str) -> Self {
        self.sbom_content = Some(content.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| c.program().to_string())
            .collect()
    }

    pub fn staged_inventories(&self) -> Vec<StagedInventory> {
        self.staged_inventories.lock().unwrap().clone()
    }

    fn respond(&self, command: &CommandSpec) -> CommandOutput {
        self.calls.lock().unwrap().push(command.clone());
        self.responses
            .get(command.program())
            .cloned()
            .unwrap_or_else(|| {
                CommandOutput::new(
                    Some(127),
                    String::new(),
                    format!("{}: command not found", command.program()),
                )
            })
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        if let Some(input) = command.arg_value("--input-file") {
            let path = PathBuf::from(input);
            let content = fs::read_to_string(&path).ok();
            self.staged_inventories
                .lock()
                .unwrap()
                .push(StagedInventory { path, content });
        }

        let output = self.respond(command);

        if output.success() {
            if let (Some(destination), Some(content)) =
                (command.arg_value("--output-file"), self.sbom_content.as_ref())
            {
                fs::write(destination, content)?;
            }
        }

        Ok(output)
    }

    fn run_to_file(&self, command: &CommandSpec, destination: &Path) -> Result<CommandOutput> {
        let mut output = self.respond(command);
        fs::write(destination, &output.stdout)?;
        output.stdout.clear();
        Ok(output)
    }
}
