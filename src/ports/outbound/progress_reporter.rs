/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while external tools run.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Marks the start of a long-running step (e.g., an external tool run)
    ///
    /// The step stays active until `end_step` or `report_completion`.
    ///
    /// # Arguments
    /// * `message` - Description of the running step
    fn begin_step(&self, message: &str);

    /// Ends the active step, if any, without printing anything
    fn end_step(&self);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
