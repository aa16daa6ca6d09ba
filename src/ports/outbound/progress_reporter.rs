/// ProgressReporter port for reporting progress during operations
///
/// Only the dataset load takes noticeable time; the reporter gives the
/// user feedback while it runs.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
