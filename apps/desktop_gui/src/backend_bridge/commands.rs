//! Backend commands queued from UI to backend worker.

use shared::domain::FormInput;

#[derive(Debug)]
pub enum BackendCommand {
    Submit { form: FormInput },
}
