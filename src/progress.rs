use std::sync::Arc;

pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

pub(crate) fn report(progress: Option<&ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}
