use crate::error::Error;

/// Outcome of [`Scene::render`](super::Scene::render).
#[derive(Debug, Default)]
pub struct SceneReport {
    /// Number of shapes drawn without error.
    pub drawn: usize,
    /// Label and error of every shape that failed, in draw order.
    pub failures: Vec<(String, Error)>,
}

impl SceneReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
