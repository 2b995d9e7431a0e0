// src/pipeline.rs
use crate::stage::Stage;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered list of stages applied one after another.
#[derive(Default, Clone)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Names of the stages in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current) {
                continue;
            }
            current = stage.apply(current);
        }

        current
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}
