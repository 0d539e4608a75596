use crate::api::GenerationAdapter;
use crate::catalog::{self, LayerKind, Phase};

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub phase: u32,
    pub layer: LayerKind,
    pub project: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: 1,
            layer: LayerKind::Business,
            project: None,
        }
    }
}

impl Session {
    /// Selects a roadmap phase; unknown ids leave the selection unchanged.
    pub fn select_phase(&mut self, id: u32) -> Option<&'static Phase> {
        let phase = catalog::phase(id)?;
        self.phase = phase.id;
        Some(phase)
    }

    pub fn select_layer(&mut self, layer: LayerKind) {
        self.layer = layer;
    }
}

/// Runtime context shared by every command.
pub struct AppCtx {
    pub adapter: GenerationAdapter,
    pub session: Session,
}

impl AppCtx {
    pub fn new(adapter: GenerationAdapter) -> Self {
        Self {
            adapter,
            session: Session::default(),
        }
    }
}
