//! Static reference data: the roadmap phases and the architectural layers
//! of a Java/Selenium BDD framework.

mod layers;
mod phases;

pub use layers::{layer, layers, Layer, LayerKind, UnknownLayer};
pub use phases::{phase, phases, Phase};

/// Qualities every framework built on this blueprint aims for.
pub const PRINCIPLES: [&str; 4] = [
    "Readable (BDD)",
    "Maintainable (POM)",
    "Reusable (Utils)",
    "Scalable (Parallel)",
];
