//! Centralized configuration constants

/// Node identity
pub mod identity {
    /// Separator between the owning scope and the display name in a node id
    pub const ID_SEPARATOR: &str = "::";
}

/// Component scoring weights
pub mod scoring {
    /// Weight applied to each internal directed edge
    pub const EDGE_WEIGHT: f64 = 2.0;

    /// Multiplier applied to `density * node_count`
    pub const DENSITY_WEIGHT: f64 = 5.0;
}

/// Thread pool configuration
pub mod thread_pool {
    /// Upper bound accepted for an explicit worker count
    pub const MAX_WORKERS: usize = 256;

    /// Below this many definitions, resolution stays on the calling thread
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
}
