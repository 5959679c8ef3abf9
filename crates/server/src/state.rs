use std::sync::Arc;

use service::locations::directory::LocationDirectory;

/// Shared handler state: read access to the housing directory.
///
/// The directory is held behind its trait so tests can substitute sources;
/// the production composition root wires in [`service::locations::query::LocationQueryService`].
#[derive(Clone)]
pub struct ServerState {
    pub locations: Arc<dyn LocationDirectory>,
}
