use crate::ports::{ActionLog, MigrateClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: MigrateClient, L: ActionLog> {
    client: C,
    log: L,
}

impl<C: MigrateClient, L: ActionLog> AppContext<C, L> {
    /// Create a new application context.
    pub fn new(client: C, log: L) -> Self {
        Self { client, log }
    }

    /// Get a reference to the migrate client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the run logger.
    pub fn log(&self) -> &L {
        &self.log
    }
}
