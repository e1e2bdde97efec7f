mod action_log;
mod action_output;
mod input_source;
mod migrate_client;

pub use action_log::ActionLog;
pub use action_output::ActionOutput;
pub use input_source::InputSource;
pub use migrate_client::MigrateClient;
