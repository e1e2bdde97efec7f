pub mod atlas_command;
pub mod env_inputs;
pub mod scoped_config_file;
pub mod workflow_commands;

pub use atlas_command::AtlasCommandAdapter;
pub use env_inputs::EnvInputSource;
pub use scoped_config_file::ScopedConfigFile;
pub use workflow_commands::WorkflowCommands;
