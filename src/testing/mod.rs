
#[allow(unused_imports)]
pub use ports::FakeMigrateClient;
#[allow(unused_imports)]
pub use ports::Level;
#[allow(unused_imports)]
pub use ports::MapInputs;
#[allow(unused_imports)]
pub use ports::RecordingLog;
