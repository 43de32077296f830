mod conf;
pub use conf::ConfigTable;

mod env;
pub use env::{Env, EnvVar};

mod labels;
pub use labels::Labels;

mod secrets;
pub use secrets::SecretMounts;

pub mod constants;
