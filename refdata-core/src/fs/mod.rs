pub mod paths;
pub mod persistence;

pub use paths::PathManager;
pub use persistence::load_state;
