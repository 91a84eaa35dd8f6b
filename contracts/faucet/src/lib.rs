pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
pub mod utils;

pub mod actions {
    pub mod execute;
    pub mod instantiate;
    pub mod migrate;
    pub mod query;
}
