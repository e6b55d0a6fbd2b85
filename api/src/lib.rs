pub mod abi;
pub mod actions;
pub mod client;
pub mod consts;
pub mod error;
pub mod pipeline;
pub mod query;
#[cfg(feature = "http")]
pub mod rpc;
pub mod state;
pub mod units;

pub mod prelude {
    pub use crate::actions::*;
    pub use crate::client::*;
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::pipeline::*;
    pub use crate::query::*;
    pub use crate::state::*;
    pub use crate::units::*;
    pub use alloy_primitives::{Address, TxHash, U256};
}

#[cfg(test)]
pub(crate) mod test_utils;
