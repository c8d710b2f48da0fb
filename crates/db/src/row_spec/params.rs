//! Row spec for the params singleton.

use liquidstake_params::Params;

use super::{
    kv::{KVRowSpec, PackableKey},
    PARAMS_PREFIX,
};
use crate::errors::DbResult;

/// Key of the params singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamsKey;

impl PackableKey for ParamsKey {
    fn pack(&self) -> DbResult<Vec<u8>> {
        Ok(vec![PARAMS_PREFIX])
    }
}

/// ZST for the params row spec.
#[derive(Debug)]
pub struct ParamsRowSpec;

impl KVRowSpec for ParamsRowSpec {
    type Key = ParamsKey;
    type Value = Params;
}
