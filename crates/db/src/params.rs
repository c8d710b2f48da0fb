//! The params store.

use liquidstake_params::Params;

use crate::{
    errors::DbResult,
    kv::{KvRead, KvWrite, RowRead, RowWrite},
    row_spec::params::{ParamsKey, ParamsRowSpec},
};

/// Read access to the params singleton.
pub trait ParamsReader: KvRead {
    /// Returns the stored params, or the defaults if none have been stored yet.
    fn params(&self) -> DbResult<Params> {
        Ok(self
            .get_row::<ParamsRowSpec>(&ParamsKey)?
            .unwrap_or_default())
    }
}

impl<T: KvRead + ?Sized> ParamsReader for T {}

/// Write access to the params singleton.
pub trait ParamsWriter: KvWrite {
    /// Replaces the stored params.
    fn set_params(&mut self, params: &Params) -> DbResult<()> {
        self.put_row::<ParamsRowSpec>(&ParamsKey, params)
    }
}

impl<T: KvWrite + ?Sized> ParamsWriter for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory::MemStore;

    #[test]
    fn test_missing_params_read_as_defaults() {
        let mut store = MemStore::default();
        assert_eq!(store.params().unwrap(), Params::default());

        let params = Params {
            fee_address: "persistence1fee".to_string(),
            ..Default::default()
        };
        store.set_params(&params).unwrap();

        assert_eq!(store.params().unwrap(), params);
    }
}
