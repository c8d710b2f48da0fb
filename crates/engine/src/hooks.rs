//! Reactions to epoch boundaries.

use liquidstake_primitives::types::Epoch;
use tracing::debug;

use crate::{
    ctx::Ctx,
    errors::{EngineError, EngineResult},
    keeper::Keeper,
};

impl Keeper {
    /// Returns the current epoch of the schedule `identifier`.
    pub fn epoch_number(&self, identifier: &str) -> EngineResult<Epoch> {
        self.collaborators
            .epochs
            .current_epoch(identifier)
            .ok_or_else(|| EngineError::NotFound(format!("epoch schedule {identifier}")))
    }

    /// Handles the start of `epoch` of the schedule `identifier`.
    ///
    /// Deposits are only created at the start of a delegation epoch. Returns the number created.
    pub fn before_epoch_start(
        &self,
        ctx: &mut Ctx<'_>,
        identifier: &str,
        epoch: Epoch,
    ) -> EngineResult<usize> {
        let params = self.params(ctx)?;

        if identifier != params.delegation_epoch_identifier {
            debug!(%identifier, %epoch, "ignoring epoch of another schedule");
            return Ok(0);
        }

        self.create_deposits(ctx, epoch)
    }
}

#[cfg(test)]
mod tests {
    use liquidstake_db::{
        deposits::DepositReader, host_chains::HostChainWriter, inmemory::MemStore,
    };
    use liquidstake_params::Params;
    use liquidstake_test_utils::fixtures::host_chain;

    use super::*;
    use crate::testing::{header, Harness};

    #[test]
    fn test_epoch_number() {
        let harness = Harness::new();
        harness.fake.set_epoch("day", 12);

        assert_eq!(harness.keeper.epoch_number("day").unwrap(), 12);
        assert!(matches!(
            harness.keeper.epoch_number("week"),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn test_deposits_are_created_on_delegation_epochs_only() {
        let harness = Harness::new();
        let mut store = MemStore::default();
        store.set_host_chain(&host_chain("cosmoshub-4")).unwrap();
        let delegation_epoch = Params::default().delegation_epoch_identifier;

        let created = harness
            .keeper
            .execute(&mut store, header(), |keeper, ctx| {
                keeper.before_epoch_start(ctx, "hour", 5)
            })
            .unwrap()
            .value;
        assert_eq!(created, 0);
        assert!(store.all_deposits().unwrap().is_empty());

        let created = harness
            .keeper
            .execute(&mut store, header(), |keeper, ctx| {
                keeper.before_epoch_start(ctx, &delegation_epoch, 5)
            })
            .unwrap()
            .value;
        assert_eq!(created, 1);
        assert!(store
            .deposit_for_chain_and_epoch("cosmoshub-4", 5)
            .unwrap()
            .is_some());
    }
}
