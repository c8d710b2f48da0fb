//! The service object that owns the collaborators and runs units of work.

use std::{fmt, sync::Arc};

use liquidstake_db::{
    kv::KvStore,
    params::{ParamsReader, ParamsWriter},
};
use liquidstake_params::Params;
use liquidstake_primitives::coin::Coin;
use tracing::{debug, info, warn};

use crate::{
    ctx::{BlockHeader, Ctx},
    errors::{EngineError, EngineResult},
    events::Event,
    interfaces::{
        AccountKeeper, BankKeeper, EpochsKeeper, IbcKeeper, IcaControllerKeeper, IcaTxExecutor,
        ModuleAccount, StakingAggregates,
    },
    telemetry::Telemetry,
};

/// The module account collecting liquid-staked funds before they are transferred.
pub const DEPOSIT_MODULE_ACCOUNT: &str = "liquidstakeibc_deposit";

/// The module account receiving undelegated funds.
pub const UNDELEGATION_MODULE_ACCOUNT: &str = "liquidstakeibc_undelegation";

/// The external collaborators of the engine.
#[derive(Clone)]
pub struct Collaborators {
    /// Module account lookup.
    pub accounts: Arc<dyn AccountKeeper>,

    /// Supply and transfers on the origin ledger.
    pub bank: Arc<dyn BankKeeper>,

    /// Epoch schedules.
    pub epochs: Arc<dyn EpochsKeeper>,

    /// Interchain account registration and channels.
    pub ica_controller: Arc<dyn IcaControllerKeeper>,

    /// IBC core lookups.
    pub ibc: Arc<dyn IbcKeeper>,

    /// Interchain account transaction dispatch.
    pub ica_tx: Arc<dyn IcaTxExecutor>,

    /// Backing amounts tracked outside of the deposit store.
    pub staking: Arc<dyn StakingAggregates>,

    /// The sink samples are reported to after commit.
    pub telemetry: Arc<dyn Telemetry>,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

/// The result of a committed unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// The value returned by the operation.
    pub value: T,

    /// The events emitted by the operation, in emission order.
    pub events: Vec<Event>,
}

/// The entry point of the engine.
///
/// Holds no state of its own; every operation reads and writes through the [`Ctx`] it is given.
#[derive(Debug, Clone)]
pub struct Keeper {
    pub(crate) collaborators: Collaborators,
}

impl Keeper {
    /// Creates a keeper over `collaborators`.
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    /// Returns the collaborators.
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Runs `f` as one unit of work against `store`.
    ///
    /// If `f` succeeds its writes are committed atomically, its samples are reported and its
    /// events are returned. If it fails nothing it did is kept.
    pub fn execute<S, T, F>(
        &self,
        store: &mut S,
        header: BlockHeader,
        f: F,
    ) -> EngineResult<Outcome<T>>
    where
        S: KvStore,
        F: FnOnce(&Self, &mut Ctx<'_>) -> EngineResult<T>,
    {
        let height = header.height;

        let (value, batch, events, samples) = {
            let mut ctx = Ctx::new(&*store, header);

            let value = match f(self, &mut ctx) {
                Ok(value) => value,
                Err(err) => {
                    warn!(%height, %err, "unit of work aborted, discarding its writes");
                    return Err(err);
                }
            };

            let (batch, events, samples) = ctx.into_parts();
            (value, batch, events, samples)
        };

        let writes = batch.len();
        store.commit(batch)?;

        for sample in &samples {
            self.collaborators.telemetry.set_gauge(sample);
        }

        debug!(%height, %writes, events = events.len(), samples = samples.len(), "committed unit of work");

        Ok(Outcome { value, events })
    }

    /// Returns the validated protocol parameters.
    pub fn params(&self, ctx: &Ctx<'_>) -> EngineResult<Params> {
        let params = ctx.params()?;
        params.validate()?;

        Ok(params)
    }

    /// Validates and stores `params`.
    pub fn set_params(&self, ctx: &mut Ctx<'_>, params: &Params) -> EngineResult<()> {
        params.validate()?;
        ctx.set_params(params)?;

        info!(epoch_identifier = %params.delegation_epoch_identifier, "updated params");

        Ok(())
    }

    /// Returns the module account collecting deposits.
    pub fn deposit_module_account(&self) -> EngineResult<ModuleAccount> {
        self.module_account(DEPOSIT_MODULE_ACCOUNT)
    }

    /// Returns the module account receiving undelegations.
    pub fn undelegation_module_account(&self) -> EngineResult<ModuleAccount> {
        self.module_account(UNDELEGATION_MODULE_ACCOUNT)
    }

    fn module_account(&self, name: &str) -> EngineResult<ModuleAccount> {
        self.collaborators
            .accounts
            .module_account(name)
            .ok_or_else(|| EngineError::NotFound(format!("module account {name}")))
    }

    /// Sends the protocol fee held by `module_account` to `fee_address`.
    pub fn send_protocol_fee(
        &self,
        protocol_fee: &[Coin],
        module_account: &str,
        fee_address: &str,
    ) -> EngineResult<()> {
        validate_address(fee_address)?;

        self.collaborators.bank.send_coins_from_module_to_account(
            module_account,
            fee_address,
            protocol_fee,
        )?;

        info!(%module_account, %fee_address, coins = protocol_fee.len(), "sent protocol fee");

        Ok(())
    }
}

/// Checks that `address` is a bech32 encoded account address.
///
/// The human-readable prefix is not checked against the origin ledger's.
fn validate_address(address: &str) -> EngineResult<()> {
    match bech32::decode(address) {
        Ok((_, data)) if !data.is_empty() => Ok(()),
        _ => Err(EngineError::InvalidAddress(address.to_string())),
    }
}
