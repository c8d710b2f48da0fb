//! The exchange-rate engine.
//!
//! The exchange rate of a host chain, its c-value, is the supply of its receipt token divided by
//! all capital backing that supply. A chain whose rate leaves its configured band is disabled
//! until governance intervenes.

use liquidstake_db::{
    deposits::DepositReader,
    host_chains::{HostChainReader, HostChainWriter},
};
use liquidstake_primitives::{dec::Dec, host_chain::HostChain};
use tracing::{error, info};

use crate::{
    ctx::Ctx,
    errors::{EngineError, EngineResult},
    events::Event,
    keeper::Keeper,
    telemetry::Gauge,
};

/// The number of days the yearly autocompound factor is spread over.
const DAYS_PER_YEAR: u128 = 365;

impl Keeper {
    /// Recomputes the exchange rate of every host chain.
    pub fn update_c_values(&self, ctx: &mut Ctx<'_>) -> EngineResult<()> {
        for host_chain in ctx.all_host_chains()? {
            self.update_c_value(ctx, host_chain)?;
        }

        Ok(())
    }

    /// Recomputes the exchange rate of `host_chain`, disabling it if the rate leaves its band.
    ///
    /// Returns the stored record.
    pub fn update_c_value(
        &self,
        ctx: &mut Ctx<'_>,
        mut host_chain: HostChain,
    ) -> EngineResult<HostChain> {
        let chain_id = host_chain.chain_id.clone();
        let collaborators = &self.collaborators;

        let minted = collaborators.bank.supply_of(&host_chain.mint_denom()).amount;
        let tokenized = collaborators.staking.tokenized_untokenized(&chain_id);
        let delegated = host_chain
            .total_delegations()
            .ok_or(EngineError::AmountOverflow)?;
        let on_origin = ctx.deposit_amount_on_origin(&chain_id)?;
        let on_host_chain = ctx.deposit_amount_on_host_chain(&chain_id)?;
        let unbonding = collaborators.staking.unbonded_over_threshold(&host_chain);

        let backing = [delegated, on_origin, on_host_chain, unbonding]
            .into_iter()
            .try_fold(tokenized, u128::checked_add)
            .ok_or(EngineError::AmountOverflow)?;

        let c_value = if minted == 0 || backing == 0 {
            Dec::one()
        } else {
            Dec::checked_from_ratio(minted, backing).ok_or(EngineError::AmountOverflow)?
        };

        info!(
            %chain_id,
            %minted,
            %backing,
            %tokenized,
            %delegated,
            %on_origin,
            %on_host_chain,
            %unbonding,
            new_c_value = %c_value,
            old_c_value = %host_chain.c_value,
            "updated c_value"
        );

        host_chain.last_c_value = host_chain.c_value;
        host_chain.c_value = c_value;
        ctx.set_host_chain(&host_chain)?;

        let disabled = !self.c_value_within_limits(&host_chain);
        if disabled {
            host_chain.active = false;
            ctx.set_host_chain(&host_chain)?;

            error!(%chain_id, %c_value, "c_value out of limits, disabling chain");
            ctx.emit_event(Event::ChainDisabled {
                chain_id: chain_id.clone(),
                c_value,
            });
        }

        let stored = ctx
            .host_chain(&chain_id)?
            .ok_or_else(|| EngineError::NotFound(format!("host chain {chain_id}")))?;

        ctx.record_gauge(Gauge::CValue, &chain_id, stored.c_value.to_f64_lossy());
        if disabled {
            ctx.record_gauge(Gauge::Active, &chain_id, if stored.active { 1.0 } else { 0.0 });
        }

        Ok(stored)
    }

    /// Returns `true` if the rate of `host_chain` lies strictly inside its band.
    pub fn c_value_within_limits(&self, host_chain: &HostChain) -> bool {
        host_chain.c_value > host_chain.lower_c_value_limit
            && host_chain.c_value < host_chain.upper_c_value_limit
    }

    /// Returns the daily autocompounding limit implied by the yearly `autocompound_factor`, given
    /// in percent.
    pub fn calculate_autocompound_limit(&self, autocompound_factor: Dec) -> EngineResult<Dec> {
        autocompound_factor
            .checked_quo(Dec::from_int(100))
            .and_then(|percent| percent.checked_quo(Dec::from_int(DAYS_PER_YEAR)))
            .ok_or(EngineError::AmountOverflow)
    }
}
