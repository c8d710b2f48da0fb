//! The redemption waterfall.
//!
//! An instant redemption is paid out of capital that has not left the origin ledger yet. The
//! oldest pending deposits are consumed first, so that younger deposits keep their place in the
//! delegation schedule.

use liquidstake_db::deposits::{DepositReader, DepositWriter};
use liquidstake_primitives::{coin::Coin, host_chain::HostChain};
use tracing::{debug, info, warn};

use crate::{
    ctx::Ctx,
    errors::{EngineError, EngineResult},
    keeper::Keeper,
};

impl Keeper {
    /// Deducts `redemption` from the pending deposits of `host_chain`, oldest epoch first.
    ///
    /// A deposit larger than what is left to cover is reduced and the walk stops there; any other
    /// deposit it reaches is deleted. If the pending deposits cannot cover `redemption` in full
    /// nothing is changed.
    ///
    /// `redemption` must be denominated in the chain's IBC denomination.
    pub fn adjust_deposits_for_redemption(
        &self,
        ctx: &mut Ctx<'_>,
        host_chain: &HostChain,
        redemption: &Coin,
    ) -> EngineResult<()> {
        let chain_id = &host_chain.chain_id;
        let denom = host_chain.ibc_denom();
        if redemption.denom != denom {
            return Err(EngineError::DenomMismatch {
                expected: denom,
                got: redemption.denom.clone(),
            });
        }

        let deposits = ctx.pending_deposits_for_chain(chain_id)?;
        if let Some(mismatch) = deposits
            .iter()
            .find(|deposit| deposit.amount.denom != redemption.denom)
        {
            return Err(EngineError::DenomMismatch {
                expected: mismatch.amount.denom.clone(),
                got: redemption.denom.clone(),
            });
        }

        let total = deposits
            .iter()
            .try_fold(0u128, |acc, deposit| acc.checked_add(deposit.amount.amount))
            .ok_or(EngineError::AmountOverflow)?;

        if total < redemption.amount {
            warn!(%chain_id, %total, %redemption, "pending deposits cannot cover redemption");
            return Ok(());
        }

        let mut remaining = redemption.clone();
        for mut deposit in deposits {
            if remaining.is_zero() {
                break;
            }

            if deposit.amount.amount > remaining.amount {
                deposit.amount = deposit.amount.checked_sub(&remaining)?;
                ctx.set_deposit(&deposit)?;

                debug!(%chain_id, epoch = deposit.epoch, deducted = %remaining, "reduced deposit");
                remaining = Coin::zero(denom.clone());
            } else {
                remaining = remaining.checked_sub(&deposit.amount)?;
                ctx.delete_deposit(&deposit)?;

                debug!(%chain_id, epoch = deposit.epoch, deducted = %deposit.amount, "consumed deposit");
            }
        }

        info!(%chain_id, %redemption, "adjusted deposits for redemption");

        Ok(())
    }
}
