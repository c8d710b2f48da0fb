//! Cross-chain plumbing: connection introspection and interchain account dispatch.

use liquidstake_primitives::{coin::Coin, host_chain::HostChain, ibc::controller_port_id};
use tracing::{debug, info, warn};

use crate::{
    ctx::Ctx,
    errors::{EngineError, EngineResult},
    interfaces::{ClientState, Height, IcaMsg, MsgTransfer},
    keeper::Keeper,
};

/// The version requested when registering an interchain account; empty selects the default.
const ICA_VERSION: &str = "";

impl Keeper {
    /// Returns the state of the light client behind `connection_id`.
    pub fn client_state(&self, connection_id: &str) -> EngineResult<ClientState> {
        let ibc = &self.collaborators.ibc;

        let connection = ibc.connection(connection_id).ok_or_else(|| {
            EngineError::NotFound(format!("invalid connection id, \"{connection_id}\""))
        })?;

        ibc.client_state(&connection.client_id).ok_or_else(|| {
            EngineError::NotFound(format!(
                "client id \"{}\" for connection \"{connection_id}\"",
                connection.client_id
            ))
        })
    }

    /// Returns the id of the chain at the other end of `connection_id`.
    ///
    /// A localhost connection resolves to the chain executing `ctx`.
    pub fn chain_id(&self, ctx: &Ctx<'_>, connection_id: &str) -> EngineResult<String> {
        match self.client_state(connection_id)? {
            ClientState::Tendermint { chain_id } => Ok(chain_id),
            ClientState::Localhost => Ok(ctx.header().chain_id.clone()),
            other @ ClientState::Other { .. } => Err(EngineError::UnexpectedClientType {
                client_type: other.client_type().to_string(),
                connection_id: connection_id.to_string(),
            }),
        }
    }

    /// Returns the controller port owned by `owner`.
    pub fn port_id(&self, owner: &str) -> String {
        controller_port_id(owner)
    }

    /// Registers an interchain account owned by `owner` over `connection_id`.
    pub fn register_ica_account(&self, connection_id: &str, owner: &str) -> EngineResult<()> {
        self.collaborators
            .ica_controller
            .register_interchain_account(connection_id, owner, ICA_VERSION)?;

        info!(%connection_id, %owner, "registered interchain account");

        Ok(())
    }

    /// Redirects the staking rewards of `host_chain`'s delegation account to its rewards account.
    pub fn set_withdraw_address(&self, host_chain: &HostChain) -> EngineResult<()> {
        let msg = IcaMsg::SetWithdrawAddress {
            delegator_address: host_chain.delegation_account.address.clone(),
            withdraw_address: host_chain.rewards_account.address.clone(),
        };

        let sequence_id = self.collaborators.ica_tx.generate_and_execute(
            &host_chain.connection_id,
            &host_chain.delegation_account.owner,
            vec![msg],
        )?;

        info!(chain_id = %host_chain.chain_id, %sequence_id, "dispatched withdraw address update");

        Ok(())
    }

    /// Returns `true` if an open interchain account channel is bound to `port_id` on the
    /// connection of `host_chain`.
    pub fn is_ica_channel_active(&self, host_chain: &HostChain, port_id: &str) -> bool {
        self.collaborators
            .ica_controller
            .open_active_channel(&host_chain.connection_id, port_id)
            .is_some()
    }

    /// Transfers `amount` from `sender` on `host_chain` back to `receiver` on the origin ledger.
    ///
    /// The transfer is executed by the interchain account of `port_owner` and times out
    /// `ibc_timeout_height_increment` blocks after the current height. Returns the correlation id
    /// of the dispatched packet.
    pub fn send_ica_transfer(
        &self,
        ctx: &Ctx<'_>,
        host_chain: &HostChain,
        amount: Coin,
        sender: &str,
        receiver: &str,
        port_owner: &str,
    ) -> EngineResult<String> {
        let channel = self
            .collaborators
            .ibc
            .channel(&host_chain.port_id, &host_chain.channel_id)
            .ok_or_else(|| {
                EngineError::NotFound(format!(
                    "could not retrieve channel for host chain {} while sending ICA transfer",
                    host_chain.chain_id
                ))
            })?;

        let params = self.params(ctx)?;
        let self_height = self.collaborators.ibc.self_height();
        let timeout_height = Height {
            revision_number: self_height.revision_number,
            revision_height: self_height
                .revision_height
                .saturating_add(params.ibc_timeout_height_increment),
        };

        debug!(chain_id = %host_chain.chain_id, ?timeout_height, "prepared ICA transfer");

        let msg = IcaMsg::Transfer(MsgTransfer {
            source_port: channel.counterparty.port_id,
            source_channel: channel.counterparty.channel_id,
            token: amount,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            timeout_height,
            timeout_timestamp: 0,
            memo: String::new(),
        });

        let sequence_id = self
            .collaborators
            .ica_tx
            .generate_and_execute(&host_chain.connection_id, port_owner, vec![msg])
            .map_err(|source| {
                warn!(chain_id = %host_chain.chain_id, %source, "ICA transfer dispatch failed");

                EngineError::Dispatch {
                    chain_id: host_chain.chain_id.clone(),
                    source,
                }
            })?;

        info!(chain_id = %host_chain.chain_id, %sequence_id, "dispatched ICA transfer");

        Ok(sequence_id)
    }
}
