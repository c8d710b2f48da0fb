//! The narrow interfaces through which the engine reaches the rest of the ledger.
//!
//! Each collaborator owns its own state; the engine's unit of work only covers the records in its
//! own store. Fallible collaborator calls return [`anyhow::Result`] so that implementors are free
//! to surface their own error types.

use liquidstake_primitives::{coin::Coin, host_chain::HostChain, types::Epoch};

/// The type string of a Tendermint light client.
pub const TENDERMINT_CLIENT_TYPE: &str = "07-tendermint";

/// The type string of the localhost client.
pub const LOCALHOST_CLIENT_TYPE: &str = "09-localhost";

/// A module account on the origin ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleAccount {
    /// The module name the account belongs to.
    pub name: String,

    /// The account address.
    pub address: String,
}

/// Resolves module accounts.
pub trait AccountKeeper: Send + Sync {
    /// Returns the account of the module `name`, if registered.
    fn module_account(&self, name: &str) -> Option<ModuleAccount>;
}

/// Token supply and transfers on the origin ledger.
pub trait BankKeeper: Send + Sync {
    /// Returns the total supply of `denom`.
    fn supply_of(&self, denom: &str) -> Coin;

    /// Sends `coins` from the account of `module` to `recipient`.
    fn send_coins_from_module_to_account(
        &self,
        module: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> anyhow::Result<()>;
}

/// Epoch schedules.
pub trait EpochsKeeper: Send + Sync {
    /// Returns the current epoch of the schedule `identifier`, if it exists.
    fn current_epoch(&self, identifier: &str) -> Option<Epoch>;
}

/// Interchain account registration and channel lookup.
pub trait IcaControllerKeeper: Send + Sync {
    /// Registers an interchain account owned by `owner` over `connection_id`.
    fn register_interchain_account(
        &self,
        connection_id: &str,
        owner: &str,
        version: &str,
    ) -> anyhow::Result<()>;

    /// Returns the id of the open channel bound to `port_id` over `connection_id`, if any.
    fn open_active_channel(&self, connection_id: &str, port_id: &str) -> Option<String>;
}

/// The end of a connection on the origin ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionEnd {
    /// The light client the connection is verified against.
    pub client_id: String,
}

/// The state of a light client, as far as the engine cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientState {
    /// A Tendermint light client tracking `chain_id`.
    Tendermint {
        /// The chain the client tracks.
        chain_id: String,
    },

    /// The localhost client, tracking the origin ledger itself.
    Localhost,

    /// Any other client type.
    Other {
        /// The client type string.
        client_type: String,
    },
}

impl ClientState {
    /// Returns the client type string.
    pub fn client_type(&self) -> &str {
        match self {
            ClientState::Tendermint { .. } => TENDERMINT_CLIENT_TYPE,
            ClientState::Localhost => LOCALHOST_CLIENT_TYPE,
            ClientState::Other { client_type } => client_type,
        }
    }
}

/// The counterparty end of a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelCounterparty {
    /// The port on the counterparty.
    pub port_id: String,

    /// The channel on the counterparty.
    pub channel_id: String,
}

/// A channel end on the origin ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// The other end of the channel.
    pub counterparty: ChannelCounterparty,
}

/// An IBC height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Height {
    /// The revision of the chain.
    pub revision_number: u64,

    /// The block height within the revision.
    pub revision_height: u64,
}

/// Read access to the IBC core.
pub trait IbcKeeper: Send + Sync {
    /// Returns the connection `connection_id`, if it exists.
    fn connection(&self, connection_id: &str) -> Option<ConnectionEnd>;

    /// Returns the state of the client `client_id`, if it exists.
    fn client_state(&self, client_id: &str) -> Option<ClientState>;

    /// Returns the channel end `port_id/channel_id`, if it exists.
    fn channel(&self, port_id: &str, channel_id: &str) -> Option<Channel>;

    /// Returns the current height of the origin ledger.
    fn self_height(&self) -> Height;
}

/// A token transfer executed on the host chain by an interchain account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgTransfer {
    /// The port on the host chain the tokens leave through.
    pub source_port: String,

    /// The channel on the host chain the tokens leave through.
    pub source_channel: String,

    /// The tokens to transfer.
    pub token: Coin,

    /// The sending interchain account.
    pub sender: String,

    /// The receiving account.
    pub receiver: String,

    /// The height after which the transfer times out.
    pub timeout_height: Height,

    /// The timestamp after which the transfer times out; `0` disables it.
    pub timeout_timestamp: u64,

    /// Free-form memo.
    pub memo: String,
}

/// A message executed on the host chain by an interchain account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IcaMsg {
    /// Redirects staking rewards of `delegator_address` to `withdraw_address`.
    SetWithdrawAddress {
        /// The delegating account.
        delegator_address: String,
        /// The account rewards are withdrawn to.
        withdraw_address: String,
    },

    /// Transfers tokens off the host chain.
    Transfer(MsgTransfer),
}

/// Builds, signs and relays interchain account transactions.
pub trait IcaTxExecutor: Send + Sync {
    /// Executes `msgs` as `owner`'s interchain account over `connection_id` and returns the
    /// correlation id of the dispatched packet.
    fn generate_and_execute(
        &self,
        connection_id: &str,
        owner: &str,
        msgs: Vec<IcaMsg>,
    ) -> anyhow::Result<String>;
}

/// Backing amounts tracked outside of the deposit store.
pub trait StakingAggregates: Send + Sync {
    /// Returns the amount liquid-staked through tokenized shares that has not been converted
    /// into delegations yet.
    fn tokenized_untokenized(&self, chain_id: &str) -> u128;

    /// Returns the amount unbonded from validators that have been unbonding for longer than the
    /// recovery threshold.
    fn unbonded_over_threshold(&self, host_chain: &HostChain) -> u128;
}
