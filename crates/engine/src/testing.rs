//! In-memory fakes of the collaborators, and a harness wiring them into a [`Keeper`].

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::bail;
use liquidstake_primitives::{coin::Coin, host_chain::HostChain, types::Epoch};

use crate::{
    ctx::BlockHeader,
    interfaces::{
        AccountKeeper, BankKeeper, Channel, ChannelCounterparty, ClientState, ConnectionEnd,
        EpochsKeeper, Height, IbcKeeper, IcaControllerKeeper, IcaMsg, IcaTxExecutor,
        ModuleAccount, StakingAggregates,
    },
    keeper::{Collaborators, Keeper},
    telemetry::{GaugeSample, Telemetry},
};

/// The chain id of the origin ledger in tests.
pub(crate) const ORIGIN_CHAIN_ID: &str = "core-1";

/// Returns the header every test executes in.
pub(crate) fn header() -> BlockHeader {
    BlockHeader {
        chain_id: ORIGIN_CHAIN_ID.to_string(),
        height: 100,
    }
}

/// A coin transfer performed through the fake bank: `(module, recipient, coins)`.
pub(crate) type SentCoins = (String, String, Vec<Coin>);

/// An interchain transaction executed through the fake: `(connection, owner, msgs)`.
pub(crate) type ExecutedTx = (String, String, Vec<IcaMsg>);

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub(crate) supplies: HashMap<String, u128>,
    pub(crate) sent: Vec<SentCoins>,
    pub(crate) epochs: HashMap<String, Epoch>,
    pub(crate) connections: HashMap<String, ConnectionEnd>,
    pub(crate) clients: HashMap<String, ClientState>,
    pub(crate) channels: HashMap<(String, String), Channel>,
    pub(crate) open_channels: HashMap<(String, String), String>,
    pub(crate) registered: Vec<(String, String)>,
    pub(crate) executed: Vec<ExecutedTx>,
    pub(crate) fail_execution: bool,
    pub(crate) next_sequence: u64,
    pub(crate) self_height: Height,
    pub(crate) tokenized: HashMap<String, u128>,
    pub(crate) unbonded: HashMap<String, u128>,
    pub(crate) gauges: Vec<GaugeSample>,
}

/// A single fake implementing every collaborator interface.
#[derive(Debug, Default)]
pub(crate) struct FakeChain {
    state: Mutex<FakeState>,
}

impl FakeChain {
    pub(crate) fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake state lock poisoned")
    }

    pub(crate) fn set_supply(&self, denom: &str, amount: u128) {
        self.state().supplies.insert(denom.to_string(), amount);
    }

    pub(crate) fn set_epoch(&self, identifier: &str, epoch: Epoch) {
        self.state().epochs.insert(identifier.to_string(), epoch);
    }

    /// Wires `connection_id` to a client in `client_state`.
    pub(crate) fn add_connection(&self, connection_id: &str, client_state: Option<ClientState>) {
        let client_id = format!("client-{connection_id}");
        let mut state = self.state();

        state.connections.insert(
            connection_id.to_string(),
            ConnectionEnd {
                client_id: client_id.clone(),
            },
        );
        if let Some(client_state) = client_state {
            state.clients.insert(client_id, client_state);
        }
    }

    /// Registers the transfer channel of `host_chain` with counterparty `transfer/channel-99`.
    pub(crate) fn add_transfer_channel(&self, host_chain: &HostChain) {
        self.state().channels.insert(
            (host_chain.port_id.clone(), host_chain.channel_id.clone()),
            Channel {
                counterparty: ChannelCounterparty {
                    port_id: "transfer".to_string(),
                    channel_id: "channel-99".to_string(),
                },
            },
        );
    }

    pub(crate) fn open_channel(&self, connection_id: &str, port_id: &str, channel_id: &str) {
        self.state().open_channels.insert(
            (connection_id.to_string(), port_id.to_string()),
            channel_id.to_string(),
        );
    }

    pub(crate) fn set_tokenized(&self, chain_id: &str, amount: u128) {
        self.state().tokenized.insert(chain_id.to_string(), amount);
    }

    pub(crate) fn set_unbonded(&self, chain_id: &str, amount: u128) {
        self.state().unbonded.insert(chain_id.to_string(), amount);
    }

    pub(crate) fn fail_execution(&self) {
        self.state().fail_execution = true;
    }

    pub(crate) fn gauges(&self) -> Vec<GaugeSample> {
        self.state().gauges.clone()
    }

    pub(crate) fn sent(&self) -> Vec<SentCoins> {
        self.state().sent.clone()
    }

    pub(crate) fn executed(&self) -> Vec<ExecutedTx> {
        self.state().executed.clone()
    }
}

impl AccountKeeper for FakeChain {
    fn module_account(&self, name: &str) -> Option<ModuleAccount> {
        Some(ModuleAccount {
            name: name.to_string(),
            address: format!("{name}-address"),
        })
    }
}

impl BankKeeper for FakeChain {
    fn supply_of(&self, denom: &str) -> Coin {
        let amount = self.state().supplies.get(denom).copied().unwrap_or_default();

        Coin::new(denom, amount)
    }

    fn send_coins_from_module_to_account(
        &self,
        module: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> anyhow::Result<()> {
        self.state()
            .sent
            .push((module.to_string(), recipient.to_string(), coins.to_vec()));

        Ok(())
    }
}

impl EpochsKeeper for FakeChain {
    fn current_epoch(&self, identifier: &str) -> Option<Epoch> {
        self.state().epochs.get(identifier).copied()
    }
}

impl IcaControllerKeeper for FakeChain {
    fn register_interchain_account(
        &self,
        connection_id: &str,
        owner: &str,
        _version: &str,
    ) -> anyhow::Result<()> {
        let mut state = self.state();
        if !state.connections.contains_key(connection_id) {
            bail!("connection {connection_id} does not exist");
        }

        state
            .registered
            .push((connection_id.to_string(), owner.to_string()));

        Ok(())
    }

    fn open_active_channel(&self, connection_id: &str, port_id: &str) -> Option<String> {
        self.state()
            .open_channels
            .get(&(connection_id.to_string(), port_id.to_string()))
            .cloned()
    }
}

impl IbcKeeper for FakeChain {
    fn connection(&self, connection_id: &str) -> Option<ConnectionEnd> {
        self.state().connections.get(connection_id).cloned()
    }

    fn client_state(&self, client_id: &str) -> Option<ClientState> {
        self.state().clients.get(client_id).cloned()
    }

    fn channel(&self, port_id: &str, channel_id: &str) -> Option<Channel> {
        self.state()
            .channels
            .get(&(port_id.to_string(), channel_id.to_string()))
            .cloned()
    }

    fn self_height(&self) -> Height {
        self.state().self_height
    }
}

impl IcaTxExecutor for FakeChain {
    fn generate_and_execute(
        &self,
        connection_id: &str,
        owner: &str,
        msgs: Vec<IcaMsg>,
    ) -> anyhow::Result<String> {
        let mut state = self.state();
        if state.fail_execution {
            bail!("relayer unavailable");
        }

        state.next_sequence += 1;
        let sequence_id = format!("channel-7-sequence-{}", state.next_sequence);
        state
            .executed
            .push((connection_id.to_string(), owner.to_string(), msgs));

        Ok(sequence_id)
    }
}

impl StakingAggregates for FakeChain {
    fn tokenized_untokenized(&self, chain_id: &str) -> u128 {
        self.state().tokenized.get(chain_id).copied().unwrap_or_default()
    }

    fn unbonded_over_threshold(&self, host_chain: &HostChain) -> u128 {
        self.state()
            .unbonded
            .get(&host_chain.chain_id)
            .copied()
            .unwrap_or_default()
    }
}

impl Telemetry for FakeChain {
    fn set_gauge(&self, sample: &GaugeSample) {
        self.state().gauges.push(sample.clone());
    }
}

/// A keeper wired to a [`FakeChain`].
#[derive(Debug)]
pub(crate) struct Harness {
    pub(crate) keeper: Keeper,
    pub(crate) fake: Arc<FakeChain>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let fake = Arc::new(FakeChain::default());
        fake.state().self_height = Height {
            revision_number: 1,
            revision_height: 500,
        };

        let keeper = Keeper::new(Collaborators {
            accounts: fake.clone(),
            bank: fake.clone(),
            epochs: fake.clone(),
            ica_controller: fake.clone(),
            ibc: fake.clone(),
            ica_tx: fake.clone(),
            staking: fake.clone(),
            telemetry: fake.clone(),
        });

        Self { keeper, fake }
    }
}
