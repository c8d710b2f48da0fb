//! Pure IBC naming helpers.

use sha2::{Digest, Sha256};

use crate::{
    constants::{IBC_DENOM_PREFIX, ICA_CONTROLLER_PORT_PREFIX, SEQUENCE_INFIX},
    types::PacketSequence,
};

/// Formats the correlation id that links a dispatched packet to its acknowledgement or timeout.
///
/// The result is `"<channel_id>-sequence-<sequence>"`. Channel ids never contain the infix, so
/// distinct inputs map to distinct ids.
pub fn transaction_sequence_id(channel_id: &str, sequence: PacketSequence) -> String {
    format!("{channel_id}{SEQUENCE_INFIX}{sequence}")
}

/// Returns the hashed voucher denomination that `base_denom` receives when it travels through
/// `port_id/channel_id`.
pub fn ibc_denom(port_id: &str, channel_id: &str, base_denom: &str) -> String {
    let trace = format!("{port_id}/{channel_id}/{base_denom}");
    let hash = Sha256::digest(trace.as_bytes());

    format!("{IBC_DENOM_PREFIX}/{}", hex::encode_upper(hash))
}

/// Returns the interchain account controller port owned by `owner`.
pub fn controller_port_id(owner: &str) -> String {
    format!("{ICA_CONTROLLER_PORT_PREFIX}{owner}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_transaction_sequence_id() {
        assert_eq!(
            transaction_sequence_id("channel-0", 1),
            "channel-0-sequence-1"
        );
    }

    #[test]
    fn test_ibc_denom_is_well_known() {
        // uatom over transfer/channel-0 is a widely used voucher on many chains.
        assert_eq!(
            ibc_denom("transfer", "channel-0", "uatom"),
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
    }

    #[test]
    fn test_controller_port_id() {
        assert_eq!(
            controller_port_id("cosmoshub-4.delegate"),
            "icacontroller-cosmoshub-4.delegate"
        );
    }

    proptest! {
        #[test]
        fn sequence_ids_are_collision_free(
            first in (0u64..64, any::<u64>()),
            second in (0u64..64, any::<u64>()),
        ) {
            let first_id = transaction_sequence_id(&format!("channel-{}", first.0), first.1);
            let second_id = transaction_sequence_id(&format!("channel-{}", second.0), second.1);

            prop_assert_eq!(first == second, first_id == second_id);
        }
    }
}
