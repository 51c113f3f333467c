use crate::store::property::PropertyValue;

/// Fact name for the current owner's address.
pub const OWNER_FACT: &str = "Ethereum address of the owner of";
/// Fact name for the hash of the block that set the current owner.
pub const BLOCK_HASH_FACT: &str =
    "Hash of the Ethereum block containing the transaction setting the current owner of";
/// Fact name for the height of the block that set the current owner.
pub const BLOCK_HEIGHT_FACT: &str =
    "Height of the Ethereum block containing the transaction setting the current owner of";
/// Fact name for the hash of the transaction that set the current owner.
pub const TRANSACTION_HASH_FACT: &str =
    "Hash of the Ethereum transaction setting the current owner of";

/// The four fact names written by the ownership tracker, in field order.
pub const OWNERSHIP_FACTS: [&str; 4] = [
    OWNER_FACT,
    BLOCK_HASH_FACT,
    BLOCK_HEIGHT_FACT,
    TRANSACTION_HASH_FACT,
];

/// One `Transfer` event as delivered by the contract event source.
///
/// Field names follow the event source's camelCase JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    /// Address carried by the event.
    pub address: String,
    /// Hash of the block containing the transfer.
    pub block_hash: String,
    /// Height of the block containing the transfer.
    pub block_number: u64,
    /// Hash of the transfer transaction.
    pub transaction_hash: String,
    /// Token the transfer applies to, when the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u64>,
}

impl TransferEvent {
    /// Whether the event may concern `token_id`; events without a token id are assumed to have
    /// been filtered by the source.
    pub fn concerns(&self, token_id: u64) -> bool {
        self.token_id.is_none_or(|t| t == token_id)
    }
}

/// Derived ownership facts; always written as a whole.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OwnershipRecord {
    /// Current owner address.
    pub owner: String,
    /// Hash of the block that set the owner.
    pub block_hash: String,
    /// Height of the block that set the owner.
    pub block_height: u64,
    /// Hash of the transaction that set the owner.
    pub transaction_hash: String,
}

impl From<&TransferEvent> for OwnershipRecord {
    fn from(ev: &TransferEvent) -> Self {
        Self {
            owner: ev.address.clone(),
            block_hash: ev.block_hash.clone(),
            block_height: ev.block_number,
            transaction_hash: ev.transaction_hash.clone(),
        }
    }
}

impl OwnershipRecord {
    /// The record as `(fact name, value)` pairs, in [`OWNERSHIP_FACTS`] order.
    pub fn facts(&self) -> [(&'static str, PropertyValue); 4] {
        [
            (OWNER_FACT, PropertyValue::from(self.owner.as_str())),
            (BLOCK_HASH_FACT, PropertyValue::from(self.block_hash.as_str())),
            (BLOCK_HEIGHT_FACT, PropertyValue::from(self.block_height)),
            (
                TRANSACTION_HASH_FACT,
                PropertyValue::from(self.transaction_hash.as_str()),
            ),
        ]
    }
}
