// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request and response records of the NEO dAPI.
//!
//! These are carried between the host application and the selected provider
//! without inspection. Field names follow the dAPI wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wrapper used by the RPC-backed read operations (`{ "result": ... }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResult<T> {
    pub result: T,
}

// --- Provider and account ---

/// Metadata describing the wallet provider itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub website: String,
    pub version: String,
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Networks {
    /// Networks the provider lets the dApp connect to.
    pub networks: Vec<String>,
    /// Network the wallet is currently set to.
    pub default_network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountWithLabel {
    /// Base58 address of the connected account.
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithPubKey {
    pub address: String,
    /// Hex-encoded public key.
    pub public_key: String,
}

// --- Balances and storage ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "fetchUTXO")]
    pub fetch_utxo: Option<bool>,
}

/// One balance request or a batch of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BalanceParams {
    Single(BalanceRequest),
    Batch(Vec<BalanceRequest>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBalanceArgs {
    pub params: BalanceParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl GetBalanceArgs {
    /// Balances of every asset held by `address` on the default network.
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            params: BalanceParams::Single(BalanceRequest {
                address: address.into(),
                ..Default::default()
            }),
            network: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub symbol: String,
    pub amount: String,
}

/// Balances keyed by address.
pub type BalanceResults = BTreeMap<String, Vec<Balance>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStorageArgs {
    pub script_hash: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageResponse {
    /// Raw stored value.
    pub result: String,
}

// --- Contract arguments ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentType {
    String,
    Boolean,
    Hash160,
    Hash256,
    Integer,
    ByteArray,
    Array,
    Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeReadArgs {
    pub script_hash: String,
    pub operation: String,
    pub args: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

// --- Blocks, transactions, logs ---

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlockArgs {
    pub block_height: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptDetails {
    pub invocation: String,
    pub verification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockTransactionDetails {
    pub txid: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub attributes: Vec<serde_json::Value>,
    pub vin: Vec<serde_json::Value>,
    pub vout: Vec<serde_json::Value>,
    pub sys_fee: String,
    pub net_fee: String,
    pub scripts: Vec<serde_json::Value>,
    pub nonce: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockDetails {
    pub hash: String,
    pub size: u64,
    pub version: u32,
    pub previousblockhash: String,
    pub merkleroot: String,
    pub time: u64,
    pub index: u64,
    pub nonce: String,
    pub nextconsensus: String,
    pub script: ScriptDetails,
    pub tx: Vec<BlockTransactionDetails>,
    pub confirmations: u64,
    pub nextblockhash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetBlockHeightArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockHeight {
    pub result: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionArgs {
    pub txid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionAttribute {
    pub usage: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub txid: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub attributes: Vec<TransactionAttribute>,
    pub vin: Vec<serde_json::Value>,
    pub vout: Vec<serde_json::Value>,
    pub sys_fee: String,
    pub net_fee: String,
    pub scripts: Vec<ScriptDetails>,
    pub script: String,
    pub gas: String,
    pub blockhash: String,
    pub confirmations: u64,
    pub blocktime: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationState {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub value: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Contract hash that emitted the notification.
    pub contract: String,
    pub state: NotificationState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionDetails {
    pub trigger: String,
    pub contract: String,
    pub vmstate: String,
    pub gas_consumed: String,
    pub stack: Vec<Argument>,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationLog {
    pub txid: String,
    pub executions: Vec<ExecutionDetails>,
}

// --- Writes ---

/// Parsed NEO/GAS amounts attached to an invocation, keyed by symbol.
pub type AttachedAssets = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInput {
    pub txid: String,
    pub index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetOutput {
    pub asset: String,
    pub address: String,
    pub value: String,
}

/// Hard override of every UTXO input and output of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetIntentOverrides {
    pub inputs: Vec<AssetInput>,
    pub outputs: Vec<AssetOutput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHashAttribute {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub value: serde_json::Value,
    /// One of `Hash1` through `Hash15`.
    pub tx_attr_usage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendArgs {
    pub from_address: String,
    pub to_address: String,
    pub asset: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_override: Option<bool>,
}

/// Result of any transaction-producing call (`send`, `invoke`, `deploy`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub txid: String,
    /// Node the wallet broadcast to, when the wallet broadcast it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_url: Option<String>,
    /// Serialized signed transaction, when `broadcastOverride` was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_tx: Option<String>,
}

pub type SendOutput = TransactionOutput;
pub type InvokeOutput = TransactionOutput;
pub type DeployOutput = TransactionOutput;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeArgs {
    pub script_hash: String,
    pub operation: String,
    pub args: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_assets: Option<AttachedAssets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_override: Option<bool>,
    /// When set, `fee` and `attached_assets` are ignored by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_intent_overrides: Option<AssetIntentOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_contract_verification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash_attributes: Option<Vec<TxHashAttribute>>,
}

/// A single invocation inside an `invoke_multi` batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeArguments {
    pub script_hash: String,
    pub operation: String,
    pub args: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_assets: Option<AttachedAssets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_contract_verification: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvokeMultiArgs {
    pub invoke_args: Vec<InvokeArguments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_override: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_intent_overrides: Option<AssetIntentOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash_attributes: Option<Vec<TxHashAttribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignMessageArgs {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedMessage {
    pub public_key: String,
    pub message: String,
    /// Prefix added to the message before signing.
    pub salt: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployArgs {
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_storage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_invoke: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_payable: Option<bool>,
    pub parameter_list: String,
    pub return_type: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_override: Option<bool>,
}
