// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The callable dAPI surface every resolved provider instance exposes.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::events::EventListener;
use crate::payload::{
    AccountWithLabel, AccountWithPubKey, ApplicationLog, BalanceResults, BlockDetails,
    BlockHeight, DeployArgs, DeployOutput, GetBalanceArgs, GetBlockArgs, GetBlockHeightArgs,
    GetStorageArgs, InvokeArgs, InvokeMultiArgs, InvokeOutput, InvokeReadArgs, Networks,
    Provider, RpcResult, SendArgs, SendOutput, SignMessageArgs, SignedMessage, StorageResponse,
    TransactionArgs, TransactionDetails,
};

/// A resolved wallet provider instance.
///
/// Adapters for concrete wallet extensions implement this trait. Every
/// operation is asynchronous and reports failures as [`ProviderError`].
/// Event subscription is keyed by the provider's own native event name; the
/// facade is responsible for translating domain events into those names.
#[async_trait]
pub trait DapiInstance: Send + Sync + 'static {
    async fn get_provider(&self) -> Result<Provider, ProviderError>;

    async fn get_networks(&self) -> Result<Networks, ProviderError>;

    async fn get_account(&self) -> Result<AccountWithLabel, ProviderError>;

    async fn get_public_key(&self) -> Result<AccountWithPubKey, ProviderError>;

    async fn get_balance(&self, args: GetBalanceArgs) -> Result<BalanceResults, ProviderError>;

    /// Reads a raw value from contract storage.
    async fn get_storage(&self, args: GetStorageArgs) -> Result<StorageResponse, ProviderError>;

    /// Runs a read-only contract call; the result shape is contract-defined.
    async fn invoke_read(&self, args: InvokeReadArgs)
    -> Result<serde_json::Value, ProviderError>;

    async fn get_block(
        &self,
        args: GetBlockArgs,
    ) -> Result<RpcResult<BlockDetails>, ProviderError>;

    async fn get_block_height(
        &self,
        args: GetBlockHeightArgs,
    ) -> Result<RpcResult<BlockHeight>, ProviderError>;

    async fn get_transaction(
        &self,
        args: TransactionArgs,
    ) -> Result<RpcResult<TransactionDetails>, ProviderError>;

    async fn get_application_log(
        &self,
        args: TransactionArgs,
    ) -> Result<RpcResult<ApplicationLog>, ProviderError>;

    /// Transfers an asset from the connected account.
    async fn send(&self, args: SendArgs) -> Result<SendOutput, ProviderError>;

    async fn invoke(&self, args: InvokeArgs) -> Result<InvokeOutput, ProviderError>;

    /// Runs several contract invocations in one transaction.
    async fn invoke_multi(&self, args: InvokeMultiArgs) -> Result<InvokeOutput, ProviderError>;

    async fn sign_message(&self, args: SignMessageArgs) -> Result<SignedMessage, ProviderError>;

    async fn deploy(&self, args: DeployArgs) -> Result<DeployOutput, ProviderError>;

    /// Registers `listener` under the provider's native event name.
    fn add_event_listener(&self, native_event: &str, listener: EventListener);

    /// Removes `listener`, or every listener for the event when `None`.
    fn remove_event_listener(&self, native_event: &str, listener: Option<&EventListener>);
}
