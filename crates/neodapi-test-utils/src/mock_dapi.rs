// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock dAPI instance for deterministic testing.
//!
//! `MockDapi` implements `DapiInstance` with canned responses derived from a
//! label, records every call with its argument, and can be told to reject or
//! to hold calls until released.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Notify;

use neodapi_core::payload::{
    AccountWithLabel, AccountWithPubKey, ApplicationLog, Balance, BalanceParams, BalanceResults,
    BlockDetails, BlockHeight, DeployArgs, DeployOutput, GetBalanceArgs, GetBlockArgs,
    GetBlockHeightArgs, GetStorageArgs, InvokeArgs, InvokeMultiArgs, InvokeOutput,
    InvokeReadArgs, Networks, Provider, RpcResult, SendArgs, SendOutput, SignMessageArgs,
    SignedMessage, StorageResponse, TransactionArgs, TransactionDetails, TransactionOutput,
};
use neodapi_core::{DapiInstance, EventListener, ProviderError, ProviderObject};

use crate::lock;

/// One call received by a [`MockDapi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// dAPI method name, e.g. `getBalance`.
    pub operation: &'static str,
    /// The argument as JSON, `null` for argument-less calls.
    pub args: serde_json::Value,
}

/// A mock wallet provider instance.
///
/// Also usable directly as a discovered provider object: it exposes itself as
/// its own dAPI instance.
pub struct MockDapi {
    label: String,
    account: AccountWithLabel,
    calls: Mutex<Vec<RecordedCall>>,
    listeners: Mutex<Vec<(String, EventListener)>>,
    failure: Mutex<Option<ProviderError>>,
    gate: Option<Arc<Notify>>,
}

impl MockDapi {
    /// Create a mock whose canned responses are tagged with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            account: AccountWithLabel {
                address: format!("N{label}Address"),
                label: Some(label.clone()),
            },
            label,
            calls: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            gate: None,
        }
    }

    /// Return `account` from `get_account`.
    pub fn with_account(mut self, account: AccountWithLabel) -> Self {
        self.account = account;
        self
    }

    /// Hold every call until [`MockDapi::release`] is called once per call.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Let one held call proceed. A release issued before the call arrives is
    /// remembered.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Reject every subsequent call with `error`.
    pub fn fail_with(&self, error: ProviderError) {
        *lock(&self.failure) = Some(error);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        lock(&self.calls).last().cloned()
    }

    /// Native event names with at least one registered listener.
    pub fn listener_names(&self) -> Vec<String> {
        lock(&self.listeners)
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Fire a native event; returns how many listeners were invoked.
    pub fn emit(&self, native_event: &str, payload: &serde_json::Value) -> usize {
        let targets: Vec<EventListener> = lock(&self.listeners)
            .iter()
            .filter(|(name, _)| name == native_event)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in &targets {
            listener.call(payload);
        }
        targets.len()
    }

    fn tx_output(&self, operation: &str) -> TransactionOutput {
        TransactionOutput {
            txid: format!("0x{}-{operation}", self.label),
            node_url: Some(format!("https://{}.example/rpc", self.label)),
            signed_tx: None,
        }
    }

    async fn record<A: Serialize>(
        &self,
        operation: &'static str,
        args: &A,
    ) -> Result<(), ProviderError> {
        let args = serde_json::to_value(args).unwrap_or(serde_json::Value::Null);
        lock(&self.calls).push(RecordedCall { operation, args });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match lock(&self.failure).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DapiInstance for MockDapi {
    async fn get_provider(&self) -> Result<Provider, ProviderError> {
        self.record("getProvider", &()).await?;
        Ok(Provider {
            name: self.label.clone(),
            website: format!("https://{}.example", self.label),
            version: "1.0.0".to_string(),
            compatibility: vec!["NEP-21".to_string()],
            extra: serde_json::json!({}),
        })
    }

    async fn get_networks(&self) -> Result<Networks, ProviderError> {
        self.record("getNetworks", &()).await?;
        Ok(Networks {
            networks: vec!["MainNet".to_string(), "TestNet".to_string()],
            default_network: "MainNet".to_string(),
        })
    }

    async fn get_account(&self) -> Result<AccountWithLabel, ProviderError> {
        self.record("getAccount", &()).await?;
        Ok(self.account.clone())
    }

    async fn get_public_key(&self) -> Result<AccountWithPubKey, ProviderError> {
        self.record("getPublicKey", &()).await?;
        Ok(AccountWithPubKey {
            address: self.account.address.clone(),
            public_key: format!("03{}", self.label),
        })
    }

    async fn get_balance(&self, args: GetBalanceArgs) -> Result<BalanceResults, ProviderError> {
        self.record("getBalance", &args).await?;
        let addresses = match args.params {
            BalanceParams::Single(req) => vec![req.address],
            BalanceParams::Batch(reqs) => reqs.into_iter().map(|r| r.address).collect(),
        };
        Ok(addresses
            .into_iter()
            .map(|address| {
                let balance = Balance {
                    asset_id: "0xd2a4cff31913016155e38e474a2c06d08be276cf".to_string(),
                    symbol: "GAS".to_string(),
                    amount: "1".to_string(),
                };
                (address, vec![balance])
            })
            .collect())
    }

    async fn get_storage(&self, args: GetStorageArgs) -> Result<StorageResponse, ProviderError> {
        self.record("getStorage", &args).await?;
        Ok(StorageResponse {
            result: format!("{}:{}", self.label, args.key),
        })
    }

    async fn invoke_read(
        &self,
        args: InvokeReadArgs,
    ) -> Result<serde_json::Value, ProviderError> {
        self.record("invokeRead", &args).await?;
        Ok(serde_json::json!({
            "script": args.script_hash,
            "state": "HALT",
            "provider": self.label,
        }))
    }

    async fn get_block(
        &self,
        args: GetBlockArgs,
    ) -> Result<RpcResult<BlockDetails>, ProviderError> {
        self.record("getBlock", &args).await?;
        Ok(RpcResult {
            result: BlockDetails {
                hash: format!("0x{}-block-{}", self.label, args.block_height),
                index: args.block_height,
                ..Default::default()
            },
        })
    }

    async fn get_block_height(
        &self,
        args: GetBlockHeightArgs,
    ) -> Result<RpcResult<BlockHeight>, ProviderError> {
        self.record("getBlockHeight", &args).await?;
        Ok(RpcResult {
            result: BlockHeight { result: 1_000 },
        })
    }

    async fn get_transaction(
        &self,
        args: TransactionArgs,
    ) -> Result<RpcResult<TransactionDetails>, ProviderError> {
        self.record("getTransaction", &args).await?;
        Ok(RpcResult {
            result: TransactionDetails {
                txid: args.txid,
                confirmations: 1,
                ..Default::default()
            },
        })
    }

    async fn get_application_log(
        &self,
        args: TransactionArgs,
    ) -> Result<RpcResult<ApplicationLog>, ProviderError> {
        self.record("getApplicationLog", &args).await?;
        Ok(RpcResult {
            result: ApplicationLog {
                txid: args.txid,
                executions: Vec::new(),
            },
        })
    }

    async fn send(&self, args: SendArgs) -> Result<SendOutput, ProviderError> {
        self.record("send", &args).await?;
        Ok(self.tx_output("send"))
    }

    async fn invoke(&self, args: InvokeArgs) -> Result<InvokeOutput, ProviderError> {
        self.record("invoke", &args).await?;
        Ok(self.tx_output("invoke"))
    }

    async fn invoke_multi(&self, args: InvokeMultiArgs) -> Result<InvokeOutput, ProviderError> {
        self.record("invokeMulti", &args).await?;
        Ok(self.tx_output("invokeMulti"))
    }

    async fn sign_message(&self, args: SignMessageArgs) -> Result<SignedMessage, ProviderError> {
        self.record("signMessage", &args).await?;
        Ok(SignedMessage {
            public_key: format!("03{}", self.label),
            message: args.message,
            salt: "0a1b2c3d".to_string(),
            data: format!("{}-signature", self.label),
        })
    }

    async fn deploy(&self, args: DeployArgs) -> Result<DeployOutput, ProviderError> {
        self.record("deploy", &args).await?;
        Ok(self.tx_output("deploy"))
    }

    fn add_event_listener(&self, native_event: &str, listener: EventListener) {
        lock(&self.listeners).push((native_event.to_string(), listener));
    }

    fn remove_event_listener(&self, native_event: &str, listener: Option<&EventListener>) {
        lock(&self.listeners).retain(|(name, registered)| {
            name != native_event || listener.is_some_and(|l| l != registered)
        });
    }
}

impl ProviderObject for MockDapi {
    fn into_dapi(self: Arc<Self>) -> Option<Arc<dyn DapiInstance>> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use neodapi_core::ProviderErrorKind;

    #[tokio::test]
    async fn records_calls_with_arguments() {
        let mock = MockDapi::new("a");
        let args = SignMessageArgs {
            message: "hello".to_string(),
        };

        let signed = mock.sign_message(args).await.unwrap();
        assert_eq!(signed.message, "hello");
        assert_eq!(
            mock.last_call(),
            Some(RecordedCall {
                operation: "signMessage",
                args: serde_json::json!({"message": "hello"}),
            })
        );
    }

    #[tokio::test]
    async fn fail_with_rejects_calls() {
        let mock = MockDapi::new("a");
        mock.fail_with(ProviderError::new(ProviderErrorKind::Canceled));

        let err = mock.get_account().await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::Canceled);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn gated_calls_wait_for_release() {
        let mock = Arc::new(MockDapi::new("a").gated());
        let task = {
            let mock = Arc::clone(&mock);
            tokio::spawn(async move { mock.get_networks().await })
        };

        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        mock.release();
        let networks = task.await.unwrap().unwrap();
        assert_eq!(networks.default_network, "MainNet");
    }

    #[test]
    fn remove_listener_by_identity_or_all() {
        let mock = MockDapi::new("a");
        let first = EventListener::new(|_| {});
        let second = EventListener::new(|_| {});
        mock.add_event_listener("EVENT.READY", first.clone());
        mock.add_event_listener("EVENT.READY", second.clone());
        mock.add_event_listener("EVENT.CONNECTED", first.clone());

        mock.remove_event_listener("EVENT.READY", Some(&first));
        assert_eq!(mock.emit("EVENT.READY", &serde_json::Value::Null), 1);

        mock.remove_event_listener("EVENT.READY", None);
        assert_eq!(mock.listener_names(), vec!["EVENT.CONNECTED".to_string()]);
    }
}
