// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unified dAPI facade.
//!
//! `UnifiedDapi` owns the selection slot. `select` resolves a discovered
//! provider into its callable instance; every operation afterwards forwards
//! to that instance unchanged.
//!
//! Forwarding operations return `Result<DapiCall<T>, DapiError>`. The outer
//! error is raised immediately when nothing is selected. The returned future
//! holds its own handle to the instance selected at call time, so switching
//! providers never retargets a call already issued.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use futures::FutureExt;

use neodapi_config::NeodapiConfig;
use neodapi_core::payload::{
    AccountWithLabel, AccountWithPubKey, ApplicationLog, BalanceResults, BlockDetails,
    BlockHeight, DeployArgs, DeployOutput, GetBalanceArgs, GetBlockArgs, GetBlockHeightArgs,
    GetStorageArgs, InvokeArgs, InvokeMultiArgs, InvokeOutput, InvokeReadArgs, Networks,
    Provider, RpcResult, SendArgs, SendOutput, SignMessageArgs, SignedMessage, StorageResponse,
    TransactionArgs, TransactionDetails,
};
use neodapi_core::{
    DapiCall, DapiError, DapiInstance, Environment, EventKind, EventListener, ProviderDescriptor,
    ProviderFamily,
};
use neodapi_registry::{ProviderRegistry, builtin_registry};

use crate::bootstrap::initialize_registry;
use crate::construction::{construction_rule, resolve};
use crate::discovery;
use crate::naming::{EventRoute, route};

/// Chain namespace used when none is configured.
pub const DEFAULT_CHAIN: &str = "NEO";

/// The active provider: its resolved instance and where it came from.
struct SelectedInstance {
    name: String,
    family: ProviderFamily,
    instance: Arc<dyn DapiInstance>,
}

/// A single dAPI surface over whichever wallet provider is selected.
pub struct UnifiedDapi {
    registry: ProviderRegistry,
    env: Arc<dyn Environment>,
    chain: String,
    selected: ArcSwapOption<SelectedInstance>,
}

impl UnifiedDapi {
    /// A facade probing `env` for the providers in `registry`.
    pub fn new(registry: ProviderRegistry, env: Arc<dyn Environment>) -> Self {
        Self {
            registry,
            env,
            chain: DEFAULT_CHAIN.to_string(),
            selected: ArcSwapOption::empty(),
        }
    }

    /// A facade over the built-in catalog.
    pub fn with_builtin_registry(env: Arc<dyn Environment>) -> Self {
        Self::new(builtin_registry(), env)
    }

    /// Use `chain` as the namespace for namespaced providers and bus events.
    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = chain.into();
        self
    }

    /// Build a facade from loaded configuration.
    pub fn from_config(config: &NeodapiConfig, env: Arc<dyn Environment>) -> Result<Self, DapiError> {
        let registry = initialize_registry(config)?;
        Ok(Self::new(registry, env).with_chain(&config.facade.chain))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    /// Providers present in the environment, in registry order.
    pub fn discover(&self) -> Vec<ProviderDescriptor> {
        discovery::discover(&self.registry, self.env.as_ref())
    }

    /// Make `descriptor` the active provider.
    ///
    /// Applies the family's construction rule to the discovered object. When
    /// the object lacks the entry point the rule needs, the current selection
    /// is kept and `UnsupportedShape` is returned.
    pub fn select(&self, descriptor: ProviderDescriptor) -> Result<(), DapiError> {
        let family = descriptor.family();
        let source = descriptor.source();
        let (name, object) = descriptor.into_parts();
        let rule = construction_rule(&family);

        let Some(instance) = resolve(rule, object, &self.chain) else {
            let entry_point = rule.entry_point(&self.chain);
            tracing::warn!(provider = %name, entry_point = %entry_point, "cannot select provider");
            return Err(DapiError::UnsupportedShape {
                provider: name,
                entry_point,
            });
        };

        tracing::info!(provider = %name, family = %family, source = %source, "provider selected");
        self.selected.store(Some(Arc::new(SelectedInstance {
            name,
            family,
            instance,
        })));
        Ok(())
    }

    /// Name and family of the active provider.
    pub fn selected_provider(&self) -> Option<(String, ProviderFamily)> {
        self.selected
            .load_full()
            .map(|s| (s.name.clone(), s.family.clone()))
    }

    /// Handle to the active instance.
    pub fn selected_instance(&self) -> Option<Arc<dyn DapiInstance>> {
        self.selected.load_full().map(|s| Arc::clone(&s.instance))
    }

    pub fn is_selected(&self) -> bool {
        self.selected.load().is_some()
    }

    fn current(&self) -> Result<Arc<SelectedInstance>, DapiError> {
        self.selected.load_full().ok_or(DapiError::NoProviderSelected)
    }

    fn forward<T, F>(&self, operation: &'static str, call: F) -> Result<DapiCall<T>, DapiError>
    where
        F: FnOnce(Arc<dyn DapiInstance>) -> DapiCall<T>,
    {
        let selected = self.current()?;
        tracing::debug!(provider = %selected.name, operation, "forwarding dAPI call");
        Ok(call(Arc::clone(&selected.instance)))
    }

    pub fn get_provider(&self) -> Result<DapiCall<Provider>, DapiError> {
        self.forward("getProvider", |dapi| {
            async move { dapi.get_provider().await }.boxed()
        })
    }

    pub fn get_networks(&self) -> Result<DapiCall<Networks>, DapiError> {
        self.forward("getNetworks", |dapi| {
            async move { dapi.get_networks().await }.boxed()
        })
    }

    pub fn get_account(&self) -> Result<DapiCall<AccountWithLabel>, DapiError> {
        self.forward("getAccount", |dapi| {
            async move { dapi.get_account().await }.boxed()
        })
    }

    pub fn get_public_key(&self) -> Result<DapiCall<AccountWithPubKey>, DapiError> {
        self.forward("getPublicKey", |dapi| {
            async move { dapi.get_public_key().await }.boxed()
        })
    }

    pub fn get_balance(&self, args: GetBalanceArgs) -> Result<DapiCall<BalanceResults>, DapiError> {
        self.forward("getBalance", move |dapi| {
            async move { dapi.get_balance(args).await }.boxed()
        })
    }

    pub fn get_storage(&self, args: GetStorageArgs) -> Result<DapiCall<StorageResponse>, DapiError> {
        self.forward("getStorage", move |dapi| {
            async move { dapi.get_storage(args).await }.boxed()
        })
    }

    /// Run a read-only contract invocation. The result is passed through as
    /// raw JSON.
    pub fn invoke_read(
        &self,
        args: InvokeReadArgs,
    ) -> Result<DapiCall<serde_json::Value>, DapiError> {
        self.forward("invokeRead", move |dapi| {
            async move { dapi.invoke_read(args).await }.boxed()
        })
    }

    pub fn get_block(
        &self,
        args: GetBlockArgs,
    ) -> Result<DapiCall<RpcResult<BlockDetails>>, DapiError> {
        self.forward("getBlock", move |dapi| {
            async move { dapi.get_block(args).await }.boxed()
        })
    }

    pub fn get_block_height(
        &self,
        args: GetBlockHeightArgs,
    ) -> Result<DapiCall<RpcResult<BlockHeight>>, DapiError> {
        self.forward("getBlockHeight", move |dapi| {
            async move { dapi.get_block_height(args).await }.boxed()
        })
    }

    pub fn get_transaction(
        &self,
        args: TransactionArgs,
    ) -> Result<DapiCall<RpcResult<TransactionDetails>>, DapiError> {
        self.forward("getTransaction", move |dapi| {
            async move { dapi.get_transaction(args).await }.boxed()
        })
    }

    pub fn get_application_log(
        &self,
        args: TransactionArgs,
    ) -> Result<DapiCall<RpcResult<ApplicationLog>>, DapiError> {
        self.forward("getApplicationLog", move |dapi| {
            async move { dapi.get_application_log(args).await }.boxed()
        })
    }

    pub fn send(&self, args: SendArgs) -> Result<DapiCall<SendOutput>, DapiError> {
        self.forward("send", move |dapi| {
            async move { dapi.send(args).await }.boxed()
        })
    }

    pub fn invoke(&self, args: InvokeArgs) -> Result<DapiCall<InvokeOutput>, DapiError> {
        self.forward("invoke", move |dapi| {
            async move { dapi.invoke(args).await }.boxed()
        })
    }

    pub fn invoke_multi(&self, args: InvokeMultiArgs) -> Result<DapiCall<InvokeOutput>, DapiError> {
        self.forward("invokeMulti", move |dapi| {
            async move { dapi.invoke_multi(args).await }.boxed()
        })
    }

    pub fn sign_message(&self, args: SignMessageArgs) -> Result<DapiCall<SignedMessage>, DapiError> {
        self.forward("signMessage", move |dapi| {
            async move { dapi.sign_message(args).await }.boxed()
        })
    }

    pub fn deploy(&self, args: DeployArgs) -> Result<DapiCall<DeployOutput>, DapiError> {
        self.forward("deploy", move |dapi| {
            async move { dapi.deploy(args).await }.boxed()
        })
    }

    /// Subscribe `listener` to `kind` on the active provider.
    ///
    /// The native event name is derived from the active family each time, so
    /// a subscription made after re-selection follows the new provider.
    pub fn add_event_listener(
        &self,
        kind: EventKind,
        listener: EventListener,
    ) -> Result<(), DapiError> {
        let selected = self.current()?;
        match route(&selected.family, kind, &self.chain) {
            EventRoute::Instance(native) => {
                tracing::debug!(provider = %selected.name, event = %native, "adding instance listener");
                selected.instance.add_event_listener(&native, listener);
            }
            EventRoute::Bus(name) => {
                tracing::debug!(provider = %selected.name, event = %name, "subscribing on bus");
                self.env.event_bus().subscribe(&name, listener);
            }
        }
        Ok(())
    }

    /// Remove `listener` from `kind`, or every listener of `kind` when `None`.
    pub fn remove_event_listener(
        &self,
        kind: EventKind,
        listener: Option<&EventListener>,
    ) -> Result<(), DapiError> {
        let selected = self.current()?;
        match route(&selected.family, kind, &self.chain) {
            EventRoute::Instance(native) => {
                tracing::debug!(provider = %selected.name, event = %native, "removing instance listener");
                selected.instance.remove_event_listener(&native, listener);
            }
            EventRoute::Bus(name) => {
                tracing::debug!(provider = %selected.name, event = %name, "unsubscribing from bus");
                self.env.event_bus().unsubscribe(&name, listener);
            }
        }
        Ok(())
    }
}
