// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness assembling an environment with the three built-in wallets.
//!
//! Each wallet is exposed in its native shape under the binding names of the
//! built-in catalog: O3 as a ready instance, NEOLine as an initializer and
//! Teemo as per-chain namespaces.

use std::sync::Arc;

use crate::mock_dapi::MockDapi;
use crate::mock_environment::MockEnvironment;
use crate::mock_object::{MockFactory, MockNamespace};

/// Where a wallet is made visible to discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    Global,
    Module,
    Hidden,
}

/// Builder for [`TestHarness`].
pub struct TestHarnessBuilder {
    o3: Exposure,
    neoline: Exposure,
    teemo: Exposure,
    gated: bool,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            o3: Exposure::Global,
            neoline: Exposure::Global,
            teemo: Exposure::Global,
            gated: false,
        }
    }

    pub fn o3(mut self, exposure: Exposure) -> Self {
        self.o3 = exposure;
        self
    }

    pub fn neoline(mut self, exposure: Exposure) -> Self {
        self.neoline = exposure;
        self
    }

    pub fn teemo(mut self, exposure: Exposure) -> Self {
        self.teemo = exposure;
        self
    }

    /// Hold every wallet call until released.
    pub fn gated(mut self) -> Self {
        self.gated = true;
        self
    }

    pub fn build(self) -> TestHarness {
        let make = |label: &str| {
            let dapi = MockDapi::new(label);
            Arc::new(if self.gated { dapi.gated() } else { dapi })
        };

        let o3 = make("o3");
        let neoline = Arc::new(MockFactory::new(make("neoline")));
        let teemo = Arc::new(MockNamespace::new().with_chain("NEO", make("teemo")));

        let mut env = MockEnvironment::new();
        env = expose(env, self.o3, "neo3Dapi", "neo3-dapi", o3.clone());
        env = expose(env, self.neoline, "NEOLineN3", "neoline-n3", neoline.clone());
        env = expose(env, self.teemo, "Teemo", "teemo-dapi", teemo.clone());

        TestHarness {
            env: Arc::new(env),
            o3,
            neoline,
            teemo,
        }
    }
}

fn expose(
    env: MockEnvironment,
    exposure: Exposure,
    global: &str,
    module: &str,
    object: Arc<dyn neodapi_core::ProviderObject>,
) -> MockEnvironment {
    match exposure {
        Exposure::Global => env.with_global(global, object),
        Exposure::Module => env.with_module(module, object),
        Exposure::Hidden => env,
    }
}

/// A mock environment plus handles to each wallet it exposes.
pub struct TestHarness {
    pub env: Arc<MockEnvironment>,
    pub o3: Arc<MockDapi>,
    pub neoline: Arc<MockFactory>,
    pub teemo: Arc<MockNamespace>,
}

impl TestHarness {
    /// All three wallets bound globally.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// The instance NEOLine's initializer yields.
    pub fn neoline_instance(&self) -> &Arc<MockDapi> {
        self.neoline.instance()
    }

    /// Teemo's instance for the `NEO` chain.
    pub fn teemo_instance(&self) -> Option<&Arc<MockDapi>> {
        self.teemo.chain("NEO")
    }
}
