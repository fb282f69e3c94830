/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a `tracing` subscriber once per test binary, controlled by
/// `RUST_LOG` - matches the teacher's pattern of lazily wiring logging into
/// its own integration tests rather than requiring every test to do it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn registry() -> typesubset::registry::memory::MemoryClassRegistry {
    typesubset::registry::memory::MemoryClassRegistry::new()
}
