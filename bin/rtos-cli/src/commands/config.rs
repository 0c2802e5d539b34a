// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtos-cli config` command: print the effective connection settings.

use proto_rpc::ClientConfig;

pub fn execute(config: &ClientConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
