// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod inspect;
mod store;

pub use inspect::{CheckArgs, DetectArgs, InspectArgs};
pub use store::StoreCmd;
