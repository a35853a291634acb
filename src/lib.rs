// SPDX-License-Identifier: Apache-2.0

pub mod stamp;
pub mod types;
