// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for axis-grid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during axis-grid construction and queries
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Entity has no usable coordinates: {0}")]
    EntityShape(String),
}
