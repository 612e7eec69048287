// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A hidden area code matched, but the catalog holds no visible
    /// main-code record of its country to resolve it to.
    #[error("Area code {dial_code} of '{iso2}' has no main-code record in the catalog")]
    MissingMainCode { iso2: String, dial_code: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Digit cap must not be negative, got {0}")]
    NegativeDigitCap(i64),
    #[error("Invalid digit cap '{0}', expected true, false or a number")]
    InvalidDigitCap(String),
    #[error("Unknown region '{0}'")]
    UnknownRegion(String),
}

