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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Geographic or political grouping a country belongs to.
///
/// A country usually belongs to several regions at once, e.g. Estonia is in
/// `europe`, `eu-union`, `ex-ussr` and `baltic`. The string forms are the
/// kebab-case names used in configuration: `"north-america"`, `"eu-union"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    America,
    Europe,
    Asia,
    Oceania,
    Africa,
    NorthAmerica,
    SouthAmerica,
    CentralAmerica,
    Caribbean,
    EuUnion,
    ExUssr,
    ExYugos,
    Baltic,
    MiddleEast,
    NorthAfrica,
}
