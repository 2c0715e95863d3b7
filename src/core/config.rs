//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::error::{Error, LastError};
use serde_derive::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(PartialEq, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rpc {
    origin: Option<String>,
    #[serde(rename = "user-agent")]
    user_agent: Option<String>,
}

impl Rpc {
    pub fn get_origin(&self) -> Option<&String> {
        self.origin.as_ref()
    }

    pub fn get_user_agent(&self) -> Option<&String> {
        self.user_agent.as_ref()
    }
}

#[derive(PartialEq, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    rpc: Option<Rpc>,
}

impl Config {
    pub fn new() -> Self {
        Self { rpc: None }
    }

    pub fn get_rpc(&self) -> Option<&Rpc> {
        self.rpc.as_ref()
    }

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the default configuration.
    pub fn from_file(path: &PathBuf) -> Result<Self, Error> {
        if path.exists() == false {
            tracing::debug!("no configuration file at {}", path.display());
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigNotLoaded(path.clone(), LastError(e.to_string())))?;
        Self::from_str(&contents)
            .map_err(|e| Error::ConfigNotLoaded(path.clone(), LastError(e.to_string())))
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}
