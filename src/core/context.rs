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

use crate::core::config::Config;
use crate::core::rpc::{CurlTransport, RpcClient};
use crate::error::{Error, LastError};
use crate::util::environment;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_ORIGIN: &str = "https://aur.archlinux.org";

/// Shared state handed to every subcommand.
#[derive(Debug, PartialEq)]
pub struct Context {
    home_path: PathBuf,
    config: Config,
    origin: Url,
    user_agent: String,
}

impl Context {
    pub fn new() -> Context {
        Context {
            home_path: PathBuf::new(),
            config: Config::new(),
            // the default origin is a valid url
            origin: Url::parse(DEFAULT_ORIGIN).expect("default origin must parse"),
            user_agent: format!("seekaur/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the home directory from the environment variable `key`, falling back
    /// to `$HOME/.seekaur`.
    pub fn home(mut self, key: &str) -> Result<Context, Error> {
        self.home_path = match environment::read(key) {
            Some(p) => PathBuf::from(p),
            None => match home::home_dir() {
                Some(dir) => dir.join(environment::DEFAULT_HOME_DIR),
                None => return Err(Error::MissingHomeDir),
            },
        };
        Ok(self)
    }

    /// Loads the settings file `s` directly under the home directory.
    pub fn settings(mut self, s: &str) -> Result<Context, Error> {
        self.config = Config::from_file(&self.home_path.join(s))?;
        if let Some(rpc) = self.config.get_rpc() {
            if let Some(agent) = rpc.get_user_agent() {
                self.user_agent = agent.clone();
            }
            if let Some(origin) = rpc.get_origin() {
                self.origin = Self::parse_origin(origin)?;
            }
        }
        Ok(self)
    }

    /// Overrides the origin with the environment variable `key`, if set.
    ///
    /// Must come after the `.settings()` call.
    pub fn origin(mut self, key: &str) -> Result<Context, Error> {
        if let Some(origin) = environment::read(key) {
            self.origin = Self::parse_origin(&origin)?;
        }
        tracing::debug!("using package index at {}", self.origin);
        Ok(self)
    }

    fn parse_origin(s: &str) -> Result<Url, Error> {
        let url = Url::parse(s).map_err(|e| Error::InvalidOrigin(s.to_string(), LastError(e.to_string())))?;
        match url.cannot_be_a_base() {
            true => Err(Error::InvalidOrigin(
                s.to_string(),
                LastError(String::from("url cannot be used as a base")),
            )),
            false => Ok(url),
        }
    }

    pub fn get_origin(&self) -> &Url {
        &self.origin
    }

    pub fn get_user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates a client for the configured package index.
    pub fn client(&self) -> RpcClient<CurlTransport> {
        RpcClient::new(self.origin.clone(), CurlTransport::new(&self.user_agent))
    }
}
