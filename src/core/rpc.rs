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

//! Requests against the package index's RPC endpoint.

use crate::core::record::Envelope;
use crate::error::{Error, LastError};
use curl::easy::{Easy, List};
use url::form_urlencoded::byte_serialize;
use url::Url;

pub const RESPONSE_OKAY: u32 = 200;

const RPC_PATH: &str = "/rpc.php";

/// The raw result of a single GET.
#[derive(Debug, PartialEq)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Performs blocking GET requests.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Response, Error>;
}

/// A transport backed by a fresh curl easy handle per request.
#[derive(Debug, PartialEq, Clone)]
pub struct CurlTransport {
    user_agent: String,
}

impl CurlTransport {
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Response, Error> {
        let net_err = |e: curl::Error| Error::Network(url.to_string(), LastError(e.to_string()));

        let mut body = Vec::new();
        let mut easy = Easy::new();
        easy.url(url).map_err(net_err)?;
        easy.follow_location(true).map_err(net_err)?;
        let mut list = List::new();
        list.append(&format!("User-Agent: {}", self.user_agent))
            .map_err(net_err)?;
        easy.http_headers(list).map_err(net_err)?;
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(net_err)?;
            transfer.perform().map_err(net_err)?;
        }
        let status = easy.response_code().map_err(net_err)?;
        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(Response { status, body })
    }
}

/// Escapes a single query value (spaces become `+`).
pub fn escape(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

/// Builds the request path for a search on `term`.
pub fn search_path(term: &str) -> String {
    format!("{}?type=search&arg={}", RPC_PATH, escape(term))
}

/// Builds the request path for a batched lookup of every name in `names`.
pub fn multiinfo_path<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().fold(
        format!("{}?type=multiinfo", RPC_PATH),
        |mut acc, name| {
            acc.push_str("&arg[]=");
            acc.push_str(&escape(name.as_ref()));
            acc
        },
    )
}

/// A client for the index rooted at a single origin.
#[derive(Debug)]
pub struct RpcClient<T: Transport> {
    origin: Url,
    transport: T,
}

impl<T: Transport> RpcClient<T> {
    pub fn new(origin: Url, transport: T) -> Self {
        Self { origin, transport }
    }

    pub fn get_origin(&self) -> &Url {
        &self.origin
    }

    /// Resolves an already-escaped path and query against the origin.
    pub fn resolve(&self, request: &str) -> Result<Url, Error> {
        self.origin
            .join(request)
            .map_err(|e| Error::InvalidOrigin(request.to_string(), LastError(e.to_string())))
    }

    /// Issues `request` and decodes the response envelope.
    ///
    /// `request` must already be escaped, eg "/rpc.php?type=search&arg=jquery".
    pub fn fetch(&self, request: &str) -> Result<Envelope, Error> {
        let url = self.resolve(request)?;
        let response = self.transport.get(url.as_str())?;
        Envelope::decode(&response.body).map_err(|e| match e {
            Error::Decode(_, why) => Error::Decode(url.to_string(), why),
            e => e,
        })
    }

    /// Issues a plain GET for `url`, returning the body regardless of status.
    pub fn get_raw(&self, url: &Url) -> Result<Response, Error> {
        self.transport.get(url.as_str())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use std::cell::RefCell;

    /// Replies to every request with the same canned response and remembers
    /// the requested urls.
    pub struct Canned {
        status: u32,
        body: Vec<u8>,
        pub requests: RefCell<Vec<String>>,
    }

    impl Canned {
        pub fn new(body: &str) -> Self {
            Self::with_status(RESPONSE_OKAY, body)
        }

        pub fn with_status(status: u32, body: &str) -> Self {
            Self::with_bytes(status, body.as_bytes())
        }

        pub fn with_bytes(status: u32, body: &[u8]) -> Self {
            Self {
                status,
                body: body.to_vec(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for &Canned {
        fn get(&self, url: &str) -> Result<Response, Error> {
            self.requests.borrow_mut().push(url.to_string());
            Ok(Response {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    pub fn origin() -> Url {
        Url::parse("https://aur.archlinux.org").unwrap()
    }

    #[test]
    fn build_search_path() {
        assert_eq!(search_path("jquery"), "/rpc.php?type=search&arg=jquery");
        assert_eq!(
            search_path("c++ lib&x"),
            "/rpc.php?type=search&arg=c%2B%2B+lib%26x"
        );
    }

    #[test]
    fn build_multiinfo_path() {
        assert_eq!(
            multiinfo_path(&["cower", "pacaur"]),
            "/rpc.php?type=multiinfo&arg[]=cower&arg[]=pacaur"
        );
        assert_eq!(
            multiinfo_path(&["a b"]),
            "/rpc.php?type=multiinfo&arg[]=a+b"
        );
    }

    #[test]
    fn fetch_resolves_against_origin() {
        let canned = Canned::new(r#"{"type":"search","count":0,"results":[]}"#);
        let client = RpcClient::new(origin(), &canned);
        let env = client.fetch(&search_path("vim")).unwrap();
        assert_eq!(env.get_kind(), "search");
        assert_eq!(
            canned.requests.borrow().as_slice(),
            &["https://aur.archlinux.org/rpc.php?type=search&arg=vim".to_string()]
        );
    }

    #[test]
    fn fetch_reports_decode_error_with_url() {
        let canned = Canned::new("not json");
        let client = RpcClient::new(origin(), &canned);
        match client.fetch(&search_path("vim")) {
            Err(Error::Decode(url, _)) => assert!(url.ends_with("arg=vim")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
