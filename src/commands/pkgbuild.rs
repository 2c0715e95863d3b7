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

use crate::commands::helps::pkgbuild;
use crate::commands::require_names;
use crate::core::context::Context;
use crate::core::rpc::{RpcClient, Transport, RESPONSE_OKAY};
use crate::core::source;
use crate::error::Error;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};
use std::io::Write;

#[derive(Debug, PartialEq)]
pub struct Pkgbuild {
    names: Vec<String>,
}

impl Subcommand<Context> for Pkgbuild {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(pkgbuild::HELP))?;
        Ok(Pkgbuild {
            names: cli.get_all(Arg::positional("name"))?.unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        require_names("pkgbuild", pkgbuild::HELP, &self.names)?;
        let client = c.client();
        let mut stdout = std::io::stdout().lock();
        for name in &self.names {
            stdout.write_all(&Self::fetch(&client, name)?)?;
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Pkgbuild {
    /// Downloads the PKGBUILD for `name`.
    ///
    /// The body bytes are returned as-is even when the server answers with an
    /// error page; the status is only logged.
    fn fetch<T: Transport>(client: &RpcClient<T>, name: &str) -> Result<Vec<u8>, Error> {
        let url = source::pkgbuild_url(client.get_origin(), name)?;
        let response = client.get_raw(&url)?;
        if response.status != RESPONSE_OKAY {
            tracing::warn!("{} responded with status {}", url, response.status);
        }
        Ok(response.body)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::rpc::test::{origin, Canned};

    #[test]
    fn body_is_verbatim() {
        let canned = Canned::new("pkgname=cower\npkgver=4\n");
        let client = RpcClient::new(origin(), &canned);
        assert_eq!(
            Pkgbuild::fetch(&client, "cower").unwrap(),
            b"pkgname=cower\npkgver=4\n"
        );
        assert_eq!(
            canned.requests.borrow().as_slice(),
            &["https://aur.archlinux.org/packages/co/cower/PKGBUILD".to_string()]
        );
    }

    #[test]
    fn error_page_is_not_an_error() {
        let canned = Canned::with_status(404, "<html>Not Found</html>");
        let client = RpcClient::new(origin(), &canned);
        assert_eq!(
            Pkgbuild::fetch(&client, "missing").unwrap(),
            b"<html>Not Found</html>"
        );
    }

    #[test]
    fn non_utf8_body_is_kept() {
        // latin-1 encoded maintainer comment
        let body = b"# Maintainer: Ren\xe9\npkgname=cower\n";
        let canned = Canned::with_bytes(200, body);
        let client = RpcClient::new(origin(), &canned);
        assert_eq!(Pkgbuild::fetch(&client, "cower").unwrap(), body.to_vec());
    }
}
