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

use crate::commands::helps::tarball;
use crate::commands::require_names;
use crate::core::context::Context;
use crate::core::lookup;
use crate::core::source;
use crate::error::Error;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};
use url::Url;

#[derive(Debug, PartialEq)]
pub struct Tarball {
    remote: bool,
    names: Vec<String>,
}

impl Subcommand<Context> for Tarball {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(tarball::HELP))?;
        Ok(Tarball {
            remote: cli.check(Arg::flag("remote"))?,
            names: cli.get_all(Arg::positional("name"))?.unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        require_names("tarball", tarball::HELP, &self.names)?;
        match self.remote {
            // ask the index where each tarball lives
            true => {
                let client = c.client();
                lookup::multi_info(&client, &self.names, |rec| {
                    println!("{}", client.resolve(rec.get_url_path())?);
                    Ok(())
                })
            }
            false => {
                for link in Self::links(c.get_origin(), &self.names)? {
                    println!("{}", link);
                }
                Ok(())
            }
        }
    }
}

impl Tarball {
    /// Derives the tarball link for every name without querying the index.
    fn links(origin: &Url, names: &[String]) -> Result<Vec<Url>, Error> {
        names
            .iter()
            .map(|n| source::tarball_url(origin, n))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn links_follow_argument_order() {
        let origin = Url::parse("https://aur.archlinux.org").unwrap();
        let links = Tarball::links(&origin, &[String::from("pacaur"), String::from("a")]).unwrap();
        assert_eq!(
            links.iter().map(|u| u.as_str()).collect::<Vec<&str>>(),
            vec![
                "https://aur.archlinux.org/packages/pa/pacaur/pacaur.tar.gz",
                "https://aur.archlinux.org/packages/a/a/a.tar.gz",
            ]
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let origin = Url::parse("https://aur.archlinux.org").unwrap();
        assert_eq!(
            Tarball::links(&origin, &[String::new()]),
            Err(Error::InvalidName)
        );
    }
}
