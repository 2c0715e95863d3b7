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

use crate::commands::helps::search;
use crate::core::context::Context;
use crate::core::display;
use crate::core::rpc::{self, RpcClient, Transport};
use crate::core::sort;
use crate::error::{Error, Hint};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Search {
    terms: Vec<String>,
}

impl Subcommand<Context> for Search {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(search::HELP))?;
        Ok(Search {
            terms: cli.get_all(Arg::positional("term"))?.unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        if self.terms.len() != 1 {
            println!("{}", search::HELP);
            return Err(Error::MissingArguments(
                String::from("search"),
                String::from("exactly one argument"),
                Hint::CommandHelp(String::from("search")),
            ))?;
        }
        let listing = Self::run(&c.client(), &self.terms[0])?;
        if listing.is_empty() == false {
            println!("{}", listing);
        }
        Ok(())
    }
}

impl Search {
    /// Queries the index for `term` and formats the sorted results.
    fn run<T: Transport>(client: &RpcClient<T>, term: &str) -> Result<String, Error> {
        let mut results = client.fetch(&rpc::search_path(term))?.into_results();
        tracing::debug!("search for {:?} matched {} packages", term, results.len());
        sort::sort_results(&mut results);
        Ok(results
            .iter()
            .map(|r| display::compact(r))
            .collect::<Vec<String>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::rpc::test::{origin, Canned};

    #[test]
    fn results_are_sorted() {
        let canned = Canned::new(
            r#"{"type":"search","count":3,"results":[
                {"Name":"zsh-git","CategoryID":16,"Version":"1","FirstSubmitted":0,"LastModified":0},
                {"Name":"bash-git","CategoryID":16,"Version":"1","FirstSubmitted":0,"LastModified":0},
                {"Name":"vim-git","CategoryID":4,"Version":"1","FirstSubmitted":0,"LastModified":0}]}"#,
        );
        let client = RpcClient::new(origin(), &canned);
        let text = Search::run(&client, "git").unwrap();
        let vim = text.find("vim-git").unwrap();
        let bash = text.find("bash-git").unwrap();
        let zsh = text.find("zsh-git").unwrap();
        assert!(vim < bash && bash < zsh);
    }

    #[test]
    fn no_matches_is_empty() {
        let canned = Canned::new(r#"{"type":"search","count":0,"results":[]}"#);
        let client = RpcClient::new(origin(), &canned);
        assert_eq!(Search::run(&client, "nothing-here").unwrap(), "");
    }
}
