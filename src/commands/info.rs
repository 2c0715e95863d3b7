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

use crate::commands::helps::info;
use crate::commands::require_names;
use crate::core::context::Context;
use crate::core::display;
use crate::core::lookup;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Info {
    names: Vec<String>,
}

impl Subcommand<Context> for Info {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(info::HELP))?;
        Ok(Info {
            names: cli.get_all(Arg::positional("name"))?.unwrap_or_default(),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        require_names("info", info::HELP, &self.names)?;
        lookup::multi_info(&c.client(), &self.names, |rec| {
            println!("{}", display::verbose(rec));
            Ok(())
        })
    }
}
