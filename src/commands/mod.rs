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

// entry program
pub mod seekaur;

// commands
mod help;
mod info;
mod pkgbuild;
mod search;
mod tarball;
mod version;

// informational content for help about commands
mod helps;
mod manuals;

use crate::error::{Error, Hint};

/// Checks that `names` holds at least one name.
///
/// Prints the command's usage to stdout when the check fails.
fn require_names(cmd: &str, usage: &str, names: &[String]) -> Result<(), Error> {
    match names.is_empty() {
        true => {
            println!("{}", usage);
            Err(Error::MissingArguments(
                cmd.to_string(),
                String::from("at least one argument"),
                Hint::CommandHelp(cmd.to_string()),
            ))
        }
        false => Ok(()),
    }
}
