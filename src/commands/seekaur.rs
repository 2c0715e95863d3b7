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

use crate::commands::helps::seekaur;
use crate::core::config::CONFIG_FILE;
use crate::core::context::Context;
use crate::util::environment::{self, ColorMode};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Seekaur {
    version: bool,
    color: Option<ColorMode>,
    command: Option<SeekaurSubcommand>,
}

impl Command for Seekaur {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(seekaur::HELP))?;
        Ok(Seekaur {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // need to set this coloring mode ASAP
        self.color.unwrap_or(ColorMode::Auto).apply();
        // prioritize version information
        if self.version == true {
            println!("{}", version_line());
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            let context = match c.needs_context() {
                true => Context::new()
                    .home(environment::SEEKAUR_HOME)?
                    .settings(CONFIG_FILE)?
                    .origin(environment::SEEKAUR_ORIGIN)?,
                // help and version work even with a broken config
                false => Context::new(),
            };
            c.execute(&context)
        // if no command is given then print default help
        } else {
            Ok(println!("{}", seekaur::HELP))
        }
    }
}

/// The static version string printed by `--version` and `seekaur version`.
pub fn version_line() -> String {
    format!("seekaur v{}", env!("CARGO_PKG_VERSION"))
}

use crate::commands::help::Help as HelpCmd;
use crate::commands::info::Info;
use crate::commands::pkgbuild::Pkgbuild;
use crate::commands::search::Search;
use crate::commands::tarball::Tarball;
use crate::commands::version::Version;

#[derive(Debug, PartialEq)]
enum SeekaurSubcommand {
    Help(HelpCmd),
    Search(Search),
    Info(Info),
    Tarball(Tarball),
    Pkgbuild(Pkgbuild),
    Version(Version),
}

impl SeekaurSubcommand {
    /// Checks if the command reads the config or contacts the package index.
    fn needs_context(&self) -> bool {
        match self {
            Self::Help(_) | Self::Version(_) => false,
            Self::Search(_) | Self::Info(_) | Self::Tarball(_) | Self::Pkgbuild(_) => true,
        }
    }
}

impl Subcommand<Context> for SeekaurSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["help", "search", "info", "tarball", "pkgbuild", "version"])?
            .as_ref()
        {
            "help" => Ok(SeekaurSubcommand::Help(HelpCmd::interpret(cli)?)),
            "search" => Ok(SeekaurSubcommand::Search(Search::interpret(cli)?)),
            "info" => Ok(SeekaurSubcommand::Info(Info::interpret(cli)?)),
            "tarball" => Ok(SeekaurSubcommand::Tarball(Tarball::interpret(cli)?)),
            "pkgbuild" => Ok(SeekaurSubcommand::Pkgbuild(Pkgbuild::interpret(cli)?)),
            "version" => Ok(SeekaurSubcommand::Version(Version::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            SeekaurSubcommand::Help(c) => c.execute(&()),
            SeekaurSubcommand::Search(c) => c.execute(context),
            SeekaurSubcommand::Info(c) => c.execute(context),
            SeekaurSubcommand::Tarball(c) => c.execute(context),
            SeekaurSubcommand::Pkgbuild(c) => c.execute(context),
            SeekaurSubcommand::Version(c) => c.execute(&()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version_string() {
        assert_eq!(version_line(), "seekaur v1.0.0");
    }

    #[test]
    fn version_skips_context() {
        let cmd = SeekaurSubcommand::Version(Version);
        assert_eq!(cmd.needs_context(), false);
        // the default context never touches the home directory or the origin
        assert!(cmd.execute(&Context::new()).is_ok());
    }
}
