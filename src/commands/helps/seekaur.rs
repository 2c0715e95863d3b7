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

// This help page was automatically generated from the mangen.py tool.
pub const HELP: &str = r#"Seekaur is a tool for browsing the Arch User Repository.

Usage:
    seekaur [options] [command]

Commands:
    search          find packages whose name contains a term
    info            print detailed information about packages
    tarball         print source tarball links for packages
    pkgbuild        print the PKGBUILD of packages
    version         print version information

Options:
    --version       print version information and exit
    --color <when>  coloring: auto, always, never
    --help, -h      print help information

Use 'seekaur help <command>' for more information about a command.
"#;
