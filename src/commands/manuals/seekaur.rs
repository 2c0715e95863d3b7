// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    seekaur - browse the arch user repository

SYNOPSIS
    seekaur [options] [command]

DESCRIPTION
    Seekaur queries the RPC interface of the Arch User Repository and prints
    the results in the style of pacman. The index is reached at
    https://aur.archlinux.org unless the SEEKAUR_ORIGIN environment variable
    or the origin key of the [rpc] table in $SEEKAUR_HOME/config.toml says
    otherwise.

    Set SEEKAUR_LOG to a filter such as debug to see each request made.

OPTIONS
    --version
          Print version information and exit

    --color <when>
          Coloring: auto, always, never

EXAMPLES
    seekaur search cower
    seekaur info cower pacaur
";
