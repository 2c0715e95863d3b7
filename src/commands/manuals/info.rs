// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    info - print detailed information about packages

SYNOPSIS
    seekaur info <name>...

DESCRIPTION
    This command looks up every package with a single batched request and
    prints a block of details for each, in the order the names were given.
    Each name must exactly match a package name. A name with no corresponding
    package prints an error and the command exits with a failure after all
    other packages are displayed.

OPTIONS
    <name>...
          Exact names of packages to look up

EXAMPLES
    seekaur info cower
    seekaur info cower pacaur yaourt
";
