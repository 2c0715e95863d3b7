// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    version - print version information

SYNOPSIS
    seekaur version

DESCRIPTION
    This command prints the version of seekaur and exits.

EXAMPLES
    seekaur version
";
