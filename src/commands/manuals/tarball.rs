// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    tarball - print source tarball links for packages

SYNOPSIS
    seekaur tarball [options] <name>...

DESCRIPTION
    This command prints the link to the source tarball of each package. By
    default the link is derived from the name alone and no request is made,
    so a misspelled name still produces a link. Use --remote to ask the index
    for the link instead, which reports names that do not exist.

OPTIONS
    <name>...
          Exact names of packages

    --remote
          Ask the index for the link of each package

EXAMPLES
    seekaur tarball cower
    seekaur tarball --remote cower pacaur
";
