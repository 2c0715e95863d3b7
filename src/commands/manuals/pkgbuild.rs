// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    pkgbuild - print the PKGBUILD of packages

SYNOPSIS
    seekaur pkgbuild <name>...

DESCRIPTION
    This command downloads and prints the PKGBUILD of each package in the order
    given. The response body is printed as-is; if a package does not exist the
    server error page is printed instead.

OPTIONS
    <name>...
          Exact names of packages

EXAMPLES
    seekaur pkgbuild cower
";
