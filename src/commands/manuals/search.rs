// This manual page was automatically generated from the rsmangen.py tool.
pub const MANUAL: &str = "\
NAME
    search - find packages whose name contains a term

SYNOPSIS
    seekaur search <term>

DESCRIPTION
    This command sends a single search request to the index and lists every
    matching package. Results are sorted by category, then by name within the
    same category. A version printed in red means the package is flagged out
    of date; green means it is current.

OPTIONS
    <term>
          Text to search for in package names

EXAMPLES
    seekaur search jquery
";
