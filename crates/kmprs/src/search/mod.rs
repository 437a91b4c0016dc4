// Knuth-Morris-Pratt substring search: linear time with no text backtracking
//
// Two pieces, in dependency order:
// 1. failure.rs builds the failure table of a pattern: at every pattern
//    position, the length of the longest proper prefix that is also a
//    suffix of the pattern up to there
// 2. matcher.rs walks the text once and uses the table to resynchronize
//    the pattern index on mismatch instead of rewinding the text index
//
// The engine is generic over the symbol type (any `T: Eq`). String
// callers go through the byte-oriented helpers; offsets are byte offsets.

mod failure;
mod matcher;

pub use failure::failure_table;
pub use matcher::{Matches, Searcher, find, find_all, find_all_str, find_str};
