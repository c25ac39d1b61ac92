//! Splits model source from the non-source trailer of a `.nlogo` container
//! file.

/// Sentinel line marking the start of the non-source trailer section in a
/// `.nlogo` file. Everything from this line onward is interface and plot
/// data, not source code.
pub const TRAILER_SENTINEL: &str = "@#$#@#$#@";

/// Returns the prefix of `lines` preceding the trailer sentinel, or all of
/// `lines` when no sentinel is present.
pub fn source_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let cut = lines
        .iter()
        .position(|line| line.starts_with(TRAILER_SENTINEL))
        .unwrap_or(lines.len());
    &lines[..cut]
}
