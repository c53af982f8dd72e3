//! String helpers.

use std::borrow::Cow;

/// Length kept by [`trunc_str`] when the caller has no better choice.
pub const DEFAULT_STR_MAX: usize = 12;

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max` characters and appends `"..."`.
///
/// Strings of at most `max` characters (including the empty string) are
/// returned borrowed and unchanged. Characters are Unicode scalar values,
/// so multi-byte text is never split inside a code point.
///
/// # Examples
///
/// ```
/// use fnkit::text::trunc_str;
///
/// assert_eq!(trunc_str("hello world", 5), "hello...");
/// assert_eq!(trunc_str("hi", 5), "hi");
/// assert_eq!(trunc_str("你好世界", 2), "你好...");
/// ```
pub fn trunc_str(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
