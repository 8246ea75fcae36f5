//! Small helpers shared by the scenegen crates

mod result_ext;
pub use result_ext::AnyhowResultExt;

pub type AnyResult<T = (), E = anyhow::Error> = anyhow::Result<T, E>;

/// Shorthand for `Ok(())`, cause it looks ugly
pub const fn ok<E>() -> Result<(), E> {
    Ok(())
}

/// Returns the part of a file name before its first `.`
///
/// ```
/// use scenegen_utils::file_stem_prefix;
/// assert_eq!(file_stem_prefix("foo.scene"), "foo");
/// assert_eq!(file_stem_prefix("foo.bar.scene"), "foo");
/// assert_eq!(file_stem_prefix("noext"), "noext");
/// assert_eq!(file_stem_prefix(".hidden"), "");
/// ```
pub fn file_stem_prefix(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((prefix, _)) => prefix,
        None => file_name,
    }
}
