//! Splitting incoming names against the reserved suffix.

/// Return the registry lookup key for `full_name`, or `None` when the name
/// does not end in `reserved_suffix`.
///
/// Only the text from the last `.` onwards is compared, case-sensitively and
/// with the dot included, so `"example.bit"` yields `"example"` for `".bit"`
/// and `"www.example.bit"` yields `"www.example"`.
pub fn lookup_key<'a>(full_name: &'a str, reserved_suffix: &str) -> Option<&'a str> {
    let dot = full_name.rfind('.')?;
    let (key, suffix) = full_name.split_at(dot);

    (suffix == reserved_suffix).then_some(key)
}
