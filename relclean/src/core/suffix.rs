//! Development-config suffix matching on output file names.

/// True if `file_name` ends with the dev-config `suffix`.
///
/// Matches the whole suffix literally against the end of the name; the base
/// name in front of it is arbitrary (including empty).
pub fn is_dev_config(file_name: &str, suffix: &str) -> bool {
    file_name.ends_with(suffix)
}
