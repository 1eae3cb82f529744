use std::path::PathBuf;

/// Directory holding Buku's `bookmarks.db`, resolved the same way Buku does.
pub fn get_default_dbdir() -> PathBuf {
    if let Ok(path) = std::env::var("BUKU_DEFAULT_DBDIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("buku");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/buku");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("buku");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_default_dbpath() -> PathBuf {
    get_default_dbdir().join("bookmarks.db")
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("pinku");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/pinku");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("pinku");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[inline]
pub fn has_whitespace(s: &str) -> bool {
    s.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_dbpath_file_name() {
        assert_eq!(
            get_default_dbpath().file_name().and_then(|n| n.to_str()),
            Some("bookmarks.db")
        );
    }

    #[rstest]
    #[case("rust", false)]
    #[case("two words", true)]
    #[case("tab\there", true)]
    #[case("", false)]
    fn test_has_whitespace(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(has_whitespace(input), expected);
    }
}
