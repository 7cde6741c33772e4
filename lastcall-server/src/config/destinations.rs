//! Plain-text location files.

use std::io;
use std::path::Path;

use super::ConfigError;

/// Parse a destination list: one per line, `#` starts a comment, blank
/// lines are skipped.
pub fn parse_destinations(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a destination list file.
pub fn read_destinations(path: &Path) -> Result<Vec<String>, ConfigError> {
    Ok(parse_destinations(&read(path)?))
}

/// Read the origin file. The origin must not be blank.
pub fn read_origin(path: &Path) -> Result<String, ConfigError> {
    let origin = read(path)?.trim().to_string();
    if origin.is_empty() {
        return Err(ConfigError::EmptyOrigin(path.to_path_buf()));
    }
    Ok(origin)
}

/// Read an optional single-value file. A missing file is `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let value = text.trim();
            Ok((!value.is_empty()).then(|| value.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let text = "\
# where people go after the meetup
Den Haag HS, 2515 Den Haag

Utrecht Centraal   # platform 5 usually
   # only a comment
Amsterdam Zuid\r
";
        assert_eq!(
            parse_destinations(text),
            vec![
                "Den Haag HS, 2515 Den Haag",
                "Utrecht Centraal",
                "Amsterdam Zuid",
            ]
        );
    }

    #[test]
    fn empty_file_has_no_destinations() {
        assert!(parse_destinations("").is_empty());
        assert!(parse_destinations("\n# nothing\n\n").is_empty());
    }

    #[test]
    fn origin_is_trimmed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.txt");
        std::fs::write(&path, "  Amsterdam Centraal\n\n").unwrap();

        assert_eq!(read_origin(&path).unwrap(), "Amsterdam Centraal");
    }

    #[test]
    fn blank_origin_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("source.txt");
        std::fs::write(&path, " \n").unwrap();

        assert!(matches!(read_origin(&path), Err(ConfigError::EmptyOrigin(_))));
    }

    #[test]
    fn missing_origin_is_a_read_error() {
        let dir = tempdir().unwrap();
        let result = read_origin(&dir.path().join("source.txt"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn optional_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("apikey.txt");

        assert_eq!(read_optional(&path).unwrap(), None);

        std::fs::write(&path, "abc123\n").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("abc123"));

        std::fs::write(&path, "\n").unwrap();
        assert_eq!(read_optional(&path).unwrap(), None);
    }
}
