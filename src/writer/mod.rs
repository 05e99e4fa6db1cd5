/// Serializer/Writer
///
/// Renders a document as block-style YAML and replaces the destination file
/// with it. The file handle is scoped to `write_document`, so it is closed on
/// every exit path.

use crate::error::{GenerateError, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Plain scalars a YAML 1.1 reader resolves to booleans but `serde_yaml`
/// leaves unquoted. `true`/`false` are already quoted when they are strings.
const YAML11_BOOL_WORDS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF",
];

/// Render a document to block-style YAML
///
/// The search server parses YAML 1.1, so string values that would read back
/// as booleans there are single-quoted.
pub fn render_document<T: Serialize>(document: &T) -> Result<String> {
    let rendered = serde_yaml::to_string(document)?;
    Ok(quote_yaml11_booleans(&rendered))
}

/// Quote YAML 1.1 boolean words appearing as plain mapping or sequence values
///
/// Content lines of block scalars (`|`, `>`) are left untouched.
fn quote_yaml11_booleans(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    // indentation of the line that opened the current block scalar
    let mut block_indent: Option<usize> = None;

    for line in rendered.split_inclusive('\n') {
        let body = line.trim_end_matches('\n');
        let trimmed = body.trim_start();
        let indent = body.len() - trimmed.len();

        if let Some(opener) = block_indent {
            if trimmed.is_empty() || indent > opener {
                out.push_str(line);
                continue;
            }
            block_indent = None;
        }

        let split = match trimmed.strip_prefix("- ") {
            Some(value) => Some((body.len() - value.len(), value)),
            None => trimmed
                .split_once(": ")
                .map(|(_, value)| (body.len() - value.len(), value)),
        };

        match split {
            Some((_, value)) if value.starts_with('|') || value.starts_with('>') => {
                block_indent = Some(indent);
                out.push_str(line);
            }
            Some((at, value)) if YAML11_BOOL_WORDS.contains(&value) => {
                out.push_str(&body[..at]);
                out.push('\'');
                out.push_str(value);
                out.push('\'');
                out.push_str(&line[body.len()..]);
            }
            _ => out.push_str(line),
        }
    }

    out
}

/// Render `document` and overwrite `path` with it
///
/// The file is created if absent and truncated otherwise. Parent directories
/// must already exist. Returns the number of bytes written.
pub fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<usize> {
    let rendered = render_document(document)?;

    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(rendered.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    tracing::debug!("💾 Wrote {} bytes to {}", rendered.len(), path.display());
    Ok(rendered.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvSnapshot;
    use crate::settings::{build_cluster_settings, build_logging_settings};

    #[test]
    fn renders_block_style() {
        let yaml = render_document(&build_logging_settings()).unwrap();
        assert!(yaml.contains("appender:\n  R:\n"));
        assert!(yaml.contains("es.logger.level: INFO\n"));
        assert!(yaml.contains("MaxBackupIndex: '10'"));
    }

    #[test]
    fn quotes_yaml11_boolean_words() {
        let env = EnvSnapshot::from_pairs([
            ("CLUSTER_NAME", "on"),
            ("NODE_NAME", "yes"),
            ("UNICAST_HOSTS", "n,host:9300"),
        ]);
        let yaml = render_document(&build_cluster_settings(&env).unwrap()).unwrap();

        assert!(yaml.contains("  name: 'on'\n"));
        assert!(yaml.contains("  name: 'yes'\n"));
        assert!(yaml.contains("  inline: 'off'\n"));
        assert!(yaml.contains("  indexed: 'off'\n"));
        assert!(yaml.contains("- 'n'\n"));
        // real booleans stay plain
        assert!(yaml.contains("  mlockall: true\n"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["cluster"]["name"], "on");
        assert_eq!(parsed["script"]["inline"], "off");
    }

    #[test]
    fn block_scalar_content_is_untouched() {
        let text = "key: |-\n  on\n  off\nother: off\n";
        assert_eq!(
            quote_yaml11_booleans(text),
            "key: |-\n  on\n  off\nother: 'off'\n"
        );
    }

    #[test]
    fn overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.yml");
        std::fs::write(&path, "x".repeat(10_000)).unwrap();

        let written = write_document(&path, &build_logging_settings()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.len(), written);
        assert!(!content.contains("xxxx"));
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("logging.yml");
        let err = write_document(&path, &build_logging_settings()).unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }));
    }
}
