//! Converter subprocess invocation.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use deck_core::{Error, Result};

/// Converter used when none is specified.
pub const DEFAULT_CONVERTER: &str = "libreoffice";

/// An external document converter.
#[derive(Debug, Clone)]
pub struct Converter {
    program: PathBuf,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl Converter {
    /// Use `program` (a name looked up on `PATH`, or a path) as the converter.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to the converter for `input` and `output_dir`.
    pub fn args(input: &Path, output_dir: &Path) -> Vec<PathBuf> {
        vec![
            "--headless".into(),
            "--convert-to".into(),
            "png".into(),
            "--outdir".into(),
            output_dir.to_path_buf(),
            input.to_path_buf(),
        ]
    }

    /// Convert `input` into PNG images in `output_dir`.
    ///
    /// Blocks until the converter exits. Returns the converter's trimmed
    /// stdout and stderr joined by a newline, skipping empty parts.
    pub fn convert(&self, input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<String> {
        let input = input.as_ref();
        let output_dir = output_dir.as_ref();

        if input.as_os_str().is_empty() {
            return Err(Error::validation("No PowerPoint file was provided."));
        }
        if !input.is_file() {
            return Err(Error::NotFound(format!(
                "The PowerPoint file '{}' was not found.",
                input.display()
            )));
        }
        if output_dir.as_os_str().is_empty() {
            return Err(Error::validation("No output directory was provided."));
        }
        fs::create_dir_all(output_dir).map_err(|e| {
            Error::ExternalTool(format!(
                "Failed to create output directory '{}': {}",
                output_dir.display(),
                e
            ))
        })?;

        let args = Self::args(input, output_dir);
        log::debug!("Running {} {:?}", self.program.display(), args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                if e.kind() == IoErrorKind::NotFound {
                    Error::ConverterNotFound {
                        converter: self.program.display().to_string(),
                    }
                } else {
                    Error::ExternalTool(format!(
                        "Unexpected error while converting '{}': {}",
                        input.display(),
                        e
                    ))
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let (stdout, stderr) = (stdout.trim(), stderr.trim());

        if !output.status.success() {
            log::warn!("Converter exited with {}", output.status);
            let message = [stderr, stdout]
                .into_iter()
                .find(|s| !s.is_empty())
                .unwrap_or("Unknown error");
            return Err(Error::ConversionFailed {
                input: input.to_path_buf(),
                message: message.to_string(),
            });
        }

        log::info!("Converted {} into {}", input.display(), output_dir.display());
        Ok([stdout, stderr]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Convert `pptx_path` to PNG images in `output_dir` using `converter`.
pub fn convert_pptx_to_images(
    pptx_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    converter: impl Into<PathBuf>,
) -> Result<String> {
    Converter::new(converter).convert(pptx_path, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::ErrorKind;

    fn deck(dir: &Path) -> PathBuf {
        let path = dir.join("deck.pptx");
        fs::write(&path, b"PK").unwrap();
        path
    }

    #[test]
    fn test_args() {
        let args = Converter::args(Path::new("in.pptx"), Path::new("out"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec!["--headless", "--convert-to", "png", "--outdir", "out", "in.pptx"]
        );
    }

    #[test]
    fn test_empty_input() {
        let err = Converter::default().convert("", "out").unwrap_err();
        assert_eq!(err.to_string(), "No PowerPoint file was provided.");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_missing_input() {
        let err = Converter::default()
            .convert("/no/such/deck.pptx", "out")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The PowerPoint file '/no/such/deck.pptx' was not found."
        );
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[test]
    fn test_empty_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = Converter::default().convert(deck(dir.path()), "").unwrap_err();
        assert_eq!(err.to_string(), "No output directory was provided.");
    }

    #[test]
    fn test_output_dir_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let err = Converter::default().convert(&input, &blocker).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ExternalTool);
        assert!(err.to_string().starts_with(&format!(
            "Failed to create output directory '{}': ",
            blocker.display()
        )));
    }

    #[test]
    fn test_converter_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());
        let out = dir.path().join("images");

        let err = convert_pptx_to_images(&input, &out, "no-such-converter-binary").unwrap_err();

        assert!(matches!(err, Error::ConverterNotFound { ref converter } if converter == "no-such-converter-binary"));
        // The output directory is created before the converter runs.
        assert!(out.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_conversion_returns_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());
        let out = dir.path().join("images");

        let output = convert_pptx_to_images(&input, &out, "echo").unwrap();

        assert_eq!(
            output,
            format!(
                "--headless --convert-to png --outdir {} {}",
                out.display(),
                input.display()
            )
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());

        let err = convert_pptx_to_images(&input, dir.path(), "false").unwrap_err();

        match err {
            Error::ConversionFailed { input: failed, message } => {
                assert_eq!(failed, input);
                assert_eq!(message, "Unknown error");
            }
            other => panic!("expected conversion failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());

        // `sh` rejects the unknown `--headless` option on stderr.
        let err = convert_pptx_to_images(&input, dir.path(), "sh").unwrap_err();

        match err {
            Error::ConversionFailed { message, .. } => {
                assert!(!message.is_empty());
                assert_ne!(message, "Unknown error");
            }
            other => panic!("expected conversion failure, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_falls_back_to_stdout() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let input = deck(dir.path());
        let script = dir.path().join("fake-converter");
        fs::write(&script, "#!/bin/sh\necho 'source file could not be loaded'\nexit 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let err = convert_pptx_to_images(&input, dir.path().join("images"), &script).unwrap_err();

        match err {
            Error::ConversionFailed { message, .. } => {
                assert_eq!(message, "source file could not be loaded");
            }
            other => panic!("expected conversion failure, got {other:?}"),
        }
    }
}
