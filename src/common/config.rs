use std::path::PathBuf;

use crate::common::error::AppError;

/// Run options taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command script to execute.
    pub input: PathBuf,
    /// Log and skip malformed rows instead of stopping at the first one.
    pub skip_invalid: bool,
}

impl Config {
    /// Parses `args` as received by `main`, program name first.
    pub fn from_args(args: &[String]) -> Result<Self, AppError> {
        let mut input = None;
        let mut skip_invalid = false;

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--skip-invalid" => skip_invalid = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::UnknownArg(flag.to_string()));
                }
                path if input.is_none() => input = Some(PathBuf::from(path)),
                extra => return Err(AppError::UnknownArg(extra.to_string())),
            }
        }

        Ok(Self {
            input: input.ok_or(AppError::MissingArg)?,
            skip_invalid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reads_path_and_flag_in_any_order() {
        let config = Config::from_args(&args(&["ledger", "--skip-invalid", "cmds.csv"])).unwrap();
        assert_eq!(config.input, PathBuf::from("cmds.csv"));
        assert!(config.skip_invalid);

        let config = Config::from_args(&args(&["ledger", "cmds.csv"])).unwrap();
        assert!(!config.skip_invalid);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(matches!(
            Config::from_args(&args(&["ledger"])),
            Err(AppError::MissingArg)
        ));
        assert!(matches!(
            Config::from_args(&args(&["ledger", "--skip-invalid"])),
            Err(AppError::MissingArg)
        ));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(matches!(
            Config::from_args(&args(&["ledger", "--verbose", "a.csv"])),
            Err(AppError::UnknownArg(flag)) if flag == "--verbose"
        ));
        assert!(matches!(
            Config::from_args(&args(&["ledger", "a.csv", "b.csv"])),
            Err(AppError::UnknownArg(extra)) if extra == "b.csv"
        ));
    }
}
