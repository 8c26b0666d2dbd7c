use std::path::PathBuf;

use anyhow::{anyhow, Result};
use pico_args::Arguments;

use sensor_loader::config::LoaderConfig;

#[derive(Debug, Default, PartialEq)]
pub struct LoadArgs {
    pub csv: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub dry_run: bool,
}

impl LoadArgs {
    pub fn parse(mut args: Arguments) -> Result<Self> {
        let load_args = LoadArgs {
            csv: args.opt_value_from_str("--csv")?,
            batch_size: args.opt_value_from_str("--batch-size")?,
            dry_run: args.contains("--dry-run"),
        };
        let rest = args.finish();
        if !rest.is_empty() {
            return Err(anyhow!("Unexpected arguments: {:?}", rest));
        }
        Ok(load_args)
    }

    pub fn apply(self, mut config: LoaderConfig) -> Result<LoaderConfig> {
        if let Some(csv) = self.csv {
            config = config.with_csv_path(csv);
        }
        if let Some(batch_size) = self.batch_size {
            config = config.with_batch_size(batch_size)?;
        }
        Ok(config.with_dry_run(self.dry_run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<LoadArgs> {
        LoadArgs::parse(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        assert_eq!(parse(&[]).unwrap(), LoadArgs::default());
        let config = parse(&[]).unwrap().apply(LoaderConfig::default()).unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let args = parse(&["--csv", "data/july.csv", "--batch-size", "250", "--dry-run"]).unwrap();
        let config = args.apply(LoaderConfig::default()).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("data/july.csv"));
        assert_eq!(config.batch_size, 250);
        assert!(config.dry_run);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(parse(&["--verbose"]).is_err());
    }

    #[test]
    fn non_numeric_batch_size_is_rejected() {
        assert!(parse(&["--batch-size", "many"]).is_err());
    }
}
