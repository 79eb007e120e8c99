use crate::error::CloudIpError;
use crate::job::{Job, OutputTarget, Sink, SourceEndpoints};

use super::args::Args;
use super::config::ConfigFile;

/// Validate command line arguments and build the run configuration
pub struct JobLoader;

impl JobLoader {
    /// Build a `Job` from CLI arguments and the optional config file
    ///
    /// All misuse (missing `-f`, neither `-o` nor `-p`, unsupported output
    /// extension) is rejected here, before any input is read or feed fetched.
    pub fn load(args: &Args) -> Result<Job, CloudIpError> {
        let input = args.file.clone().ok_or(CloudIpError::MissingInputFile)?;

        if args.output.is_none() && !args.print {
            return Err(CloudIpError::MissingOutputMode);
        }

        let file = args
            .output
            .as_deref()
            .map(OutputTarget::from_path)
            .transpose()?;

        let sources = match args.config.as_ref() {
            Some(config_path) => ConfigFile::load(config_path)?.to_endpoints(),
            None => SourceEndpoints::default(),
        };

        Ok(Job {
            input,
            sink: Sink {
                print: args.print,
                file,
            },
            sources,
        })
    }
}
