use crate::daemon::DEFAULT_ENDPOINT;
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;

const VERSION_LINE: &str = concat!(env!("CARGO_PKG_NAME"), " version ", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug, Clone)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about,
    author,
    long_about = None,
    before_help = VERSION_LINE,
    disable_version_flag = true
)]
pub struct DockermasterArguments {
    #[arg(value_enum, required_unless_present = "show_version", help = "Action to perform")]
    pub(crate) action: Option<Action>,
    #[arg(short = 'H', long = "host", value_name = "ENDPOINT", default_value = DEFAULT_ENDPOINT, help = "Docker daemon endpoint (unix socket path or URL)")]
    pub(crate) host: String,
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue, help = "Print version number")]
    pub(crate) show_version: bool,
    #[arg(long = "verbose", action = ArgAction::SetTrue, help = "Enable verbose logging")]
    pub(crate) verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// List all containers, including stopped ones
    #[default]
    List,
}

/// The resolved intent of one run. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub endpoint: String,
    pub show_version: bool,
    pub verbose: bool,
}

impl From<DockermasterArguments> for Invocation {
    fn from(args: DockermasterArguments) -> Self {
        Invocation {
            // Only absent when the version flag short-circuits the run
            action: args.action.unwrap_or_default(),
            endpoint: args.host,
            show_version: args.show_version,
            verbose: args.verbose,
        }
    }
}

impl Invocation {
    /// Parse raw arguments (program name first) without touching the process.
    pub fn try_resolve<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        DockermasterArguments::try_parse_from(args).map(Invocation::from)
    }
}

pub fn version_line() -> &'static str {
    VERSION_LINE
}

/// Resolve the command line into an [`Invocation`].
///
/// Help and version requests print to stdout and exit 0. Parse errors print
/// the usage to stderr and exit 1.
pub fn resolve<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Invocation::try_resolve(args) {
        Ok(invocation) if invocation.show_version => {
            println!("{}", version_line());
            std::process::exit(0);
        }
        Ok(invocation) => invocation,
        Err(err) => {
            // Help output is the only "error" clap routes to stdout
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_list_uses_default_endpoint() {
        let invocation = Invocation::try_resolve(["dockermaster", "list"]).unwrap();
        assert_eq!(invocation.action, Action::List);
        assert_eq!(invocation.endpoint, "unix:///var/run/docker.sock");
        assert!(!invocation.show_version);
        assert!(!invocation.verbose);
    }

    #[test]
    fn test_host_override_is_verbatim() {
        let invocation = Invocation::try_resolve(["dockermaster", "--host", "/tmp/nonexistent.sock", "list"]).unwrap();
        assert_eq!(invocation.endpoint, "/tmp/nonexistent.sock");

        let invocation = Invocation::try_resolve(["dockermaster", "list", "-H", "tcp://10.0.0.5:2375"]).unwrap();
        assert_eq!(invocation.endpoint, "tcp://10.0.0.5:2375");
    }

    #[test]
    fn test_version_flag_without_action() {
        let invocation = Invocation::try_resolve(["dockermaster", "-v"]).unwrap();
        assert!(invocation.show_version);

        let invocation = Invocation::try_resolve(["dockermaster", "--version"]).unwrap();
        assert!(invocation.show_version);
    }

    #[test]
    fn test_version_line_format() {
        assert_eq!(version_line(), format!("dockermaster version {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_verbose_flag() {
        let invocation = Invocation::try_resolve(["dockermaster", "--verbose", "list"]).unwrap();
        assert!(invocation.verbose);
    }

    #[test]
    fn test_missing_action_is_an_error() {
        let err = Invocation::try_resolve(["dockermaster"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let err = Invocation::try_resolve(["dockermaster", "delete"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_extra_positional_is_an_error() {
        let err = Invocation::try_resolve(["dockermaster", "list", "list"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = Invocation::try_resolve(["dockermaster", "--all", "list"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let err = Invocation::try_resolve(["dockermaster", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
        let help = err.to_string();
        assert!(help.contains("--host"));
        assert!(help.contains("--version"));
    }
}
