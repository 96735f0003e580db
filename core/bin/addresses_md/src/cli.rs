// Built-in deps
use std::{ffi::OsString, path::PathBuf};
// External uses
use structopt::{clap, StructOpt};
use thiserror::Error;

/// Long options understood by the tool, including the ones `structopt` adds itself.
const KNOWN_LONG_OPTIONS: [&str; 7] = [
    "deployment",
    "template",
    "templatePrevious",
    "output",
    "debug",
    "help",
    "version",
];
const KNOWN_SHORT_OPTIONS: [&str; 2] = ["-h", "-V"];

#[derive(Debug, StructOpt)]
#[structopt(name = "Contract addresses page generator", author = "Matter Labs")]
#[structopt(about = "Writes the markdown page with the current and previous contract addresses")]
pub struct Opt {
    /// Folder with the deployment records of the network.
    #[structopt(long, parse(from_os_str))]
    pub deployment: Option<PathBuf>,
    /// Template of the current addresses section.
    #[structopt(long, parse(from_os_str))]
    pub template: Option<PathBuf>,
    /// Template rendered once per previous deployment.
    #[structopt(long = "templatePrevious", parse(from_os_str))]
    pub template_previous: Option<PathBuf>,
    /// Path of the markdown file to write, overwritten if it exists.
    #[structopt(long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    /// Print debug output.
    #[structopt(long)]
    pub debug: bool,
    /// Stray positional arguments, reported and ignored.
    #[structopt(hidden = true, parse(from_os_str))]
    pub extra: Vec<OsString>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("Missing argument(s): {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),
}

/// Validated paths of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub deployment: PathBuf,
    pub template: PathBuf,
    pub template_previous: PathBuf,
    pub output: PathBuf,
    pub debug: bool,
}

impl Opt {
    /// Checks that every required option is set, reporting all the missing ones at once.
    pub fn into_args(self) -> Result<Args, CliError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<PathBuf>, name: &'static str| {
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let deployment = require(self.deployment, "deployment");
        let template = require(self.template, "template");
        let template_previous = require(self.template_previous, "templatePrevious");
        let output = require(self.output, "output");

        if !missing.is_empty() {
            return Err(CliError::MissingArguments(missing));
        }

        Ok(Args {
            deployment,
            template,
            template_previous,
            output,
            debug: self.debug,
        })
    }
}

/// Parsed command line along with the arguments that were ignored.
#[derive(Debug)]
pub struct Cli {
    pub opt: Opt,
    /// Unknown options and stray positional arguments, in order of appearance.
    /// Arguments that are not valid UTF-8 are kept in their lossy form.
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parses the command line. The first item is the binary name.
    ///
    /// Unknown options do not fail the parsing: they are collected in
    /// [`Cli::ignored`] so the caller can warn about them.
    pub fn from_iter_safe<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let (known, unknown) = split_unknown_options(args);
        let mut opt = Opt::from_iter_safe(known)?;
        let ignored = unknown
            .into_iter()
            .chain(opt.extra.drain(..))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        Ok(Self { opt, ignored })
    }
}

fn is_known_option(arg: &str) -> bool {
    match arg.strip_prefix("--") {
        Some(long) => {
            let name = long.split('=').next().unwrap_or_default();
            KNOWN_LONG_OPTIONS.contains(&name)
        }
        None => KNOWN_SHORT_OPTIONS.contains(&arg),
    }
}

/// Separates options the tool does not know about from the rest of the command line.
fn split_unknown_options<I>(args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut known: Vec<OsString> = args.next().into_iter().collect();
    let mut unknown = Vec::new();
    let mut options_ended = false;

    for arg in args {
        let text = arg.to_string_lossy();
        if options_ended || text == "-" || !text.starts_with('-') {
            known.push(arg);
            continue;
        }
        if text == "--" {
            options_ended = true;
            known.push(arg);
        } else if is_known_option(&text) {
            known.push(arg);
        } else {
            unknown.push(arg);
        }
    }

    (known, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("write_addresses_md")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::from_iter_safe(args(
            "--deployment deployments/mumbai --template t.md --templatePrevious=p.md --output out.md --debug",
        ))
        .unwrap();

        assert!(cli.ignored.is_empty());
        assert_eq!(
            cli.opt.into_args().unwrap(),
            Args {
                deployment: "deployments/mumbai".into(),
                template: "t.md".into(),
                template_previous: "p.md".into(),
                output: "out.md".into(),
                debug: true,
            }
        );
    }

    #[test]
    fn reports_every_missing_argument() {
        let cli = Cli::from_iter_safe(args("--template t.md")).unwrap();

        assert_eq!(
            cli.opt.into_args(),
            Err(CliError::MissingArguments(vec![
                "deployment",
                "templatePrevious",
                "output"
            ]))
        );
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let cli = Cli::from_iter_safe(args(
            "--verbose --deployment d --template t --color=always --templatePrevious p -x --output o stray",
        ))
        .unwrap();

        assert_eq!(cli.ignored, vec!["--verbose", "--color=always", "-x", "stray"]);
        assert!(!cli.opt.debug);
        assert_eq!(cli.opt.into_args().unwrap().output, PathBuf::from("o"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_are_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let cli = Cli::from_iter_safe(vec![
            OsString::from("write_addresses_md"),
            OsString::from_vec(b"--bad\xff".to_vec()),
            OsString::from("--output"),
            OsString::from_vec(b"out\xfe.md".to_vec()),
        ])
        .unwrap();

        assert_eq!(cli.ignored, vec!["--bad\u{FFFD}"]);
        assert_eq!(
            cli.opt.output,
            Some(PathBuf::from(OsString::from_vec(b"out\xfe.md".to_vec())))
        );
    }

    #[test]
    fn missing_value_is_a_parse_error() {
        assert!(Cli::from_iter_safe(args("--deployment")).is_err());
    }
}
