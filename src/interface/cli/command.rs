//! CLI 명령 파싱 모듈.

use clap::{Args, Parser, Subcommand};

use crate::domain::options::{GlobalOptions, ReadCommand};
use crate::domain::validators::{
    parse_colors_arg, parse_duration_arg, parse_instance_arg, parse_language_arg,
};

#[derive(Debug, Parser)]
#[command(name = "fedi", version)]
#[command(about = "Read-only command line client for Mastodon-compatible instances")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Two letter language code sent as Accept-Language
    #[arg(long, global = true, value_parser = parse_language_arg)]
    language: Option<String>,

    /// HTTP timeout, e.g. "30s" or "1m 30s"
    #[arg(long, global = true, value_name = "DURATION", value_parser = parse_duration_arg)]
    timeout: Option<u64>,

    /// Number of terminal colors (1, 16, 88, 256, 16777216, 24bit); 1 disables color
    #[arg(long, global = true, value_parser = parse_colors_arg)]
    colors: Option<u32>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Debug, Args)]
struct JsonFlag {
    /// Print the raw JSON response
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Display logged in user details
    Whoami {
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Display account details
    Whois {
        /// Account name, e.g. @user or user@instance.social
        account: String,
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Display instance details
    Instance {
        /// Instance domain or base URL (defaults to the configured instance)
        #[arg(value_parser = parse_instance_arg)]
        instance_url: Option<String>,
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Search for users or hashtags
    Search {
        query: String,
        /// Resolve non-local accounts
        #[arg(short, long)]
        resolve: bool,
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Show a single status
    Status {
        status_id: String,
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Show thread for a status
    Thread {
        status_id: String,
        #[command(flatten)]
        output: JsonFlag,
    },
    /// Show effective merged config
    Config,
    /// Print diagnostic information for bug reports
    Diag {
        /// Include config file contents (secrets redacted)
        #[arg(long)]
        files: bool,
    },
}

#[derive(Debug)]
pub enum CliAction {
    Read(ReadCommand, GlobalOptions),
    InspectConfig,
    Diag {
        include_files: bool,
        options: GlobalOptions,
    },
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 사용법 오류는 호출 측에서 `clap::Error::exit`로 처리한다.
    pub fn parse_action() -> Result<CliAction, clap::Error> {
        Self::try_parse().map(Self::into_action)
    }

    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::into_action)
    }

    fn into_action(self) -> CliAction {
        let options = GlobalOptions {
            language: self.language,
            timeout_secs: self.timeout,
            colors: self.colors,
            no_color: self.no_color,
        };

        let command = match self.command {
            Commands::Config => return CliAction::InspectConfig,
            Commands::Diag { files } => {
                return CliAction::Diag {
                    include_files: files,
                    options,
                };
            }
            Commands::Whoami { output } => ReadCommand::Whoami { json: output.json },
            Commands::Whois { account, output } => ReadCommand::Whois {
                account,
                json: output.json,
            },
            Commands::Instance {
                instance_url,
                output,
            } => ReadCommand::Instance {
                instance_url,
                json: output.json,
            },
            Commands::Search {
                query,
                resolve,
                output,
            } => ReadCommand::Search {
                query,
                resolve,
                json: output.json,
            },
            Commands::Status { status_id, output } => ReadCommand::Status {
                status_id,
                json: output.json,
            },
            Commands::Thread { status_id, output } => ReadCommand::Thread {
                status_id,
                json: output.json,
            },
        };

        CliAction::Read(command, options)
    }
}
