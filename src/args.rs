use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Mode of operation.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = Mode::Ige,
    )]
    pub mode: Mode,

    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (32 raw bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// IV file path (32 raw bytes for IGE, 16 for CBC and CTR).
    #[arg(long = "iv")]
    pub iv: PathBuf,

    /// CTR state file path (1 byte). A fresh stream starts at 0 when omitted.
    #[arg(long = "state", value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Write the updated IV (and CTR state) back so the next run continues the stream.
    #[arg(long = "save-state")]
    pub save_state: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to path specified by key)
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// Generate a random IV of the mode's size (written to path specified by iv)
    #[arg(long = "gen-iv")]
    pub gen_iv: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    #[value(name = "ige")]
    Ige,
    #[value(name = "cbc")]
    Cbc,
    #[value(name = "ctr")]
    Ctr,
}

impl Mode {
    pub fn operation(self, encrypt: bool) -> mtaes::binding::Operation {
        use mtaes::binding::Operation::*;
        match (self, encrypt) {
            (Mode::Ige, true) => Ige256Encrypt,
            (Mode::Ige, false) => Ige256Decrypt,
            (Mode::Cbc, true) => Cbc256Encrypt,
            (Mode::Cbc, false) => Cbc256Decrypt,
            (Mode::Ctr, true) => Ctr256Encrypt,
            (Mode::Ctr, false) => Ctr256Decrypt,
        }
    }

    pub fn iv_size(self) -> usize {
        match self {
            Mode::Ige => mtaes::IGE_IV_SIZE,
            Mode::Cbc | Mode::Ctr => mtaes::IV_SIZE,
        }
    }
}
