mod args;

use args::{Cli, CommonArgs, Commands, Mode};
use clap::Parser;

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use mtaes::binding::{self, Value};
use thiserror::Error;
use tracing::{Level, debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--save-state has nothing to save in IGE mode")]
    SaveStateInvalidMode,

    #[error("--save-state in CTR mode needs --state to keep the keystream position")]
    SaveStateMissingState,

    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Mtaes(#[from] mtaes::Error),
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match mtaes_cli(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn mtaes_cli(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Encrypt(enc) => {
            let mode = enc.common.mode;

            if enc.gen_key {
                let key = mtaes::Key::random()?;
                write(&enc.common.key, key.as_bytes())?;
                info!(path = %enc.common.key.display(), "generated key");
            }
            if enc.gen_iv {
                let iv = match mode {
                    Mode::Ige => mtaes::random_iv::<{ mtaes::IGE_IV_SIZE }>()?.to_vec(),
                    Mode::Cbc | Mode::Ctr => mtaes::random_iv::<{ mtaes::IV_SIZE }>()?.to_vec(),
                };
                write(&enc.common.iv, &iv)?;
                info!(path = %enc.common.iv.display(), len = mode.iv_size(), "generated iv");
            }

            println!("{}", run(&enc.common, true)?);
            Ok(())
        }
        Commands::Decrypt(common) => {
            println!("{}", run(&common, false)?);
            Ok(())
        }
    }
}

/// Reads the inputs, runs one operation through the binding layer and writes the results.
/// Returns the summary line.
fn run(common: &CommonArgs, encrypt: bool) -> Result<String, CliError> {
    let mode = common.mode;
    if common.save_state {
        match (mode, &common.state) {
            (Mode::Ige, _) => return Err(CliError::SaveStateInvalidMode),
            (Mode::Ctr, None) => return Err(CliError::SaveStateMissingState),
            _ => {}
        }
    }

    let op = mode.operation(encrypt);
    let mut args = vec![
        Value::Bytes(read(&common.input)?),
        Value::Bytes(read(&common.key)?),
        Value::Bytes(read(&common.iv)?),
    ];
    if mode == Mode::Ctr {
        let state = match &common.state {
            Some(path) if path.exists() => read(path)?,
            _ => vec![0],
        };
        args.push(Value::Bytes(state));
    }
    debug!(operation = %op, description = op.description(), "dispatching");

    let start = Instant::now();
    let output = binding::call(op, &mut args)?;
    let duration = start.elapsed();

    write(&common.output, &output)?;

    if common.save_state {
        if let Some(Value::Bytes(iv)) = args.get(2) {
            write(&common.iv, iv)?;
        }
        if let (Some(path), Some(Value::Bytes(state))) = (&common.state, args.get(3)) {
            write(path, state)?;
        }
        info!(operation = %op, "saved chaining state");
    }

    let verb = if encrypt { "Encrypted" } else { "Decrypted" };
    Ok(format!(
        "{verb} {} bytes in {} ms",
        output.len(),
        duration.as_millis()
    ))
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| io_error(path, source))
}

fn write(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    fs::write(path, bytes).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: path.display().to_string(),
        source,
    }
}
