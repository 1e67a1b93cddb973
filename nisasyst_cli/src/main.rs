use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
struct ActionDecrypt {
    /// Game path the file was encrypted for, e.g. Mush/ActorDb.release.byml
    #[arg(index = 1)]
    game_path: String,

    /// Input container path
    #[arg(index = 2)]
    input: String,

    /// Output path. Defaults to the input path with ".decrypted" appended
    #[arg(short, long)]
    output: Option<String>,

    /// Verbose
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Parser, Debug)]
struct ActionKeys {
    /// Game path to derive the key and IV for
    #[arg(index = 1)]
    game_path: String,
}

#[derive(Parser, Debug)]
struct ActionInfo {
    /// Input container path
    #[arg(index = 1)]
    input: String,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Decrypt a nisasyst container
    Decrypt(ActionDecrypt),
    /// Print the seed, key and IV derived from a game path
    Keys(ActionKeys),
    /// Check a nisasyst container without decrypting it
    Info(ActionInfo),
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    #[command(subcommand)]
    action: Action,
}

fn main() -> Result<(), nisasyst::Error> {
    let args = Args::parse();

    let verbose = matches!(&args.action, Action::Decrypt(args) if args.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    match args.action {
        Action::Decrypt(args) => decrypt(args),
        Action::Keys(args) => keys(args),
        Action::Info(args) => info(args),
    }
}

fn output_path(input: &str) -> PathBuf {
    PathBuf::from(format!("{input}.decrypted"))
}

fn decrypt(args: ActionDecrypt) -> Result<(), nisasyst::Error> {
    let plaintext = nisasyst::decrypt(
        &args.game_path,
        &mut BufReader::new(File::open(&args.input)?),
    )?;
    let output = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| output_path(&args.input));
    fs::write(&output, plaintext)?;
    println!("Wrote decrypted file to {}", output.display());
    Ok(())
}

fn keys(args: ActionKeys) -> Result<(), nisasyst::Error> {
    let seed = nisasyst::seed(&args.game_path)?;
    let key_iv = nisasyst::KeyIv::from_seed(seed)?;
    println!("seed: {seed:08X}");
    println!("key: {}", hex::encode(key_iv.key));
    println!("iv: {}", hex::encode(key_iv.iv));
    Ok(())
}

fn info(args: ActionInfo) -> Result<(), nisasyst::Error> {
    let container = nisasyst::Container::read(&mut BufReader::new(File::open(&args.input)?))?;
    let len = container.ciphertext().len();
    println!("ciphertext: {len} bytes");
    println!("blocks: {}", len / nisasyst::BLOCK_SIZE);
    let aligned = len % nisasyst::BLOCK_SIZE == 0;
    if !aligned {
        log::warn!(
            "ciphertext is not a multiple of {} bytes and will fail to decrypt",
            nisasyst::BLOCK_SIZE
        );
    }
    println!("aligned: {aligned}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path("content/Mush/ActorDb.release.byml"),
            PathBuf::from("content/Mush/ActorDb.release.byml.decrypted")
        );
    }

    #[test]
    fn test_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
