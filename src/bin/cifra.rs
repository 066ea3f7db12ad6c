use anyhow::{bail, Context, Result};
use cifra::analysis::Cryptanalysis;
use cifra::vigenere::Vigenere;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message with a Vigenère key over the Spanish alphabet
    Encrypt {
        /// key of uppercase alphabet symbols (A-Z and Ñ)
        #[arg(short, long)]
        key: String,

        /// uppercase the input before encrypting
        #[arg(short, long, default_value_t = false)]
        uppercase: bool,

        #[command(flatten)]
        io: InOut,
    },

    /// Decrypt a ciphertext with a known key
    Decrypt {
        /// key of uppercase alphabet symbols (A-Z and Ñ)
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        io: InOut,
    },

    /// Recover the key of a ciphertext from letter statistics alone
    Crack {
        /// seed for the key-length estimator, for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// largest trial key length to consider
        #[arg(long)]
        max_period: Option<usize>,

        #[command(flatten)]
        io: InOut,
    },
}

#[derive(Args, Debug)]
struct InOut {
    /// text to process
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read input from, must be UTF-8 text
    ///
    /// the program will read from stdin if neither input-file or input are set
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// file to write the output to, -o=- => stdout
    #[arg(short, long, default_value_t = String::from("-"))]
    output: String,

    /// force writing to the output file, even if it already exists
    #[arg(short, long, default_value_t = false)]
    force: bool,
}

impl InOut {
    fn read(&self) -> Result<String> {
        if let Some(ref input) = self.input {
            Ok(input.clone())
        } else if let Some(ref input_file) = self.input_file {
            fs::read_to_string(input_file)
                .with_context(|| format!("Reading from {input_file:?} to get input data."))
        } else {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            Ok(data)
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut out: Box<dyn Write> = match self.output.as_str() {
            "-" => Box::new(io::stdout()),
            fname => Box::new(
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .create_new(!self.force)
                    .open(fname)
                    .with_context(|| format!("Opening {fname:?} for writing output."))?,
            ),
        };

        out.write_all(text.as_bytes())?;
        if self.output == "-" && !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::try_parse()?;

    match cli.command {
        Command::Encrypt { key, uppercase, io } => {
            let text = io.read()?;
            let text = if uppercase { text.to_uppercase() } else { text };
            let cipher = Vigenere::new(&key)?;
            io.write(&cipher.encrypt(&text))
        }
        Command::Decrypt { key, io } => {
            let text = io.read()?;
            let cipher = Vigenere::new(&key)?;
            io.write(&cipher.decrypt(&text))
        }
        Command::Crack {
            seed,
            max_period,
            io,
        } => {
            let ciphertext = io.read()?;

            let mut analysis = match seed {
                Some(seed) => Cryptanalysis::with_seed(&ciphertext, seed),
                None => Cryptanalysis::new(&ciphertext),
            };
            if let Some(max_period) = max_period {
                analysis = analysis.with_max_period(max_period);
            }
            if analysis.is_empty() {
                bail!("The input contains no symbols of the 27-letter alphabet.");
            }

            let length = analysis.key_length();
            let key = analysis.generate_key(length);
            let preview: String = Vigenere::new(&key)?.decrypt(&ciphertext).chars().take(50).collect();

            io.write(&format!(
                "Key length: {length}\nKey (guess): {key}\nPlain text: {preview}...\n"
            ))
        }
    }
}
