// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate(GenerateArgs),

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,

        /// Show every counter that went into the score
        #[arg(long)]
        breakdown: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (1-256, out of range values are clamped)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub length: Option<i32>,

    /// Use the recommended preset: letters and digits, at least one digit,
    /// no ambiguous characters, every class present
    #[arg(long = "default", conflicts_with_all = ["lower", "upper", "digits", "symbols"])]
    pub preset: bool,

    /// Include lower case characters
    #[arg(short = 'l', long)]
    pub lower: bool,

    /// Include upper case characters
    #[arg(short = 'u', long)]
    pub upper: bool,

    /// Include digits
    #[arg(short = 'd', long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short = 's', long)]
    pub symbols: bool,

    /// Minimum lower case character count
    #[arg(long = "lc", value_name = "COUNT", allow_negative_numbers = true)]
    pub min_lower: Option<i32>,

    /// Minimum upper case character count
    #[arg(long = "uc", value_name = "COUNT", allow_negative_numbers = true)]
    pub min_upper: Option<i32>,

    /// Minimum digit count
    #[arg(long = "dc", value_name = "COUNT", allow_negative_numbers = true)]
    pub min_digits: Option<i32>,

    /// Minimum symbol count
    #[arg(long = "sc", value_name = "COUNT", allow_negative_numbers = true)]
    pub min_symbols: Option<i32>,

    /// Avoid ambiguous characters (i, l, o, I, L, O, 1, 0)
    #[arg(short = 'a', long)]
    pub avoid_ambiguous: bool,

    /// Force at least one character of every selected type
    #[arg(short = 'f', long = "force-every")]
    pub force_every: bool,

    /// Keep generating passwords until answered with no
    #[arg(short = 'c', long)]
    pub continuous: bool,

    /// Print the strength score next to the password
    #[arg(long)]
    pub score: bool,
}
