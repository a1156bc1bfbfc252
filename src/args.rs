use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt hex input, printing ciphertext, key and IV/nonce as hex
    Encrypt(EncryptArgs),

    /// Decrypt hex input, printing plaintext as hex
    Decrypt(DecryptArgs),
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Mode of operation.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Cbc)]
    pub mode: Mode,

    /// Input bytes as a hex string.
    #[arg(short = 'i', long = "input", value_name = "HEX")]
    pub input: String,

    /// 16-byte IV as hex (CBC, CFB and OFB only).
    #[arg(long = "iv", value_name = "HEX")]
    pub iv: Option<String>,

    /// 8-byte nonce as hex (CTR only).
    #[arg(long = "nonce", value_name = "HEX")]
    pub nonce: Option<String>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as hex. A random key of --key-size is generated when omitted.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: Option<String>,

    /// Size of the generated key. Not valid with --key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits256,
        conflicts_with = "key"
    )]
    pub key_size: KeySize,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as hex.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl From<KeySize> for aesmodes::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aesmodes::KeySize::Bits128,
            KeySize::Bits192 => aesmodes::KeySize::Bits192,
            KeySize::Bits256 => aesmodes::KeySize::Bits256,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl From<Mode> for aesmodes::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ecb => aesmodes::Mode::Ecb,
            Mode::Cbc => aesmodes::Mode::Cbc,
            Mode::Cfb => aesmodes::Mode::Cfb,
            Mode::Ofb => aesmodes::Mode::Ofb,
            Mode::Ctr => aesmodes::Mode::Ctr,
        }
    }
}
