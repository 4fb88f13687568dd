use clap::Parser;
use mac154_cat::FrameParser;

/// `cat` for IEEE 802.15.4 frames.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The IEEE 802.15.4 frame to parse, in hex.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,
}

fn main() {
    let args = Args::parse();
    print!("{}", FrameParser::parse_hex(&args.input).unwrap());
}
