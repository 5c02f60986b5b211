//! Streams stdin through the classic RS(255,223) block code.
//!
//! Encoding reads 223-byte blocks and writes 255-byte codewords; pass
//! `--decode` for the reverse path. Suitable for trying the codec on
//! text; binary data with leading zero bytes will lose them to the
//! message stripping.

use clap::Parser;
use rs_codec::RsCodec;
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(about = "Encode stdin as RS(255,223) blocks, or decode with --decode")]
struct Args {
    /// Decode 255-byte blocks from stdin instead of encoding.
    #[arg(short, long)]
    decode: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let codec = RsCodec::new(255, 223).expect("fixed parameters are valid");

    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    let mut out = io::stdout().lock();

    if args.decode {
        for block in input.chunks(codec.n()) {
            match codec.decode(block) {
                Ok(message) => out.write_all(&message)?,
                Err(err) => eprintln!("block dropped: {err}"),
            }
        }
    } else {
        for block in input.chunks(codec.k()) {
            let code = codec.encode(block).expect("chunks never exceed k");
            out.write_all(&code)?;
        }
    }
    Ok(())
}
