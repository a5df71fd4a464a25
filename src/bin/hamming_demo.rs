use hamming16::cs::ecc::hamming::{transmit, NoiseModel, NoisyChannel};
use std::env;
use std::process::ExitCode;
use std::str::FromStr;

const DEFAULT_TEXT: &str = "feed my 2 cats and water 7 plants";
const USAGE: &str = "usage: hamming_demo [TEXT] [EVENTS] [BURST_RADIUS] [SEED]";

fn parse_arg<T: FromStr>(args: &[String], index: usize, name: &str) -> Result<Option<T>, String> {
    match args.get(index) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid {}: {:?}", name, raw)),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let text = args.get(1).map(String::as_str).unwrap_or(DEFAULT_TEXT);
    let events = parse_arg(args, 2, "event count")?.unwrap_or(5);
    let burst_radius = parse_arg(args, 3, "burst radius")?.unwrap_or(0);
    let seed: Option<u64> = parse_arg(args, 4, "seed")?;

    let model = NoiseModel::bursts(events, burst_radius);
    let mut channel = match seed {
        Some(seed) => NoisyChannel::with_seed(model, seed),
        None => NoisyChannel::new(model),
    };

    let transmission = transmit(text, &mut channel).map_err(|e| e.to_string())?;

    println!("Input:    {}", text);
    println!("Sent:     {}", transmission.sent);
    println!("Received: {}", transmission.received);
    println!(
        "Noise:    {} events, burst radius {}, {} bits flipped",
        events,
        burst_radius,
        transmission.flipped_bits()
    );
    for correction in &transmission.report.corrections {
        println!(
            "ERROR detected in block {}. Correcting bit {}...",
            correction.block, correction.position
        );
    }
    println!("Output:   {}", transmission.text());
    if transmission.text() != text {
        println!("Some blocks took more than one error and could not be recovered.");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            ExitCode::from(2)
        }
    }
}
