use diceprob::{roll::DEFAULT_MAX_ROLLS, RollContext};
use log::warn;
use std::io::{self, BufRead, Write};

const MAX_ROLLS_VAR: &str = "DICEPROB_MAX_ROLLS";

fn max_rolls() -> usize {
    match std::env::var(MAX_ROLLS_VAR) {
        Ok(value) => value.parse().unwrap_or_else(|why| {
            warn!("ignoring {}={:?}: {}", MAX_ROLLS_VAR, value, why);
            DEFAULT_MAX_ROLLS
        }),
        Err(_) => DEFAULT_MAX_ROLLS,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let max_rolls = max_rolls();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        let line = line.trim();
        if !line.is_empty() {
            let mut ctx = RollContext::new_bounded(max_rolls, rand::thread_rng());
            match diceprob::roll_with(line, &mut ctx) {
                Ok(total) => println!("{}", total),
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
