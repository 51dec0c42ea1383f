// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quintet CLI, counts hand categories and times the evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use quintet_tables::Tables;

use quintet_eval::{
    Card, Deck, HandRank, HandValue, best_of, best_of_seven, category, classify, format_hand,
};

mod frequency;
use frequency::Frequencies;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates all 2,598,960 five cards hands.
    All5,
    /// Evaluates all 133,784,560 seven cards hands.
    All7 {
        /// Number of evaluation threads.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
    /// Evaluates random hands from a shuffled deck.
    Sample {
        /// Number of hands.
        #[clap(long, default_value_t = 1_000_000)]
        hands: usize,
        /// Cards per hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Random seed, a random one if not given.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Evaluates the given 5 to 7 cards, e.g. `As Ks Qs Js Ts`.
    Eval {
        /// The cards.
        #[clap(required = true, num_args = 5..=7)]
        cards: Vec<Card>,
    },
    /// Runs the tables search and writes the tables as Rust source.
    Tables {
        /// Output file, stdout if not given.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::All5 => all5(),
        Command::All7 { tasks } => all7(usize::from(tasks)),
        Command::Sample { hands, cards, seed } => sample(hands, usize::from(cards), seed),
        Command::Eval { cards } => eval(&cards)?,
        Command::Tables { output } => tables(output)?,
    }

    Ok(())
}

fn all5() {
    info!("Evaluating all five cards hands");

    let now = Instant::now();
    let mut freq = Frequencies::default();

    Deck::default().for_each(5, |hand| {
        let cards = hand.try_into().expect("five cards hand");
        freq.add(category(classify(cards)));
    });

    freq.print(now.elapsed(), Some(HandRank::five_card_hands));
}

fn all7(tasks: usize) {
    info!("Evaluating all seven cards hands with {tasks} tasks");

    let now = Instant::now();
    let deck = Deck::default();

    let freq = if tasks == 1 {
        let mut freq = Frequencies::default();
        deck.for_each(7, |hand| freq.add(eval7(hand)));
        freq
    } else {
        let shared = frequency::Shared::new(tasks);
        deck.par_for_each(tasks, 7, |task_id, hand| shared.add(task_id, eval7(hand)));
        shared.into_frequencies()
    };

    freq.print(now.elapsed(), Some(HandRank::seven_card_hands));
}

fn eval7(hand: &[Card]) -> HandRank {
    category(best_of_seven(hand.try_into().expect("seven cards hand")))
}

fn sample(hands: usize, cards: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Evaluating {hands} random {cards} cards hands with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    let now = Instant::now();
    let mut freq = Frequencies::default();

    Deck::default().sample(&mut rng, hands, cards, |hand| freq.add(category(best_of(hand))));

    freq.print(now.elapsed(), None);
}

fn eval(cards: &[Card]) -> Result<()> {
    for (pos, card) in cards.iter().enumerate() {
        if cards[..pos].contains(card) {
            bail!("Duplicated card {card}");
        }
    }

    let (value, best) = HandValue::eval_with_best_hand(cards);
    println!("Hand:  {}", format_hand(cards));
    println!("Best:  {}", format_hand(&best));
    println!("Value: {}", value.value());
    println!("Rank:  {}", value.rank());

    Ok(())
}

fn tables(output: Option<PathBuf>) -> Result<()> {
    let now = Instant::now();
    let tables = Tables::build()?;
    info!("Tables search took {:.3}s", now.elapsed().as_secs_f64());

    let mut w: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {path:?}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    tables.write_rust(&mut w)?;
    w.flush()?;

    if let Some(path) = output {
        info!("Tables written to {}", path.display());
    }

    Ok(())
}
