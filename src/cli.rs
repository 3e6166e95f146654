use crate::{
    services::MarketService,
    types::{Config, QuoteBoard, QuoteRow},
};
use anyhow::Result;
use colored::Colorize;
use log::{debug, info};
use std::time::Duration;

pub struct CliOptions {
    pub coins: Vec<String>,
    pub watch: bool,
    pub interval: u64,
}

pub async fn run_cli(opts: CliOptions) -> Result<()> {
    let config = Config::load()?;
    let coins = if opts.coins.is_empty() {
        config.default_coins.clone()
    } else {
        opts.coins.clone()
    };
    debug!("tracking: {}", coins.join(", "));

    let market = MarketService::new(config)?;

    if opts.watch {
        info!("refreshing every {}s, press Ctrl+C to exit", opts.interval);
        loop {
            match market.fetch_quotes(&coins).await {
                Ok(board) => {
                    clear_screen();
                    print_board(&board);
                    println!("\nRefreshing every {}s. Press Ctrl+C to exit.", opts.interval);
                }
                Err(err) => {
                    eprintln!("Failed to fetch prices: {err:#}");
                    eprintln!("Retrying in {}s...", opts.interval);
                }
            }
            tokio::time::sleep(Duration::from_secs(opts.interval)).await;
        }
    } else {
        let board = market.fetch_quotes(&coins).await?;
        print_board(&board);
        Ok(())
    }
}

pub fn print_board(board: &QuoteBoard) {
    let rule = "=".repeat(60);
    println!("{}", rule.bold());
    println!(
        "{}",
        format!("{:<15} {:>15} {:>15}", "Coin", "Price (USD)", "24h Change").bold()
    );
    println!("{}", rule.bold());

    for row in &board.rows {
        println!("{}", render_row(row));
    }

    println!("{}", rule.bold());
    println!(
        "\nLast updated: {}",
        board.fetched_at.format("%Y-%m-%d %H:%M:%S")
    );
}

/// Renders one table line. Rows with no quote get an explicit unavailable
/// marker so a partially failed batch never drops a requested coin.
pub fn render_row(row: &QuoteRow) -> String {
    match &row.quote {
        Some(quote) => format!(
            "{:<15} {:>15} {:>15}",
            capitalize(&row.symbol),
            format_price(quote.price),
            format_change(quote.change_24h)
        ),
        None => format!(
            "{:<15} {:>15} {:>15}",
            capitalize(&row.symbol),
            "unavailable".yellow(),
            "--"
        ),
    }
}

pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price))
}

/// Up glyph and green for a non-negative change, down glyph and red for a
/// negative one. Zero counts as a gain.
pub fn format_change(change: f64) -> String {
    let arrow = if change >= 0.0 { "↑" } else { "↓" };
    let cell = format!("{arrow} {:>7.2}%", change.abs());
    if change >= 0.0 {
        cell.green().to_string()
    } else {
        cell.red().to_string()
    }
}

// Manual digit grouping keeps the output locale-independent.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if int_part.starts_with('-') { "-" } else { "" };
    let digits = int_part.trim_start_matches('-');

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

fn capitalize(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
