use coindash::{
    cli::{format_change, format_price, render_row},
    services::{build_board, parse_price_response, MarketService},
    types::Config,
};

#[cfg(test)]
mod render_tests {
    use super::*;

    fn plain_colors() {
        // keep assertions byte-stable regardless of tty detection
        colored::control::set_override(false);
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_line_per_symbol_in_request_order() {
        plain_colors();
        let coins = ids(&["bitcoin", "ethereum", "cardano"]);
        let body = r#"{
            "cardano": {"usd": 0.45, "usd_24h_change": -1.2},
            "bitcoin": {"usd": 67000.0, "usd_24h_change": 2.5},
            "ethereum": {"usd": 3500.0, "usd_24h_change": 0.8}
        }"#;

        let prices = parse_price_response(body).expect("valid body should parse");
        let board = build_board(&coins, &prices);

        assert_eq!(board.rows.len(), 3, "one row per requested coin");
        let symbols: Vec<&str> = board.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(
            symbols,
            vec!["bitcoin", "ethereum", "cardano"],
            "rows should keep request order, not response order"
        );
        assert!(board.rows.iter().all(|r| r.quote.is_some()));
    }

    #[test]
    fn test_zero_change_renders_as_gain() {
        plain_colors();
        let cell = format_change(0.0);
        assert!(cell.contains('↑'), "zero change should use the up glyph: {cell}");
    }

    #[test]
    fn test_small_negative_change_renders_as_loss() {
        plain_colors();
        let cell = format_change(-0.01);
        assert!(cell.contains('↓'), "negative change should use the down glyph: {cell}");
        assert!(cell.contains("0.01%"), "magnitude should be shown unsigned: {cell}");
    }

    #[test]
    fn test_missing_symbol_renders_unavailable() {
        plain_colors();
        let coins = ids(&["bitcoin", "ethereum", "cardano"]);
        let body = r#"{
            "bitcoin": {"usd": 67000.0, "usd_24h_change": 2.5},
            "cardano": {"usd": 0.45, "usd_24h_change": -1.2}
        }"#;

        let prices = parse_price_response(body).expect("valid body should parse");
        let board = build_board(&coins, &prices);

        assert_eq!(board.rows.len(), 3);
        assert!(board.rows[0].quote.is_some());
        assert!(board.rows[1].quote.is_none(), "ethereum was absent from the response");
        assert!(board.rows[2].quote.is_some());

        let lines: Vec<String> = board.rows.iter().map(render_row).collect();
        assert!(lines[0].contains("Bitcoin") && lines[0].contains("$67,000.00"));
        assert!(lines[1].contains("Ethereum") && lines[1].contains("unavailable"));
        assert!(lines[2].contains("Cardano") && lines[2].contains("$0.45"));
    }

    #[test]
    fn test_entry_without_price_is_unavailable() {
        plain_colors();
        let coins = ids(&["bitcoin"]);
        let body = r#"{"bitcoin": {"usd_24h_change": 2.5}}"#;

        let prices = parse_price_response(body).expect("valid body should parse");
        let board = build_board(&coins, &prices);

        assert!(board.rows[0].quote.is_none(), "a change without a price has nothing to show");
        assert!(render_row(&board.rows[0]).contains("unavailable"));
    }

    #[test]
    fn test_missing_change_defaults_to_zero_gain() {
        plain_colors();
        let coins = ids(&["bitcoin"]);
        let body = r#"{"bitcoin": {"usd": 67000.0}}"#;

        let prices = parse_price_response(body).expect("valid body should parse");
        let board = build_board(&coins, &prices);

        let quote = board.rows[0].quote.as_ref().expect("price present");
        assert_eq!(quote.change_24h, 0.0);
        assert!(render_row(&board.rows[0]).contains('↑'));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        plain_colors();
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(0.45), "$0.45");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");

        let change = format_change(2.345);
        assert_eq!(change, format_change(2.345), "same input must render identically");
        assert!(change.contains('↑') && change.ends_with('%'));
    }
}

#[cfg(test)]
mod fetch_tests {
    use super::*;

    fn offline_config() -> Config {
        Config {
            // discard port, nothing listens here
            api_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 2,
            default_coins: vec!["bitcoin".to_string()],
        }
    }

    #[test]
    fn test_empty_body_is_total_failure() {
        assert!(parse_price_response("").is_err());
        assert!(parse_price_response("   \n").is_err());
    }

    #[test]
    fn test_malformed_body_is_total_failure() {
        assert!(parse_price_response("not json").is_err());
        assert!(parse_price_response(r#"["unexpected", "shape"]"#).is_err());
    }

    #[test]
    fn test_unreachable_endpoint_fails_whole_batch() {
        let market = MarketService::new(offline_config()).expect("client should build");
        let coins = vec!["bitcoin".to_string(), "ethereum".to_string()];

        let result = tokio_test::block_on(market.fetch_quotes(&coins));
        assert!(result.is_err(), "connection refused must not yield a partial board");
    }

    #[test]
    fn test_empty_coin_list_is_rejected() {
        let market = MarketService::new(offline_config()).expect("client should build");

        let result = tokio_test::block_on(market.fetch_quotes(&[]));
        assert!(result.is_err());
    }
}
