//! Menu builders

use super::{Button, Keyboard};
use crate::catalog::Symbol;
use crate::duration::QuoteDuration;
use crate::selection::{CUSTOM_SYMBOL_PAYLOAD, Selection};

/// Buttons per row in the symbol grid
pub const SYMBOLS_PER_ROW: usize = 3;

/// Label of the trailing custom-symbol button
pub const CUSTOM_SYMBOL_LABEL: &str = "Enter custom symbol";

/// Symbol grid: rows of three, then one custom-symbol row
pub fn symbol_menu(symbols: &[Symbol]) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = symbols
        .chunks(SYMBOLS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|s| Button::new(s.as_str(), Selection::symbol(s.clone()).encode()))
                .collect()
        })
        .collect();

    rows.push(vec![Button::new(CUSTOM_SYMBOL_LABEL, CUSTOM_SYMBOL_PAYLOAD)]);
    Keyboard { rows }
}

/// Duration list for `symbol`, one duration per row
pub fn duration_menu(symbol: &Symbol, durations: &[QuoteDuration]) -> Keyboard {
    let rows = durations
        .iter()
        .map(|&d| {
            vec![Button::new(
                d.label(),
                Selection::complete(symbol.clone(), d).encode(),
            )]
        })
        .collect();
    Keyboard { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DEFAULT_SYMBOLS, SymbolCatalog};

    fn symbols(n: usize) -> Vec<Symbol> {
        DEFAULT_SYMBOLS[..n]
            .iter()
            .map(|s| Symbol::parse(s).unwrap())
            .collect()
    }

    #[test]
    fn test_symbol_menu_row_counts() {
        for n in [0, 1, 2, 3, 4, 6, 7, DEFAULT_SYMBOLS.len()] {
            let menu = symbol_menu(&symbols(n));
            assert_eq!(menu.rows.len(), n.div_ceil(SYMBOLS_PER_ROW) + 1, "n = {n}");
            assert!(menu.rows.iter().all(|row| !row.is_empty() && row.len() <= SYMBOLS_PER_ROW));
            assert_eq!(menu.button_count(), n + 1);

            let last = menu.rows.last().unwrap();
            assert_eq!(last, &vec![Button::new(CUSTOM_SYMBOL_LABEL, CUSTOM_SYMBOL_PAYLOAD)]);
        }
    }

    #[test]
    fn test_symbol_menu_preserves_order() {
        let catalog = SymbolCatalog::default();
        let menu = symbol_menu(catalog.symbols());
        let payloads: Vec<&str> = menu
            .buttons()
            .take(catalog.len())
            .map(|b| b.payload.as_str())
            .collect();
        assert_eq!(payloads, DEFAULT_SYMBOLS.to_vec());
        assert_eq!(menu.rows.len(), 14);
        assert_eq!(menu.rows[12].len(), 3);
    }

    #[test]
    fn test_duration_menu() {
        let symbol = Symbol::parse("TSLA").unwrap();
        let menu = duration_menu(&symbol, &QuoteDuration::ALL);

        assert_eq!(menu.rows.len(), 8);
        assert!(menu.rows.iter().all(|row| row.len() == 1));
        assert_eq!(menu.rows[0][0], Button::new("1 minute", "TSLA:1min"));
        assert_eq!(menu.rows[5][0], Button::new("Daily", "TSLA:daily"));
        assert_eq!(menu.rows[7][0], Button::new("Monthly", "TSLA:monthly"));

        for button in menu.buttons() {
            let selection = Selection::decode(&button.payload).unwrap();
            assert_eq!(selection.symbol, symbol);
            assert!(selection.duration.is_some());
        }
    }

    #[test]
    fn test_minimal_duration_menu() {
        let symbol = Symbol::parse("KO").unwrap();
        let menu = duration_menu(&symbol, &QuoteDuration::MINIMAL);
        let payloads: Vec<&str> = menu.buttons().map(|b| b.payload.as_str()).collect();
        assert_eq!(payloads, vec!["KO:daily", "KO:weekly", "KO:monthly"]);
    }
}
