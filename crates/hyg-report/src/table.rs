//! Terminal signal table.
//!
//! Renders the ordered display rows with the original page's column set and
//! color treatment: green/red metrics from the sign classification, badge
//! color from the signal style, and explicit loading and no-data states.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
};

use hyg_model::{DisplaySignal, SignClass, SignalStyle};

/// Whether the caller is still waiting on its data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Ready,
}

pub const TABLE_TITLE: &str = "Katana HYG Signals";
pub const LOADING_MESSAGE: &str = "Loading signals...";
pub const NO_DATA_MESSAGE: &str = "No signals data available";
pub const TABLE_FOOTER: &str = "Description = bond label. No ratings or per-side YTM columns \
                                are shown; only aggregate metrics are displayed.";

/// Render the ordered rows to a printable string.
pub fn render_signals(signals: &[DisplaySignal], state: TableState) -> String {
    if state == TableState::Loading {
        return LOADING_MESSAGE.to_string();
    }
    if signals.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Buy Bond"),
        header_cell("Sell Bond"),
        header_cell("Price Diff"),
        header_cell("Yield Diff"),
        header_cell("Signal"),
        header_cell("Confidence"),
        header_cell("Matches"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);

    for signal in signals {
        table.add_row(vec![
            Cell::new(&signal.index)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            bond_cell(&signal.buy_bond, &signal.buy_price),
            bond_cell(&signal.sell_bond, &signal.sell_price),
            metric_cell(&signal.price_diff.value, signal.price_diff.sign),
            metric_cell(&signal.yield_diff.value, signal.yield_diff.sign),
            badge_cell(signal.signal.value.as_str(), signal.signal.style),
            Cell::new(&signal.confidence.display),
            Cell::new(&signal.matches),
        ]);
    }

    format!("{TABLE_TITLE}\n{table}\n{TABLE_FOOTER}")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Bond description with its price on a second line, as the original page
/// shows it beneath the bond label.
fn bond_cell(description: &str, price: &str) -> Cell {
    Cell::new(format!("{description}\nPrice: ${price}"))
}

fn metric_cell(value: &str, sign: SignClass) -> Cell {
    let color = match sign {
        SignClass::Positive => Color::Green,
        SignClass::Negative => Color::Red,
    };
    Cell::new(value).fg(color).add_attribute(Attribute::Bold)
}

fn badge_cell(label: &str, style: SignalStyle) -> Cell {
    match style {
        SignalStyle::Strong => Cell::new(label)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        SignalStyle::Moderate => Cell::new(label).fg(Color::Yellow),
        SignalStyle::Weak => Cell::new(label).fg(Color::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyg_model::{
        ConfidenceCell, SignalBadge, SignalStrength, SignedMetric,
    };

    fn row() -> DisplaySignal {
        DisplaySignal {
            index: "1".to_string(),
            buy_bond: "ARDAGH 5.250% 08/2027 [144A]".to_string(),
            buy_price: "41.57".to_string(),
            sell_bond: "CLARIOS 8.500% 05/2027 [144A]".to_string(),
            sell_price: "100.17".to_string(),
            price_diff: SignedMetric {
                value: "58.60".to_string(),
                sign: SignClass::Positive,
            },
            yield_diff: SignedMetric {
                value: "47.75%".to_string(),
                sign: SignClass::Positive,
            },
            signal: SignalBadge {
                value: SignalStrength::Strong,
                style: SignalStyle::Strong,
            },
            confidence: ConfidenceCell {
                percentage: 100.0,
                display: "100%".to_string(),
            },
            matches: "⏱ 🏢".to_string(),
        }
    }

    #[test]
    fn loading_state_short_circuits() {
        assert_eq!(render_signals(&[row()], TableState::Loading), LOADING_MESSAGE);
    }

    #[test]
    fn empty_rows_degrade_to_no_data_message() {
        assert_eq!(render_signals(&[], TableState::Ready), NO_DATA_MESSAGE);
    }

    #[test]
    fn ready_table_contains_rows_title_and_footer() {
        let rendered = render_signals(&[row()], TableState::Ready);
        assert!(rendered.starts_with(TABLE_TITLE));
        assert!(rendered.contains("ARDAGH 5.250% 08/2027 [144A]"));
        assert!(rendered.contains("Price: $41.57"));
        assert!(rendered.contains("47.75%"));
        assert!(rendered.contains("STRONG"));
        assert!(rendered.contains("⏱ 🏢"));
        assert!(rendered.ends_with(TABLE_FOOTER));
    }
}
