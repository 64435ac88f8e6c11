//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use espr_commerce::checkout::OrderStatus;
use espr_commerce::pricing::Totals;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to encode JSON output"),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print subtotal, tax and total.
    pub fn totals(&self, totals: &Totals) {
        self.kv("Subtotal", &totals.subtotal.to_string());
        self.kv("VAT (12%)", &totals.tax.to_string());
        self.kv("Total", &style(totals.total.to_string()).bold().to_string());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Join columns, padding each to its width. Styling escapes take no width.
fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| pad_str(col, *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Colored status label for an order.
pub fn status_badge(status: OrderStatus) -> String {
    let name = status.display_name();
    match status {
        OrderStatus::Delivered => style(name).green().to_string(),
        OrderStatus::Pending | OrderStatus::Processing => style(name).yellow().to_string(),
        OrderStatus::Shipped => style(name).cyan().to_string(),
        OrderStatus::Cancelled => style(name).dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::measure_text_width;

    #[test]
    fn test_row_pads_plain_columns() {
        assert_eq!(format_row(&["ab", "c"], &[4, 2]), "ab    c ");
    }

    #[test]
    fn test_styled_status_keeps_columns_aligned() {
        console::set_colors_enabled(true);
        let badge = status_badge(OrderStatus::Shipped);
        assert_ne!(badge, "Shipped");

        let styled = format_row(&["ESPR-ABC123", &badge, "x"], &[12, 12, 1]);
        let plain = format_row(&["ESPR-ABC123", "Shipped", "x"], &[12, 12, 1]);
        assert_eq!(measure_text_width(&styled), measure_text_width(&plain));
        assert!(styled.ends_with("     x"));
    }
}
