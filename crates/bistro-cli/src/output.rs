//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::exercises::Exercise;
use crate::intake::Skipped;
use bistro_domain::OrderRecord;
use colored::*;
use serde::Serialize;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format one step report.
    ///
    /// Reports cannot fail, so a payload that will not pretty-print falls
    /// back to its compact form.
    pub fn report(&self, step: u32, message: &str, payload: &Value) -> String {
        match self.format {
            OutputFormat::Json => json!({
                "step": step,
                "message": message,
                "payload": payload,
            })
            .to_string(),
            OutputFormat::Pretty => {
                let body = serde_json::to_string_pretty(payload)
                    .unwrap_or_else(|_| payload.to_string());
                format!(
                    "{} {}\n{}",
                    self.colorize(&format!("[step {}]", step), "cyan"),
                    message,
                    body
                )
            }
        }
    }

    /// Format stored orders.
    pub fn format_orders(&self, orders: &[&OrderRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(orders)?),
            OutputFormat::Pretty => Ok(self.format_orders_table(orders)),
        }
    }

    fn format_orders_table(&self, orders: &[&OrderRecord]) -> String {
        if orders.is_empty() {
            return self.colorize("No orders stored.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Order ID", "Customer", "Total"]);

        for order in orders {
            builder.push_record([
                order.order_id.to_string(),
                order.customer_name.clone(),
                format!("{:.2}", order.total),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format items the intake skipped.
    pub fn format_skipped<T: Serialize>(&self, skipped: &[Skipped<T>]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(skipped)?),
            OutputFormat::Pretty => {
                if skipped.is_empty() {
                    return Ok(self.success("Nothing skipped"));
                }
                let lines: Vec<String> = skipped
                    .iter()
                    .map(|s| {
                        let item = serde_json::to_string(&s.item)
                            .unwrap_or_else(|_| "<unprintable>".to_string());
                        self.warning(&format!("#{} {} ({})", s.index, item, s.reason))
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the exercise catalog.
    pub fn format_exercises(&self, exercises: &[Exercise]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let list: Vec<Value> = exercises
                    .iter()
                    .map(|e| json!({ "step": e.step, "title": e.title }))
                    .collect();
                Ok(serde_json::to_string_pretty(&list)?)
            }
            OutputFormat::Pretty => {
                let mut builder = Builder::default();
                builder.push_record(["Step", "Exercise"]);
                for exercise in exercises {
                    builder.push_record([exercise.step.to_string(), exercise.title.to_string()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_domain::{ErrorKind, OrderId};

    fn order(id: &str, name: &str, total: f64) -> OrderRecord {
        OrderRecord::new(OrderId::new(id).unwrap(), name, total)
    }

    #[test]
    fn test_pretty_report() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        let out = formatter.report(4, "Table state stays valid", &json!({"current_guests": 3}));
        assert!(out.starts_with("[step 4] Table state stays valid\n"));
        assert!(out.contains("\"current_guests\": 3"));
    }

    #[test]
    fn test_json_report_is_one_line() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let out = formatter.report(1, "rejected", &json!("Price is out of range"));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["step"], 1);
        assert_eq!(parsed["message"], "rejected");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_orders_table() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        let a = order("ORD-12345", "Bob", 30.0);
        let b = order("ORD-67890", "Eve", 22.0);
        let out = formatter.format_orders(&[&a, &b]).unwrap();
        assert!(out.contains("Order ID"));
        assert!(out.contains("ORD-67890"));
        assert!(out.contains("30.00"));
    }

    #[test]
    fn test_orders_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let a = order("ORD-12345", "Bob", 30.0);
        let out = formatter.format_orders(&[&a]).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["order_id"], "ORD-12345");
    }

    #[test]
    fn test_empty_orders() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        assert!(formatter.format_orders(&[]).unwrap().contains("No orders stored"));
    }

    #[test]
    fn test_skipped_pretty() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        let skipped = vec![Skipped {
            index: 2,
            item: json!({"order_id": ""}),
            kind: ErrorKind::EmptyValue,
            reason: "OrderId cannot be empty".to_string(),
        }];
        let out = formatter.format_skipped(&skipped).unwrap();
        assert!(out.contains("#2"));
        assert!(out.contains("OrderId cannot be empty"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Pretty, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
