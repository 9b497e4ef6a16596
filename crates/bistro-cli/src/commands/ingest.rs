//! Orders and customers command implementations.

use crate::cli::IngestArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::intake;
use crate::output::Formatter;
use bistro_domain::OrderStore;
use bistro_store::InMemoryOrderRepository;
use serde_json::json;

/// Execute the orders command.
pub fn execute_orders(args: IngestArgs, formatter: &Formatter) -> Result<()> {
    let docs = intake::read_documents(&args.file)?;
    let mut repo = InMemoryOrderRepository::new();
    let result = intake::ingest_order_documents(docs, &mut repo);

    match formatter.format() {
        OutputFormat::Json => {
            let doc = json!({
                "orders": repo.list(),
                "skipped": result.skipped,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Pretty => {
            println!("{}", formatter.format_orders(&repo.list())?);
            if !result.skipped.is_empty() {
                println!("{}", formatter.format_skipped(&result.skipped)?);
            }
            println!(
                "{}",
                formatter.info(&format!(
                    "{} stored, {} skipped",
                    repo.len(),
                    result.skipped.len()
                ))
            );
        }
    }

    Ok(())
}

/// Execute the customers command.
pub fn execute_customers(args: IngestArgs, formatter: &Formatter) -> Result<()> {
    let docs = intake::read_documents(&args.file)?;
    let result = intake::ingest_customer_documents(docs);

    match formatter.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Pretty => {
            for contact in &result.accepted {
                println!(
                    "{}",
                    formatter.success(&format!("{} <{}>", contact.name, contact.email))
                );
            }
            if !result.skipped.is_empty() {
                println!("{}", formatter.format_skipped(&result.skipped)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_orders_command_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        fs::write(
            &path,
            r#"[{"order_id": "ORD-12345", "customer_name": "Bob", "total": 30},
                {"order_id": "bad", "customer_name": "Diana", "total": 20}]"#,
        )
        .unwrap();

        let formatter = Formatter::new(OutputFormat::Pretty, false);
        execute_orders(IngestArgs { file: path }, &formatter).unwrap();
    }

    #[test]
    fn test_customers_command_missing_file() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = IngestArgs {
            file: PathBuf::from("/nonexistent/customers.json"),
        };
        assert!(execute_customers(args, &formatter).is_err());
    }
}
