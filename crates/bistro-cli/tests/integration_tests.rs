//! Integration tests for the exercise runner and batch intake.

use bistro_cli::exercises::{catalog, run_steps};
use bistro_cli::intake::{ingest_customers, ingest_orders, RawCustomer, RawOrder};
use bistro_cli::CliError;
use bistro_domain::{ErrorKind, OrderId, OrderStore, Reporter};
use bistro_store::InMemoryOrderRepository;
use serde_json::Value;
use std::cell::RefCell;

/// Reporter that keeps every report for inspection.
#[derive(Default)]
struct RecordingReporter {
    reports: RefCell<Vec<(u32, String, Value)>>,
}

impl RecordingReporter {
    fn steps(&self) -> Vec<u32> {
        self.reports.borrow().iter().map(|(step, _, _)| *step).collect()
    }

    fn messages_for(&self, step: u32) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .filter(|(s, _, _)| *s == step)
            .map(|(_, message, _)| message.clone())
            .collect()
    }

    fn payload(&self, step: u32, message: &str) -> Option<Value> {
        self.reports
            .borrow()
            .iter()
            .find(|(s, m, _)| *s == step && m == message)
            .map(|(_, _, payload)| payload.clone())
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, step: u32, message: &str, payload: &Value) {
        self.reports
            .borrow_mut()
            .push((step, message.to_string(), payload.clone()));
    }
}

#[test]
fn test_all_exercises_report_in_step_order() {
    let reporter = RecordingReporter::default();
    run_steps(&[], &reporter).unwrap();

    let steps = reporter.steps();
    let mut sorted = steps.clone();
    sorted.sort();
    assert_eq!(steps, sorted);

    for exercise in catalog() {
        assert!(
            !reporter.messages_for(exercise.step).is_empty(),
            "step {} reported nothing",
            exercise.step
        );
    }
}

#[test]
fn test_selected_steps_only() {
    let reporter = RecordingReporter::default();
    run_steps(&[6, 4], &reporter).unwrap();

    let steps = reporter.steps();
    assert!(steps.iter().all(|s| *s == 4 || *s == 6));
    assert_eq!(steps.first(), Some(&6));
}

#[test]
fn test_seating_rejection_payload() {
    let reporter = RecordingReporter::default();
    run_steps(&[4], &reporter).unwrap();

    let payload = reporter
        .payload(4, "Seating past capacity rejected")
        .unwrap();
    assert_eq!(payload["kind"], "invariant_violation");

    let after = reporter
        .payload(4, "Rejected seating left the table unchanged")
        .unwrap();
    assert_eq!(after["table"]["current_guests"], 3);
    assert_eq!(after["available_seats"], 1);
}

#[test]
fn test_overnight_hours_payload() {
    let reporter = RecordingReporter::default();
    run_steps(&[6], &reporter).unwrap();

    let payload = reporter
        .payload(6, "Overnight opening hours are checked in one place")
        .unwrap();
    assert_eq!(payload["is_open"], true);
    assert_eq!(payload["crosses_midnight"], true);
    assert_eq!(payload["restaurant"]["hours"]["opens"], 22);
}

#[test]
fn test_orders_exercise_reports_three_skips() {
    let reporter = RecordingReporter::default();
    run_steps(&[5], &reporter).unwrap();

    let skips = reporter
        .messages_for(5)
        .iter()
        .filter(|m| m.starts_with("Skipped order"))
        .count();
    assert_eq!(skips, 3);

    let summary = reporter
        .payload(5, "Repository holds only well-formed unique ids")
        .unwrap();
    assert_eq!(summary["count"], 2);
}

#[test]
fn test_unknown_step_runs_nothing() {
    let reporter = RecordingReporter::default();
    let result = run_steps(&[1, 7], &reporter);
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
    assert!(reporter.steps().is_empty());
}

#[test]
fn test_intake_into_existing_repository() {
    let mut repo = InMemoryOrderRepository::new();
    let first = vec![RawOrder {
        order_id: "ORD-10001".to_string(),
        customer_name: "Ann".to_string(),
        total: 12.0,
    }];
    ingest_orders(first, &mut repo);

    let second = vec![
        RawOrder {
            order_id: "ORD-10001".to_string(),
            customer_name: "Ben".to_string(),
            total: 8.0,
        },
        RawOrder {
            order_id: "ORD-10002".to_string(),
            customer_name: "Cat".to_string(),
            total: 4.0,
        },
    ];
    let intake = ingest_orders(second, &mut repo);

    assert_eq!(intake.skipped.len(), 1);
    assert_eq!(intake.skipped[0].kind, ErrorKind::DuplicateIdentity);
    assert_eq!(repo.len(), 2);

    let ann = repo.get(&OrderId::new("ORD-10001").unwrap()).unwrap();
    assert_eq!(ann.customer_name, "Ann");
}

#[test]
fn test_customer_emails_are_normalized() {
    let intake = ingest_customers(vec![RawCustomer {
        name: "Alice".to_string(),
        email: "  Alice@Example.COM ".to_string(),
    }]);
    assert_eq!(intake.accepted[0].email.as_str(), "alice@example.com");
}
