//! CSV output of load balancing rules.

use super::terminal::format_field;
use crate::models::{LoadBalancer, LoadBalancingRule};
use itertools::Itertools;

const HEADER: &str = r#""cnt","rule","protocol","frontend_port","backend_port","idle_timeout","load_distribution","floating_ip","pool","probe","frontends""#;

/// Render one CSV line per rule, in collection order, after a header line.
pub fn rules_csv(lb: &LoadBalancer) -> Vec<String> {
    let mut rows = vec![HEADER.to_string()];
    rows.extend(
        lb.load_balancing_rules
            .iter()
            .enumerate()
            .map(|(i, rule)| csv_row(i + 1, rule)),
    );
    rows
}

/// Print the rules of `lb` as CSV to stdout.
pub fn print_rules_csv(lb: &LoadBalancer) {
    log::info!(
        "#Start print_rules_csv() rule count = {}",
        lb.load_balancing_rules.len()
    );
    for row in rules_csv(lb) {
        println!("{row}");
    }
}

/// Quoted CSV field, embedded double quotes doubled.
fn csv_field<T: ToString>(value: T, width: usize) -> String {
    format_field(value.to_string().replace('"', "\"\""), width)
}

fn csv_row(j: usize, rule: &LoadBalancingRule) -> String {
    let unset = || "-".to_string();
    format!(
        "{j},{name},{protocol},{frontend_port},{backend_port},{idle},{distribution},{floating},{pool},{probe},{frontends}",
        j = csv_field(j, 4),
        name = csv_field(&rule.name, 16),
        protocol = csv_field(rule.protocol, 5),
        frontend_port = csv_field(rule.frontend_port, 7),
        backend_port = csv_field(rule.backend_port, 7),
        idle = csv_field(
            rule.idle_timeout_in_minutes
                .map(|m| format!("{m}m"))
                .unwrap_or_else(unset),
            5
        ),
        distribution = csv_field(rule.load_distribution.clone().unwrap_or_else(unset), 18),
        floating = csv_field(
            rule.enable_floating_ip
                .map(|f| f.to_string())
                .unwrap_or_else(unset),
            7
        ),
        pool = csv_field(rule.backend_address_pool.name(), 12),
        probe = csv_field(rule.probe.name(), 12),
        frontends = csv_field(
            rule.frontend_ip_configurations
                .iter()
                .map(|fe| fe.name())
                .join(" "),
            12
        ),
    )
}
