//! Terminal output of a load balancer draft.

use crate::models::LoadBalancer;
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Build the summary lines for `lb`, one header line followed by one line per child.
pub fn summary_lines(lb: &LoadBalancer) -> Vec<String> {
    let mut lines = vec![format!(
        "LB: '{name}' rg='{rg}' location={location} - {id}",
        name = lb.name.bold(),
        rg = lb.resource_group_name,
        location = lb.location.as_deref().unwrap_or("unset"),
        id = lb.id().dimmed()
    )];

    lines.extend(
        lb.frontend_ip_configurations
            .iter()
            .map(|fe| format!("  frontend: {}", fe.name)),
    );
    lines.extend(
        lb.backend_address_pools
            .iter()
            .map(|pool| format!("  pool:     {}", pool.name)),
    );
    lines.extend(lb.probes.iter().map(|probe| {
        format!(
            "  probe:    {} {:?}/{}{}",
            probe.name,
            probe.protocol,
            probe.port,
            probe.request_path.as_deref().unwrap_or("")
        )
    }));
    lines.extend(lb.load_balancing_rules.iter().map(|rule| {
        format!(
            "  rule:     {rule} frontends=[{frontends}] floating_ip={floating}",
            frontends = rule
                .frontend_ip_configurations
                .iter()
                .map(|fe| fe.name())
                .join(","),
            floating = match rule.enable_floating_ip {
                Some(true) => "on".green(),
                Some(false) => "off".normal(),
                None => "unset".yellow(),
            }
        )
    }));
    lines
}

/// Print the summary of `lb` to stdout.
pub fn print_summary(lb: &LoadBalancer) {
    log::info!("#Start print_summary() {lb}");
    for line in summary_lines(lb) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::read_draft;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_summary_lines_draft_01() {
        colored::control::set_override(false);
        let lb = read_draft("src/tests/test_data/lb_draft_01.json").unwrap();
        let lines = summary_lines(&lb);

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("LB: 'lb-web' rg='DR-LB-RG' location=australiaeast"));
        assert_eq!(lines[4], "  probe:    probe1 Http/8080/healthz");
        assert_eq!(
            lines[5],
            "  rule:     Web Tcp/80 -> 8080 (probe probe1) frontends=[fe1] floating_ip=off"
        );
    }
}
