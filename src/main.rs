use azure_lb_config::azure::{write_draft, AzureContext};
use azure_lb_config::config::{Settings, LOG_CONFIG_FILE};
use azure_lb_config::output::{print_rules_csv, print_summary};
use azure_lb_config::{apply_rule_request, get_draft};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let settings = Settings::from_env()?;
    let draft_file = settings.draft_file()?;
    let mut lb = get_draft(&settings, AzureContext::from_env)?;

    if let Some(request_file) = settings.rule_request_file.as_deref() {
        apply_rule_request(&mut lb, request_file, &settings)?;
        write_draft(&draft_file, &lb)?;
    } else {
        log::info!("No rule request set, showing draft {draft_file}");
    }

    print_summary(&lb);
    print_rules_csv(&lb);

    Ok(())
}
