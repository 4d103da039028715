use viewtree_demo::{default_scenarios, run_scenario, DemoOptions};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::from_env()?;
    log::info!(
        "Screen size {}x{}",
        options.screen_width,
        options.screen_height
    );

    for (index, scenario) in default_scenarios(&options).iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}:", scenario.title);
        print!("{}", run_scenario(scenario)?);
    }
    Ok(())
}
