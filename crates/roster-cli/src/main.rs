mod config;
mod demo;

use std::rc::Rc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_core::impls::{ConsoleSink, FanoutSink, TracingSink};
use roster_core::ports::{Clock, FixedClock, RemovalSink, SystemClock};

use crate::config::DemoConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // diagnostics on stderr; stdout carries only the removal transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env()?;
    info!(today = ?config.today, "roster demo starting");

    let clock: Rc<dyn Clock> = match config.today {
        Some(today) => Rc::new(FixedClock::on(today)),
        None => Rc::new(SystemClock),
    };
    let sink: Rc<dyn RemovalSink> = Rc::new(
        FanoutSink::default()
            .with(Rc::new(ConsoleSink))
            .with(Rc::new(TracingSink)),
    );

    let mut org = demo::build(clock, sink)?;

    println!("End of Year Operations :");
    demo::run(&mut org)?;

    Ok(())
}
