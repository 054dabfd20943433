use swipe_demo::{run_scripted_session, Pacing};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== swipekit inbox demo ===");
    println!("Scripted session:");
    println!("  - reveal the actions of the first message");
    println!("  - start dragging the second message, which closes the first");
    println!("  - tap the list, which closes everything");
    println!("  - flag a message from its revealed actions");
    println!("  - full swipe the third message to delete it");
    println!();

    let summary = run_scripted_session(Pacing::RealTime)?;

    println!();
    println!("Remaining messages: {}", summary.remaining.join(", "));
    println!("Activated: {}", summary.activated.join(", "));
    Ok(())
}
