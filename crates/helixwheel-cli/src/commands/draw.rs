use crate::cli::DrawArgs;
use crate::config::builder;
use crate::error::Result;
use helixwheel::workflows;
use tracing::info;

pub fn run(args: DrawArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app = builder::build_draw_config(&args)?;

    println!(
        "Drawing helical wheel for {} residue(s)...",
        app.sequence.len()
    );
    info!("Invoking the core draw workflow...");
    let result = workflows::draw::run(&app.sequence, &app.wheel, &app.output)?;

    println!(
        "✓ {} wheel written to: {}",
        result.format,
        result.output.display()
    );
    println!(
        "  Mean hydrophobicity <H> = {:.3}, hydrophobic moment µH = {:.3}",
        result.profile.mean_hydrophobicity, result.profile.hydrophobic_moment
    );
    Ok(())
}
