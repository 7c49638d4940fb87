//! Demo binary — detect the machine, print the configuration report, and
//! save the profile under the platform config directory.

use interior_render::hardware::{collect, HardwareProfile, MetadataProbe};
use interior_render::lighting;

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("Interior Render hardware detection starting");

    let snapshot = collect(&MetadataProbe).await;
    let profile = HardwareProfile::from_snapshot(snapshot);

    println!("{}", profile.summary());

    if profile.is_compatible() {
        let ranges = &profile.ranges;
        println!(
            "Adjustable: resolution {}-{}px (rec {}), steps {}-{} (rec {})",
            ranges.resolution.min,
            ranges.resolution.max,
            ranges.resolution.recommended,
            ranges.steps.min,
            ranges.steps.max,
            ranges.steps.recommended
        );

        let recommended = lighting::recommend("living_room", "any");
        println!(
            "Example lighting ({}): {}",
            recommended.id,
            lighting::build_prompt(recommended.id, "")
        );
    } else {
        println!("Hardware is not compatible with the generation pipeline.");
    }

    match profile.save_default() {
        Ok(path) => println!("Profile saved to {}", path.display()),
        Err(e) => log::warn!("Could not save profile: {e}"),
    }
}
