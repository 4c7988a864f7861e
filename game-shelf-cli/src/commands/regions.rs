use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::Region;

/// Print recognized regions in priority order with codes and aliases.
pub(crate) fn run_regions() {
    log::info!("Recognized regions (in default-selection priority order):");
    log::info!("");
    for region in Region::PRIORITY {
        log::info!(
            "  {:>2}  {} {}",
            region.code(),
            format!("{:<13}", region.name()).if_supports_color(Stdout, |t| t.bold()),
            format!("({})", region.aliases().join(", "))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
