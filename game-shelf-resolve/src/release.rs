use std::collections::HashMap;

use game_shelf_core::{Catalog, Region, ReleaseDateEntry, ResolveError};

/// Resolve one release date for a canonical (title, platform) pair.
///
/// With a requested region, an exact entry must exist. Without one, the
/// first region present in [`Region::PRIORITY`] order is taken.
pub async fn resolve_release<C: Catalog>(
    catalog: &C,
    title: &str,
    platform: &str,
    requested: Option<Region>,
) -> Result<(Region, String), ResolveError> {
    let entries = catalog.release_dates(title, platform).await?;
    select_release(entries, requested, title, platform)
}

/// Selection core, independent of the catalog: group entries by canonical
/// region and pick one.
pub fn select_release(
    entries: Vec<ReleaseDateEntry>,
    requested: Option<Region>,
    title: &str,
    platform: &str,
) -> Result<(Region, String), ResolveError> {
    if entries.is_empty() {
        return Err(ResolveError::ReleaseDateNotFound {
            title: title.to_string(),
            platform: platform.to_string(),
        });
    }

    // At most one entry per region is expected from the catalog; if it
    // sends duplicates, the later one wins.
    let mut by_region: HashMap<Region, String> = HashMap::new();
    for entry in entries {
        match Region::from_code(entry.region_code) {
            Some(region) => {
                by_region.insert(region, entry.human);
            }
            None => {
                log::warn!(
                    "Skipping release date for '{title}' with unknown region code {}",
                    entry.region_code,
                );
            }
        }
    }

    if by_region.is_empty() {
        return Err(ResolveError::ReleaseDateNotFound {
            title: title.to_string(),
            platform: platform.to_string(),
        });
    }

    match requested {
        Some(region) => match by_region.remove(&region) {
            Some(date) => Ok((region, date)),
            None => Err(ResolveError::RegionNotFound {
                title: title.to_string(),
                platform: platform.to_string(),
                region,
            }),
        },
        None => {
            for region in Region::PRIORITY {
                if let Some(date) = by_region.remove(&region) {
                    return Ok((region, date));
                }
            }
            // Unreachable in practice: every mapped code appears in PRIORITY.
            Err(ResolveError::ReleaseDateNotFound {
                title: title.to_string(),
                platform: platform.to_string(),
            })
        }
    }
}
