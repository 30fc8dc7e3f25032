//! Embedded maze descriptions.
//! The files under `assets/maze/` are compiled into the binary with `rust-embed`.

use std::borrow::Cow;

use rust_embed::RustEmbed;
use strum_macros::EnumIter;

use crate::error::AssetError;

#[derive(RustEmbed)]
#[folder = "assets/maze/"]
struct MazeAssets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Asset {
    /// Tile classifications, one digit per tile.
    Tiles,
    /// Regular pellet positions.
    Pellets,
}

impl Asset {
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Tiles => "tiles.txt",
            Asset::Pellets => "pellets.txt",
        }
    }
}

pub fn get_asset_bytes(asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    MazeAssets::get(asset.path())
        .map(|file| file.data)
        .ok_or(AssetError::NotFound(asset.path()))
}

/// Loads an embedded asset as text.
pub fn get_asset_str(asset: Asset) -> Result<String, AssetError> {
    let bytes = get_asset_bytes(asset)?;
    let text = std::str::from_utf8(&bytes).map_err(|source| AssetError::InvalidUtf8 {
        name: asset.path(),
        source,
    })?;
    Ok(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_assets_are_embedded() {
        for asset in Asset::iter() {
            let bytes = get_asset_bytes(asset).unwrap();
            assert!(!bytes.is_empty(), "{} is empty", asset.path());
        }
    }
}
