//! Loading sprites from disk. Everything is loaded once, up front, and any failure is fatal.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    io::{fmt::Color, Sprite},
    Error, Result,
};

/// Every sprite the game draws.
#[derive(Clone, Debug)]
pub struct Assets {
    dir: PathBuf,
    pub title: Sprite,
    pub door: Sprite,
    pub shop_door: Sprite,
    pub avatar: Sprite,
    pub shopkeeper: Sprite,
    pub skull: Sprite,
    pub victory_screen: Sprite,
    pub victory_rain_sock: Sprite,
}

fn load_sprite(dir: &Path, name: &str, color: Color) -> Result<Sprite> {
    let path = dir.join("img").join(format!("{}.txt", name));
    let src = fs::read_to_string(&path).map_err(|source| Error::Asset {
        path: path.clone(),
        source,
    })?;
    let sprite = Sprite::parse(&src).map_err(|reason| Error::Sprite { path, reason })?;
    Ok(sprite.colored(color))
}

impl Assets {
    /// Load every sprite from `<dir>/img/`.
    pub fn load(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let assets = Self {
            title: load_sprite(&dir, "title", Color::BrightCyan)?,
            door: load_sprite(&dir, "door", Color::Yellow)?,
            shop_door: load_sprite(&dir, "shop_door", Color::BrightGreen)?,
            avatar: load_sprite(&dir, "avatar", Color::BrightWhite)?,
            shopkeeper: load_sprite(&dir, "shopkeeper", Color::Magenta)?,
            skull: load_sprite(&dir, "skull", Color::White)?,
            victory_screen: load_sprite(&dir, "victory_screen", Color::Yellow)?,
            victory_rain_sock: load_sprite(&dir, "victory_rain_sock", Color::BrightMagenta)?,
            dir,
        };
        tracing::debug!(dir = %assets.dir.display(), "assets loaded");
        Ok(assets)
    }

    /// The directory everything was loaded from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// The assets shipped with the crate, for tests.
#[cfg(test)]
pub(crate) fn bundled() -> Assets {
    Assets::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")).expect("bundled assets should load")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bundled_assets_load() {
        let assets = bundled();
        assert!(assets.title.size().x() > 0);
        assert!(assets.door.size().y() > 0);
        assert!(assets.victory_rain_sock.size().x() > 0);
    }

    #[test]
    fn missing_dir_is_asset_error() {
        match Assets::load("/definitely/not/a/real/assets/dir") {
            Err(Error::Asset { path, .. }) => assert!(path.ends_with("img/title.txt")),
            other => panic!("expected asset error, got {:?}", other.map(|a| a.dir().to_owned())),
        }
    }

    #[test]
    fn empty_sprite_is_rejected() {
        let dir = std::env::temp_dir().join(format!("trivia-roguelite-empty-{}", std::process::id()));
        fs::create_dir_all(dir.join("img")).unwrap();
        fs::write(dir.join("img").join("title.txt"), "   \n").unwrap();
        let res = Assets::load(&dir);
        fs::remove_dir_all(&dir).unwrap();
        match res {
            Err(Error::Sprite { reason, .. }) => assert_eq!(reason, "sprite is empty"),
            other => panic!("expected sprite error, got {:?}", other.map(|a| a.dir().to_owned())),
        }
    }
}
