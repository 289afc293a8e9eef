/*! Catalog downloads

- [fetch_keywords]: metadata and first keyword of the pictograms of a folder of `<id>.png` images.
- [download_all]: the whole catalog metadata and every pictogram image.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::{write_records, TAB};
use crate::picto::{PictoCatalog, Pictogram};

/// Name of the saved catalog metadata.
pub const CATALOG_FILE: &str = "all_pictos_arasaac.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRow {
    pub id_picto: u64,
    pub keyword: String,
}

/// Ids of the `<id>.png` files of `dir`, sorted.
/// Files whose stem is not an id are skipped.
pub fn image_ids(dir: &Path) -> Result<Vec<u64>, Error> {
    let mut ids = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "png") {
            continue;
        }
        match path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::parse::<u64>)
        {
            Some(Ok(id)) => ids.push(id),
            _ => warn!("{:?} is not named after a pictogram id, skipping", path),
        }
    }
    ids.sort_unstable();
    Ok(ids)
}

/// Save the metadata of each pictogram into `json_dir/<id>.json` and return its first keyword
/// (empty if it has none).
pub fn keywords<C: PictoCatalog + ?Sized>(
    catalog: &C,
    ids: &[u64],
    json_dir: &Path,
) -> Result<Vec<KeywordRow>, Error> {
    std::fs::create_dir_all(json_dir)?;
    let mut rows = Vec::with_capacity(ids.len());
    for &id in ids {
        debug!("fetching pictogram {}", id);
        let json = catalog.pictogram_json(id)?;
        std::fs::write(json_dir.join(format!("{}.json", id)), &json)?;
        let picto = Pictogram::from_json(&json)?;
        rows.push(KeywordRow {
            id_picto: id,
            keyword: picto.first_keyword().unwrap_or_default().to_string(),
        });
    }
    Ok(rows)
}

pub fn fetch_keywords<C: PictoCatalog + ?Sized>(
    catalog: &C,
    png_dir: &Path,
    json_dir: &Path,
    dst: &Path,
) -> Result<(), Error> {
    let ids = image_ids(png_dir)?;
    info!("{} pictograms in {:?}", ids.len(), png_dir);
    let rows = keywords(catalog, &ids, json_dir)?;
    write_records(dst, TAB, &rows)?;
    info!("wrote keywords to {:?}", dst);
    Ok(())
}

/// Save the catalog metadata into `<out_dir>/all_pictos_arasaac.json`
/// and download every image into `<out_dir>/<id>.png`.
///
/// Returns the paths of the downloaded images.
pub fn download_all<C: PictoCatalog + ?Sized>(
    catalog: &C,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, Error> {
    std::fs::create_dir_all(out_dir)?;
    let json = catalog.all_json()?;
    std::fs::write(out_dir.join(CATALOG_FILE), &json)?;

    let pictograms: Vec<Pictogram> = serde_json::from_str(&json)?;
    info!("{} pictograms in the catalog", pictograms.len());

    let mut images = Vec::with_capacity(pictograms.len());
    for (nb, picto) in pictograms.iter().enumerate() {
        let dst = out_dir.join(format!("{}.png", picto.id));
        catalog.download_image(picto.id, &dst)?;
        images.push(dst);
        if (nb + 1) % 1000 == 0 {
            info!("downloaded {} images", nb + 1);
        }
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_records;
    use crate::processing::testutils::FakeCatalog;

    #[test]
    fn ids_from_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["3250.png", "2349.png", "logo.png", "666.json"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(image_ids(dir.path()).unwrap(), vec![2349, 3250]);
    }

    #[test]
    fn keywords_file() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("png");
        std::fs::create_dir(&png).unwrap();
        for name in ["2349.png", "666.png"] {
            std::fs::write(png.join(name), "").unwrap();
        }
        let json_dir = dir.path().join("json");
        let dst = dir.path().join("keywords.csv");
        fetch_keywords(&FakeCatalog::default(), &png, &json_dir, &dst).unwrap();

        let rows: Vec<KeywordRow> = read_records(&dst, TAB).unwrap();
        assert_eq!(
            rows,
            vec![
                KeywordRow {
                    id_picto: 666,
                    keyword: String::new()
                },
                KeywordRow {
                    id_picto: 2349,
                    keyword: "chat".to_string()
                },
            ]
        );
        assert!(json_dir.join("2349.json").exists());
    }

    #[test]
    fn unknown_picto() {
        let dir = tempfile::tempdir().unwrap();
        assert!(keywords(&FakeCatalog::default(), &[1], dir.path()).is_err());
    }

    #[test]
    fn whole_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let images = download_all(&FakeCatalog::default(), dir.path()).unwrap();
        assert_eq!(images.len(), 4);
        assert!(dir.path().join(CATALOG_FILE).exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("2517.png")).unwrap(),
            "png 2517"
        );
    }
}
