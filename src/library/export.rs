use std::path::Path;

use super::error::Result;
use super::model::Track;
use super::store::Library;

/// One row of the combined catalog: a track plus the playlist it belongs
/// to, `None` for master-list rows.
pub struct CatalogRow<'a> {
    pub track: &'a Track,
    pub playlist: Option<&'a str>,
}

impl Library {
    /// All catalog rows in display order: master tracks first, then each
    /// playlist's tracks in playlist-creation order.
    ///
    /// `render_catalog` and `export_csv` both derive from this iterator, so
    /// the removal index space and the CSV row order cannot drift apart.
    pub fn catalog_rows(&self) -> impl Iterator<Item = CatalogRow<'_>> {
        self.tracks
            .iter()
            .map(|t| CatalogRow {
                track: t,
                playlist: None,
            })
            .chain(self.playlists.iter().flat_map(|p| {
                p.tracks.iter().map(move |t| CatalogRow {
                    track: t,
                    playlist: Some(p.name.as_str()),
                })
            }))
    }

    /// Render one display line per catalog row.
    ///
    /// Master rows read `"{artist} - {title}"`, playlist rows append
    /// ` (Playlist: {name})`. [`Library::remove_tracks`] indices count
    /// against these lines.
    pub fn render_catalog(&self) -> Vec<String> {
        self.catalog_rows()
            .map(|row| match row.playlist {
                None => row.track.display(),
                Some(name) => format!("{} (Playlist: {})", row.track.display(), name),
            })
            .collect()
    }

    /// Write the catalog snapshot to `destination` as UTF-8 CSV.
    ///
    /// Header is `Artiste,Titre,Playlist`; master rows carry an empty
    /// playlist field. Row order matches [`Library::render_catalog`].
    /// Values containing commas or quotes are quoted by the writer.
    pub fn export_csv(&self, destination: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(destination)?;
        writer.write_record(["Artiste", "Titre", "Playlist"])?;
        for row in self.catalog_rows() {
            writer.write_record([
                row.track.artist.as_str(),
                row.track.title.as_str(),
                row.playlist.unwrap_or(""),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
